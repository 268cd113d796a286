//! Authentication primitives.
//!
//! - [`password`] -- Argon2id hashing and the new-password rules.
//! - [`jwt`] -- signed access tokens carrying the staff role.

pub mod jwt;
pub mod password;
