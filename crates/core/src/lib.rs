//! Domain rules for the clinic backend.
//!
//! This crate has no internal dependencies so the DB and API layers can both
//! use it: closed value sets and their validation, the request approval state
//! machine, and the DTO mappers applied at every read boundary.

pub mod activity;
pub mod appointment;
pub mod dto;
pub mod error;
pub mod pagination;
pub mod patient;
pub mod post;
pub mod requests;
pub mod roles;
pub mod types;
