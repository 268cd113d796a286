//! Blog post status constants, slug generation and validation.

use crate::error::CoreError;

pub const POST_DRAFT: &str = "draft";
pub const POST_PUBLISHED: &str = "published";

/// All valid post statuses.
pub const VALID_STATUSES: &[&str] = &[POST_DRAFT, POST_PUBLISHED];

/// Maximum length of a post title.
pub const MAX_TITLE_LENGTH: usize = 300;

/// Maximum length of a slug.
pub const MAX_SLUG_LENGTH: usize = 200;

/// Validate that a status string is one of the known post statuses.
pub fn validate_status(status: &str) -> Result<(), CoreError> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid post status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        )))
    }
}

/// Validate a post title: non-blank and bounded.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Post title is required".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Post title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a slug: lowercase ASCII alphanumerics separated by single hyphens.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    let well_formed = !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if well_formed {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid slug '{slug}'")))
    }
}

/// Derive a URL slug from a title.
///
/// Accented Latin letters are folded to ASCII; every other run of
/// non-alphanumeric characters becomes a single hyphen.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars().flat_map(char::to_lowercase) {
        let folded = fold_accent(c);
        if folded.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(folded);
        } else {
            pending_hyphen = true;
        }
    }

    slug.truncate(MAX_SLUG_LENGTH);
    slug.trim_end_matches('-').to_string()
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        other => other,
    }
}

/// Whether moving from `previous` (absent for a new post) to `next` publishes it.
pub fn is_publication(previous: Option<&str>, next: &str) -> bool {
    next == POST_PUBLISHED && previous != Some(POST_PUBLISHED)
}
