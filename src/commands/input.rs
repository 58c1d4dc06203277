//! Validation of free-text console values
//!
//! Shared by the menus (inline retry loops) and the subcommands (which
//! fail instead). Validators look at raw input; normalization happens after.

use thiserror::Error;

use roster::domain::value_objects::split_list;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field}: {reason}")]
pub struct InputError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl InputError {
    fn new(field: &'static str, reason: &'static str) -> Self {
        Self { field, reason }
    }
}

/// Letters and spaces only, at least one letter.
pub fn validate_name(raw: &str) -> Result<(), InputError> {
    let mut letters = 0;
    for c in raw.chars() {
        if c.is_alphabetic() {
            letters += 1;
        } else if c != ' ' {
            return Err(InputError::new("name", "use letters and spaces only"));
        }
    }
    if letters == 0 {
        return Err(InputError::new("name", "a name is required"));
    }
    Ok(())
}

pub fn validate_email(raw: &str) -> Result<(), InputError> {
    if raw.matches('@').count() != 1 {
        return Err(InputError::new("email", "it must contain exactly one '@'"));
    }
    Ok(())
}

/// A comma-separated list with at least one non-blank item.
pub fn validate_list(field: &'static str, raw: &str) -> Result<(), InputError> {
    if split_list(raw).is_empty() {
        return Err(InputError::new(field, "enter at least one value"));
    }
    Ok(())
}

pub fn validate_required(field: &'static str, raw: &str) -> Result<(), InputError> {
    if raw.trim().is_empty() {
        return Err(InputError::new(field, "a value is required"));
    }
    Ok(())
}

/// `s`/`y` for yes, `n` for no.
pub fn parse_yes_no(raw: &str) -> Result<bool, InputError> {
    match raw.trim().to_lowercase().as_str() {
        "s" | "sim" | "y" | "yes" => Ok(true),
        "n" | "nao" | "não" | "no" => Ok(false),
        _ => Err(InputError::new("answer", "answer s or n")),
    }
}

/// Largest line-up the band menu will ask instruments for.
pub const MAX_BAND_MEMBERS: usize = 32;

/// A positive whole number no larger than [`MAX_BAND_MEMBERS`].
pub fn parse_member_count(raw: &str) -> Result<usize, InputError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::new("member count", "enter a whole number"));
    }
    match raw.parse::<usize>() {
        Ok(0) => Err(InputError::new("member count", "a band needs at least one member")),
        Ok(n) if n <= MAX_BAND_MEMBERS => Ok(n),
        _ => Err(InputError::new("member count", "at most 32 members")),
    }
}
