//! Field-level validation
//!
//! Each validator checks one form control's raw value and returns whether it
//! is acceptable. A failed validation is ordinary data feeding the validity
//! map, not an error.

use std::path::Path;

use rust_decimal::Decimal;

use crate::config::{LengthBounds, UploadPolicy};
use crate::form::FieldValidity;

/// Select value meaning "no real option chosen"
pub const SELECT_NONE: i64 = 0;

/// Choice made on the two-control brand input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrandChoice {
    /// A known brand picked from the dropdown
    Known(i64),
    /// The "other" option, which reveals the free-text input
    Other,
}

impl BrandChoice {
    /// Interpret a raw select value
    pub fn parse(value: &str) -> Self {
        match value.trim().parse::<i64>() {
            Ok(id) if id > SELECT_NONE => Self::Known(id),
            _ => Self::Other,
        }
    }
}

/// Trimmed character length within bounds
pub fn validate_length(value: &str, bounds: LengthBounds) -> bool {
    let len = value.trim().chars().count();
    len >= bounds.min && len <= bounds.max
}

/// Parses as a positive decimal number
pub fn validate_number(value: &str) -> bool {
    value
        .trim()
        .parse::<Decimal>()
        .map(|number| number > Decimal::ZERO)
        .unwrap_or(false)
}

/// A real option was selected, not the sentinel
pub fn validate_select(value: &str) -> bool {
    value
        .trim()
        .parse::<i64>()
        .map(|id| id > SELECT_NONE)
        .unwrap_or(false)
}

/// The brand dropdown rule: a known brand passes outright; "other" only
/// opens the free-text input, whose value validates via [`validate_length`]
pub fn validate_brand_choice(choice: BrandChoice) -> bool {
    matches!(choice, BrandChoice::Known(_))
}

/// File extension in the allowed set and size within the limit
///
/// An unreadable file fails validation rather than erroring; the form treats
/// it the same as a wrong type.
pub fn validate_file(path: &Path, policy: &UploadPolicy) -> bool {
    let Some(extension) = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
    else {
        return false;
    };

    if !policy.formats.contains(&extension.as_str()) {
        return false;
    }

    match std::fs::metadata(path) {
        Ok(metadata) => metadata.len() <= policy.max_size,
        Err(_) => false,
    }
}

/// Conjunction of every validity flag
pub fn is_form_valid(validity: &FieldValidity) -> bool {
    validity.flags().iter().all(|&flag| flag)
}
