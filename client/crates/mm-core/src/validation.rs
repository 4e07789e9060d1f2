//! Client-side input checks. Every check here runs before any network call.

use crate::{CoreError, CoreErrorResult};

pub const DEFAULT_MIN_MOOD_TEXT_LENGTH: usize = 20;
pub const DEFAULT_MAX_MOOD_TEXT_LENGTH: usize = 300;

/// Inclusive character bounds for mood text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodTextBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for MoodTextBounds {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_MOOD_TEXT_LENGTH,
            max: DEFAULT_MAX_MOOD_TEXT_LENGTH,
        }
    }
}

impl MoodTextBounds {
    /// Check mood text length, counted in characters after trimming
    #[track_caller]
    pub fn check(&self, text: &str) -> CoreErrorResult<()> {
        let length = text.trim().chars().count();
        if length < self.min || length > self.max {
            return Err(CoreError::validation(
                "text_input",
                format!(
                    "Please describe your mood in {} to {} characters (currently {}).",
                    self.min, self.max, length
                ),
            ));
        }
        Ok(())
    }
}

#[track_caller]
pub fn require(field: &'static str, value: &str) -> CoreErrorResult<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(field, format!("{field} is required.")));
    }
    Ok(())
}

/// Shape check only; the backend owns real address validation
#[track_caller]
pub fn check_email(email: &str) -> CoreErrorResult<()> {
    require("email", email)?;
    let trimmed = email.trim();
    match trimmed.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(CoreError::validation(
            "email",
            "Please enter a valid email address.",
        )),
    }
}
