use chrono::NaiveDate;

use crate::error::AppError;

pub const MAX_ENTRY_HOURS: f64 = 24.0;
pub const HOURS_STEP: f64 = 0.5;

/// Trims and lowercases; rejects anything that is not `local@domain`.
pub fn normalize_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    };

    if !valid {
        return Err(AppError::validation("A valid email address is required"));
    }
    Ok(email)
}

pub fn required_text(field: &str, raw: &str) -> Result<String, AppError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    Ok(value.to_string())
}

pub fn rate(field: &str, value: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(value)
}

pub fn hours(value: f64) -> Result<f64, AppError> {
    if !value.is_finite() || value <= 0.0 || value > MAX_ENTRY_HOURS {
        return Err(AppError::validation(format!(
            "Hours must be greater than 0 and at most {MAX_ENTRY_HOURS}"
        )));
    }
    if (value / HOURS_STEP).fract() != 0.0 {
        return Err(AppError::validation(format!(
            "Hours must be a multiple of {HOURS_STEP}"
        )));
    }
    Ok(value)
}

pub fn entry_date(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, AppError> {
    if date > today {
        return Err(AppError::validation("Date cannot be in the future"));
    }
    Ok(date)
}

/// Blank descriptions are stored as none.
pub fn description(raw: Option<String>) -> Option<String> {
    raw.map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
