// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::case::CaseFields;
use crate::error::DomainError;

/// Maximum length of the short text fields on a case.
pub const MAX_FIELD_LENGTH: usize = 100;

/// Validates the descriptive fields of a case.
///
/// Text fields are checked after trimming. Remarks are free text and are
/// not length-limited.
///
/// # Arguments
///
/// * `fields` - The fields to validate
///
/// # Returns
///
/// * `Ok(())` if the fields are valid
/// * `Err(DomainError::InvalidCaseField)` naming the first invalid field
///
/// # Errors
///
/// Returns an error if:
/// - The complainant, respondent or charge is empty
/// - The complainant, respondent or charge exceeds 100 characters
pub fn validate_case_fields(fields: &CaseFields) -> Result<(), DomainError> {
    validate_required_text("complainant", &fields.complainant)?;
    validate_required_text("respondent", &fields.respondent)?;
    validate_required_text("charge", &fields.charge)?;
    Ok(())
}

/// Validates a pre-charge investigation number.
///
/// # Errors
///
/// Returns `DomainError::InvalidPrechargeNumber` if the trimmed value is
/// empty or longer than 100 characters.
pub fn validate_precharge_no(precharge_no: &str) -> Result<(), DomainError> {
    let trimmed: &str = precharge_no.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidPrechargeNumber(String::from(
            "Pre-charge investigation number is required",
        )));
    }
    if trimmed.chars().count() > MAX_FIELD_LENGTH {
        return Err(DomainError::InvalidPrechargeNumber(format!(
            "must be at most {MAX_FIELD_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_required_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidCaseField {
            field,
            reason: String::from("is required"),
        });
    }
    if trimmed.chars().count() > MAX_FIELD_LENGTH {
        return Err(DomainError::InvalidCaseField {
            field,
            reason: format!("must be at most {MAX_FIELD_LENGTH} characters"),
        });
    }
    Ok(())
}
