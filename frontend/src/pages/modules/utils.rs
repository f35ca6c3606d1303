use crate::api::{ApiError, LearningOutcomePayload, ModulePayload};

pub fn is_valid_module_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Trims and checks a module form; ids are upper-case letters and digits only.
pub fn validate_module(module_id: &str, module_name: &str) -> Result<ModulePayload, ApiError> {
    let module_id = module_id.trim();
    if module_id.is_empty() {
        return Err(ApiError::validation("Module ID is required"));
    }
    if !is_valid_module_id(module_id) {
        return Err(ApiError::validation(
            "Module ID must contain only uppercase letters and numbers",
        ));
    }
    if module_name.trim().is_empty() {
        return Err(ApiError::validation("Module name is required"));
    }
    Ok(ModulePayload {
        module_id: module_id.to_string(),
        module_name: module_name.trim().to_string(),
    })
}

pub fn validate_outcome(payload: &LearningOutcomePayload) -> Result<LearningOutcomePayload, ApiError> {
    if payload.lo_id.trim().is_empty() || payload.lo_description.trim().is_empty() {
        return Err(ApiError::validation(
            "LO ID and description are both required",
        ));
    }
    Ok(LearningOutcomePayload {
        lo_id: payload.lo_id.trim().to_string(),
        lo_description: payload.lo_description.trim().to_string(),
    })
}

pub fn validate_description(description: &str) -> Result<String, ApiError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ApiError::validation("Description is required"));
    }
    Ok(description.to_string())
}

fn trailing_digits(text: &str) -> Option<&str> {
    let start = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(index, _)| index)?;
    Some(&text[start..])
}

/// Short LO number remembered for the results upload, e.g. `SE101_LO2` -> `2`.
pub fn lo_number(id: &str, lo_id: &str) -> String {
    let segment = id.rsplit('_').next().unwrap_or(id);
    trailing_digits(segment)
        .or_else(|| trailing_digits(lo_id))
        .unwrap_or(segment)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_ids_must_be_uppercase_alphanumeric() {
        assert!(validate_module("SE101", "Software Engineering").is_ok());
        assert!(validate_module("  EE2201 ", "Circuits").is_ok());
        for bad in ["se101", "SE-101", "SE 101", "Se101", "SE101!"] {
            let err = validate_module(bad, "Name").unwrap_err();
            assert_eq!(err.code, "VALIDATION_ERROR", "{bad}");
        }
        assert_eq!(
            validate_module("SE101", "  ").unwrap_err().error,
            "Module name is required"
        );
        assert_eq!(validate_module("", "x").unwrap_err().error, "Module ID is required");
    }

    #[test]
    fn outcome_fields_are_required() {
        let payload = LearningOutcomePayload {
            lo_id: "LO1".into(),
            lo_description: " ".into(),
        };
        assert!(validate_outcome(&payload).is_err());
        assert!(validate_description("").is_err());
        assert_eq!(validate_description(" Apply ").unwrap(), "Apply");
    }

    #[test]
    fn lo_number_prefers_suffix_after_underscore() {
        assert_eq!(lo_number("SE101_LO2", "LO2"), "2");
        assert_eq!(lo_number("SE101_LO12", "LO12"), "12");
        assert_eq!(lo_number("65f0c2a9ex", "LO3"), "3");
        assert_eq!(lo_number("SE101_intro", "LOA"), "intro");
    }
}
