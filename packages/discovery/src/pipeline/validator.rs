//! Per-record validation of candidate datasets.
//!
//! Checks run in a fixed order and stop at the first failure, so an
//! error always names the first policy a record broke. No coercion
//! anywhere: a number where a string belongs is rejected, not converted,
//! and out-of-range text is rejected, not truncated.

use serde_json::Value;

use crate::error::ValidationError;
use crate::types::dataset::Domain;

/// Description length bounds, in characters.
const DESCRIPTION_MIN: usize = 50;
const DESCRIPTION_MAX: usize = 200;

/// Use-case cardinality bounds.
const USE_CASES_MIN: usize = 2;
const USE_CASES_MAX: usize = 5;

/// The candidate fields, in validation order.
const FIELDS: [&str; 5] = ["name", "description", "url", "domain", "use_cases"];

/// A candidate that passed every check.
///
/// The only path into `Dataset`: the searcher attaches the rank-derived
/// score and the timestamp at materialization.
#[derive(Debug, Clone)]
pub struct ValidRecord {
    pub name: String,
    pub description: String,
    pub url: String,
    pub domain: Domain,
    pub use_cases: Vec<String>,
}

/// Validate one candidate record.
pub fn validate_record(candidate: &Value) -> Result<ValidRecord, ValidationError> {
    let object = candidate.as_object().ok_or(ValidationError::NotAnObject)?;

    // Presence, in field order.
    for field in FIELDS {
        if !object.contains_key(field) {
            return Err(ValidationError::MissingField { field });
        }
    }

    // Types: four text fields, one sequence.
    let name = text_field(object, "name")?;
    let description = text_field(object, "description")?;
    let url = text_field(object, "url")?;
    let domain_text = text_field(object, "domain")?;
    let items = object["use_cases"]
        .as_array()
        .ok_or(ValidationError::WrongType {
            field: "use_cases",
            expected: "array",
        })?;

    if name.is_empty() {
        return Err(ValidationError::EmptyField { field: "name" });
    }

    // Character count, not byte length.
    let count = description.chars().count();
    if !(DESCRIPTION_MIN..=DESCRIPTION_MAX).contains(&count) {
        return Err(ValidationError::DescriptionLength { count });
    }

    let domain: Domain = domain_text.parse()?;

    if !(USE_CASES_MIN..=USE_CASES_MAX).contains(&items.len()) {
        return Err(ValidationError::UseCaseCount { count: items.len() });
    }

    let mut use_cases = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match item.as_str() {
            Some(text) => use_cases.push(text.to_string()),
            None => return Err(ValidationError::UseCaseNotText { index }),
        }
    }

    Ok(ValidRecord {
        name: name.to_string(),
        description: description.to_string(),
        url: url.to_string(),
        domain,
        use_cases,
    })
}

fn text_field<'a>(
    object: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, ValidationError> {
    object[field].as_str().ok_or(ValidationError::WrongType {
        field,
        expected: "string",
    })
}
