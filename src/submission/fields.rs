use serde_json::Value;

use crate::models::ContactInput;

/// The form fields every submission must carry, in reporting order.
pub const REQUIRED_FIELDS: [&str; 3] = ["name", "email", "message"];

/// One or more required fields were absent, empty, or not text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing required fields: {}", self.missing.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// Pull the contact fields out of an untyped body.
///
/// Strings are kept verbatim and numbers/booleans take their textual form.
/// Null, `false` and zero read as absent, as a falsy form value does.
/// Arrays and objects cannot stand in for text and are rejected here;
/// presence is checked by the service.
pub fn extract(raw: &Value) -> Result<ContactInput, ValidationError> {
    let mut not_text = Vec::new();
    let mut field = |name: &'static str| match raw.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => None,
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(false)) => None,
        Some(Value::Bool(true)) => Some("true".to_string()),
        Some(Value::Array(_) | Value::Object(_)) => {
            not_text.push(name);
            None
        }
    };

    let input = ContactInput {
        name: field("name"),
        email: field("email"),
        message: field("message"),
    };

    if not_text.is_empty() {
        Ok(input)
    } else {
        Err(ValidationError { missing: not_text })
    }
}

/// Names of the required fields that are absent or empty. No trimming.
pub fn missing_fields(input: &ContactInput) -> Vec<&'static str> {
    let values = [&input.name, &input.email, &input.message];
    REQUIRED_FIELDS
        .iter()
        .zip(values)
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| *name)
        .collect()
}
