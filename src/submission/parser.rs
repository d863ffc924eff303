use serde_json::{Map, Value};

/// Parse a request body based on Content-Type header.
/// Bodies without a JSON or form-urlencoded type carry no form fields.
pub fn parse_body(content_type: Option<&str>, body: &[u8]) -> Result<Value, String> {
    let ct = content_type.unwrap_or_default();

    if ct.contains("application/json") {
        serde_json::from_slice(body).map_err(|e| format!("Invalid JSON: {e}"))
    } else if ct.contains("application/x-www-form-urlencoded") {
        parse_form_urlencoded(body)
    } else {
        Ok(Value::Object(Map::new()))
    }
}

/// Decode `a=1&b=2` into an object of strings. A repeated key keeps its last value.
fn parse_form_urlencoded(body: &[u8]) -> Result<Value, String> {
    let body_str = std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut map = Map::new();
    for (k, v) in form_urlencoded::parse(body_str.as_bytes()) {
        map.insert(k.into_owned(), Value::String(v.into_owned()));
    }
    Ok(Value::Object(map))
}
