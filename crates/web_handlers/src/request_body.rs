use serde_json::{Map, Value};

use crate::fault::{Fault, FaultKind};

/// Deepest bracket nesting a form key may use; the remainder stays one literal segment
pub const MAX_FORM_KEY_DEPTH: usize = 5;

/// Parses a raw request body into an untyped payload based on its content type.
///
/// JSON bodies are decoded as-is. Form bodies use bracketed keys for nesting,
/// so `campground[title]=x` becomes `{"campground": {"title": "x"}}`. Empty
/// bodies and unknown content types yield an empty object.
pub fn parse_body(content_type: &str, body: &[u8]) -> Result<Value, Fault> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match mime.as_str() {
        "application/json" => serde_json::from_slice(body).map_err(|e| {
            Fault::of_kind(
                FaultKind::ValidationFailed,
                format!("Malformed JSON body: {}", e),
            )
        }),
        "application/x-www-form-urlencoded" => parse_form(body),
        _ => Ok(Value::Object(Map::new())),
    }
}

/// Decodes an urlencoded form into a nested object
pub fn parse_form(body: &[u8]) -> Result<Value, Fault> {
    let body = std::str::from_utf8(body).map_err(|_| {
        Fault::of_kind(FaultKind::ValidationFailed, "Form body is not valid UTF-8")
    })?;

    let mut root = Map::new();
    for pair in body.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        let key = decode_component(raw_key)?;
        let value = decode_component(raw_value)?;

        let path = key_path(&key);
        if path.is_empty() {
            continue;
        }
        insert_at(&mut root, &path, Value::String(value));
    }

    Ok(Value::Object(root))
}

/// Decodes one `application/x-www-form-urlencoded` component
pub fn decode_component(raw: &str) -> Result<String, Fault> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|_| {
            Fault::of_kind(
                FaultKind::ValidationFailed,
                format!("Malformed form encoding: {}", raw),
            )
        })
}

/// Splits `a[b][c]` into `["a", "b", "c"]`, stopping after
/// `MAX_FORM_KEY_DEPTH` brackets
fn key_path(key: &str) -> Vec<String> {
    let Some(open) = key.find('[') else {
        return vec![key.to_string()];
    };

    let mut path = vec![key[..open].to_string()];
    let mut rest = &key[open..];
    while path.len() <= MAX_FORM_KEY_DEPTH {
        let Some(stripped) = rest.strip_prefix('[') else {
            break;
        };
        let Some(close) = stripped.find(']') else {
            break;
        };
        path.push(stripped[..close].to_string());
        rest = &stripped[close + 1..];
    }
    if path.len() > MAX_FORM_KEY_DEPTH && rest.starts_with('[') {
        path.push(rest.to_string());
    }

    if path.iter().any(String::is_empty) {
        // `a[]` style arrays are not part of any form this server renders
        return vec![key.to_string()];
    }
    path
}

/// Last write wins; a scalar in the way of a nested key is replaced
fn insert_at(root: &mut Map<String, Value>, path: &[String], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        return;
    };

    let mut map = root;
    for key in parents {
        let entry = map
            .entry(key.clone())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        map = match entry {
            Value::Object(child) => child,
            _ => return,
        };
    }
    map.insert(last.clone(), value);
}
