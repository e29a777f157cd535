use std::fmt;

use campgrounds::CampgroundFields;
use serde_json::{Map, Value};
use validator::Validate;

/// Key of the campground sub-object in a request body
pub const CAMPGROUND_KEY: &str = "campground";

/// Campground fields in the order their errors are reported
pub const CAMPGROUND_FIELDS: [&str; 5] = ["title", "location", "image", "description", "price"];

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path of the offending value, e.g. `campground.title`
    pub path: String,
    /// Message shown to the user
    pub message: String,
}

impl FieldError {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Campground values after type coercion, before the constraint checks
#[derive(Debug, Default, Validate)]
struct CampgroundInput {
    #[validate(
        required(message = "\"campground.title\" is required"),
        length(min = 1, message = "\"campground.title\" is not allowed to be empty")
    )]
    title: Option<String>,

    #[validate(
        required(message = "\"campground.location\" is required"),
        length(min = 1, message = "\"campground.location\" is not allowed to be empty")
    )]
    location: Option<String>,

    #[validate(
        required(message = "\"campground.image\" is required"),
        length(min = 1, message = "\"campground.image\" is not allowed to be empty")
    )]
    image: Option<String>,

    #[validate(
        required(message = "\"campground.description\" is required"),
        length(min = 1, message = "\"campground.description\" is not allowed to be empty")
    )]
    description: Option<String>,

    #[validate(
        required(message = "\"campground.price\" is required"),
        range(min = 0.0, message = "\"campground.price\" must be greater than or equal to 0")
    )]
    price: Option<f64>,
}

/// Validates a request body of the shape `{ campground: { ... } }`.
///
/// Every problem is reported, in field order, followed by keys the schema does
/// not know about. The input is only read.
pub fn validate_campground(body: &Value) -> Result<CampgroundFields, Vec<FieldError>> {
    let Some(root) = body.as_object() else {
        return Err(vec![FieldError::new("value", "\"value\" must be of type object")]);
    };

    let mut errors = unknown_keys(root, &[CAMPGROUND_KEY], None);

    let campground = match root.get(CAMPGROUND_KEY) {
        None | Some(Value::Null) => {
            errors.insert(0, FieldError::new(CAMPGROUND_KEY, "\"campground\" is required"));
            return Err(errors);
        }
        Some(Value::Object(campground)) => campground,
        Some(_) => {
            errors.insert(
                0,
                FieldError::new(CAMPGROUND_KEY, "\"campground\" must be of type object"),
            );
            return Err(errors);
        }
    };

    let (input, type_errors) = coerce(campground);
    let constraint_errors = input.validate().err();

    let mut field_errors = Vec::new();
    for field in CAMPGROUND_FIELDS {
        let path = format!("{}.{}", CAMPGROUND_KEY, field);
        if let Some(type_error) = type_errors.iter().find(|e| e.path == path) {
            field_errors.push(type_error.clone());
            continue;
        }
        let Some(violations) = constraint_errors
            .as_ref()
            .and_then(|e| e.field_errors().get(field).cloned())
        else {
            continue;
        };
        for violation in violations {
            let message = violation
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("\"{}\" is invalid", path));
            field_errors.push(FieldError::new(path.clone(), message));
        }
    }

    field_errors.extend(unknown_keys(campground, &CAMPGROUND_FIELDS, Some(CAMPGROUND_KEY)));
    field_errors.extend(errors);

    if !field_errors.is_empty() {
        return Err(field_errors);
    }

    match input {
        CampgroundInput {
            title: Some(title),
            location: Some(location),
            image: Some(image),
            description: Some(description),
            price: Some(price),
        } => Ok(CampgroundFields {
            title,
            location,
            image,
            description,
            price,
        }),
        _ => Err(vec![FieldError::new(CAMPGROUND_KEY, "\"campground\" is incomplete")]),
    }
}

/// Pulls typed values out of the raw sub-object, recording type mismatches
fn coerce(campground: &Map<String, Value>) -> (CampgroundInput, Vec<FieldError>) {
    let mut errors = Vec::new();
    let mut text = |field: &str| match campground.get(field) {
        None => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(FieldError::new(
                format!("{}.{}", CAMPGROUND_KEY, field),
                format!("\"{}.{}\" must be a string", CAMPGROUND_KEY, field),
            ));
            None
        }
    };

    let title = text("title");
    let location = text("location");
    let image = text("image");
    let description = text("description");

    // Form bodies carry every value as a string, so numeric strings count as numbers
    let price = match campground.get("price") {
        None => None,
        Some(value) => match number_from(value) {
            Some(price) => Some(price),
            None => {
                errors.push(FieldError::new(
                    format!("{}.price", CAMPGROUND_KEY),
                    format!("\"{}.price\" must be a number", CAMPGROUND_KEY),
                ));
                None
            }
        },
    };

    let input = CampgroundInput {
        title,
        location,
        image,
        description,
        price,
    };
    (input, errors)
}

fn number_from(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn unknown_keys(
    object: &Map<String, Value>,
    allowed: &[&str],
    prefix: Option<&str>,
) -> Vec<FieldError> {
    object
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .map(|key| {
            let path = match prefix {
                Some(prefix) => format!("{}.{}", prefix, key),
                None => key.clone(),
            };
            let message = format!("\"{}\" is not allowed", path);
            FieldError::new(path, message)
        })
        .collect()
}
