//! Shape validation for post request bodies.
//!
//! Runs before any storage access. Every problem with the body is collected,
//! so a caller sees all rejected fields at once.

use serde_json::{Map, Value};

use crate::domain::NewPost;
use crate::error::{FieldError, InputError};

/// Column width of the bounded text fields.
pub const MAX_FIELD_CHARS: usize = 255;

/// Validate a raw create/update body into [`NewPost`].
///
/// The body is parsed as JSON whatever content type the client declared.
/// Unknown fields are ignored.
pub fn validate_post_input(body: &[u8]) -> Result<NewPost, InputError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| InputError::Malformed(e.to_string()))?;

    let Value::Object(map) = value else {
        return Err(InputError::Invalid(vec![FieldError::new(
            "body",
            "expected a JSON object",
        )]));
    };

    let mut errors = Vec::new();

    let platform = required(&map, "platform", Some(MAX_FIELD_CHARS), &mut errors);
    let title = required(&map, "title", Some(MAX_FIELD_CHARS), &mut errors);
    let tone = required(&map, "tone", Some(MAX_FIELD_CHARS), &mut errors);
    let content = required(&map, "content", None, &mut errors);
    let hashtags = required(&map, "hashtags", Some(MAX_FIELD_CHARS), &mut errors);
    let link = optional(&map, "link", MAX_FIELD_CHARS, &mut errors);

    match (platform, title, tone, content, hashtags, link) {
        (Some(platform), Some(title), Some(tone), Some(content), Some(hashtags), Some(link)) => {
            Ok(NewPost {
                platform,
                title,
                tone,
                content,
                hashtags,
                link,
            })
        }
        _ => Err(InputError::Invalid(errors)),
    }
}

fn required(
    map: &Map<String, Value>,
    field: &'static str,
    max_chars: Option<usize>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match map.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "field required"));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(FieldError::new(field, "must not be empty"));
            None
        }
        Some(Value::String(s)) => bounded(s, field, max_chars, errors),
        Some(_) => {
            errors.push(FieldError::new(field, "expected a string"));
            None
        }
    }
}

/// Outer `None` means the field was rejected; inner `None` means absent or null.
fn optional(
    map: &Map<String, Value>,
    field: &'static str,
    max_chars: usize,
    errors: &mut Vec<FieldError>,
) -> Option<Option<String>> {
    match map.get(field) {
        None | Some(Value::Null) => Some(None),
        Some(Value::String(s)) => bounded(s, field, Some(max_chars), errors).map(Some),
        Some(_) => {
            errors.push(FieldError::new(field, "expected a string or null"));
            None
        }
    }
}

fn bounded(
    s: &str,
    field: &'static str,
    max_chars: Option<usize>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match max_chars {
        Some(max) if s.chars().count() > max => {
            errors.push(FieldError::new(field, format!("exceeds {max} characters")));
            None
        }
        _ => Some(s.to_string()),
    }
}
