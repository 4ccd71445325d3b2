//! Structural validation of the create-gallery request body.
//!
//! The declared schema is: a JSON object with a required string property
//! `name` of at least one character, and no other properties. Violations are
//! reported as human-readable strings. Callers currently only log them; the
//! request itself is gated by the explicit `name` checks in
//! [`GalleryService::create_gallery`](crate::services::GalleryService::create_gallery).

use serde_json::Value;

/// Validate a create-gallery body against the gallery schema.
///
/// Returns every violation found; an empty vector means the body is valid.
///
/// # Examples
///
/// ```rust
/// use gallery_core::utils::validation::validate_gallery_body;
/// use serde_json::json;
///
/// assert!(validate_gallery_body(&json!({ "name": "pets" })).is_empty());
/// assert_eq!(validate_gallery_body(&json!({})).len(), 1);
/// ```
pub fn validate_gallery_body(body: &Value) -> Vec<String> {
    let Some(object) = body.as_object() else {
        return vec![format!("instance is not of a type(s) object: {body}")];
    };

    let mut errors = Vec::new();
    match object.get("name") {
        None => errors.push("instance requires property \"name\"".to_string()),
        Some(Value::String(name)) if name.is_empty() => {
            errors.push("instance.name does not meet minimum length of 1".to_string());
        }
        Some(Value::String(_)) => {}
        Some(other) => errors.push(format!("instance.name is not of a type(s) string: {other}")),
    }

    for key in object.keys().filter(|key| key.as_str() != "name") {
        errors.push(format!(
            "instance is not allowed to have the additional property \"{key}\""
        ));
    }

    errors
}
