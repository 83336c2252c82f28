//! Client-side field checks shared by the add and edit forms.

use std::collections::BTreeMap;

use crate::contact::model::{ContactDraft, ContactFields, Field};

/// Per-field validation messages. Empty means the draft is valid.
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Validate a draft and produce the payload sent to the service.
///
/// Text fields are trimmed. Every failing field gets its own message so the
/// form can annotate all of them at once.
pub fn validate(draft: &ContactDraft) -> Result<ContactFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    for field in [Field::Name, Field::Address, Field::City, Field::State] {
        if draft.get(field).trim().is_empty() {
            errors.insert(field, required_message(field));
        }
    }

    let zip = draft.zip_code.trim();
    let zip_code = if zip.is_empty() {
        errors.insert(Field::ZipCode, required_message(Field::ZipCode));
        None
    } else {
        match parse_zip(zip) {
            Some(value) => Some(value),
            None => {
                errors.insert(Field::ZipCode, "Zip Code must be a number");
                None
            }
        }
    };

    match zip_code {
        Some(zip_code) if errors.is_empty() => Ok(ContactFields {
            name: draft.name.trim().to_string(),
            address: draft.address.trim().to_string(),
            city: draft.city.trim().to_string(),
            state: draft.state.trim().to_string(),
            zip_code,
        }),
        _ => Err(errors),
    }
}

fn required_message(field: Field) -> &'static str {
    match field {
        Field::Name => "Name is required",
        Field::Address => "Address is required",
        Field::City => "City is required",
        Field::State => "State is required",
        Field::ZipCode => "Zip Code is required",
    }
}

fn parse_zip(text: &str) -> Option<u32> {
    if !text.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
