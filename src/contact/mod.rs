//! Contact records, form drafts, validation and search.

mod filter;
mod model;
mod validation;

pub use filter::filter_by_name;
pub use model::{Contact, ContactDraft, ContactFields, ContactId, Field};
pub use validation::{validate, FieldErrors};
