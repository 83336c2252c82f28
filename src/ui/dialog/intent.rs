use crate::contact::{ContactDraft, FieldErrors};
use crate::service::RequestId;
use crate::ui::dialog::state::DialogKind;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DialogIntent {
    OpenAdd,
    /// Edit form prefilled from the selected contact.
    OpenEdit { draft: ContactDraft },
    OpenDeleteConfirm,
    /// Close the dialog only if `kind` is the one on screen.
    Close { kind: DialogKind },
    /// Esc: close whatever is open.
    Dismiss,
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    /// Client-side validation failed.
    Reject { errors: FieldErrors },
    BeginSubmit { request: RequestId },
    SubmitFailed { message: String },
    /// The service accepted `request`; closes the form only if it is still
    /// waiting on that request.
    Completed { request: RequestId },
    /// The service rejected `request`; ignored by any other form.
    RequestFailed { request: RequestId, message: String },
}

impl Intent for DialogIntent {}
