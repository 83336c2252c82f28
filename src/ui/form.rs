use crate::contact::{ContactDraft, Field, FieldErrors};
use crate::service::RequestId;

/// Editable contact form shown by the add and edit dialogs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub draft: ContactDraft,
    pub focused: Field,
    pub errors: FieldErrors,
    /// Failure reported by the service for the last submit.
    pub submit_error: Option<String>,
    /// Request in flight for this form; further submits are ignored.
    pub pending: Option<RequestId>,
}

impl FormState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn prefilled(draft: ContactDraft) -> Self {
        Self {
            draft,
            ..Self::default()
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether `request` is the submit this form is waiting on.
    pub fn is_waiting_for(&self, request: RequestId) -> bool {
        self.pending == Some(request)
    }

    /// Editing a field clears its error. Ignored while submitting.
    pub fn insert_char(&mut self, ch: char) {
        if self.is_submitting() || ch.is_control() {
            return;
        }
        self.draft.get_mut(self.focused).push(ch);
        self.errors.remove(&self.focused);
    }

    pub fn backspace(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.draft.get_mut(self.focused).pop();
        self.errors.remove(&self.focused);
    }

    /// Attach validation messages and move focus to the first bad field.
    pub fn set_errors(&mut self, errors: FieldErrors) {
        if let Some(first) = errors.keys().next() {
            self.focused = *first;
        }
        self.errors = errors;
        self.pending = None;
    }

    pub fn begin_submit(&mut self, request: RequestId) {
        self.pending = Some(request);
        self.submit_error = None;
    }

    pub fn fail_submit(&mut self, message: String) {
        self.pending = None;
        self.submit_error = Some(message);
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }
}
