use crate::contact::{filter_by_name, validate, Contact, ContactDraft};
use crate::service::{
    RequestId, ServiceCommand, ServiceCommandSender, ServiceError, ServiceOutcome,
};
use crate::ui::dialog::{DialogIntent, DialogKind, DialogReducer, DialogState};
use crate::ui::mvi::Reducer;

pub const NO_SELECTION_MESSAGE: &str = "No contact selected";
const SERVICE_UNAVAILABLE_MESSAGE: &str = "Address service is unavailable";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    Search,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown in the footer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The address book screen: cached contacts, search, selection and dialogs.
///
/// Network work is requested by sending [`ServiceCommand`]s; results come
/// back through [`App::on_service_outcome`]. Every successful mutation is
/// followed by a full reload.
pub struct App {
    should_quit: bool,
    focus: Focus,
    contacts: Vec<Contact>,
    search_text: String,
    /// Highlighted row within the visible (filtered) list.
    highlight: usize,
    selected: Option<Contact>,
    dialog: DialogState,
    /// Loads sent and not yet answered.
    pending_loads: usize,
    next_request: u64,
    notice: Option<Notice>,
    spinner_frame: usize,
    commands: Option<ServiceCommandSender>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: Focus::List,
            contacts: Vec::new(),
            search_text: String::new(),
            highlight: 0,
            selected: None,
            dialog: DialogState::default(),
            pending_loads: 0,
            next_request: 0,
            notice: None,
            spinner_frame: 0,
            commands: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: ServiceCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        if self.is_busy() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// A load or a form submit is in flight.
    pub fn is_busy(&self) -> bool {
        self.is_loading() || self.dialog.is_submitting()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_loads > 0
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn selected(&self) -> Option<&Contact> {
        self.selected.as_ref()
    }

    pub fn dialog(&self) -> &DialogState {
        &self.dialog
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn highlight(&self) -> usize {
        self.highlight
    }

    // ========================================================================
    // List and search
    // ========================================================================

    /// Request the full contact list. The current list stays until it arrives.
    pub fn load_all(&mut self) {
        if self.send_command(ServiceCommand::LoadAll) {
            self.pending_loads += 1;
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.highlight = 0;
    }

    pub fn push_search_char(&mut self, ch: char) {
        self.search_text.push(ch);
        self.highlight = 0;
    }

    pub fn pop_search_char(&mut self) {
        self.search_text.pop();
        self.highlight = 0;
    }

    /// Contacts matching the search text, in service order.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        filter_by_name(&self.contacts, &self.search_text)
    }

    pub fn move_highlight(&mut self, direction: i32) {
        let len = self.visible_contacts().len();
        if len == 0 {
            self.highlight = 0;
            return;
        }

        let current = self.highlight.min(len - 1);
        self.highlight = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn select_contact(&mut self, contact: Contact) {
        self.selected = Some(contact);
    }

    pub fn select_highlighted(&mut self) {
        let highlighted = self.visible_contacts().get(self.highlight).map(|c| (*c).clone());
        if let Some(contact) = highlighted {
            self.select_contact(contact);
        }
    }

    // ========================================================================
    // Dialogs (MVI pattern)
    // ========================================================================

    pub fn dispatch_dialog(&mut self, intent: DialogIntent) {
        dispatch_mvi!(self, dialog, DialogReducer, intent);
    }

    pub fn open_add(&mut self) {
        self.dispatch_dialog(DialogIntent::OpenAdd);
    }

    pub fn close_add(&mut self) {
        self.dispatch_dialog(DialogIntent::Close {
            kind: DialogKind::Add,
        });
    }

    /// Requires a selection; the form starts with the selected values.
    pub fn open_edit(&mut self) {
        let Some(contact) = &self.selected else {
            return;
        };
        let draft = ContactDraft::from(contact);
        self.dispatch_dialog(DialogIntent::OpenEdit { draft });
    }

    pub fn close_edit(&mut self) {
        self.dispatch_dialog(DialogIntent::Close {
            kind: DialogKind::Edit,
        });
    }

    pub fn open_delete_confirm(&mut self) {
        if self.selected.is_some() {
            self.dispatch_dialog(DialogIntent::OpenDeleteConfirm);
        }
    }

    pub fn close_delete_confirm(&mut self) {
        self.dispatch_dialog(DialogIntent::Close {
            kind: DialogKind::ConfirmDelete,
        });
    }

    pub fn dismiss_dialog(&mut self) {
        self.dispatch_dialog(DialogIntent::Dismiss);
    }

    /// Submit whichever form is open.
    pub fn submit_form(&mut self) {
        match self.dialog.kind() {
            Some(DialogKind::Add) => self.submit_create(),
            Some(DialogKind::Edit) => self.submit_update(),
            _ => {}
        }
    }

    pub fn submit_create(&mut self) {
        let DialogState::Add(form) = &self.dialog else {
            return;
        };
        if form.is_submitting() {
            return;
        }

        match validate(&form.draft) {
            Err(errors) => self.dispatch_dialog(DialogIntent::Reject { errors }),
            Ok(fields) => {
                let request = self.begin_submit();
                if !self.send_command(ServiceCommand::Create { request, fields }) {
                    self.dispatch_dialog(DialogIntent::SubmitFailed {
                        message: SERVICE_UNAVAILABLE_MESSAGE.to_string(),
                    });
                }
            }
        }
    }

    /// Without a selection nothing is sent and the form reports
    /// [`NO_SELECTION_MESSAGE`].
    pub fn submit_update(&mut self) {
        let DialogState::Edit(form) = &self.dialog else {
            return;
        };
        if form.is_submitting() {
            return;
        }
        let validation = validate(&form.draft);

        let Some(id) = self.selected.as_ref().map(|c| c.id.clone()) else {
            tracing::warn!("Update submitted without a selected contact");
            self.dispatch_dialog(DialogIntent::SubmitFailed {
                message: NO_SELECTION_MESSAGE.to_string(),
            });
            return;
        };

        match validation {
            Err(errors) => self.dispatch_dialog(DialogIntent::Reject { errors }),
            Ok(fields) => {
                let request = self.begin_submit();
                if !self.send_command(ServiceCommand::Update {
                    request,
                    id,
                    fields,
                }) {
                    self.dispatch_dialog(DialogIntent::SubmitFailed {
                        message: SERVICE_UNAVAILABLE_MESSAGE.to_string(),
                    });
                }
            }
        }
    }

    /// Closes the confirmation and clears the selection before the service
    /// has answered.
    pub fn confirm_delete(&mut self) {
        let Some(contact) = self.selected.take() else {
            self.close_delete_confirm();
            return;
        };
        self.close_delete_confirm();
        self.send_command(ServiceCommand::Delete { id: contact.id });
    }

    // ========================================================================
    // Service outcomes
    // ========================================================================

    pub fn on_service_outcome(&mut self, outcome: ServiceOutcome) {
        match outcome {
            ServiceOutcome::Loaded(Ok(contacts)) => self.replace_contacts(contacts),
            ServiceOutcome::Loaded(Err(err)) => {
                self.pending_loads = self.pending_loads.saturating_sub(1);
                log_failure("load", &err);
                self.set_notice(NoticeLevel::Error, format!("Load failed: {}", err.user_message()));
            }
            ServiceOutcome::Created {
                request,
                result: Ok(()),
            } => {
                tracing::info!(request = request.0, "Contact created");
                self.dispatch_dialog(DialogIntent::Completed { request });
                self.load_all();
            }
            ServiceOutcome::Created {
                request,
                result: Err(err),
            } => {
                log_failure("create", &err);
                self.fail_request(request, &err);
            }
            ServiceOutcome::Updated {
                request,
                result: Ok(()),
            } => {
                tracing::info!(request = request.0, "Contact updated");
                self.dispatch_dialog(DialogIntent::Completed { request });
                self.load_all();
            }
            ServiceOutcome::Updated {
                request,
                result: Err(err),
            } => {
                log_failure("update", &err);
                self.fail_request(request, &err);
            }
            ServiceOutcome::Deleted { id, result: Ok(()) } => {
                tracing::info!(%id, "Contact deleted");
                self.load_all();
            }
            ServiceOutcome::Deleted { id, result: Err(err) } => {
                tracing::warn!(%id, error = %err, kind = err.error_type(), "Delete failed");
                self.set_notice(
                    NoticeLevel::Error,
                    format!("Delete failed: {}", err.user_message()),
                );
            }
        }
    }

    /// Swap in a freshly loaded list and re-check the selection against it.
    fn replace_contacts(&mut self, contacts: Vec<Contact>) {
        self.pending_loads = self.pending_loads.saturating_sub(1);
        self.contacts = contacts;

        if let Some(id) = self.selected.as_ref().map(|c| c.id.clone()) {
            self.selected = self.contacts.iter().find(|c| c.id == id).cloned();
        }

        let visible = self.visible_contacts().len();
        self.highlight = self.highlight.min(visible.saturating_sub(1));
        tracing::debug!(count = self.contacts.len(), "Contacts loaded");
        self.set_notice(
            NoticeLevel::Info,
            format!("{} contacts", self.contacts.len()),
        );
    }

    /// Mark the open form as submitting under a fresh request id.
    fn begin_submit(&mut self) -> RequestId {
        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.dispatch_dialog(DialogIntent::BeginSubmit { request });
        request
    }

    /// Only the form that made the request is annotated; if the user has
    /// since closed it the failure is just logged.
    fn fail_request(&mut self, request: RequestId, err: &ServiceError) {
        self.dispatch_dialog(DialogIntent::RequestFailed {
            request,
            message: err.user_message(),
        });
    }

    fn set_notice(&mut self, level: NoticeLevel, message: String) {
        self.notice = Some(Notice { level, message });
    }

    fn send_command(&mut self, command: ServiceCommand) -> bool {
        let Some(sender) = &self.commands else {
            return false;
        };

        tracing::debug!(?command, "Sending service command");
        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Service command not sent");
                self.set_notice(NoticeLevel::Error, SERVICE_UNAVAILABLE_MESSAGE.to_string());
                false
            }
        }
    }
}

fn log_failure(operation: &'static str, err: &ServiceError) {
    tracing::warn!(operation, error = %err, kind = err.error_type(), "Address service call failed");
}
