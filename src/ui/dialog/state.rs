use crate::ui::form::FormState;
use crate::ui::mvi::UiState;

/// Which modal is on screen. At most one is open at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Hidden,
    Add(FormState),
    Edit(FormState),
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Add,
    Edit,
    ConfirmDelete,
}

impl UiState for DialogState {}

impl DialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn kind(&self) -> Option<DialogKind> {
        match self {
            Self::Hidden => None,
            Self::Add(_) => Some(DialogKind::Add),
            Self::Edit(_) => Some(DialogKind::Edit),
            Self::ConfirmDelete => Some(DialogKind::ConfirmDelete),
        }
    }

    pub fn form(&self) -> Option<&FormState> {
        match self {
            Self::Add(form) | Self::Edit(form) => Some(form),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.form().is_some_and(FormState::is_submitting)
    }
}
