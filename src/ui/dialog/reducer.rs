use crate::ui::dialog::intent::DialogIntent;
use crate::ui::dialog::state::DialogState;
use crate::ui::form::FormState;
use crate::ui::mvi::Reducer;

pub struct DialogReducer;

impl Reducer for DialogReducer {
    type State = DialogState;
    type Intent = DialogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Opening only happens from Hidden: one dialog at a time.
            DialogIntent::OpenAdd => match state {
                DialogState::Hidden => DialogState::Add(FormState::empty()),
                other => other,
            },
            DialogIntent::OpenEdit { draft } => match state {
                DialogState::Hidden => DialogState::Edit(FormState::prefilled(draft)),
                other => other,
            },
            DialogIntent::OpenDeleteConfirm => match state {
                DialogState::Hidden => DialogState::ConfirmDelete,
                other => other,
            },
            DialogIntent::Close { kind } => {
                if state.kind() == Some(kind) {
                    DialogState::Hidden
                } else {
                    state
                }
            }
            DialogIntent::Dismiss => DialogState::Hidden,
            DialogIntent::FocusNext => map_form(state, FormState::focus_next),
            DialogIntent::FocusPrev => map_form(state, FormState::focus_prev),
            DialogIntent::Input(ch) => map_form(state, |form| form.insert_char(ch)),
            DialogIntent::Backspace => map_form(state, FormState::backspace),
            DialogIntent::Reject { errors } => map_form(state, |form| form.set_errors(errors)),
            DialogIntent::BeginSubmit { request } => {
                map_form(state, |form| form.begin_submit(request))
            }
            DialogIntent::SubmitFailed { message } => {
                map_form(state, |form| form.fail_submit(message))
            }
            DialogIntent::Completed { request } => {
                if state.form().is_some_and(|form| form.is_waiting_for(request)) {
                    DialogState::Hidden
                } else {
                    state
                }
            }
            DialogIntent::RequestFailed { request, message } => map_form(state, |form| {
                if form.is_waiting_for(request) {
                    form.fail_submit(message);
                }
            }),
        }
    }
}

fn map_form(state: DialogState, f: impl FnOnce(&mut FormState)) -> DialogState {
    match state {
        DialogState::Add(mut form) => {
            f(&mut form);
            DialogState::Add(form)
        }
        DialogState::Edit(mut form) => {
            f(&mut form);
            DialogState::Edit(form)
        }
        other => other,
    }
}
