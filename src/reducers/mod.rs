//! Domain reducers. The root `update.rs` offers every message to each of
//! them in turn and stops at the first one that handles it.

pub mod add_student;
pub mod payments;
pub mod students;

use crate::messages::Command;

/// Queue a full re-render of the active view once the state borrow ends.
pub(crate) fn rerender(commands: &mut Vec<Command>) {
    commands.push(Command::UpdateUI(Box::new(|| {
        if let Err(e) = crate::state::AppState::refresh_ui_after_state_change() {
            crate::error_log!("Failed to refresh UI: {:?}", e);
        }
    })));
}

/// Queue a toast notification.
pub(crate) fn toast(commands: &mut Vec<Command>, text: String, kind: crate::toast::ToastKind) {
    commands.push(Command::UpdateUI(Box::new(move || {
        crate::toast::show(&text, kind);
    })));
}
