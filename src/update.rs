// src/update.rs
//
use crate::messages::{Command, Message};
use crate::reducers::rerender;
use crate::state::AppState;
use crate::storage::ActiveView;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    // Delegate to domain-specific reducers first
    if crate::reducers::students::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::add_student::update(state, &msg, &mut commands) {
        return commands;
    }
    if crate::reducers::payments::update(state, &msg, &mut commands) {
        return commands;
    }

    match msg {
        Message::ShowView(view) => {
            state.active_view = view;
            // The add-student form loads grades when it is opened
            if view == ActiveView::AddStudent && state.grades.is_empty() {
                commands.push(Command::SendMessage(Message::LoadGrades));
            }
            rerender(&mut commands);
        }
        Message::SessionChanged(session) => {
            if state.session != session {
                state.session = session;
                state.students.clear();
                state.abandon_students_request();
                state.students_error = None;
                state.selected_student_id = None;
                state.payment_form.switch_student();
                if !state.session.role.can_add_students() {
                    state.active_view = ActiveView::Dashboard;
                }
                commands.push(Command::SendMessage(Message::LoadStudents));
            }
            rerender(&mut commands);
        }
        Message::ApiConfigChanged => {
            // Anything in flight went to the previous backend
            state.abandon_students_request();
            commands.push(Command::SendMessage(Message::LoadStudents));
        }
        other => {
            crate::debug_log!("Unhandled message: {:?}", other);
        }
    }

    commands
}
