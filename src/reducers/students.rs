//! Student list reducer: loading the role's list, selection and search.

use chrono::Local;

use crate::constants::FETCH_STUDENTS_FAILED;
use crate::messages::{Command, Message};
use crate::reducers::rerender;
use crate::state::AppState;

/// Handles list-related messages. Returns true if the message was handled.
pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoadStudents => {
            // One outstanding list request at a time; later asks collapse
            // into a single follow-up fetch.
            if state.students_loading {
                state.students_reload_pending = true;
                return true;
            }
            match state.students_path() {
                Ok(path) => {
                    state.students_request = state.students_request.wrapping_add(1);
                    state.students_loading = true;
                    state.students_error = None;
                    commands.push(Command::FetchStudents {
                        request: state.students_request,
                        path,
                    });
                }
                Err(e) => {
                    crate::error_log!("Cannot load students: {}", e);
                    state.students_error = Some(e.to_string());
                }
            }
            rerender(commands);
            true
        }
        Message::StudentsLoaded { request, path, students } => {
            if *request != state.students_request || !state.students_loading {
                crate::debug_log!("Ignoring stale student list from {}", path);
                return true;
            }
            crate::debug_log!("Loaded {} students from {}", students.len(), path);
            state.students = students.clone();
            state.students_loading = false;
            state.students_error = None;
            state.last_loaded_at = Some(Local::now());

            let selection_gone = state
                .selected_student_id
                .map(|id| !state.students.iter().any(|s| s.id == id))
                .unwrap_or(false);
            if selection_gone {
                state.selected_student_id = None;
                state.payment_form.switch_student();
            }
            follow_up_reload(state, commands);
            rerender(commands);
            true
        }
        Message::StudentsLoadFailed { request, path, error } => {
            if *request != state.students_request || !state.students_loading {
                return true;
            }
            crate::error_log!("Failed to fetch students from {}: {}", path, error);
            state.students_loading = false;
            state.students_error = Some(FETCH_STUDENTS_FAILED.to_string());
            follow_up_reload(state, commands);
            rerender(commands);
            true
        }
        Message::SelectStudent(id) => {
            if state.students.iter().any(|s| s.id == *id) {
                if state.selected_student_id != Some(*id) {
                    state.payment_form.switch_student();
                }
                state.selected_student_id = Some(*id);
            }
            rerender(commands);
            true
        }
        Message::ClearSelection => {
            state.selected_student_id = None;
            state.payment_form.switch_student();
            rerender(commands);
            true
        }
        Message::UpdateSearch(query) => {
            state.search_query = query.clone();
            // Only the cards change; re-rendering the whole view would steal
            // focus from the search box.
            commands.push(Command::UpdateUI(Box::new(|| {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    let result = crate::state::APP_STATE.with(|s| {
                        crate::components::student_list::refresh_cards(&document, &s.borrow())
                    });
                    if let Err(e) = result {
                        crate::error_log!("Failed to refresh student cards: {:?}", e);
                    }
                }
            })));
            true
        }
        _ => false,
    }
}

fn follow_up_reload(state: &mut AppState, commands: &mut Vec<Command>) {
    if state.students_reload_pending {
        state.students_reload_pending = false;
        commands.push(Command::SendMessage(Message::LoadStudents));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Student;
    use crate::roles::Role;
    use crate::storage::Session;

    fn student(id: u32, name: &str) -> Student {
        Student {
            id,
            name: name.into(),
            admission_number: Some(format!("ADM-{:03}", id)),
            grade: Some("4".into()),
            balance: Some(1000.0 * id as f64),
            arrears: None,
            term_fee: None,
            use_bus: Some(false),
            bus_balance: None,
            is_boarding: None,
        }
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut cmds = Vec::new();
        assert!(update(state, &msg, &mut cmds));
        cmds
    }

    fn fetches(cmds: &[Command]) -> Vec<(u64, String)> {
        cmds.iter()
            .filter_map(|c| match c {
                Command::FetchStudents { request, path } => Some((*request, path.clone())),
                _ => None,
            })
            .collect()
    }

    fn fetch_paths(cmds: &[Command]) -> Vec<String> {
        fetches(cmds).into_iter().map(|(_, p)| p).collect()
    }

    fn asks_for_reload(cmds: &[Command]) -> bool {
        cmds.iter()
            .any(|c| matches!(c, Command::SendMessage(Message::LoadStudents)))
    }

    fn loaded(request: u64, students: Vec<Student>) -> Message {
        Message::StudentsLoaded {
            request,
            path: "/students".into(),
            students,
        }
    }

    #[test]
    fn admin_loads_full_list_once() {
        let mut state = AppState::new();
        let cmds = run(&mut state, Message::LoadStudents);
        assert_eq!(fetch_paths(&cmds), vec!["/students".to_string()]);
        assert!(state.students_loading);

        // Second request while the first is outstanding is not issued
        let cmds = run(&mut state, Message::LoadStudents);
        assert!(fetch_paths(&cmds).is_empty());
        assert!(state.students_reload_pending);
    }

    #[test]
    fn teacher_without_staff_id_reports_error() {
        let mut state = AppState::with_session(Session { role: Role::Teacher, staff_id: None });
        let cmds = run(&mut state, Message::LoadStudents);
        assert!(fetch_paths(&cmds).is_empty());
        assert!(!state.students_loading);
        assert_eq!(
            state.students_error.as_deref(),
            Some("No staff id stored for this session")
        );
    }

    #[test]
    fn teacher_loads_own_students() {
        let mut state = AppState::with_session(Session { role: Role::Teacher, staff_id: Some(8) });
        let cmds = run(&mut state, Message::LoadStudents);
        assert_eq!(fetch_paths(&cmds), vec!["/staff/8/students".to_string()]);
    }

    #[test]
    fn loaded_list_replaces_state() {
        let mut state = AppState::new();
        let cmds = run(&mut state, Message::LoadStudents);
        let (request, _) = fetches(&cmds)[0].clone();
        let cmds = run(
            &mut state,
            loaded(request, vec![student(1, "Akinyi"), student(2, "Barasa")]),
        );
        assert_eq!(state.students.len(), 2);
        assert!(!state.students_loading);
        assert!(state.last_loaded_at.is_some());
        assert!(!asks_for_reload(&cmds));
    }

    #[test]
    fn response_without_outstanding_request_is_ignored() {
        let mut state = AppState::with_session(Session { role: Role::Teacher, staff_id: Some(2) });
        let current = state.students_request;
        run(&mut state, loaded(current, vec![student(1, "Akinyi")]));
        assert!(state.students.is_empty());
    }

    #[test]
    fn abandoned_request_response_is_dropped() {
        let mut state = AppState::new();
        let first = fetches(&run(&mut state, Message::LoadStudents))[0].0;
        state.abandon_students_request();
        let second = fetches(&run(&mut state, Message::LoadStudents))[0].0;
        assert_ne!(first, second);

        // The abandoned fetch lands first and is ignored
        run(&mut state, loaded(first, vec![student(1, "Akinyi")]));
        assert!(state.students.is_empty());
        assert!(state.students_loading);

        run(&mut state, loaded(second, vec![student(2, "Barasa")]));
        assert_eq!(state.students.len(), 1);
        assert!(!state.students_loading);
    }

    #[test]
    fn reload_requested_mid_flight_fetches_again() {
        let mut state = AppState::new();
        let request = fetches(&run(&mut state, Message::LoadStudents))[0].0;

        // A write completes while the list is still loading
        run(&mut state, Message::LoadStudents);
        run(&mut state, Message::LoadStudents);

        // The earlier list lands, then exactly one more fetch follows
        let cmds = run(&mut state, loaded(request, vec![student(1, "Akinyi")]));
        assert!(asks_for_reload(&cmds));
        assert!(!state.students_reload_pending);

        let cmds = run(&mut state, Message::LoadStudents);
        assert_eq!(fetch_paths(&cmds), vec!["/students".to_string()]);
    }

    #[test]
    fn reload_requested_mid_flight_survives_failure() {
        let mut state = AppState::new();
        let request = fetches(&run(&mut state, Message::LoadStudents))[0].0;
        run(&mut state, Message::LoadStudents);
        let cmds = run(
            &mut state,
            Message::StudentsLoadFailed {
                request,
                path: "/students".into(),
                error: "timeout".into(),
            },
        );
        assert!(asks_for_reload(&cmds));
    }

    #[test]
    fn failure_sets_user_message() {
        let mut state = AppState::new();
        let request = fetches(&run(&mut state, Message::LoadStudents))[0].0;
        run(
            &mut state,
            Message::StudentsLoadFailed {
                request,
                path: "/students".into(),
                error: "API request failed: 500 INTERNAL SERVER ERROR".into(),
            },
        );
        assert_eq!(state.students_error.as_deref(), Some(FETCH_STUDENTS_FAILED));
        assert!(!state.students_loading);
    }

    #[test]
    fn selection_survives_reload_only_if_present() {
        let mut state = AppState::new();
        state.students = vec![student(1, "Akinyi"), student(2, "Barasa")];
        run(&mut state, Message::SelectStudent(2));
        assert_eq!(state.selected_student().map(|s| s.name.as_str()), Some("Barasa"));

        // Unknown ids do not change the selection
        run(&mut state, Message::SelectStudent(99));
        assert_eq!(state.selected_student_id, Some(2));

        let request = fetches(&run(&mut state, Message::LoadStudents))[0].0;
        run(&mut state, loaded(request, vec![student(1, "Akinyi")]));
        assert_eq!(state.selected_student_id, None);
    }

    #[test]
    fn switching_student_resets_payment_form() {
        let mut state = AppState::new();
        state.students = vec![student(1, "Akinyi"), student(2, "Barasa")];
        run(&mut state, Message::SelectStudent(1));
        state.payment_form.amount = "500".into();
        run(&mut state, Message::SelectStudent(1));
        assert_eq!(state.payment_form.amount, "500");
        run(&mut state, Message::SelectStudent(2));
        assert_eq!(state.payment_form.amount, "");
    }

    #[test]
    fn switching_student_keeps_outstanding_payment() {
        let mut state = AppState::new();
        state.students = vec![student(1, "Akinyi"), student(2, "Barasa")];
        run(&mut state, Message::SelectStudent(1));
        state.payment_form.submitting_for = Some(1);

        run(&mut state, Message::SelectStudent(2));
        assert_eq!(state.payment_form.submitting_for, Some(1));
        run(&mut state, Message::ClearSelection);
        assert!(state.payment_form.submitting());
    }

    #[test]
    fn search_filters_visible_students() {
        let mut state = AppState::new();
        state.students = vec![student(1, "Akinyi"), student(2, "Barasa")];
        run(&mut state, Message::UpdateSearch("bar".into()));
        let visible: Vec<u32> = state.visible_students().iter().map(|s| s.id).collect();
        assert_eq!(visible, vec![2]);
    }
}
