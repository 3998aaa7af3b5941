use std::cell::RefCell;

use chrono::{DateTime, Local};
use wasm_bindgen::JsValue;

use crate::forms::{AddStudentForm, PaymentForm};
use crate::messages::{Command, Message};
use crate::models::{filter_students, Grade, Student};
use crate::roles::{students_path, RoleError};
use crate::storage::{ActiveView, Session};
use crate::update::update;

// Store global application state
#[derive(Default)]
pub struct AppState {
    pub session: Session,
    pub active_view: ActiveView,

    // Student list
    pub students: Vec<Student>,
    pub students_loading: bool,
    // Generation of the newest list request; older responses are dropped
    pub students_request: u64,
    // A reload was asked for while a request was outstanding
    pub students_reload_pending: bool,
    pub students_error: Option<String>,
    pub search_query: String,
    pub last_loaded_at: Option<DateTime<Local>>,
    pub selected_student_id: Option<u32>,

    // Grade selector
    pub grades: Vec<Grade>,
    pub grades_loading: bool,

    pub add_form: AddStudentForm,
    pub payment_form: PaymentForm,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session,
            ..Self::default()
        }
    }

    /// List endpoint for the current session.
    pub fn students_path(&self) -> Result<String, RoleError> {
        students_path(self.session.role, self.session.staff_id)
    }

    /// Forget the outstanding list request, if any. Its response will be
    /// ignored when it arrives.
    pub fn abandon_students_request(&mut self) {
        self.students_request = self.students_request.wrapping_add(1);
        self.students_loading = false;
        self.students_reload_pending = false;
    }

    pub fn selected_student(&self) -> Option<&Student> {
        let id = self.selected_student_id?;
        self.students.iter().find(|s| s.id == id)
    }

    /// Students after applying the search box.
    pub fn visible_students(&self) -> Vec<&Student> {
        filter_students(&self.students, &self.search_query)
    }

    pub fn show_add_payment(&self) -> bool {
        self.session.role.can_add_payment()
    }

    /// Run `msg` through the reducers and return the side effects to execute.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }

    /// Re-render the active view from the current state.
    pub fn refresh_ui_after_state_change() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        APP_STATE.with(|state| {
            let state = state.borrow();
            crate::views::render_active_view(&state, &document)
        })
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

// Global helper function for dispatching messages with proper UI refresh handling
pub fn dispatch_global_message(msg: Message) {
    crate::debug_log!("dispatch {:?}", msg);

    // Drop the mutable borrow before running any command
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    for cmd in commands {
        match cmd {
            Command::SendMessage(next) => dispatch_global_message(next),
            Command::UpdateUI(ui_fn) => ui_fn(),
            other => crate::command_executors::execute_fetch_command(other),
        }
    }
}
