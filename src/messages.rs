// src/messages.rs
//
// Events the admin UI reacts to, and the side effects reducers ask for.
//
use crate::models::{Grade, Student};
use crate::storage::{ActiveView, Session};

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    ShowView(ActiveView),
    SessionChanged(Session),
    ApiConfigChanged,

    // Student list
    LoadStudents,
    // `request` is the list generation the fetch was issued under
    StudentsLoaded { request: u64, path: String, students: Vec<Student> },
    StudentsLoadFailed { request: u64, path: String, error: String },
    SelectStudent(u32),
    ClearSelection,
    UpdateSearch(String),

    // Grades for the selector
    LoadGrades,
    GradesLoaded(Vec<Grade>),
    GradesLoadFailed(String),

    // Add-student form
    SetStudentName(String),
    SetAdmissionNumber(String),
    SelectGrade(String),
    ToggleUseBus,
    SetBoardingFee(String),
    SubmitNewStudent,
    StudentCreated(String),
    StudentCreateFailed(String),

    // Payment form in the details panel
    SetPaymentAmount(String),
    SubmitPayment,
    PaymentApplied { student_id: u32, message: String },
    PaymentFailed { student_id: u32, error: String },
}

pub enum Command {
    /// Chain another message to be processed
    SendMessage(Message),

    /// Execute a UI update function after state changes
    UpdateUI(Box<dyn FnOnce() + 'static>),

    /// GET /api/grades
    FetchGrades,

    /// GET a role-specific student list path
    FetchStudents { request: u64, path: String },

    /// POST /api/students with a serialized `NewStudent`
    CreateStudent(String),

    /// POST /students/{id}/update-balance with a serialized `BalancePayment`
    ApplyPayment { student_id: u32, payload: String },
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::SendMessage(msg) => f.debug_tuple("SendMessage").field(msg).finish(),
            Command::UpdateUI(_) => f.write_str("UpdateUI(..)"),
            Command::FetchGrades => f.write_str("FetchGrades"),
            Command::FetchStudents { request, path } => f
                .debug_struct("FetchStudents")
                .field("request", request)
                .field("path", path)
                .finish(),
            Command::CreateStudent(payload) => f.debug_tuple("CreateStudent").field(payload).finish(),
            Command::ApplyPayment { student_id, payload } => f
                .debug_struct("ApplyPayment")
                .field("student_id", student_id)
                .field("payload", payload)
                .finish(),
        }
    }
}
