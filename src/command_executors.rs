use crate::messages::{Command, Message};
use crate::models::{ApiMessage, Grade, Student};
use crate::network::api_client::{js_error_text, ApiClient};
use crate::state::dispatch_global_message;

/// Run a network command. Each one issues a single request and reports the
/// outcome back as a message.
pub fn execute_fetch_command(cmd: Command) {
    match cmd {
        Command::FetchGrades => {
            wasm_bindgen_futures::spawn_local(async move {
                let msg = match ApiClient::get_grades().await {
                    Ok(response) => match serde_json::from_str::<Vec<Grade>>(&response) {
                        Ok(grades) => Message::GradesLoaded(grades),
                        Err(e) => Message::GradesLoadFailed(format!("Failed to parse grades: {}", e)),
                    },
                    Err(e) => Message::GradesLoadFailed(js_error_text(&e)),
                };
                dispatch_global_message(msg);
            });
        }
        Command::FetchStudents { request, path } => {
            wasm_bindgen_futures::spawn_local(async move {
                let msg = match ApiClient::get_students(&path).await {
                    Ok(response) => match serde_json::from_str::<Vec<Student>>(&response) {
                        Ok(students) => Message::StudentsLoaded { request, path, students },
                        Err(e) => Message::StudentsLoadFailed {
                            request,
                            path,
                            error: format!("Failed to parse students: {}", e),
                        },
                    },
                    Err(e) => Message::StudentsLoadFailed {
                        request,
                        path,
                        error: js_error_text(&e),
                    },
                };
                dispatch_global_message(msg);
            });
        }
        Command::CreateStudent(payload) => {
            wasm_bindgen_futures::spawn_local(async move {
                let msg = match ApiClient::create_student(&payload).await {
                    Ok(response) => Message::StudentCreated(success_message(&response)),
                    Err(e) => Message::StudentCreateFailed(js_error_text(&e)),
                };
                dispatch_global_message(msg);
            });
        }
        Command::ApplyPayment { student_id, payload } => {
            wasm_bindgen_futures::spawn_local(async move {
                let msg = match ApiClient::update_balance(student_id, &payload).await {
                    Ok(response) => Message::PaymentApplied {
                        student_id,
                        message: success_message(&response),
                    },
                    Err(e) => Message::PaymentFailed {
                        student_id,
                        error: js_error_text(&e),
                    },
                };
                dispatch_global_message(msg);
            });
        }
        Command::SendMessage(msg) => dispatch_global_message(msg),
        Command::UpdateUI(ui_fn) => ui_fn(),
    }
}

/// The `message` field of a write response, or empty when the body has none.
fn success_message(body: &str) -> String {
    serde_json::from_str::<ApiMessage>(body)
        .map(|m| m.message)
        .unwrap_or_default()
}
