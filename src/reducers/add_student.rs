//! Add-student reducer: grade loading and the new-student form.

use crate::constants::ADD_STUDENT_FAILED;
use crate::messages::{Command, Message};
use crate::reducers::{rerender, toast};
use crate::state::AppState;
use crate::toast::ToastKind;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoadGrades => {
            if !state.grades_loading {
                state.grades_loading = true;
                commands.push(Command::FetchGrades);
            }
            true
        }
        Message::GradesLoaded(grades) => {
            state.grades = grades.clone();
            state.grades_loading = false;
            rerender(commands);
            true
        }
        Message::GradesLoadFailed(error) => {
            // The selector just stays empty
            crate::error_log!("Error fetching grades: {}", error);
            state.grades_loading = false;
            true
        }

        // Plain field edits: the input already shows the new value.
        Message::SetStudentName(name) => {
            state.add_form.name = name.clone();
            true
        }
        Message::SetAdmissionNumber(adm) => {
            state.add_form.admission_number = adm.clone();
            true
        }
        Message::ToggleUseBus => {
            state.add_form.use_bus = !state.add_form.use_bus;
            true
        }
        Message::SetBoardingFee(raw) => {
            state.add_form.set_boarding_fee(raw);
            true
        }
        Message::SelectGrade(grade) => {
            state.add_form.select_grade(grade);
            // Boarding fee field depends on the grade
            rerender(commands);
            true
        }

        Message::SubmitNewStudent => {
            if state.add_form.submitting {
                return true;
            }
            match state.add_form.validate() {
                Ok(body) => match serde_json::to_string(&body) {
                    Ok(payload) => {
                        state.add_form.submitting = true;
                        state.add_form.message = None;
                        commands.push(Command::CreateStudent(payload));
                    }
                    Err(e) => {
                        crate::error_log!("Failed to serialize student: {}", e);
                        state.add_form.message = Some(ADD_STUDENT_FAILED.to_string());
                    }
                },
                Err(e) => {
                    state.add_form.message = Some(e.to_string());
                }
            }
            rerender(commands);
            true
        }
        Message::StudentCreated(message) => {
            let message = if message.trim().is_empty() {
                "Student added successfully".to_string()
            } else {
                message.clone()
            };
            state.add_form.reset(Some(message.clone()));
            toast(commands, message, ToastKind::Success);
            // The new student belongs in the list
            commands.push(Command::SendMessage(Message::LoadStudents));
            rerender(commands);
            true
        }
        Message::StudentCreateFailed(reason) => {
            crate::error_log!("Error adding student: {}", reason);
            state.add_form.submitting = false;
            state.add_form.message = Some(ADD_STUDENT_FAILED.to_string());
            if !reason.trim().is_empty() {
                toast(commands, reason.clone(), ToastKind::Error);
            }
            rerender(commands);
            true
        }
        _ => false,
    }
}
