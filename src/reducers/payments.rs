//! Payment reducer for the details panel (bursar only).

use crate::constants::PAYMENT_FAILED;
use crate::messages::{Command, Message};
use crate::reducers::{rerender, toast};
use crate::state::AppState;
use crate::toast::ToastKind;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::SetPaymentAmount(raw) => {
            state.payment_form.amount = raw.clone();
            true
        }
        Message::SubmitPayment => {
            // One outstanding post, whichever student it was for
            if state.payment_form.submitting() {
                return true;
            }
            let student_id = match state.selected_student_id {
                Some(id) if state.show_add_payment() => id,
                _ => {
                    crate::debug_log!("Payment submitted without a selected student or permission");
                    return true;
                }
            };
            state.payment_form.message = None;
            match state.payment_form.validate() {
                Ok(body) => match serde_json::to_string(&body) {
                    Ok(payload) => {
                        state.payment_form.submitting_for = Some(student_id);
                        state.payment_form.error = None;
                        commands.push(Command::ApplyPayment { student_id, payload });
                    }
                    Err(e) => {
                        crate::error_log!("Failed to serialize payment: {}", e);
                        state.payment_form.error = Some(PAYMENT_FAILED.to_string());
                    }
                },
                Err(e) => state.payment_form.error = Some(e.to_string()),
            }
            rerender(commands);
            true
        }
        Message::PaymentApplied { student_id, message } => {
            crate::debug_log!("Payment applied for student {}", student_id);
            let message = if message.trim().is_empty() {
                "Student balance updated successfully".to_string()
            } else {
                message.clone()
            };
            finish_submit(state, *student_id);
            // Only the panel of the paid student shows the outcome
            if state.selected_student_id == Some(*student_id) {
                state.payment_form.amount.clear();
                state.payment_form.error = None;
                state.payment_form.message = Some(message.clone());
            }
            toast(commands, message, ToastKind::Success);
            // Balances changed server side
            commands.push(Command::SendMessage(Message::LoadStudents));
            rerender(commands);
            true
        }
        Message::PaymentFailed { student_id, error } => {
            crate::error_log!("Error recording payment for student {}: {}", student_id, error);
            finish_submit(state, *student_id);
            let on_panel = state.selected_student_id == Some(*student_id);
            if on_panel {
                state.payment_form.error = Some(PAYMENT_FAILED.to_string());
            }
            if !error.trim().is_empty() {
                toast(commands, error.clone(), ToastKind::Error);
            } else if !on_panel {
                toast(commands, PAYMENT_FAILED.to_string(), ToastKind::Error);
            }
            rerender(commands);
            true
        }
        _ => false,
    }
}

fn finish_submit(state: &mut AppState, student_id: u32) {
    if state.payment_form.submitting_for == Some(student_id) {
        state.payment_form.submitting_for = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BalancePayment, Student};
    use crate::roles::Role;
    use crate::storage::Session;

    fn bursar_with_student() -> AppState {
        let mut state = AppState::with_session(Session { role: Role::Bursar, staff_id: None });
        state.students = vec![Student {
            id: 4,
            name: "Mutua Kilonzo".into(),
            admission_number: Some("ADM-004".into()),
            grade: Some("9".into()),
            balance: Some(8000.0),
            arrears: Some(0.0),
            term_fee: Some(8000.0),
            use_bus: Some(true),
            bus_balance: Some(1500.0),
            is_boarding: Some(true),
        }];
        let mut other = state.students[0].clone();
        other.id = 5;
        other.name = "Njeri Kamau".into();
        state.students.push(other);
        state.selected_student_id = Some(4);
        state
    }

    fn run(state: &mut AppState, msg: Message) -> Vec<Command> {
        let mut cmds = Vec::new();
        assert!(update(state, &msg, &mut cmds));
        cmds
    }

    fn payment(cmds: &[Command]) -> Option<(u32, BalancePayment)> {
        cmds.iter().find_map(|c| match c {
            Command::ApplyPayment { student_id, payload } => {
                serde_json::from_str(payload).ok().map(|p| (*student_id, p))
            }
            _ => None,
        })
    }

    #[test]
    fn bursar_posts_payment_for_selected_student() {
        let mut state = bursar_with_student();
        run(&mut state, Message::SetPaymentAmount("2,000".into()));
        let cmds = run(&mut state, Message::SubmitPayment);
        assert_eq!(
            payment(&cmds),
            Some((4, BalancePayment { payment_amount: 2000.0 }))
        );
        assert!(state.payment_form.submitting());
    }

    #[test]
    fn admin_cannot_post_payments() {
        let mut state = bursar_with_student();
        state.session.role = Role::Admin;
        run(&mut state, Message::SetPaymentAmount("100".into()));
        let cmds = run(&mut state, Message::SubmitPayment);
        assert!(payment(&cmds).is_none());
    }

    #[test]
    fn zero_payment_is_rejected_locally() {
        let mut state = bursar_with_student();
        run(&mut state, Message::SetPaymentAmount("0".into()));
        let cmds = run(&mut state, Message::SubmitPayment);
        assert!(payment(&cmds).is_none());
        assert_eq!(
            state.payment_form.error.as_deref(),
            Some("Amount must be greater than zero")
        );
    }

    #[test]
    fn applied_payment_refreshes_balances() {
        let mut state = bursar_with_student();
        run(&mut state, Message::SetPaymentAmount("500".into()));
        run(&mut state, Message::SubmitPayment);
        let cmds = run(
            &mut state,
            Message::PaymentApplied { student_id: 4, message: String::new() },
        );
        assert_eq!(state.payment_form.amount, "");
        assert!(!state.payment_form.submitting());
        assert_eq!(
            state.payment_form.message.as_deref(),
            Some("Student balance updated successfully")
        );
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Command::SendMessage(Message::LoadStudents))));
    }

    #[test]
    fn failed_payment_keeps_amount() {
        let mut state = bursar_with_student();
        run(&mut state, Message::SetPaymentAmount("500".into()));
        run(&mut state, Message::SubmitPayment);
        run(
            &mut state,
            Message::PaymentFailed { student_id: 4, error: "Student not found".into() },
        );
        assert_eq!(state.payment_form.amount, "500");
        assert_eq!(state.payment_form.error.as_deref(), Some(PAYMENT_FAILED));
        assert!(!state.payment_form.submitting());
    }

    #[test]
    fn reselecting_mid_payment_allows_no_second_post() {
        let mut state = bursar_with_student();
        run(&mut state, Message::SetPaymentAmount("100".into()));
        let first = run(&mut state, Message::SubmitPayment);
        assert_eq!(payment(&first).map(|(id, _)| id), Some(4));

        state.dispatch(Message::SelectStudent(5));
        run(&mut state, Message::SetPaymentAmount("200".into()));
        let second = run(&mut state, Message::SubmitPayment);
        assert!(payment(&second).is_none());
        assert!(state.payment_form.submitting());
    }

    #[test]
    fn late_result_stays_off_another_students_panel() {
        let mut state = bursar_with_student();
        run(&mut state, Message::SetPaymentAmount("100".into()));
        run(&mut state, Message::SubmitPayment);

        state.dispatch(Message::SelectStudent(5));
        run(&mut state, Message::SetPaymentAmount("200".into()));

        let cmds = run(
            &mut state,
            Message::PaymentApplied { student_id: 4, message: "ok for 4".into() },
        );
        assert_eq!(state.payment_form.message, None);
        assert_eq!(state.payment_form.amount, "200");
        assert!(!state.payment_form.submitting());
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Command::SendMessage(Message::LoadStudents))));

        // Now the second student's payment can go out
        let cmds = run(&mut state, Message::SubmitPayment);
        assert_eq!(
            payment(&cmds),
            Some((5, BalancePayment { payment_amount: 200.0 }))
        );
    }

    #[test]
    fn late_failure_stays_off_another_students_panel() {
        let mut state = bursar_with_student();
        run(&mut state, Message::SetPaymentAmount("100".into()));
        run(&mut state, Message::SubmitPayment);
        state.dispatch(Message::SelectStudent(5));

        run(
            &mut state,
            Message::PaymentFailed { student_id: 4, error: String::new() },
        );
        assert_eq!(state.payment_form.error, None);
        assert!(!state.payment_form.submitting());
    }
}
