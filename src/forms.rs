//! Form state for the add-student and payment panels.
//!
//! Kept free of DOM types so the reducers can drive it directly and the rules
//! are testable outside a browser.

use std::fmt;

use crate::constants::{BOARDING_GRADES, DEFAULT_BOARDING_FEE};
use crate::models::{BalancePayment, NewStudent};

#[derive(Clone, Debug, PartialEq)]
pub enum FormError {
    MissingName,
    MissingAdmissionNumber,
    MissingGrade,
    InvalidAmount(String),
    NonPositiveAmount,
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::MissingName => write!(f, "Name is required"),
            FormError::MissingAdmissionNumber => write!(f, "Admission number is required"),
            FormError::MissingGrade => write!(f, "Select a grade"),
            FormError::InvalidAmount(raw) => write!(f, "'{}' is not a valid amount", raw),
            FormError::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
        }
    }
}

/// Whether `grade` is one of the boarding grades.
pub fn is_boarding_grade(grade: &str) -> bool {
    BOARDING_GRADES.contains(&grade.trim())
}

/// Parse a user-typed amount. Accepts thousands separators and surrounding
/// whitespace; empty input is zero.
pub fn parse_amount(raw: &str) -> Result<f64, FormError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Ok(0.0);
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(FormError::InvalidAmount(raw.to_string())),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AddStudentForm {
    pub name: String,
    pub admission_number: String,
    pub grade: String,
    pub use_bus: bool,
    pub is_boarding: bool,
    // Raw text of the fee input; parsed on submit.
    pub boarding_fee: String,
    pub submitting: bool,
    pub message: Option<String>,
}

impl Default for AddStudentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            admission_number: String::new(),
            grade: String::new(),
            use_bus: false,
            is_boarding: false,
            boarding_fee: "0".to_string(),
            submitting: false,
            message: None,
        }
    }
}

impl AddStudentForm {
    /// Select a grade and apply the boarding rule: boarding grades carry the
    /// fixed boarding fee, every other grade resets it to zero.
    pub fn select_grade(&mut self, grade: &str) {
        self.grade = grade.to_string();
        if is_boarding_grade(grade) {
            self.is_boarding = true;
            self.boarding_fee = format_fee_input(DEFAULT_BOARDING_FEE);
        } else {
            self.is_boarding = false;
            self.boarding_fee = "0".to_string();
        }
    }

    /// The fee is only editable for day scholars.
    pub fn set_boarding_fee(&mut self, raw: &str) {
        if !self.is_boarding {
            self.boarding_fee = raw.to_string();
        }
    }

    pub fn validate(&self) -> Result<NewStudent, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        let admission_number = self.admission_number.trim();
        if admission_number.is_empty() {
            return Err(FormError::MissingAdmissionNumber);
        }
        if self.grade.trim().is_empty() {
            return Err(FormError::MissingGrade);
        }
        let boarding_fee = if self.is_boarding {
            DEFAULT_BOARDING_FEE
        } else {
            parse_amount(&self.boarding_fee)?
        };

        Ok(NewStudent {
            name: name.to_string(),
            admission_number: admission_number.to_string(),
            grade: self.grade.trim().to_string(),
            use_bus: self.use_bus,
            is_boarding: self.is_boarding,
            boarding_fee,
        })
    }

    /// Clear every field after a successful submit, keeping the status message.
    pub fn reset(&mut self, message: Option<String>) {
        *self = Self {
            message,
            ..Self::default()
        };
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaymentForm {
    pub amount: String,
    /// Student whose payment is still being posted.
    pub submitting_for: Option<u32>,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl PaymentForm {
    pub fn submitting(&self) -> bool {
        self.submitting_for.is_some()
    }

    /// Clear what the panel shows for the previous student. An outstanding
    /// post stays outstanding.
    pub fn switch_student(&mut self) {
        *self = Self {
            submitting_for: self.submitting_for,
            ..Self::default()
        };
    }

    pub fn validate(&self) -> Result<BalancePayment, FormError> {
        let payment_amount = parse_amount(&self.amount)?;
        if payment_amount <= 0.0 {
            return Err(FormError::NonPositiveAmount);
        }
        Ok(BalancePayment { payment_amount })
    }
}

fn format_fee_input(fee: f64) -> String {
    if fee.fract() == 0.0 {
        format!("{}", fee as i64)
    } else {
        format!("{:.2}", fee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn filled_form() -> AddStudentForm {
        AddStudentForm {
            name: "  Njeri Mwangi ".into(),
            admission_number: "ADM-311".into(),
            ..AddStudentForm::default()
        }
    }

    #[test]
    fn boarding_grades_fix_the_fee() {
        let mut form = filled_form();
        form.select_grade("7");
        assert!(form.is_boarding);
        assert_eq!(form.boarding_fee, "3500");

        form.set_boarding_fee("100");
        assert_eq!(form.boarding_fee, "3500");

        let body = form.validate().unwrap();
        assert_eq!(body.boarding_fee, 3500.0);
        assert!(body.is_boarding);
    }

    #[test]
    fn day_grades_reset_and_allow_editing() {
        let mut form = filled_form();
        form.select_grade("10");
        form.select_grade("4");
        assert!(!form.is_boarding);
        assert_eq!(form.boarding_fee, "0");

        form.set_boarding_fee("1,200");
        let body = form.validate().unwrap();
        assert_eq!(body.boarding_fee, 1200.0);
        assert_eq!(body.name, "Njeri Mwangi");
        assert_eq!(body.grade, "4");
    }

    #[test]
    fn grade_eleven_is_not_boarding() {
        assert!(is_boarding_grade("5"));
        assert!(is_boarding_grade("10"));
        assert!(!is_boarding_grade("11"));
        assert!(!is_boarding_grade("1"));
        assert!(!is_boarding_grade(""));
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let form = AddStudentForm::default();
        assert_eq!(form.validate(), Err(FormError::MissingName));

        let mut form = filled_form();
        form.admission_number = "   ".into();
        assert_eq!(form.validate(), Err(FormError::MissingAdmissionNumber));

        let form = filled_form();
        assert_eq!(form.validate(), Err(FormError::MissingGrade));
    }

    #[test]
    fn bad_fee_is_rejected() {
        let mut form = filled_form();
        form.select_grade("2");
        form.set_boarding_fee("abc");
        assert_eq!(
            form.validate(),
            Err(FormError::InvalidAmount("abc".to_string()))
        );
    }

    #[test]
    fn reset_clears_fields_but_keeps_message() {
        let mut form = filled_form();
        form.select_grade("6");
        form.use_bus = true;
        form.submitting = true;
        form.reset(Some("Student added successfully".into()));
        assert_eq!(form.name, "");
        assert_eq!(form.grade, "");
        assert!(!form.use_bus);
        assert!(!form.is_boarding);
        assert!(!form.submitting);
        assert_eq!(form.boarding_fee, "0");
        assert_eq!(form.message.as_deref(), Some("Student added successfully"));
    }

    #[test]
    fn payment_must_be_positive() {
        let mut form = PaymentForm::default();
        assert_eq!(form.validate(), Err(FormError::NonPositiveAmount));
        form.amount = "-5".into();
        assert_eq!(form.validate(), Err(FormError::InvalidAmount("-5".into())));
        form.amount = "2,500.50".into();
        assert_eq!(form.validate().unwrap().payment_amount, 2500.5);
    }

    #[test]
    fn switching_student_keeps_outstanding_post() {
        let mut form = PaymentForm {
            amount: "300".into(),
            submitting_for: Some(4),
            message: Some("done".into()),
            error: None,
        };
        form.switch_student();
        assert_eq!(form.amount, "");
        assert_eq!(form.message, None);
        assert!(form.submitting());
        assert_eq!(form.submitting_for, Some(4));
    }

    proptest! {
        #[test]
        fn whole_amounts_with_separators_parse(n in 0u64..10_000_000u64) {
            let digits = n.to_string();
            let mut grouped = String::new();
            for (i, c) in digits.chars().enumerate() {
                if i > 0 && (digits.len() - i) % 3 == 0 {
                    grouped.push(',');
                }
                grouped.push(c);
            }
            prop_assert_eq!(parse_amount(&grouped).unwrap(), n as f64);
        }

        #[test]
        fn alphabetic_input_never_parses(s in "[a-df-zA-DF-Z]{1,12}") {
            prop_assert!(parse_amount(&s).is_err());
        }
    }
}
