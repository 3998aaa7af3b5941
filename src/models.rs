use serde::{Deserialize, Deserializer, Serialize};

/// Student record as returned by the list endpoints.
///
/// The backend serves different projections from `/students` and
/// `/staff/{id}/students`, so everything beyond `id` and `name` is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub admission_number: Option<String>,
    #[serde(default, deserialize_with = "grade_label")]
    pub grade: Option<String>,
    #[serde(default)]
    pub balance: Option<f64>,
    #[serde(default)]
    pub arrears: Option<f64>,
    #[serde(default)]
    pub term_fee: Option<f64>,
    #[serde(default)]
    pub use_bus: Option<bool>,
    #[serde(default)]
    pub bus_balance: Option<f64>,
    #[serde(default)]
    pub is_boarding: Option<bool>,
}

impl Student {
    pub fn grade_label(&self) -> &str {
        self.grade.as_deref().unwrap_or("-")
    }

    pub fn admission_label(&self) -> &str {
        self.admission_number.as_deref().unwrap_or("-")
    }

    pub fn uses_bus(&self) -> bool {
        self.use_bus.unwrap_or(false)
    }

    /// Case-insensitive substring match on name or admission number.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle)
            || self
                .admission_number
                .as_deref()
                .map(|adm| adm.to_lowercase().contains(&needle))
                .unwrap_or(false)
    }
}

/// Students matching `query`, in list order.
pub fn filter_students<'a>(students: &'a [Student], query: &str) -> Vec<&'a Student> {
    students.iter().filter(|s| s.matches(query)).collect()
}

/// A grade entry used to populate the grade selector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: u32,
    #[serde(alias = "name", deserialize_with = "required_grade_label")]
    pub grade: String,
}

/// Body posted to `/api/students`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: String,
    pub admission_number: String,
    pub grade: String,
    pub use_bus: bool,
    pub is_boarding: bool,
    pub boarding_fee: f64,
}

/// Body posted to `/students/{id}/update-balance`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BalancePayment {
    pub payment_amount: f64,
}

/// `{ "message": ... }` envelope returned by write endpoints.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: String,
}

/// `{ "error": ... }` envelope returned on failures.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

// Grades arrive as "5" from some endpoints and 5 from others.
#[derive(Deserialize)]
#[serde(untagged)]
enum GradeValue {
    Text(String),
    Number(i64),
}

impl From<GradeValue> for String {
    fn from(value: GradeValue) -> Self {
        match value {
            GradeValue::Text(s) => s,
            GradeValue::Number(n) => n.to_string(),
        }
    }
}

fn grade_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<GradeValue>::deserialize(deserializer)?;
    Ok(value.map(String::from))
}

fn required_grade_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    GradeValue::deserialize(deserializer).map(String::from)
}
