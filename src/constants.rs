// Boarding rule applied by the add-student form
pub const BOARDING_GRADES: [&str; 6] = ["5", "6", "7", "8", "9", "10"];
pub const DEFAULT_BOARDING_FEE: f64 = 3500.0;

// localStorage keys written by the login page
pub const STORAGE_ROLE_KEY: &str = "role";
pub const STORAGE_STAFF_ID_KEY: &str = "staffId";

// User-facing messages
pub const DASHBOARD_TITLE: &str = "Admin Dashboard";
pub const ADD_STUDENT_FAILED: &str = "Error adding student. Please try again.";
pub const FETCH_STUDENTS_FAILED: &str = "Failed to fetch students. Please try again.";
pub const NO_SELECTION_TEXT: &str = "Select a student to view details.";
pub const PAYMENT_FAILED: &str = "Error recording payment. Please try again.";

// Root element the host page provides
pub const APP_ROOT_ID: &str = "app-container";

// Card layout
pub const CARD_NAME_MAX_GRAPHEMES: usize = 28;
