pub mod add_student;
pub mod dashboard;
pub mod header;
pub mod student_details;
pub mod student_list;
