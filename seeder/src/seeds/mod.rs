pub mod academy;
pub mod clinic;
pub mod lesson;
pub mod student;
pub mod submission;
pub mod teacher;
