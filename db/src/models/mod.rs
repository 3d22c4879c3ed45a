pub mod academy;
pub mod academy_class;
pub mod clinic;
pub mod clinic_registration;
pub mod homework;
pub mod lesson;
pub mod student;
pub mod student_homework;
pub mod student_lesson;
pub mod student_submission;
pub mod student_submission_detail;
pub mod teacher;
pub mod teacher_feedback;
pub mod test;
pub mod test_question;
