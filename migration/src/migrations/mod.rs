pub mod m202606010001_create_teachers;
pub mod m202606010002_create_academies;
pub mod m202606010003_create_students;
pub mod m202606010004_create_lessons;
pub mod m202606010005_create_tests;
pub mod m202606010006_create_submissions;
pub mod m202606010007_create_homeworks;
pub mod m202606010008_create_student_lessons;
pub mod m202606010009_create_clinics;
pub mod m202606010010_create_teacher_feedbacks;
