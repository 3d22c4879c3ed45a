//! Clinic scheduling, registration workflow, and attendance eligibility.
//!
//! Dates always enter through an explicit `today` parameter so the
//! weekday resolution and "has this clinic passed" rules stay testable.

use chrono::{Datelike, Days, NaiveDate, NaiveTime};
use sea_orm::{DbConn, EntityTrait};
use serde::Serialize;

use db::models::{
    academy_class::Entity as ClassEntity,
    clinic::{ClinicStatus, Entity as ClinicEntity, Model as Clinic},
    clinic_registration::{Model as Registration, RegistrationStatus},
    homework::Entity as HomeworkEntity,
    lesson::Entity as LessonEntity,
    student::{Entity as StudentEntity, Model as Student},
    student_homework::Model as StudentHomework,
};

use crate::error::{ServiceError, ServiceResult};

/// Completion percentage below which a homework counts as incomplete for
/// clinic eligibility.
pub const DEFAULT_COMPLETION_THRESHOLD: i32 = 90;

/// An incomplete homework backing a clinic recommendation.
#[derive(Debug, Clone, Serialize)]
pub struct HomeworkProgress {
    pub homework_id: i64,
    pub homework_title: String,
    pub question_count: i32,
    pub incorrect_count: Option<i32>,
    pub unsolved_count: Option<i32>,
    pub completion: Option<i32>,
    pub lesson_id: Option<i64>,
    pub lesson_date: Option<NaiveDate>,
}

/// Roster-wide clinic view: every student of the class with their
/// registration (if any) and the homework rows that make them eligible.
#[derive(Debug, Clone, Serialize)]
pub struct ClinicDetail {
    pub clinic: Clinic,
    pub students: Vec<StudentClinicStatus>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentClinicStatus {
    pub student_id: i64,
    pub student_name: String,
    pub registration: Option<Registration>,
    pub homeworks: Vec<HomeworkProgress>,
}

/// What a student sees: the next clinic, their own registration, and
/// whether their homework record says they should attend.
#[derive(Debug, Clone, Serialize)]
pub struct StudentClinicInfo {
    pub upcoming_clinic: Option<Clinic>,
    pub my_registration: Option<Registration>,
    pub should_attend: bool,
    pub incomplete_homeworks: Vec<HomeworkProgress>,
}

/// Creates the clinic for the next-or-same occurrence of the class's
/// configured weekday. Rejects when the class has no clinic default or a
/// clinic already exists on the resolved date.
pub async fn create_clinic_for_this_week(
    db: &DbConn,
    class_id: i64,
    today: NaiveDate,
) -> ServiceResult<Clinic> {
    let class = ClassEntity::find_by_id(class_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("class", class_id))?;

    let (Some(weekday), Some(time)) = (class.clinic_weekday, class.clinic_time) else {
        return Err(ServiceError::invalid(
            "Class has no clinic weekday/time configured",
        ));
    };

    let clinic_date = next_or_same_weekday(today, weekday.into());
    create_clinic(db, class_id, clinic_date, time).await
}

/// Explicit-date variant; same one-clinic-per-class-per-day guard.
pub async fn create_clinic(
    db: &DbConn,
    class_id: i64,
    clinic_date: NaiveDate,
    clinic_time: NaiveTime,
) -> ServiceResult<Clinic> {
    ClassEntity::find_by_id(class_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("class", class_id))?;

    if Clinic::find_by_class_and_date(db, class_id, clinic_date)
        .await?
        .is_some()
    {
        return Err(ServiceError::invalid(format!(
            "A clinic already exists for this class on {clinic_date}"
        )));
    }

    let clinic = Clinic::create(db, class_id, clinic_date, clinic_time).await?;
    log::info!("created clinic {} for class {class_id} on {clinic_date}", clinic.id);
    Ok(clinic)
}

pub async fn clinics_by_class(db: &DbConn, class_id: i64) -> ServiceResult<Vec<Clinic>> {
    Ok(Clinic::find_by_class(db, class_id).await?)
}

/// Nearest clinic dated today or later for the class.
pub async fn upcoming_clinic(
    db: &DbConn,
    class_id: i64,
    today: NaiveDate,
) -> ServiceResult<Option<Clinic>> {
    Ok(Clinic::find_upcoming(db, class_id, today).await?)
}

pub async fn clinic_detail(db: &DbConn, clinic_id: i64) -> ServiceResult<ClinicDetail> {
    let clinic = require_clinic(db, clinic_id).await?;

    let students = Student::find_by_class(db, clinic.class_id).await?;
    let registrations = Registration::find_by_clinic(db, clinic_id).await?;

    let mut entries = Vec::with_capacity(students.len());
    for student in students {
        let registration = registrations
            .iter()
            .find(|r| r.student_id == student.id)
            .cloned();
        let homeworks =
            incomplete_homeworks(db, student.id, DEFAULT_COMPLETION_THRESHOLD).await?;

        entries.push(StudentClinicStatus {
            student_id: student.id,
            student_name: student.name,
            registration,
            homeworks,
        });
    }

    Ok(ClinicDetail {
        clinic,
        students: entries,
    })
}

/// Registers a student for a clinic.
///
/// Rejected when the clinic is closed, already past, or the student holds
/// an active registration. A cancelled registration is reactivated in
/// place, keeping its row id.
pub async fn register(
    db: &DbConn,
    clinic_id: i64,
    student_id: i64,
    today: NaiveDate,
) -> ServiceResult<Registration> {
    let clinic = require_clinic(db, clinic_id).await?;
    StudentEntity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("student", student_id))?;

    if clinic.status != ClinicStatus::Open {
        return Err(ServiceError::invalid("Clinic registration is closed"));
    }

    if clinic.clinic_date < today {
        return Err(ServiceError::invalid(
            "Cannot register for a clinic that has already passed",
        ));
    }

    if let Some(existing) =
        Registration::find_by_clinic_and_student(db, clinic_id, student_id).await?
    {
        if existing.status == RegistrationStatus::Cancelled {
            return Ok(
                Registration::set_status(db, existing.id, RegistrationStatus::Registered).await?,
            );
        }
        return Err(ServiceError::invalid("Student is already registered"));
    }

    Ok(Registration::create(db, clinic_id, student_id).await?)
}

pub async fn cancel_registration(
    db: &DbConn,
    clinic_id: i64,
    student_id: i64,
) -> ServiceResult<Registration> {
    let registration = Registration::find_by_clinic_and_student(db, clinic_id, student_id)
        .await?
        .ok_or_else(|| ServiceError::not_found("registration", clinic_id))?;

    Ok(Registration::set_status(db, registration.id, RegistrationStatus::Cancelled).await?)
}

/// Teacher-driven status update; also covers attendance marking.
pub async fn update_attendance(
    db: &DbConn,
    registration_id: i64,
    status: RegistrationStatus,
) -> ServiceResult<Registration> {
    Registration::set_status(db, registration_id, status)
        .await
        .map_err(|e| match e {
            sea_orm::DbErr::RecordNotFound(_) => {
                ServiceError::not_found("registration", registration_id)
            }
            other => ServiceError::Db(other),
        })
}

/// Eligibility view for a student: they should attend the next clinic if
/// at least one homework has a concrete completion below `threshold`.
/// Ungraded rows never count as incomplete.
pub async fn student_clinic_info(
    db: &DbConn,
    student_id: i64,
    today: NaiveDate,
    threshold: i32,
) -> ServiceResult<StudentClinicInfo> {
    let student = StudentEntity::find_by_id(student_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("student", student_id))?;

    let upcoming = upcoming_clinic(db, student.class_id, today).await?;

    let Some(clinic) = upcoming else {
        return Ok(StudentClinicInfo {
            upcoming_clinic: None,
            my_registration: None,
            should_attend: false,
            incomplete_homeworks: Vec::new(),
        });
    };

    let my_registration =
        Registration::find_by_clinic_and_student(db, clinic.id, student_id).await?;
    let incomplete = incomplete_homeworks(db, student_id, threshold).await?;

    Ok(StudentClinicInfo {
        should_attend: !incomplete.is_empty(),
        upcoming_clinic: Some(clinic),
        my_registration,
        incomplete_homeworks: incomplete,
    })
}

/// One-way `open -> closed` transition.
pub async fn close_clinic(db: &DbConn, clinic_id: i64) -> ServiceResult<Clinic> {
    require_clinic(db, clinic_id).await?;
    Ok(Clinic::set_status(db, clinic_id, ClinicStatus::Closed).await?)
}

/// Deletion is refused while any registration rows exist, whatever their
/// status.
pub async fn delete_clinic(db: &DbConn, clinic_id: i64) -> ServiceResult<()> {
    require_clinic(db, clinic_id).await?;

    if Registration::count_by_clinic(db, clinic_id).await? > 0 {
        return Err(ServiceError::invalid(
            "Cannot delete a clinic with registrations",
        ));
    }

    Clinic::delete(db, clinic_id).await?;
    Ok(())
}

/// Homework rows of a student whose concrete completion is below
/// `threshold`.
async fn incomplete_homeworks(
    db: &DbConn,
    student_id: i64,
    threshold: i32,
) -> ServiceResult<Vec<HomeworkProgress>> {
    let mut progress = Vec::new();

    for row in StudentHomework::find_by_student(db, student_id).await? {
        let Some(homework) = HomeworkEntity::find_by_id(row.homework_id).one(db).await? else {
            continue;
        };

        let completion = row.completion(homework.question_count);
        let Some(completion) = completion else {
            continue;
        };
        if completion >= threshold {
            continue;
        }

        let lesson_date = match homework.lesson_id {
            Some(lesson_id) => LessonEntity::find_by_id(lesson_id)
                .one(db)
                .await?
                .map(|l| l.lesson_date),
            None => None,
        };

        progress.push(HomeworkProgress {
            homework_id: homework.id,
            homework_title: homework.title,
            question_count: homework.question_count,
            incorrect_count: row.incorrect_count,
            unsolved_count: row.unsolved_count,
            completion: Some(completion),
            lesson_id: homework.lesson_id,
            lesson_date,
        });
    }

    Ok(progress)
}

fn next_or_same_weekday(today: NaiveDate, target: chrono::Weekday) -> NaiveDate {
    let ahead = (target.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    today
        .checked_add_days(Days::new(ahead as u64))
        .expect("date overflow")
}

async fn require_clinic(db: &DbConn, clinic_id: i64) -> ServiceResult<Clinic> {
    ClinicEntity::find_by_id(clinic_id)
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::not_found("clinic", clinic_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::models::{
        academy::Model as Academy,
        academy_class::{Model as Class, Weekday},
        homework::Model as Homework,
        student::Model as Student,
    };
    use db::test_utils::setup_test_db;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ten_am() -> NaiveTime {
        NaiveTime::from_hms_opt(10, 0, 0).unwrap()
    }

    async fn fixture(db: &DbConn) -> (Class, Student) {
        let academy = Academy::create(db, "Gangnam Math").await.unwrap();
        let class = Class::create(
            db,
            academy.id,
            "Year 1 Basics",
            Some(Weekday::Saturday),
            Some(ten_am()),
        )
        .await
        .unwrap();
        let student = Student::create(db, class.id, "Minjun Kim", "10", "Seoul High", "1111")
            .await
            .unwrap();
        (class, student)
    }

    #[tokio::test]
    async fn this_week_resolves_next_or_same_weekday() {
        let db = setup_test_db().await;
        let (class, _student) = fixture(&db).await;

        // 2026-03-02 is a Monday; the configured Saturday is the 7th.
        let clinic = create_clinic_for_this_week(&db, class.id, date(2026, 3, 2))
            .await
            .unwrap();
        assert_eq!(clinic.clinic_date, date(2026, 3, 7));

        // Creating again for the same week hits the duplicate guard.
        let err = create_clinic_for_this_week(&db, class.id, date(2026, 3, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }

    #[tokio::test]
    async fn this_week_on_the_configured_day_is_today() {
        let db = setup_test_db().await;
        let (class, _student) = fixture(&db).await;

        let saturday = date(2026, 3, 7);
        let clinic = create_clinic_for_this_week(&db, class.id, saturday)
            .await
            .unwrap();
        assert_eq!(clinic.clinic_date, saturday);
    }

    #[tokio::test]
    async fn unconfigured_class_cannot_schedule_this_week() {
        let db = setup_test_db().await;
        let academy = Academy::create(&db, "Daechi Math").await.unwrap();
        let class = Class::create(&db, academy.id, "No clinic slot", None, None)
            .await
            .unwrap();

        let err = create_clinic_for_this_week(&db, class.id, date(2026, 3, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }

    #[tokio::test]
    async fn duplicate_registration_rejected_and_cancel_reuses_row() {
        let db = setup_test_db().await;
        let (class, student) = fixture(&db).await;
        let today = date(2026, 3, 2);

        let clinic = create_clinic(&db, class.id, date(2026, 3, 7), ten_am())
            .await
            .unwrap();

        let first = register(&db, clinic.id, student.id, today).await.unwrap();
        assert_eq!(first.status, RegistrationStatus::Registered);

        let err = register(&db, clinic.id, student.id, today).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));

        cancel_registration(&db, clinic.id, student.id).await.unwrap();

        let again = register(&db, clinic.id, student.id, today).await.unwrap();
        assert_eq!(again.id, first.id);
        assert_eq!(again.status, RegistrationStatus::Registered);
    }

    #[tokio::test]
    async fn closed_or_past_clinics_reject_registration() {
        let db = setup_test_db().await;
        let (class, student) = fixture(&db).await;

        let past = create_clinic(&db, class.id, date(2026, 2, 28), ten_am())
            .await
            .unwrap();
        let err = register(&db, past.id, student.id, date(2026, 3, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));

        let closed = create_clinic(&db, class.id, date(2026, 3, 7), ten_am())
            .await
            .unwrap();
        close_clinic(&db, closed.id).await.unwrap();
        let err = register(&db, closed.id, student.id, date(2026, 3, 2))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }

    #[tokio::test]
    async fn eligibility_uses_concrete_sub_threshold_completions() {
        let db = setup_test_db().await;
        let (class, student) = fixture(&db).await;
        let today = date(2026, 3, 2);

        create_clinic(&db, class.id, date(2026, 3, 7), ten_am())
            .await
            .unwrap();

        let graded = Homework::create(&db, class.academy_id, class.id, "Graded", 20, None, None)
            .await
            .unwrap();
        let ungraded =
            Homework::create(&db, class.academy_id, class.id, "Ungraded", 20, None, None)
                .await
                .unwrap();

        // Ungraded rows never count as incomplete.
        StudentHomework::assign(&db, student.id, ungraded.id)
            .await
            .unwrap();
        let info = student_clinic_info(&db, student.id, today, DEFAULT_COMPLETION_THRESHOLD)
            .await
            .unwrap();
        assert!(!info.should_attend);

        // completion 85 < 90 makes the student eligible.
        let row = StudentHomework::assign(&db, student.id, graded.id)
            .await
            .unwrap();
        StudentHomework::set_counts(&db, row.id, Some(3), Some(0))
            .await
            .unwrap();

        let info = student_clinic_info(&db, student.id, today, DEFAULT_COMPLETION_THRESHOLD)
            .await
            .unwrap();
        assert!(info.should_attend);
        assert_eq!(info.incomplete_homeworks.len(), 1);
        assert_eq!(info.incomplete_homeworks[0].completion, Some(85));

        // At or above the threshold the recommendation goes away.
        StudentHomework::set_counts(&db, row.id, Some(2), Some(0))
            .await
            .unwrap();
        let info = student_clinic_info(&db, student.id, today, DEFAULT_COMPLETION_THRESHOLD)
            .await
            .unwrap();
        assert!(!info.should_attend);
    }

    #[tokio::test]
    async fn delete_is_guarded_by_registrations() {
        let db = setup_test_db().await;
        let (class, student) = fixture(&db).await;

        let clinic = create_clinic(&db, class.id, date(2026, 3, 7), ten_am())
            .await
            .unwrap();
        register(&db, clinic.id, student.id, date(2026, 3, 2))
            .await
            .unwrap();

        // Even a cancelled registration blocks deletion.
        cancel_registration(&db, clinic.id, student.id).await.unwrap();
        let err = delete_clinic(&db, clinic.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidState(_)));
    }
}
