use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, ModelTrait, Set};

use crate::error::DomainError;
use crate::models::{course, student};

/// Student↔Course membership, one row per enrollment.
///
/// The composite primary key makes enrollment an atomic add-if-absent: two
/// racing enrollments for the same pair cannot both insert, so a duplicate
/// membership is never observable.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "student_courses")]
pub struct Model {
    /// Student ID (foreign key to `students`).
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: i64,

    /// Course ID (foreign key to `courses`).
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i64,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id"
    )]
    Student,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Enrolls a student in a course.
    ///
    /// Lookup order is student first, then course; every enroll route goes
    /// through here, so the order is the same no matter which side
    /// initiated the request. A membership that already exists (checked, or
    /// raced in between) fails with [`DomainError::AlreadyEnrolled`] and
    /// leaves the table untouched.
    pub async fn enroll(
        db: &DatabaseConnection,
        student_id: i64,
        course_id: i64,
    ) -> Result<(), DomainError> {
        student::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .ok_or(DomainError::StudentNotFound)?;

        course::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(DomainError::CourseNotFound)?;

        if Self::is_enrolled(db, student_id, course_id).await? {
            return Err(DomainError::AlreadyEnrolled);
        }

        let membership = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            created_at: Set(Utc::now()),
        };

        match membership.insert(db).await {
            Ok(_) => Ok(()),
            // Composite-PK violation: a concurrent enrollment won the race.
            Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
                tracing::warn!(student_id, course_id, "concurrent enrollment lost the insert race");
                Err(DomainError::AlreadyEnrolled)
            }
            Err(e) => Err(DomainError::Db(e)),
        }
    }

    /// True when the membership row exists.
    pub async fn is_enrolled(
        db: &DatabaseConnection,
        student_id: i64,
        course_id: i64,
    ) -> Result<bool, DbErr> {
        Ok(Entity::find_by_id((student_id, course_id))
            .one(db)
            .await?
            .is_some())
    }

    /// Returns all students enrolled in the given course.
    ///
    /// Fails with [`DomainError::CourseNotFound`] when the course is absent,
    /// rather than reporting an empty roster.
    pub async fn students_for_course(
        db: &DatabaseConnection,
        course_id: i64,
    ) -> Result<Vec<student::Model>, DomainError> {
        let course = course::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(DomainError::CourseNotFound)?;

        course
            .find_related(student::Entity)
            .all(db)
            .await
            .map_err(DomainError::Db)
    }

    /// Returns the courses the given student is enrolled in.
    pub async fn courses_for_student(
        db: &DatabaseConnection,
        student_id: i64,
    ) -> Result<Vec<course::Model>, DomainError> {
        let student = student::Entity::find_by_id(student_id)
            .one(db)
            .await?
            .ok_or(DomainError::StudentNotFound)?;

        student
            .find_related(course::Entity)
            .all(db)
            .await
            .map_err(DomainError::Db)
    }
}

#[cfg(test)]
mod tests {
    use super::Model as Enrollment;
    use crate::error::DomainError;
    use crate::models::{course::Model as Course, student::Model as Student};
    use crate::test_utils::setup_test_db;
    use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};

    async fn seed(db: &DatabaseConnection) -> (Student, Course) {
        let student = Student::create(db, "Ann", "ann@x.edu", None).await.unwrap();
        let course = Course::create(db, "Databases", "Relational systems", 4)
            .await
            .unwrap();
        (student, course)
    }

    #[tokio::test]
    async fn test_enroll_then_duplicate_conflicts() {
        let db = setup_test_db().await;
        let (student, course) = seed(&db).await;

        Enrollment::enroll(&db, student.id, course.id).await.unwrap();

        let second = Enrollment::enroll(&db, student.id, course.id).await;
        assert!(matches!(second, Err(DomainError::AlreadyEnrolled)));

        // Exactly one membership row for the pair.
        let rows = super::Entity::find().count(&db).await.unwrap();
        assert_eq!(rows, 1);
    }

    #[tokio::test]
    async fn test_enroll_missing_student_reported_first() {
        let db = setup_test_db().await;

        // Neither id exists; the student lookup runs first, so that is the
        // error callers see.
        let neither = Enrollment::enroll(&db, 101, 202).await;
        assert!(matches!(neither, Err(DomainError::StudentNotFound)));

        let (student, _) = seed(&db).await;
        let no_course = Enrollment::enroll(&db, student.id, 202).await;
        assert!(matches!(no_course, Err(DomainError::CourseNotFound)));
    }

    #[tokio::test]
    async fn test_students_for_course() {
        let db = setup_test_db().await;
        let (student, course) = seed(&db).await;
        let other = Student::create(&db, "Ben", "ben@x.edu", None).await.unwrap();

        Enrollment::enroll(&db, student.id, course.id).await.unwrap();
        Enrollment::enroll(&db, other.id, course.id).await.unwrap();

        let roster = Enrollment::students_for_course(&db, course.id)
            .await
            .unwrap();
        let mut names: Vec<_> = roster.iter().map(|s| s.name.as_str()).collect();
        names.sort();
        assert_eq!(names, ["Ann", "Ben"]);

        let missing = Enrollment::students_for_course(&db, 9999).await;
        assert!(matches!(missing, Err(DomainError::CourseNotFound)));
    }

    #[tokio::test]
    async fn test_courses_for_student() {
        let db = setup_test_db().await;
        let (student, course) = seed(&db).await;
        let algebra = Course::create(&db, "Linear Algebra", "Matrices", 4)
            .await
            .unwrap();

        Enrollment::enroll(&db, student.id, course.id).await.unwrap();
        Enrollment::enroll(&db, student.id, algebra.id).await.unwrap();

        let courses = Enrollment::courses_for_student(&db, student.id)
            .await
            .unwrap();
        assert_eq!(courses.len(), 2);
    }

    #[tokio::test]
    async fn test_course_delete_prunes_memberships() {
        let db = setup_test_db().await;
        let (student, course) = seed(&db).await;

        Enrollment::enroll(&db, student.id, course.id).await.unwrap();
        Course::delete_by_id(&db, course.id).await.unwrap();

        let courses = Enrollment::courses_for_student(&db, student.id)
            .await
            .unwrap();
        assert!(courses.is_empty());
    }
}
