use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, ModelTrait, Set};

use crate::error::DomainError;
use crate::models::{course, faculty};

/// Faculty↔Course membership, one row per teaching assignment.
///
/// Same atomic add-if-absent shape as [`super::student_course`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculty_courses")]
pub struct Model {
    /// Faculty ID (foreign key to `faculty`).
    #[sea_orm(primary_key, auto_increment = false)]
    pub faculty_id: i64,

    /// Course ID (foreign key to `courses`).
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_id: i64,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faculty::Entity",
        from = "Column::FacultyId",
        to = "super::faculty::Column::Id"
    )]
    Faculty,

    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id"
    )]
    Course,
}

impl Related<super::faculty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculty.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Assigns a course to a faculty member.
    ///
    /// Faculty is looked up first, then the course, mirroring the student
    /// enroll order. An existing assignment fails with
    /// [`DomainError::AlreadyAssigned`], no mutation.
    pub async fn assign(
        db: &DatabaseConnection,
        faculty_id: i64,
        course_id: i64,
    ) -> Result<(), DomainError> {
        faculty::Entity::find_by_id(faculty_id)
            .one(db)
            .await?
            .ok_or(DomainError::FacultyNotFound)?;

        course::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or(DomainError::CourseNotFound)?;

        if Self::is_assigned(db, faculty_id, course_id).await? {
            return Err(DomainError::AlreadyAssigned);
        }

        let assignment = ActiveModel {
            faculty_id: Set(faculty_id),
            course_id: Set(course_id),
            created_at: Set(Utc::now()),
        };

        match assignment.insert(db).await {
            Ok(_) => Ok(()),
            Err(e) if e.to_string().contains("UNIQUE constraint failed") => {
                tracing::warn!(faculty_id, course_id, "concurrent assignment lost the insert race");
                Err(DomainError::AlreadyAssigned)
            }
            Err(e) => Err(DomainError::Db(e)),
        }
    }

    /// True when the assignment row exists.
    pub async fn is_assigned(
        db: &DatabaseConnection,
        faculty_id: i64,
        course_id: i64,
    ) -> Result<bool, DbErr> {
        Ok(Entity::find_by_id((faculty_id, course_id))
            .one(db)
            .await?
            .is_some())
    }

    /// Returns the courses assigned to the given faculty member.
    pub async fn courses_for_faculty(
        db: &DatabaseConnection,
        faculty_id: i64,
    ) -> Result<Vec<course::Model>, DomainError> {
        let member = faculty::Entity::find_by_id(faculty_id)
            .one(db)
            .await?
            .ok_or(DomainError::FacultyNotFound)?;

        member
            .find_related(course::Entity)
            .all(db)
            .await
            .map_err(DomainError::Db)
    }
}
