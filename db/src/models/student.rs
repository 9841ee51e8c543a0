use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Serialize;

use crate::error::DomainError;

/// Represents a student profile in the `students` table.
///
/// Course membership lives in the `student_courses` join table; see
/// [`super::student_course`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Backing account, set when the profile was created through
    /// registration. Admin-created profiles have none.
    pub user_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourse,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

/// Courses reached through the `student_courses` join table.
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_course::Relation::Student.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a student profile with an empty course set.
    ///
    /// Fails with [`DomainError::EmailTaken`] when a profile with this email
    /// already exists.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        email: &str,
        user_id: Option<i64>,
    ) -> Result<Model, DomainError> {
        let now = Utc::now();
        let student = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            user_id: Set(user_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        student.insert(db).await.map_err(|e| {
            if e.to_string()
                .contains("UNIQUE constraint failed: students.email")
            {
                DomainError::EmailTaken
            } else {
                DomainError::Db(e)
            }
        })
    }

    /// Retrieves a student by its ID.
    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Retrieves all students together with their enrolled courses.
    pub async fn get_all_with_courses(
        db: &DatabaseConnection,
    ) -> Result<Vec<(Model, Vec<super::course::Model>)>, DbErr> {
        Entity::find()
            .find_with_related(super::course::Entity)
            .all(db)
            .await
    }
}
