use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use serde::Serialize;

use crate::error::DomainError;

/// Represents a faculty member in the `faculty` table.
///
/// Assigned courses live in the `faculty_courses` join table; see
/// [`super::faculty_course`].
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "faculty")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::faculty_course::Entity")]
    FacultyCourse,
}

/// Courses reached through the `faculty_courses` join table.
impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::faculty_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::faculty_course::Relation::Faculty.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a faculty record with no assigned courses.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        email: &str,
        department: &str,
    ) -> Result<Model, DomainError> {
        let now = Utc::now();
        let member = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            department: Set(department.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        member.insert(db).await.map_err(|e| {
            if e.to_string()
                .contains("UNIQUE constraint failed: faculty.email")
            {
                DomainError::EmailTaken
            } else {
                DomainError::Db(e)
            }
        })
    }

    /// Retrieves a faculty member by its ID.
    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Retrieves all faculty together with their assigned courses.
    pub async fn get_all_with_courses(
        db: &DatabaseConnection,
    ) -> Result<Vec<(Model, Vec<super::course::Model>)>, DbErr> {
        Entity::find()
            .find_with_related(super::course::Entity)
            .all(db)
            .await
    }
}
