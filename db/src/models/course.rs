use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, Condition, DatabaseConnection, QueryFilter, Set};
use serde::Serialize;

use crate::error::DomainError;

/// Represents a course in the catalogue.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Credit count, always positive.
    pub credits: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourse,

    #[sea_orm(has_many = "super::faculty_course::Entity")]
    FacultyCourse,
}

/// Students reached through the `student_courses` join table.
impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        super::student_course::Relation::Student.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::student_course::Relation::Course.def().rev())
    }
}

/// Faculty reached through the `faculty_courses` join table.
impl Related<super::faculty::Entity> for Entity {
    fn to() -> RelationDef {
        super::faculty_course::Relation::Faculty.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::faculty_course::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Creates a new course record.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        description: &str,
        credits: i32,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let course = ActiveModel {
            name: Set(name.to_owned()),
            description: Set(description.to_owned()),
            credits: Set(credits),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        course.insert(db).await
    }

    /// Retrieves a course by its ID.
    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// Retrieves the whole catalogue.
    pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<Model>, DbErr> {
        Entity::find().all(db).await
    }

    /// Edits a course by ID, bumping `updated_at`.
    pub async fn edit(
        db: &DatabaseConnection,
        id: i64,
        name: &str,
        description: &str,
        credits: i32,
    ) -> Result<Model, DomainError> {
        let course = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(DomainError::CourseNotFound)?;

        let mut active: ActiveModel = course.into();
        active.name = Set(name.to_owned());
        active.description = Set(description.to_owned());
        active.credits = Set(credits);
        active.updated_at = Set(Utc::now());

        active.update(db).await.map_err(DomainError::Db)
    }

    /// Deletes a course by ID. Join-table memberships go with it (cascade).
    pub async fn delete_by_id(db: &DatabaseConnection, id: i64) -> Result<(), DomainError> {
        let course = Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or(DomainError::CourseNotFound)?;

        Entity::delete_by_id(course.id).exec(db).await?;
        Ok(())
    }

    /// Searches the catalogue by (partial, case-insensitive) name and/or
    /// exact credit count. No criteria returns everything.
    pub async fn search(
        db: &DatabaseConnection,
        name: Option<&str>,
        credits: Option<i32>,
    ) -> Result<Vec<Model>, DbErr> {
        let mut condition = Condition::all();
        if let Some(name) = name {
            condition = condition.add(Column::Name.contains(name));
        }
        if let Some(credits) = credits {
            condition = condition.add(Column::Credits.eq(credits));
        }

        Entity::find().filter(condition).all(db).await
    }
}
