use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202507140001_create_users::Migration),
            Box::new(migrations::m202507140002_create_courses::Migration),
            Box::new(migrations::m202507140003_create_students::Migration),
            Box::new(migrations::m202507140004_create_faculty::Migration),
            Box::new(migrations::m202507140005_create_student_courses::Migration),
            Box::new(migrations::m202507140006_create_faculty_courses::Migration),
        ]
    }
}
