use crate::seed::Seeder;
use db::models::faculty::Model;
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use sea_orm::DatabaseConnection;

pub struct FacultySeeder;

const DEPARTMENTS: &[&str] = &["Computer Science", "Mathematics", "Physics", "English"];

#[async_trait::async_trait]
impl Seeder for FacultySeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let _ = Model::create(db, "Fred Faculty", "faculty@example.com", "Computer Science").await;

        for _ in 0..5 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let department = DEPARTMENTS[fastrand::usize(..DEPARTMENTS.len())];
            let _ = Model::create(db, &name, &email, department).await;
        }
    }
}
