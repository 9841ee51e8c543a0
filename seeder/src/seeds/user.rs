use crate::seed::Seeder;
use db::models::user::{Model, Role};
use fake::{Fake, faker::internet::en::SafeEmail, faker::name::en::Name};
use sea_orm::DatabaseConnection;

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Fixed accounts, one per role
        let _ = Model::create(db, "Site Admin", "admin@example.com", "password123", Role::Admin).await;
        let _ = Model::create(db, "Fred Faculty", "faculty@example.com", "password123", Role::Faculty).await;
        let _ = Model::create(db, "Sally Student", "student@example.com", "password123", Role::Student).await;

        // Random student accounts
        for _ in 0..10 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            let _ = Model::create(db, &name, &email, "password123", Role::Student).await;
        }
    }
}
