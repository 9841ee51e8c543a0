use crate::seed::Seeder;
use db::models::student::Model;
use db::models::user::{self, Role};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

pub struct StudentSeeder;

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        // Mirror every student account into a linked profile, the same shape
        // the register flow produces.
        let accounts = user::Entity::find()
            .filter(user::Column::Role.eq(Role::Student))
            .all(db)
            .await
            .expect("Failed to fetch student accounts");

        for account in accounts {
            let _ = Model::create(db, &account.name, &account.email, Some(account.id)).await;
        }
    }
}
