use crate::seed::Seeder;
use db::models::course::Model;
use sea_orm::DatabaseConnection;

pub struct CourseSeeder;

const CATALOGUE: &[(&str, &str, i32)] = &[
    ("Intro to Programming", "Variables, control flow, and first programs", 3),
    ("Data Structures", "Lists, trees, maps, and their trade-offs", 4),
    ("Databases", "Relational modelling and query languages", 4),
    ("Linear Algebra", "Vectors, matrices, and transformations", 4),
    ("Technical Writing", "Clear prose for engineers", 2),
];

#[async_trait::async_trait]
impl Seeder for CourseSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        for (name, description, credits) in CATALOGUE {
            let _ = Model::create(db, name, description, *credits).await;
        }
    }
}
