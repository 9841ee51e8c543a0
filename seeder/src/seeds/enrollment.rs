use crate::seed::Seeder;
use db::models::{course, faculty, faculty_course, student, student_course};
use sea_orm::{DatabaseConnection, EntityTrait};

pub struct EnrollmentSeeder;

#[async_trait::async_trait]
impl Seeder for EnrollmentSeeder {
    async fn seed(&self, db: &DatabaseConnection) {
        let students = student::Entity::find()
            .all(db)
            .await
            .expect("Failed to fetch students");
        let members = faculty::Entity::find()
            .all(db)
            .await
            .expect("Failed to fetch faculty");
        let courses = course::Entity::find()
            .all(db)
            .await
            .expect("Failed to fetch courses");

        if courses.is_empty() {
            return;
        }

        // Spread students over the catalogue, two courses each.
        for (i, s) in students.iter().enumerate() {
            for offset in 0..2 {
                let c = &courses[(i + offset) % courses.len()];
                let _ = student_course::Model::enroll(db, s.id, c.id).await;
            }
        }

        // One course per faculty member, round-robin.
        for (i, f) in members.iter().enumerate() {
            let c = &courses[i % courses.len()];
            let _ = faculty_course::Model::assign(db, f.id, c.id).await;
        }
    }
}
