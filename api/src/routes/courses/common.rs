//! Shared request/response types for the `/courses` route group.

use chrono::{DateTime, Utc};
use db::models::course::Model as Course;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CourseRequest {
    #[validate(length(min = 3, message = "Course name must be at least 3 characters"))]
    pub name: String,

    #[validate(length(min = 5, message = "Description must be at least 5 characters"))]
    pub description: String,

    #[validate(range(min = 1, message = "Credits must be a positive integer"))]
    pub credits: i32,
}

#[derive(Debug, Serialize, Default)]
pub struct CourseResponse {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub credits: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            name: course.name,
            description: course.description,
            credits: course.credits,
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}
