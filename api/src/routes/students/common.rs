//! Shared request/response types for the `/students` route group.

use db::models::{course, student::Model as Student};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::courses::common::CourseResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct StudentRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,
}

/// A student without its course list, used in rosters.
#[derive(Debug, Serialize, Default)]
pub struct StudentSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<Student> for StudentSummary {
    fn from(student: Student) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
        }
    }
}

/// A student with its enrolled courses embedded.
#[derive(Debug, Serialize, Default)]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub courses: Vec<CourseResponse>,
}

impl From<(Student, Vec<course::Model>)> for StudentResponse {
    fn from((student, courses): (Student, Vec<course::Model>)) -> Self {
        Self {
            id: student.id,
            name: student.name,
            email: student.email,
            courses: courses.into_iter().map(CourseResponse::from).collect(),
        }
    }
}
