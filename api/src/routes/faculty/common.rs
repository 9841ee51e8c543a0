//! Shared request/response types for the `/faculty` route group.

use db::models::{course, faculty::Model as Faculty};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::courses::common::CourseResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct FacultyRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
}

/// A faculty member with their assigned courses embedded.
#[derive(Debug, Serialize, Default)]
pub struct FacultyResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub department: String,
    pub courses: Vec<CourseResponse>,
}

impl From<(Faculty, Vec<course::Model>)> for FacultyResponse {
    fn from((member, courses): (Faculty, Vec<course::Model>)) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            department: member.department,
            courses: courses.into_iter().map(CourseResponse::from).collect(),
        }
    }
}

impl From<Faculty> for FacultyResponse {
    fn from(member: Faculty) -> Self {
        Self::from((member, Vec::new()))
    }
}
