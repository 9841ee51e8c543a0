//! Domain error taxonomy shared by the models and the route layer.

use sea_orm::DbErr;
use thiserror::Error;

/// Errors produced by the domain operations in [`crate::models`].
///
/// The route layer maps these onto HTTP statuses: the `*NotFound` variants
/// become 404, the conflict and credential variants 400, everything else 500.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Student not found")]
    StudentNotFound,

    #[error("Faculty not found")]
    FacultyNotFound,

    #[error("Course not found")]
    CourseNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Already enrolled in this course")]
    AlreadyEnrolled,

    #[error("Course already assigned to this faculty")]
    AlreadyAssigned,

    #[error("User already exists")]
    EmailTaken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password hashing failed: {0}")]
    Password(String),

    #[error(transparent)]
    Db(#[from] DbErr),
}

impl DomainError {
    /// True for the variants that mean "the referenced entity is absent".
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::StudentNotFound
                | DomainError::FacultyNotFound
                | DomainError::CourseNotFound
                | DomainError::UserNotFound
        )
    }
}
