use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, QueryFilter, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::error::DomainError;

/// Represents an account in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key ID (auto-incremented).
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unique email address, doubles as the login identifier.
    pub email: String,
    /// Securely hashed password string. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Access role for the whole site.
    pub role: Role,
    /// Timestamp when the user was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the user was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Site-wide access role, backed by a `user_role_type` enum in the database.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,

    #[sea_orm(string_value = "faculty")]
    Faculty,

    #[default]
    #[sea_orm(string_value = "student")]
    Student,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Student profiles linked to this account.
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Hashes a plaintext password with Argon2 and a fresh OS-random salt.
    pub fn hash_password(password: &str) -> Result<String, DomainError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| DomainError::Password(e.to_string()))
    }

    /// Creates a new user with a hashed password.
    ///
    /// Fails with [`DomainError::EmailTaken`] when the email is already
    /// registered; the unique index backs the pre-check up under races.
    pub async fn create(
        db: &DatabaseConnection,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Model, DomainError> {
        if Self::find_by_email(db, email).await?.is_some() {
            return Err(DomainError::EmailTaken);
        }

        let now = Utc::now();
        let user = ActiveModel {
            name: Set(name.to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(Self::hash_password(password)?),
            role: Set(role),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(db).await.map_err(map_unique_email)
    }

    /// Looks a user up by email address.
    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email))
            .one(db)
            .await
    }

    /// Checks a login attempt against the stored hash.
    ///
    /// Unknown email and wrong password produce the identical
    /// [`DomainError::InvalidCredentials`], so callers cannot tell which
    /// emails are registered.
    pub async fn verify_credentials(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
    ) -> Result<Model, DomainError> {
        let user = Self::find_by_email(db, email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        let parsed = PasswordHash::new(&user.password_hash)
            .map_err(|_| DomainError::InvalidCredentials)?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .map_err(|_| DomainError::InvalidCredentials)?;

        Ok(user)
    }

    /// Applies a partial profile edit (name and/or email), bumping
    /// `updated_at`. Absent fields keep their current value.
    pub async fn update_profile(
        db: &DatabaseConnection,
        user_id: i64,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<Model, DomainError> {
        let user = Entity::find_by_id(user_id)
            .one(db)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let mut active: ActiveModel = user.into();
        if let Some(name) = name {
            active.name = Set(name.to_owned());
        }
        if let Some(email) = email {
            active.email = Set(email.to_owned());
        }
        active.updated_at = Set(Utc::now());

        active.update(db).await.map_err(map_unique_email)
    }
}

fn map_unique_email(e: DbErr) -> DomainError {
    if e.to_string().contains("UNIQUE constraint failed: users.email") {
        DomainError::EmailTaken
    } else {
        DomainError::Db(e)
    }
}

#[cfg(test)]
mod tests {
    use super::{Model as UserModel, Role};
    use crate::error::DomainError;
    use crate::test_utils::setup_test_db;

    #[tokio::test]
    async fn test_create_hashes_password() {
        let db = setup_test_db().await;

        let user = UserModel::create(&db, "Ann", "ann@x.edu", "pw12345678", Role::Student)
            .await
            .unwrap();

        assert_eq!(user.email, "ann@x.edu");
        assert_eq!(user.role, Role::Student);
        assert_ne!(user.password_hash, "pw12345678");
        assert!(user.password_hash.starts_with("$argon2"));
    }

    #[tokio::test]
    async fn test_create_duplicate_email_conflicts() {
        let db = setup_test_db().await;

        UserModel::create(&db, "Ann", "ann@x.edu", "pw12345678", Role::Student)
            .await
            .unwrap();

        let second =
            UserModel::create(&db, "Other Ann", "ann@x.edu", "different", Role::Faculty).await;
        assert!(matches!(second, Err(DomainError::EmailTaken)));
    }

    #[tokio::test]
    async fn test_verify_credentials_roundtrip() {
        let db = setup_test_db().await;

        let created = UserModel::create(&db, "Ann", "ann@x.edu", "pw12345678", Role::Admin)
            .await
            .unwrap();

        let verified = UserModel::verify_credentials(&db, "ann@x.edu", "pw12345678")
            .await
            .unwrap();
        assert_eq!(verified.id, created.id);
        assert_eq!(verified.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_invalid_credentials_are_uniform() {
        let db = setup_test_db().await;

        UserModel::create(&db, "Ann", "ann@x.edu", "pw12345678", Role::Student)
            .await
            .unwrap();

        // Wrong password and unknown email must be indistinguishable.
        let wrong_password = UserModel::verify_credentials(&db, "ann@x.edu", "nope")
            .await
            .unwrap_err();
        let unknown_email = UserModel::verify_credentials(&db, "ghost@x.edu", "pw12345678")
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, DomainError::InvalidCredentials));
        assert!(matches!(unknown_email, DomainError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[tokio::test]
    async fn test_update_profile_partial() {
        let db = setup_test_db().await;

        let user = UserModel::create(&db, "Ann", "ann@x.edu", "pw12345678", Role::Student)
            .await
            .unwrap();

        let updated = UserModel::update_profile(&db, user.id, Some("Ann B."), None)
            .await
            .unwrap();
        assert_eq!(updated.name, "Ann B.");
        assert_eq!(updated.email, "ann@x.edu");

        let missing = UserModel::update_profile(&db, 9999, Some("Nobody"), None).await;
        assert!(matches!(missing, Err(DomainError::UserNotFound)));
    }
}
