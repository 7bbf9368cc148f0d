//! PostgreSQL implementation of the UserRepository trait.
//!
//! Accounts span three tables (users, user_profiles, health_ids); the
//! multi-row mutations run inside a transaction so the store never
//! holds a partial account. Email uniqueness is arbitrated by the
//! unique index on `users.email`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use healthid_core::domain::entities::user::{NewAccount, User};
use healthid_core::errors::{AuthError, DomainError};
use healthid_core::repositories::UserRepository;

/// SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("Failed to get id: {e}")))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {e}")))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database(format!("Failed to get password_hash: {e}")))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| DomainError::Database(format!("Failed to get phone_number: {e}")))?,
            health_id: row
                .try_get("health_id")
                .map_err(|e| DomainError::Database(format!("Failed to get health_id: {e}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {e}")))?,
        })
    }

    /// Translate a store uniqueness violation into the domain conflict
    fn map_register_error(e: sqlx::Error) -> DomainError {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return AuthError::EmailAlreadyRegistered.into();
            }
        }
        DomainError::Database(format!("Failed to register account: {e}"))
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT u.id, u.email, u.password_hash, u.phone_number,
                   h.health_id, u.created_at
            FROM users u
            JOIN health_ids h ON h.user_id = u.id
            WHERE u.email = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT u.id, u.email, u.password_hash, u.phone_number,
                   h.health_id, u.created_at
            FROM users u
            JOIN health_ids h ON h.user_id = u.id
            WHERE u.id = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn register(&self, account: NewAccount) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to begin transaction: {e}")))?;

        let created_at: DateTime<Utc> = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, phone_number, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(account.id)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(&account.phone_number)
        .bind(created_at)
        .execute(&mut *tx)
        .await
        .map_err(Self::map_register_error)?;

        sqlx::query(
            r#"
            INSERT INTO user_profiles (user_id, first_name, last_name, gender)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.id)
        .bind(&account.profile.first_name)
        .bind(&account.profile.last_name)
        .bind(&account.profile.gender)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to create profile: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO health_ids (user_id, health_id, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(account.id)
        .bind(&account.health_id)
        .bind(created_at)
        .execute(&mut *tx)
        .await
        .map_err(Self::map_register_error)?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to commit registration: {e}")))?;

        Ok(User {
            id: account.id,
            email: account.email,
            password_hash: account.password_hash,
            phone_number: account.phone_number,
            health_id: account.health_id,
            created_at,
        })
    }

    async fn reset_password(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to begin transaction: {e}")))?;

        let updated = sqlx::query("UPDATE users SET password_hash = $1 WHERE email = $2")
            .bind(password_hash)
            .bind(email)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to update password: {e}")))?;

        if updated.rows_affected() == 0 {
            return Ok(false);
        }

        // consumed in the same unit as the password update
        sqlx::query("DELETE FROM otp_verification WHERE email = $1")
            .bind(email)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to consume OTP: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to commit password reset: {e}")))?;

        Ok(true)
    }
}
