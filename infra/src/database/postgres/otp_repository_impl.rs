//! PostgreSQL implementation of the OtpRepository trait.
//!
//! Maintains the single-live-entry invariant in the store itself:
//! `replace` deletes the email's prior rows and inserts the new one in
//! a single transaction, so no interleaving can leave two codes live.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use healthid_core::domain::entities::otp::OtpEntry;
use healthid_core::errors::DomainError;
use healthid_core::repositories::OtpRepository;

/// PostgreSQL implementation of OtpRepository
pub struct PgOtpRepository {
    pool: PgPool,
}

impl PgOtpRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_entry(row: &sqlx::postgres::PgRow) -> Result<OtpEntry, DomainError> {
        Ok(OtpEntry {
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("Failed to get email: {e}")))?,
            code: row
                .try_get("code")
                .map_err(|e| DomainError::Database(format!("Failed to get code: {e}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("Failed to get created_at: {e}")))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Database(format!("Failed to get expires_at: {e}")))?,
        })
    }
}

#[async_trait]
impl OtpRepository for PgOtpRepository {
    async fn replace(&self, entry: OtpEntry) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query("DELETE FROM otp_verification WHERE email = $1")
            .bind(&entry.email)
            .execute(&mut *tx)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to clear prior OTP: {e}")))?;

        sqlx::query(
            r#"
            INSERT INTO otp_verification (email, code, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&entry.email)
        .bind(&entry.code)
        .bind(entry.created_at)
        .bind(entry.expires_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| DomainError::Database(format!("Failed to store OTP: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| DomainError::Database(format!("Failed to commit OTP: {e}")))?;

        Ok(())
    }

    async fn find_latest(&self, email: &str) -> Result<Option<OtpEntry>, DomainError> {
        let query = r#"
            SELECT email, code, created_at, expires_at
            FROM otp_verification
            WHERE email = $1
            ORDER BY created_at DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_entry(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_email(&self, email: &str) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM otp_verification WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("Failed to delete OTP: {e}")))?;

        Ok(result.rows_affected())
    }
}
