//! PostgreSQL implementation of admin repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Admin, NewAdmin};
use crate::domain::repositories::AdminRepository;
use crate::error::AppError;

/// Row shape of the `admin` table. The hash lives in the `password` column.
#[derive(sqlx::FromRow)]
struct AdminRow {
    admin_id: i64,
    email: String,
    password: String,
    created_at: DateTime<Utc>,
}

impl From<AdminRow> for Admin {
    fn from(row: AdminRow) -> Self {
        Admin::new(row.admin_id, row.email, row.password, row.created_at)
    }
}

/// PostgreSQL repository for admin credential records.
pub struct PgAdminRepository {
    pool: Arc<PgPool>,
}

impl PgAdminRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn is_unique_violation_on_email(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation() && matches!(db_err.constraint(), Some("admin_email_key"))
}

#[async_trait]
impl AdminRepository for PgAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<Admin>, AppError> {
        let rows = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT admin_id, email, password, created_at
            FROM admin
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Admin::from).collect())
    }

    async fn create(&self, new_admin: NewAdmin) -> Result<Admin, AppError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r#"
            INSERT INTO admin (email, password)
            VALUES ($1, $2)
            RETURNING admin_id, email, password, created_at
            "#,
        )
        .bind(&new_admin.email)
        .bind(&new_admin.password_hash)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_email(&e) {
                AppError::validation(format!("Admin '{}' already exists", new_admin.email))
            } else {
                AppError::from(e)
            }
        })?;

        Ok(row.into())
    }

    async fn list(&self) -> Result<Vec<Admin>, AppError> {
        let rows = sqlx::query_as::<_, AdminRow>(
            r#"
            SELECT admin_id, email, password, created_at
            FROM admin
            ORDER BY admin_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Admin::from).collect())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM admin WHERE email = $1")
            .bind(email)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
