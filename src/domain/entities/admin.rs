//! Admin entity representing a stored credential entry.

use chrono::{DateTime, Utc};

/// An administrator account as stored in the `admin` table.
///
/// The password is only ever held in hashed form.
#[derive(Debug, Clone)]
pub struct Admin {
    pub admin_id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Admin {
    /// Creates a new Admin instance.
    pub fn new(
        admin_id: i64,
        email: String,
        password_hash: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            admin_id,
            email,
            password_hash,
            created_at,
        }
    }
}

/// Input data for creating a new admin.
#[derive(Debug, Clone)]
pub struct NewAdmin {
    pub email: String,
    pub password_hash: String,
}
