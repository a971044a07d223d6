//! Session token handed to the client after a successful login.

use std::fmt;

use super::Admin;

/// Client-side session marker of the form `{admin_id}-{email}`.
///
/// The token is neither signed nor expiring: anyone who knows an admin's id
/// and email can construct it. It is deterministic for a given record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    /// Builds the token for an admin record.
    pub fn for_admin(admin: &Admin) -> Self {
        Self(format!("{}-{}", admin.admin_id, admin.email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
