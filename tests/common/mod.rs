#![allow(dead_code)]

use admin_portal::application::services::LoginService;
use admin_portal::domain::entities::{Admin, NewAdmin};
use admin_portal::domain::repositories::{AdminRepository, PasswordVerifier};
use admin_portal::error::AppError;
use admin_portal::infrastructure::security::BcryptVerifier;
use admin_portal::routes::app_router;
use admin_portal::state::AppState;
use async_trait::async_trait;
use axum::extract::Request;
use axum::routing::IntoMakeService;
use axum::{Router, ServiceExt};
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower_http::normalize_path::NormalizePath;

/// Lowest bcrypt cost, keeps hashing fast in tests.
pub const TEST_COST: u32 = 4;

/// In-memory admin store counting lookups.
#[derive(Default)]
pub struct InMemoryAdminRepository {
    admins: Mutex<Vec<Admin>>,
    lookups: AtomicUsize,
}

impl InMemoryAdminRepository {
    pub fn with_admin(admin_id: i64, email: &str, password: &str) -> Self {
        let repo = Self::default();
        repo.insert(admin_id, email, password);
        repo
    }

    pub fn insert(&self, admin_id: i64, email: &str, password: &str) {
        let hash = bcrypt::hash(password, TEST_COST).unwrap();
        self.admins
            .lock()
            .push(Admin::new(admin_id, email.to_string(), hash, Utc::now()));
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<Admin>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .admins
            .lock()
            .iter()
            .filter(|a| a.email == email)
            .cloned()
            .collect())
    }

    async fn create(&self, new_admin: NewAdmin) -> Result<Admin, AppError> {
        let mut admins = self.admins.lock();
        if admins.iter().any(|a| a.email == new_admin.email) {
            return Err(AppError::validation("duplicate email"));
        }
        let admin = Admin::new(
            admins.len() as i64 + 1,
            new_admin.email,
            new_admin.password_hash,
            Utc::now(),
        );
        admins.push(admin.clone());
        Ok(admin)
    }

    async fn list(&self) -> Result<Vec<Admin>, AppError> {
        Ok(self.admins.lock().clone())
    }

    async fn delete_by_email(&self, email: &str) -> Result<bool, AppError> {
        let mut admins = self.admins.lock();
        let before = admins.len();
        admins.retain(|a| a.email != email);
        Ok(admins.len() != before)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Admin store whose every call fails like a lost database connection.
pub struct FailingAdminRepository;

#[async_trait]
impl AdminRepository for FailingAdminRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Vec<Admin>, AppError> {
        Err(AppError::internal(
            "error communicating with database: connection refused (10.0.0.5:5432)",
        ))
    }

    async fn create(&self, _new_admin: NewAdmin) -> Result<Admin, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn list(&self) -> Result<Vec<Admin>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn delete_by_email(&self, _email: &str) -> Result<bool, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("connection refused"))
    }
}

/// Admin store that panics on lookup.
pub struct PanickingAdminRepository;

#[async_trait]
impl AdminRepository for PanickingAdminRepository {
    async fn find_by_email(&self, _email: &str) -> Result<Vec<Admin>, AppError> {
        panic!("unexpected driver state");
    }

    async fn create(&self, _new_admin: NewAdmin) -> Result<Admin, AppError> {
        panic!("unexpected driver state");
    }

    async fn list(&self) -> Result<Vec<Admin>, AppError> {
        panic!("unexpected driver state");
    }

    async fn delete_by_email(&self, _email: &str) -> Result<bool, AppError> {
        panic!("unexpected driver state");
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

pub fn create_test_state(repository: Arc<dyn AdminRepository>) -> AppState {
    let verifier: Arc<dyn PasswordVerifier> = Arc::new(BcryptVerifier::new(TEST_COST));
    AppState::new(Arc::new(LoginService::new(repository, verifier)))
}

/// The production router, middleware and path normalization included.
pub fn create_test_app(
    repository: Arc<dyn AdminRepository>,
) -> IntoMakeService<NormalizePath<Router>> {
    ServiceExt::<Request>::into_make_service(app_router(create_test_state(repository)))
}
