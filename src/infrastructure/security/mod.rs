//! Password hashing implementations.

pub mod bcrypt_verifier;

pub use bcrypt_verifier::BcryptVerifier;
