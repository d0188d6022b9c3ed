//! Authentication utilities library
//!
//! Provides reusable credential infrastructure for services:
//! - Password hashing (Argon2id with configurable cost)
//! - Opaque session token generation
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::SessionTokenGenerator;
//!
//! let generator = SessionTokenGenerator::new();
//! let first = generator.generate();
//! let second = generator.generate();
//! assert_ne!(first, second);
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::SessionTokenGenerator;
