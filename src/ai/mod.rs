//! Model Integration Layer
//!
//! The credential pool, the call-with-fallback dispatcher, the validation
//! retry wrapper, and response post-processing.
//!
//! ## Modules
//!
//! - `credentials`: ordered credential pool with a shared rotation cursor
//! - `dispatcher`: one logical call, rotated across credentials on fault
//! - `retry`: retry wrapper for semantically-empty responses
//! - `client`: credential-bound generateContent client
//! - `request`: request/part types shared by the section generators
//! - `postprocess`: downgrade-never-throw response cleanup

pub mod client;
pub mod credentials;
pub mod dispatcher;
pub mod postprocess;
pub mod request;
pub mod retry;

pub use client::GeminiClient;
pub use credentials::CredentialPool;
pub use dispatcher::{Dispatcher, SharedGenerator, TextGenerator};
pub use request::{ModelRequest, Part, ResponseFormat};
pub use retry::generate_with_retry;
