//! Contact-form submissions subsystem.
//!
//! # Data Flow
//! ```text
//! request body (JSON)
//!     → types.rs (FormPayload, presence validation)
//!     → Submission (stamped with receipt time + peer IP)
//!     → store.rs (append-only in-memory sequence)
//! ```

pub mod store;
pub mod types;

pub use store::SubmissionStore;
pub use types::{FormFields, FormPayload, Submission, SubmissionError};
