//! Contact Form Backend
//!
//! A small HTTP service that accepts contact-form submissions, validates
//! required fields, keeps them in process memory, and serves them back as
//! JSON. Built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request        ┌──────────────────────────────────────────┐
//!     ──────────────────────┼─▶ http/server ──▶ http/handlers          │
//!                           │       │                │                 │
//!                           │   middleware       submissions           │
//!                           │   (request ID,     (validate payload,    │
//!                           │    trace, CORS,     append to store)     │
//!                           │    body limit,          │                │
//!     Client Response       │    catch panic)         ▼                │
//!     ◀─────────────────────┼── http/response ◀── SubmissionStore      │
//!                           │                                          │
//!                           │  cross-cutting: config, lifecycle        │
//!                           └──────────────────────────────────────────┘
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod submissions;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
