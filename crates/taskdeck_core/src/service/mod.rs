//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Emit metadata-only log events and run the latency hook once per call.
//! - Keep presentation callers decoupled from storage details.

pub mod dashboard_service;
pub mod project_service;
pub mod task_service;
pub mod tracker;
