//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate provider fetches, preference persistence and view assembly.
//! - Keep UI/FFI layers decoupled from storage and provider details.

pub mod dashboard_service;
