//! Core types and trait definitions for the fall report store.
//!
//! This crate is free of HTTP and database dependencies. The storage backend
//! and the API layer both depend on it.

pub mod collection;
pub mod report;
pub mod store;
pub mod text;
