//! Domain types shared across the hubdesk workspace.
//!
//! This crate contains only pure types with no framework or database
//! dependencies.

pub mod complaint;
pub mod pagination;
pub mod policy;
pub mod role;
