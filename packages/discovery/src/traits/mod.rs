//! Core trait abstractions for the discovery library.
//!
//! These traits define the seams applications implement to provide
//! the completion model and cache storage collaborators.

pub mod model;
pub mod store;
