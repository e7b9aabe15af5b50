//! Data types for the discovery library.

pub mod dataset;
pub mod search;
