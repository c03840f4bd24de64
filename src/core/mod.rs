//! Core algorithms – directory listing and name-set comparison.
//!
//! Nothing in this module writes to the terminal; rendering lives in
//! [`crate::report`].

pub mod compare;
pub mod listing;
