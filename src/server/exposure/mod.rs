//! API exposure modules
//!
//! Each exposure takes the registered entities and produces a Router for
//! its protocol. REST is the only one today.

pub mod rest;

pub use rest::RestExposure;
