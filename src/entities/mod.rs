//! Domain entities exposed over HTTP
//!
//! Each entity lives in its own module with the same layout: `model`,
//! `service`, `assembler`, `handlers` and `descriptor`.

pub mod employee;
pub mod order;
