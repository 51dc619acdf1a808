// Code generated by emr-codegen. DO NOT EDIT.
//! **Example Jobs**
//!
//! <p>Runs batch jobs.</p>
//!
//! Value types for every request, response, nested structure, enumeration and modeled
//! error of the service, generated from `model/emr.json`.

pub use smithy_types::DuplicateKeyError;
pub use smithy_types::Instant;

pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

/// Crate version number.
pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
/// Version of the service API the types were generated from.
pub static API_VERSION: &str = "2021-06-01";
