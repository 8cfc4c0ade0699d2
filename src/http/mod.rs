//! HTTP protocol layer module
//!
//! Response builders for the relay's JSON contract, decoupled from the
//! handler's business logic.

pub mod response;

pub use response::{build_405_response, build_413_response, error_response, success_response};
