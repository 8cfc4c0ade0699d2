//! Request handler module
//!
//! The relay has a single endpoint: every POST is a contact-form
//! submission, every other method is rejected before the body is read.

pub mod contact;
pub mod submission;

pub use contact::handle_request;
