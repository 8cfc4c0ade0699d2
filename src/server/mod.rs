// Server module entry
// Listener setup, connection handling, and shutdown signals.

pub mod connection;
pub mod listener;
pub mod signal;

pub use connection::accept_connection;
pub use listener::create_reusable_listener;
