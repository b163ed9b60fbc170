//! HTTP listener.
//!
//! Plain HTTP/1.1 only. The server runs until the process is killed; there is no
//! signal handling and no connection draining.

mod server;

pub use server::{bind, serve, start_server, ServerError};
