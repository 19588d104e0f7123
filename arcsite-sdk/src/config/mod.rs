//! Runtime configuration types shared between the server and tooling.
//!
//! Loading and parsing live in the server crate; these are the validated
//! values it hands around.

mod admin;
mod server;

pub use admin::AdminConfig;
pub use server::ServerConfig;
