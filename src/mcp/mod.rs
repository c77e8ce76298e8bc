//! Model Context Protocol server layer.

pub mod handler;
pub mod response;
pub mod transport;
