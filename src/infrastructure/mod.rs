//! Concrete adapters for the service and notification ports.

pub mod console;
pub mod http;
pub mod in_memory;
