// Port Layer - Interfaces for external dependencies

pub mod console; // Injectable line I/O for testability

// Re-exports
pub use console::{Console, StreamConsole};
