// Application Layer - Interactive session use case

pub mod config;
pub mod constants;
pub mod menu;
pub mod overview;
pub mod prompt;
pub mod render;
pub mod session;

// Re-exports
pub use config::{DirectionInput, SessionConfig};
pub use menu::MenuChoice;
pub use session::Session;
