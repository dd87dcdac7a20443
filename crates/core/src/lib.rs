// Procenten Core - Percentage formulas, console port & session loop
// NO process/terminal wiring here (composition happens in procenten-cli)

pub mod application;
pub mod domain;
pub mod error;
pub mod port;

pub use error::{AppError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
