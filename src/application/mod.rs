//! Application layer: use-case vocabulary shared by the CLI
//!
//! This layer sits between the domain and the console; it owns no I/O itself.

pub mod error;
pub mod error_ext;
pub mod menu;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use menu::{InvalidOption, MenuChoice};
