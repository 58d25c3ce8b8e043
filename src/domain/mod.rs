//! Domain layer: the team hierarchy and its rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod render;
pub mod tree;

pub use entities::{Node, Side};
pub use error::{DomainError, DomainResult};
pub use render::{Layout, TermTreeConvert, NO_STRUCTURE};
pub use tree::{Entry, Insertion, Print, TeamTree, TreeState};
