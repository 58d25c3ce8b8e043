//! teamtree: a team reporting hierarchy modelled as a binary tree
//!
//! # Architecture
//!
//! Layered architecture with clear separation of concerns:
//!
//! - **domain**: employees, the team tree and its insert/print rules (no I/O)
//! - **application**: menu vocabulary and error wrapping
//! - **cli**: argument parsing, command dispatch, the interactive session
//! - **config**: layered settings (defaults, global file, explicit file, env)

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{DomainError, Entry, Insertion, Node, Side, TeamTree};
