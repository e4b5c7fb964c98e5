//! Generates a Maven `pom.xml` and a minimal Java project skeleton from
//! command-line arguments.

pub mod cli;
pub mod config;
pub mod error;
pub mod options;
pub mod pom;
pub mod project;

pub use error::{ErrorKind, PomError, PomResult};
