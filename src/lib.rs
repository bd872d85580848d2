pub mod boundary;
pub mod buckets;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod reflog;
pub mod release;
pub mod repo;
pub mod ui;
pub mod version;
pub mod writer;

pub use error::{ChangelogError, Result};
