pub mod format;
pub mod repo;

pub use format::{pretty_format, LogOptions, DELIMITER, SEPARATOR};
pub use repo::{GitRepo, HistorySource, DEFAULT_GIT_BIN};
