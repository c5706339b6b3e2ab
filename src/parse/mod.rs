pub mod header;
pub mod record;
pub mod stat;

pub use header::classify;
pub use record::{normalize_body, parse_record, parse_records};
pub use stat::parse_stat;

use crate::model::ClassifiedCommit;

/// Parse and classify every commit in a raw history dump.
pub fn parse_commits(logs: &str) -> Vec<ClassifiedCommit> {
    let commits: Vec<_> = parse_records(logs).into_iter().map(classify).collect();
    tracing::debug!(
        commits = commits.len(),
        conventional = commits.iter().filter(|c| c.is_conventional()).count(),
        "parsed history"
    );
    commits
}
