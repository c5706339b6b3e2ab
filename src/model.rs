use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// Key used for commits whose header carries no scope.
pub const NO_SCOPE: &str = "None";

/// Line-change summary of a single commit, as reported by `--shortstat`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeStat {
    pub files_changed: u32,
    pub insertions: u32,
    pub deletions: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCommit {
    pub hash: String,
    pub tree: String,
    pub author: String,
    pub committer: String,
    pub subject: String,
    pub body: String,
    pub stat: ChangeStat,
}

/// A commit annotated with its conventional-commit header parts.
///
/// `kind`, `scope` and `subject` all stay empty when the subject line does not
/// follow `type(scope): subject`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCommit {
    #[serde(rename = "type")]
    pub kind: String,
    pub scope: String,
    pub subject: String,
    pub raw: RawCommit,
}

impl ClassifiedCommit {
    /// True when the subject line matched the header grammar. An empty type
    /// is allowed, so any populated part counts.
    pub fn is_conventional(&self) -> bool {
        !(self.kind.is_empty() && self.scope.is_empty() && self.subject.is_empty())
    }

    /// Subject suitable for display: the header remainder when the commit is
    /// conventional, the untouched subject line otherwise.
    pub fn display_subject(&self) -> &str {
        if self.is_conventional() {
            &self.subject
        } else {
            &self.raw.subject
        }
    }

    /// Aggregation key; empty scopes fold into [`NO_SCOPE`].
    pub fn scope_key(&self) -> &str {
        if self.scope.is_empty() {
            NO_SCOPE
        } else {
            &self.scope
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRow {
    pub scope: String,
    pub insertions: u64,
    pub deletions: u64,
    pub total: u64,
    pub commits: u32,
}

impl ScopeRow {
    pub fn new(scope: String) -> Self {
        Self {
            scope,
            insertions: 0,
            deletions: 0,
            total: 0,
            commits: 0,
        }
    }

    pub fn add_stat(&mut self, stat: &ChangeStat) {
        self.insertions += stat.insertions as u64;
        self.deletions += stat.deletions as u64;
        // Always the sum of both columns, never a running delta.
        self.total = self.insertions + self.deletions;
        self.commits += 1;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScopeOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub group_by: String,
    pub after: Option<String>,
    pub before: Option<String>,
    pub follow: Option<String>,
    pub commit_count: usize,
    pub rows: Vec<ScopeRow>,
}
