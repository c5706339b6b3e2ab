use crate::error::{CcstatError, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

pub const SEPARATOR: &str = "@@__GIT_LOG_SEPARATOR__@@";
pub const DELIMITER: &str = "@@__GIT_LOG_DELIMITER__@@";

pub const HASH_KEY: &str = "HASH";
pub const TREE_KEY: &str = "TREE";
pub const AUTHOR_KEY: &str = "AUTHOR";
pub const COMMITTER_KEY: &str = "COMMITTER";
pub const SUBJECT_KEY: &str = "SUBJECT";
pub const BODY_KEY: &str = "BODY";
pub const STAT_KEY: &str = "STAT";

/// `--pretty` format emitting one separator-prefixed, delimiter-joined record
/// per commit. `STAT:` is left open so the `--shortstat` line that git prints
/// after the header lands in that field.
pub fn pretty_format() -> String {
    let fields = [
        format!("{HASH_KEY}:%H"),
        format!("{TREE_KEY}:%T"),
        format!("{AUTHOR_KEY}:%an"),
        format!("{COMMITTER_KEY}:%cn"),
        format!("{SUBJECT_KEY}:%s"),
        format!("{BODY_KEY}:%b"),
        format!("{STAT_KEY}:"),
    ];
    format!("{SEPARATOR}{}", fields.join(DELIMITER))
}

/// Revision filters for the history query.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub after: Option<String>,
    pub before: Option<String>,
    pub follow: Option<String>,
}

impl LogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    pub fn with_follow(mut self, path: impl Into<String>) -> Self {
        self.follow = Some(path.into());
        self
    }

    /// Full argument list for `git log`, subcommand included.
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![
            "log".to_string(),
            format!("--pretty=format:{}", pretty_format()),
            "--no-decorate".to_string(),
            "--no-merges".to_string(),
            "--shortstat".to_string(),
        ];
        if let Some(after) = non_empty(&self.after) {
            args.push(format!("--after={after}"));
        }
        if let Some(before) = non_empty(&self.before) {
            args.push(format!("--before={before}"));
        }
        if let Some(path) = non_empty(&self.follow) {
            args.push("--".to_string());
            args.push(path.to_string());
        }
        args
    }

    /// Rejects an inverted range when both bounds are plain dates. Relative
    /// expressions like "2 weeks ago" are left for git to interpret.
    pub fn validate(&self) -> Result<()> {
        let after = non_empty(&self.after).and_then(parse_date);
        let before = non_empty(&self.before).and_then(parse_date);

        if let (Some(a), Some(b)) = (after, before) {
            if a > b {
                return Err(CcstatError::InvalidDate(format!(
                    "Invalid range: after ({a}) is later than before ({b})"
                )));
            }
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn parse_date(input: &str) -> Option<DateTime<Utc>> {
    // RFC3339
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    // YYYY-MM-DD
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| Utc.from_utc_datetime(&datetime))
}
