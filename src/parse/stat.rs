use crate::model::ChangeStat;
use regex::Regex;
use std::sync::LazyLock;

static STAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<file>\d+) files? changed(?:, (?P<insertion>\d+) insertions?\(\+\))?(?:, (?P<deletion>\d+) deletions?\(-\))?",
    )
    .expect("shortstat pattern is valid")
});

/// Parse a `--shortstat` summary line. Missing clauses count as zero and text
/// without a summary yields [`ChangeStat::default`].
pub fn parse_stat(text: &str) -> ChangeStat {
    let Some(caps) = STAT_RE.captures(text) else {
        return ChangeStat::default();
    };

    let count = |name: &str| {
        caps.name(name)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };

    ChangeStat {
        files_changed: count("file"),
        insertions: count("insertion"),
        deletions: count("deletion"),
    }
}
