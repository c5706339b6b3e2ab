use crate::model::{ClassifiedCommit, RawCommit};
use regex::Regex;
use std::sync::LazyLock;

// type, optional (scope), then ": subject"
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<type>\w*)(?:\((?P<scope>[^)]*)\))?: (?P<subject>.*)$")
        .expect("header pattern is valid")
});

/// Classify a commit by its subject line. Non-conventional subjects are an
/// ordinary outcome: the header parts stay empty and `raw` is kept as is.
pub fn classify(raw: RawCommit) -> ClassifiedCommit {
    let header = HEADER_RE.captures(&raw.subject).map(|caps| {
        let part = |name: &str| caps.name(name).map(|m| m.as_str().to_string()).unwrap_or_default();
        (part("type"), part("scope"), part("subject"))
    });

    match header {
        Some((kind, scope, subject)) => ClassifiedCommit {
            kind,
            scope,
            subject,
            raw,
        },
        None => ClassifiedCommit {
            raw,
            ..Default::default()
        },
    }
}
