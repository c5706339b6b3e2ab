use ccstat::error::{CcstatError, Result};
use ccstat::git::{HistorySource, LogOptions, DELIMITER, SEPARATOR};
use ccstat::model::ScopeRow;
use ccstat::scope::{collect, format_row};
use pretty_assertions::assert_eq;
use std::cell::RefCell;

/// Replays canned `git log` output and remembers the arguments it was asked for.
struct FakeHistory {
    output: String,
    seen_args: RefCell<Vec<Vec<String>>>,
}

impl FakeHistory {
    fn new(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            seen_args: RefCell::new(Vec::new()),
        }
    }
}

impl HistorySource for FakeHistory {
    fn log(&self, options: &LogOptions) -> Result<String> {
        self.seen_args.borrow_mut().push(options.args());
        Ok(self.output.clone())
    }
}

struct FailingHistory;

impl HistorySource for FailingHistory {
    fn log(&self, _options: &LogOptions) -> Result<String> {
        Err(CcstatError::GitNotFound("git".to_string()))
    }
}

fn record(hash: &str, subject: &str, body: &str, stat: &str) -> String {
    let fields = [
        format!("HASH:{hash}"),
        format!("TREE:t{hash}"),
        "AUTHOR:Jane Doe".to_string(),
        "COMMITTER:Jane Doe".to_string(),
        format!("SUBJECT:{subject}"),
        format!("BODY:{body}"),
        format!("STAT:\n\n{stat}\n"),
    ];
    format!("{SEPARATOR}{}", fields.join(DELIMITER))
}

fn row(scope: &str, insertions: u64, deletions: u64, commits: u32) -> ScopeRow {
    ScopeRow {
        scope: scope.to_string(),
        insertions,
        deletions,
        total: insertions + deletions,
        commits,
    }
}

fn sample_log() -> String {
    [
        record("c4", "feat(a): first", "", " 1 file changed, 1 insertion(+)"),
        record("c3", "fix(a): second", "details", " 2 files changed, 2 insertions(+), 1 deletion(-)"),
        record("c2", "chore: bump", "\"quoted body\"", " 3 files changed, 5 insertions(+), 5 deletions(-)"),
        record("c1", "refactor(b): third", "", " 1 file changed, 3 deletions(-)"),
    ]
    .concat()
}

#[test]
fn aggregates_sample_history_by_scope() {
    let source = FakeHistory::new(sample_log());
    let report = collect(&source, &LogOptions::new()).unwrap();

    assert_eq!(report.commits.len(), 4);
    assert_eq!(
        report.aggregation.into_sorted_rows(),
        vec![row("None", 5, 5, 1), row("a", 3, 1, 2), row("b", 0, 3, 1)]
    );
}

#[test]
fn commits_keep_source_order_and_fields() {
    let source = FakeHistory::new(sample_log());
    let report = collect(&source, &LogOptions::new()).unwrap();

    let hashes: Vec<_> = report.commits.iter().map(|c| c.raw.hash.as_str()).collect();
    assert_eq!(hashes, ["c4", "c3", "c2", "c1"]);

    let chore = &report.commits[2];
    assert_eq!(chore.kind, "chore");
    assert_eq!(chore.scope, "");
    assert_eq!(chore.raw.body, "quoted body");
    assert_eq!(chore.raw.tree, "tc2");
}

#[test]
fn non_conventional_commits_are_counted_under_none() {
    let log = [
        record("x1", "fix typo", "", " 1 file changed, 1 insertion(+), 1 deletion(-)"),
        record("x2", "Update docs: links", "", " 1 file changed, 4 insertions(+)"),
    ]
    .concat();
    let report = collect(&FakeHistory::new(log), &LogOptions::new()).unwrap();

    assert_eq!(report.commits[0].display_subject(), "fix typo");
    assert!(!report.commits[1].is_conventional());
    assert_eq!(report.aggregation.into_sorted_rows(), vec![row("None", 5, 1, 2)]);
}

#[test]
fn commit_without_stat_line_counts_zero() {
    let log = format!(
        "{SEPARATOR}HASH:e1{DELIMITER}SUBJECT:feat(ci): empty commit{DELIMITER}STAT:"
    );
    let report = collect(&FakeHistory::new(log), &LogOptions::new()).unwrap();
    assert_eq!(report.aggregation.into_sorted_rows(), vec![row("ci", 0, 0, 1)]);
}

#[test]
fn empty_history_yields_no_rows() {
    let report = collect(&FakeHistory::new(""), &LogOptions::new()).unwrap();
    assert!(report.commits.is_empty());
    assert!(report.aggregation.is_empty());
}

#[test]
fn parsed_count_matches_separator_count() {
    let log: String = (0..25)
        .map(|i| record(&format!("h{i}"), &format!("feat(s{}): n", i % 4), "", " 1 file changed, 1 insertion(+)"))
        .collect();
    let separators = log.matches(SEPARATOR).count();
    let report = collect(&FakeHistory::new(log), &LogOptions::new()).unwrap();
    assert_eq!(report.commits.len(), separators);
    assert_eq!(report.aggregation.len(), 4);
}

#[test]
fn options_reach_the_history_source() {
    let source = FakeHistory::new("");
    let options = LogOptions::new().with_after("2024-01-01").with_follow("src");
    collect(&source, &options).unwrap();

    let seen = source.seen_args.borrow();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].contains(&"--after=2024-01-01".to_string()));
    assert_eq!(&seen[0][seen[0].len() - 2..], ["--", "src"]);
}

#[test]
fn inverted_range_fails_before_querying() {
    let source = FakeHistory::new(sample_log());
    let options = LogOptions::new().with_after("2024-02-01").with_before("2024-01-01");
    let err = collect(&source, &options).unwrap_err();
    assert!(matches!(err, CcstatError::InvalidDate(_)));
    assert!(source.seen_args.borrow().is_empty());
}

#[test]
fn source_errors_propagate() {
    let err = collect(&FailingHistory, &LogOptions::new()).unwrap_err();
    assert!(matches!(err, CcstatError::GitNotFound(_)));
}

#[test]
fn rows_render_in_sorted_order() {
    let report = collect(&FakeHistory::new(sample_log()), &LogOptions::new()).unwrap();
    let lines: Vec<_> = report
        .aggregation
        .into_sorted_rows()
        .iter()
        .map(format_row)
        .collect();
    assert_eq!(
        lines,
        vec![
            "SCOPE:None\tINSERT:5\tDELETE:5\tSUM:10".to_string(),
            "SCOPE:a\tINSERT:3\tDELETE:1\tSUM:4".to_string(),
            "SCOPE:b\tINSERT:0\tDELETE:3\tSUM:3".to_string(),
        ]
    );
}
