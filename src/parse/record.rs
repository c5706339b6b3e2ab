use super::stat::parse_stat;
use crate::git::format::{
    AUTHOR_KEY, BODY_KEY, COMMITTER_KEY, DELIMITER, HASH_KEY, SEPARATOR, STAT_KEY, SUBJECT_KEY,
    TREE_KEY,
};
use crate::model::RawCommit;

/// Split raw history output into commits, in the order git emitted them.
///
/// Text before the first separator is dropped, so empty output yields no
/// commits.
pub fn parse_records(logs: &str) -> Vec<RawCommit> {
    logs.split(SEPARATOR).skip(1).map(parse_record).collect()
}

/// Decode one `KEY:VALUE` delimited chunk. Unknown keys and segments without
/// a colon are ignored; absent keys leave the field at its default.
pub fn parse_record(chunk: &str) -> RawCommit {
    let mut commit = RawCommit::default();

    for segment in chunk.split(DELIMITER) {
        let Some((key, value)) = segment.split_once(':') else {
            continue;
        };

        match key {
            HASH_KEY => commit.hash = field(value),
            TREE_KEY => commit.tree = field(value),
            AUTHOR_KEY => commit.author = field(value),
            COMMITTER_KEY => commit.committer = field(value),
            SUBJECT_KEY => commit.subject = field(value),
            BODY_KEY => commit.body = normalize_body(value),
            STAT_KEY => commit.stat = parse_stat(value),
            _ => {}
        }
    }

    commit
}

fn field(value: &str) -> String {
    value.trim_end_matches(['\r', '\n']).to_string()
}

/// Unify line endings, then strip surrounding quotes and whitespace in two
/// passes. The second pass is required: the quoted format leaves a body
/// wrapped twice.
pub fn normalize_body(body: &str) -> String {
    let body = body.replace("\r\n", "\n").replace('\r', "\n");

    let body = body.trim();
    let body = body.trim_matches('"').trim();
    let body = body.trim_matches('"').trim();
    body.to_string()
}
