use crate::model::{ClassifiedCommit, ScopeRow};
use std::collections::HashMap;

/// Per-scope line totals. Internally unordered; use
/// [`ScopeAggregation::into_sorted_rows`] for anything user facing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeAggregation {
    rows: HashMap<String, ScopeRow>,
}

impl ScopeAggregation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, commit: &ClassifiedCommit) {
        let key = commit.scope_key();
        let row = self
            .rows
            .entry(key.to_string())
            .or_insert_with(|| ScopeRow::new(key.to_string()));
        row.add_stat(&commit.raw.stat);
    }

    pub fn get(&self, scope: &str) -> Option<&ScopeRow> {
        self.rows.get(scope)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows ordered lexicographically by scope key.
    pub fn into_sorted_rows(self) -> Vec<ScopeRow> {
        let mut rows: Vec<_> = self.rows.into_values().collect();
        rows.sort_by(|a, b| a.scope.cmp(&b.scope));
        rows
    }
}

pub fn aggregate_by_scope<'a, I>(commits: I) -> ScopeAggregation
where
    I: IntoIterator<Item = &'a ClassifiedCommit>,
{
    let mut agg = ScopeAggregation::new();
    for commit in commits {
        agg.add(commit);
    }
    agg
}
