use super::aggregate::{aggregate_by_scope, ScopeAggregation};
use super::output::{output_json, output_ndjson, output_plain, output_table};
use crate::cli::{CommonArgs, GroupBy, OutputFormat};
use crate::error::{CcstatError, Result};
use crate::git::{GitRepo, HistorySource, LogOptions};
use crate::model::{ClassifiedCommit, ScopeOutput, SCHEMA_VERSION};
use crate::parse::parse_commits;
use anyhow::Context;
use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

/// Outcome of one pass over the history.
#[derive(Debug, Clone)]
pub struct ScopeReport {
    pub commits: Vec<ClassifiedCommit>,
    pub aggregation: ScopeAggregation,
}

/// Query `source`, parse, classify and aggregate by scope.
pub fn collect<S: HistorySource + ?Sized>(source: &S, options: &LogOptions) -> Result<ScopeReport> {
    options.validate()?;
    let logs = source.log(options)?;
    let commits = parse_commits(&logs);
    let aggregation = aggregate_by_scope(&commits);
    Ok(ScopeReport { commits, aggregation })
}

pub fn exec(common: CommonArgs, group_by: GroupBy, format: OutputFormat) -> anyhow::Result<()> {
    if group_by == GroupBy::Type {
        return Err(CcstatError::Unsupported("grouping by type is not implemented yet".to_string()).into());
    }

    let repo = GitRepo::open(common.repo.as_ref())
        .context("Failed to open git repository")?
        .with_git_bin(common.git_bin.clone());
    repo.can_exec().context("Failed to locate git executable")?;

    let options = common.log_options();
    let report = with_spinner(format == OutputFormat::Plain || format == OutputFormat::Table, || {
        collect(&repo, &options)
    })
    .context("Failed to aggregate commit history")?;

    let commit_count = report.commits.len();
    let rows = report.aggregation.into_sorted_rows();

    match format {
        OutputFormat::Plain => output_plain(&rows)?,
        OutputFormat::Table => output_table(&rows)?,
        OutputFormat::Ndjson => output_ndjson(&rows)?,
        OutputFormat::Json => {
            let output = ScopeOutput {
                version: SCHEMA_VERSION,
                generated_at: Utc::now(),
                repository_path: repo.path().to_string_lossy().to_string(),
                group_by: group_by.to_string(),
                after: common.after.clone(),
                before: common.before.clone(),
                follow: common.follow.clone(),
                commit_count,
                rows,
            };
            output_json(&output)?;
        }
    }

    Ok(())
}

fn with_spinner<T>(show: bool, work: impl FnOnce() -> T) -> T {
    if !show {
        return work();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message("Reading commit history...");
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = work();
    pb.finish_and_clear();
    result
}
