use crate::model::{ScopeOutput, ScopeRow};
use anyhow::Result;
use console::style;

pub fn format_row(row: &ScopeRow) -> String {
    format!(
        "SCOPE:{}\tINSERT:{}\tDELETE:{}\tSUM:{}",
        row.scope, row.insertions, row.deletions, row.total
    )
}

pub fn output_plain(rows: &[ScopeRow]) -> Result<()> {
    for row in rows {
        println!("{}", format_row(row));
    }
    Ok(())
}

pub fn output_json(output: &ScopeOutput) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(())
}

pub fn output_ndjson(rows: &[ScopeRow]) -> Result<()> {
    for row in rows {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

pub fn output_table(rows: &[ScopeRow]) -> Result<()> {
    if rows.is_empty() {
        println!("No commits to aggregate");
        return Ok(());
    }

    println!(
        "{:<30} {:>10} {:>10} {:>10} {:>8}",
        style("Scope").bold(),
        style("Insert").bold(),
        style("Delete").bold(),
        style("Sum").bold(),
        style("Commits").bold()
    );
    println!("{}", "─".repeat(72));
    for row in rows {
        println!(
            "{:<30} {:>10} {:>10} {:>10} {:>8}",
            row.scope,
            style(row.insertions).green(),
            style(row.deletions).red(),
            row.total,
            row.commits
        );
    }
    Ok(())
}
