use crate::git::{LogOptions, DEFAULT_GIT_BIN};
use anyhow::Result;
use clap::{Args, Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ccstat")]
#[command(about = "ccstat - git conventional commit analyzer")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[arg(
        short = 'g',
        long,
        value_enum,
        default_value_t = GroupBy::Scope,
        help = "Aggregate commits by this header segment"
    )]
    pub group_by: GroupBy,

    #[arg(long, help = "Output as JSON", conflicts_with_all = ["ndjson", "table"])]
    pub json: bool,

    #[arg(long, help = "Output as NDJSON", conflicts_with = "table")]
    pub ndjson: bool,

    #[arg(long, help = "Output as an aligned table")]
    pub table: bool,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(long, env = "CCSTAT_GIT", default_value = DEFAULT_GIT_BIN, help = "Git executable to run")]
    pub git_bin: String,

    #[arg(short = 'A', long, help = "Show commits more recent than a specific date")]
    pub after: Option<String>,

    #[arg(short = 'B', long, help = "Show commits older than a specific date")]
    pub before: Option<String>,

    #[arg(short = 'f', long, help = "Only count commits touching this path")]
    pub follow: Option<String>,
}

impl CommonArgs {
    pub fn log_options(&self) -> LogOptions {
        LogOptions {
            after: self.after.clone(),
            before: self.before.clone(),
            follow: self.follow.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GroupBy {
    Scope,
    /// Recognised, not implemented yet.
    Type,
}

impl fmt::Display for GroupBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupBy::Scope => f.write_str("scope"),
            GroupBy::Type => f.write_str("type"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Table,
    Json,
    Ndjson,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else if self.ndjson {
            OutputFormat::Ndjson
        } else if self.table {
            OutputFormat::Table
        } else {
            OutputFormat::Plain
        }
    }

    pub fn execute(self) -> Result<()> {
        let format = self.output_format();
        crate::scope::exec(self.common, self.group_by, format)
    }
}
