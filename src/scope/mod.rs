pub mod aggregate;
pub mod exec;
pub mod output;

pub use aggregate::{aggregate_by_scope, ScopeAggregation};
pub use exec::{collect, exec, ScopeReport};
pub use output::{format_row, output_json, output_ndjson, output_plain, output_table};
