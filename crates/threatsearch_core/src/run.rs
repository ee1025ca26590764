use tracing::warn;

use crate::catalog::{QueryCategory, QueryDefinition};
use crate::datasource::DataSource;
use crate::errors::Result;
use crate::executor;
use crate::result::TabularResult;

/// Outcome of one catalog entry in a sequential run.
#[derive(Debug)]
pub struct QueryOutcome {
    pub name: &'static str,
    pub category: QueryCategory,
    pub result: Result<TabularResult>,
}

/// Run every query in order, continuing past individual failures.
///
/// Queries are independent reads against the same handle, so one bad
/// definition never aborts the rest of the run; its failure is recorded in
/// the returned outcome and logged.
pub fn run_catalog(source: &DataSource, queries: &[QueryDefinition]) -> Vec<QueryOutcome> {
    queries
        .iter()
        .map(|query| {
            let result = executor::execute(source, query);
            if let Err(err) = &result {
                warn!(name = query.name, category = %query.category, %err, "query failed");
            }
            QueryOutcome {
                name: query.name,
                category: query.category,
                result,
            }
        })
        .collect()
}
