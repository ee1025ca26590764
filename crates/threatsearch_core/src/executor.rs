use tracing::debug;

use crate::catalog::QueryDefinition;
use crate::datasource::DataSource;
use crate::errors::{Result, ThreatSearchError};
use crate::result::{Column, TabularResult, Value};

/// Execute a single query definition against the data source.
///
/// Columns come back in projection order. Row order is whatever the query's
/// ORDER BY produces; without one it is unspecified and callers must not
/// assume any. Queries are deterministic reads against a static store, so a
/// failure is a defect in the definition and is never retried.
pub fn execute(source: &DataSource, query: &QueryDefinition) -> Result<TabularResult> {
    debug!(name = query.name, category = %query.category, "executing query");

    let query_err = |source| ThreatSearchError::Query {
        name: query.name.to_string(),
        source,
    };

    let mut stmt = source.conn().prepare(query.sql).map_err(query_err)?;

    let columns = stmt
        .columns()
        .into_iter()
        .map(Column::from)
        .collect::<Vec<_>>();
    let num_cols = columns.len();

    let mut rows = stmt.query([]).map_err(query_err)?;
    let mut data = Vec::new();
    while let Some(row) = rows.next().map_err(query_err)? {
        let mut tuple = Vec::with_capacity(num_cols);
        for idx in 0..num_cols {
            let v = row.get_ref(idx).map_err(query_err)?;
            tuple.push(Value::from(v));
        }
        data.push(tuple);
    }

    Ok(TabularResult {
        columns,
        rows: data,
    })
}
