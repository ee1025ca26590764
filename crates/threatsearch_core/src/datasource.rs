use std::fmt;
use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::errors::{Result, ThreatSearchError};

/// Read-only handle to an assessment snapshot.
///
/// The underlying connection is closed when the handle is dropped, on every
/// exit path. All executions within one run share the same handle; since the
/// store is opened read-only there is no write ordering to coordinate.
pub struct DataSource {
    path: PathBuf,
    conn: Connection,
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataSource({})", self.path.display())
    }
}

impl DataSource {
    /// Open the SQLite store at `path` for reading.
    ///
    /// Fails when the file is missing, unreadable, or not a SQLite database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let connection_err = |source| ThreatSearchError::Connection {
            path: path.clone(),
            source,
        };

        let conn = Connection::open_with_flags(&path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(connection_err)?;

        // SQLite defers reading the file header until first use; force it
        // here so a corrupt or non-database file fails at open time.
        conn.query_row("SELECT COUNT(*) FROM sqlite_master", [], |_| Ok(()))
            .map_err(connection_err)?;

        Ok(Self { path, conn })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }
}
