//! Shared fixtures for crate tests.

use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;

/// A throwaway on-disk database; the directory is removed on drop.
pub(crate) struct TestDb {
    pub(crate) path: PathBuf,
    _dir: TempDir,
}

const SCHEMA: &str = "\
CREATE TABLE plants_assessment (
    major_group TEXT,
    family TEXT,
    genus TEXT,
    plant_name TEXT,
    published_conservation_status TEXT,
    interpreted_conservation_status TEXT,
    assessment_year INTEGER,
    scope TEXT,
    source TEXT
);";

// Hand-picked rows covering each demonstrated pattern: a NULL family, a
// 'Data Deficient' sentinel, an 'Unknown source' scope, plant names with
// zero, one and many spaces, and threatened counts in adjacent years.
const FIXTURE_ROWS: &str = "\
INSERT INTO plants_assessment VALUES
    ('Flowering plants', 'Rosaceae', 'Rosa', 'Rosa canina L.',
     'EN', 'Threatened', 2015, 'Global', 'Red List of Vascular Plants vol. 2'),
    ('Flowering plants', 'Rosaceae', 'Malus', 'Malus sylvestris',
     'EN', 'Threatened', 2016, 'Global', 'Red List of Vascular Plants vol. 2'),
    ('Flowering plants', 'Fabaceae', 'Acacia', 'Acacia dealbata Link',
     'VU', 'Threatened', 2016, 'Europe', 'European inventory of rare taxa'),
    ('Flowering plants', NULL, 'Silene', 'Mystery',
     'NT', 'Not Threatened', 2016, 'Global', 'European inventory of rare taxa'),
    ('Mosses', 'Sphagnaceae', 'Sphagnum', 'Sphagnum magellanicum Brid.',
     'LC', 'Not Threatened', 2015, 'Europe', 'Moss survey'),
    ('Mosses', 'Sphagnaceae', 'Sphagnum', 'Sphagnum palustre',
     'DD', 'Data Deficient', 2017, 'Unknown source', 'Moss survey'),
    ('Ferns', 'Pteridaceae', 'Adiantum', 'Adiantum capillus-veneris L.',
     'CR', 'Threatened', 2015, 'Asia', 'Fern atlas');";

fn create_db(sql: &str) -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assessments.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(sql).unwrap();
    TestDb { path, _dir: dir }
}

/// Seven known rows across three major groups.
pub(crate) fn test_db() -> TestDb {
    create_db(&format!("{SCHEMA}\n{FIXTURE_ROWS}"))
}

/// Schema only, for tests that insert their own rows.
pub(crate) fn empty_db() -> TestDb {
    create_db(SCHEMA)
}
