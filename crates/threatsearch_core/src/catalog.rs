//! The built-in query catalog.
//!
//! Each entry is a named, parameterless SQL template tagged with the
//! analytical pattern it demonstrates. Definitions are static and immutable;
//! "what query" is decided here, "how executed" lives in [`crate::executor`].

use std::fmt;
use std::str::FromStr;

use crate::errors::ThreatSearchError;

/// Analytical pattern demonstrated by a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryCategory {
    /// Row filtering, string shaping, conditional recoding.
    Organize,
    /// UNION / INTERSECT / EXCEPT over projected columns.
    SetOps,
    /// Cross-join pairing of dimension values.
    Pairing,
    /// Grouped aggregation.
    Aggregate,
    /// Long-to-wide pivoting.
    Reshape,
    /// CTE plus window functions over partitions.
    Window,
    /// Self-join matching adjacent periods within a group.
    IntervalJoin,
}

impl QueryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryCategory::Organize => "organize",
            QueryCategory::SetOps => "set-ops",
            QueryCategory::Pairing => "pairing",
            QueryCategory::Aggregate => "aggregate",
            QueryCategory::Reshape => "reshape",
            QueryCategory::Window => "window",
            QueryCategory::IntervalJoin => "interval-join",
        }
    }
}

impl fmt::Display for QueryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryCategory {
    type Err = ThreatSearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "organize" => QueryCategory::Organize,
            "set-ops" => QueryCategory::SetOps,
            "pairing" => QueryCategory::Pairing,
            "aggregate" => QueryCategory::Aggregate,
            "reshape" => QueryCategory::Reshape,
            "window" => QueryCategory::Window,
            "interval-join" => QueryCategory::IntervalJoin,
            other => return Err(ThreatSearchError::UnknownCategory(other.to_string())),
        })
    }
}

/// A named, immutable SQL query template.
///
/// `params` lists the expected bind parameters in order; every built-in
/// entry is parameterless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDefinition {
    pub name: &'static str,
    pub category: QueryCategory,
    pub sql: &'static str,
    pub params: &'static [&'static str],
}

/// Built-in catalog, in presentation order.
pub const BUILTIN_QUERIES: &[QueryDefinition] = &[
    QueryDefinition {
        name: "assessment_preview",
        category: QueryCategory::Organize,
        sql: "\
SELECT major_group,
       family,
       genus,
       plant_name,
       published_conservation_status AS published_status,
       interpreted_conservation_status AS interpreted_status,
       assessment_year,
       scope,
       source
  FROM plants_assessment
 LIMIT 10",
        params: &[],
    },
    QueryDefinition {
        name: "assessment_cleaned",
        category: QueryCategory::Organize,
        // The `plant` expression keeps the first two whitespace-delimited
        // tokens of `plant_name` (binomial without author citation). With one
        // delimiter the second token comes back empty, with none the whole
        // expression does; INSTR returns 0 and SUBSTR(x, 1, 0) is ''.
        sql: "\
SELECT major_group,
       family,
       genus,
       SUBSTR(plant_name, 1, INSTR(plant_name, ' '))
           || SUBSTR(REPLACE(plant_name, SUBSTR(plant_name, 1, INSTR(plant_name, ' ')), ''),
                     1,
                     INSTR(REPLACE(plant_name, SUBSTR(plant_name, 1, INSTR(plant_name, ' ')), ''),
                           ' ')) AS plant,
       published_conservation_status AS published_status,
       CASE
           WHEN interpreted_conservation_status = 'Data Deficient' THEN NULL
           ELSE interpreted_conservation_status
       END AS interpreted_status,
       assessment_year,
       assessment_year - 1970 AS study_year,
       CASE
           WHEN scope LIKE '%Unknown%' THEN NULL
           ELSE scope
       END AS scope,
       SUBSTR(source, 1, 30) AS short_source
  FROM plants_assessment
 ORDER BY ROWID DESC
 LIMIT 10",
        params: &[],
    },
    QueryDefinition {
        name: "scope_union",
        category: QueryCategory::SetOps,
        sql: "\
SELECT scope
  FROM plants_assessment
 WHERE interpreted_conservation_status = 'Not Threatened'
 GROUP BY scope
UNION
SELECT scope
  FROM plants_assessment
 WHERE interpreted_conservation_status = 'Threatened'
 GROUP BY scope",
        params: &[],
    },
    QueryDefinition {
        name: "scope_intersect",
        category: QueryCategory::SetOps,
        sql: "\
SELECT scope
  FROM plants_assessment
 WHERE interpreted_conservation_status = 'Not Threatened'
 GROUP BY scope
INTERSECT
SELECT scope
  FROM plants_assessment
 WHERE interpreted_conservation_status = 'Threatened'
 GROUP BY scope",
        params: &[],
    },
    QueryDefinition {
        name: "scope_except",
        category: QueryCategory::SetOps,
        sql: "\
SELECT scope
  FROM plants_assessment
 WHERE interpreted_conservation_status = 'Threatened'
 GROUP BY scope
EXCEPT
SELECT scope
  FROM plants_assessment
 WHERE interpreted_conservation_status = 'Not Threatened'
 GROUP BY scope",
        params: &[],
    },
    QueryDefinition {
        name: "group_year_pairs",
        category: QueryCategory::Pairing,
        sql: "\
SELECT m.major_group,
       y.assessment_year
  FROM (SELECT DISTINCT major_group FROM plants_assessment) m
       CROSS JOIN
       (SELECT DISTINCT assessment_year FROM plants_assessment) y
 WHERE m.major_group IS NOT NULL
   AND y.assessment_year IS NOT NULL
 ORDER BY m.major_group, y.assessment_year",
        params: &[],
    },
    QueryDefinition {
        name: "counts_by_major_group",
        category: QueryCategory::Aggregate,
        sql: "\
SELECT p.major_group,
       COUNT(DISTINCT p.family) AS unq_families,
       COUNT(DISTINCT p.genus) AS unq_genera,
       COUNT(p.plant_name) AS count_plants,
       MIN(p.assessment_year) AS min_year,
       MAX(p.assessment_year) AS max_year
  FROM plants_assessment p
 GROUP BY p.major_group",
        params: &[],
    },
    QueryDefinition {
        name: "counts_by_status",
        category: QueryCategory::Aggregate,
        sql: "\
SELECT p.interpreted_conservation_status,
       COUNT(DISTINCT p.family) AS unq_families,
       COUNT(DISTINCT p.genus) AS unq_genera,
       COUNT(p.plant_name) AS count_plants,
       MIN(p.assessment_year) AS min_year,
       MAX(p.assessment_year) AS max_year
  FROM plants_assessment p
 GROUP BY p.interpreted_conservation_status",
        params: &[],
    },
    QueryDefinition {
        name: "counts_by_group_and_status",
        category: QueryCategory::Aggregate,
        sql: "\
SELECT p.major_group,
       p.interpreted_conservation_status,
       COUNT(DISTINCT p.family) AS unq_families,
       COUNT(DISTINCT p.genus) AS unq_genera,
       COUNT(p.plant_name) AS count_plants,
       MIN(p.assessment_year) AS min_year,
       MAX(p.assessment_year) AS max_year
  FROM plants_assessment p
 GROUP BY p.major_group, p.interpreted_conservation_status",
        params: &[],
    },
    QueryDefinition {
        name: "threatened_by_year_wide",
        category: QueryCategory::Reshape,
        sql: "\
SELECT p.major_group,
       SUM(p.assessment_year = 2015) AS count_plants_2015,
       SUM(p.assessment_year = 2016) AS count_plants_2016,
       SUM(p.assessment_year = 2017) AS count_plants_2017,
       SUM(p.assessment_year = 2018) AS count_plants_2018,
       SUM(p.assessment_year = 2019) AS count_plants_2019,
       SUM(p.assessment_year = 2020) AS count_plants_2020
  FROM plants_assessment p
 WHERE p.interpreted_conservation_status = 'Threatened'
 GROUP BY p.major_group",
        params: &[],
    },
    QueryDefinition {
        name: "status_counts_wide",
        category: QueryCategory::Reshape,
        sql: "\
SELECT p.major_group,
       COUNT(*) AS count_plants,
       SUM(p.interpreted_conservation_status = 'Threatened') AS count_threatened_plants,
       SUM(p.interpreted_conservation_status = 'Not Threatened') AS count_not_threatened_plants
  FROM plants_assessment p
 WHERE p.assessment_year >= 2015
 GROUP BY p.major_group",
        params: &[],
    },
    QueryDefinition {
        name: "status_share_within_group",
        category: QueryCategory::Window,
        // `* 1.00` scales the count to a real so the pct division below is
        // not integer division.
        sql: "\
WITH sub AS (
    SELECT p.major_group,
           p.interpreted_conservation_status,
           COUNT(DISTINCT p.family) AS unq_families,
           COUNT(DISTINCT p.genus) AS unq_genera,
           COUNT(p.plant_name) * 1.00 AS count_plants,
           MIN(p.assessment_year) AS min_year,
           MAX(p.assessment_year) AS max_year
      FROM plants_assessment p
     GROUP BY p.major_group, p.interpreted_conservation_status
)
SELECT sub.major_group,
       sub.interpreted_conservation_status,
       sub.count_plants,
       ROW_NUMBER() OVER (PARTITION BY sub.major_group
                          ORDER BY sub.count_plants DESC) AS rn,
       SUM(sub.count_plants) OVER (PARTITION BY sub.major_group) AS group_sum,
       ROUND(sub.count_plants / SUM(sub.count_plants)
                                    OVER (PARTITION BY sub.major_group), 4) * 100 AS pct_total,
       SUM(sub.count_plants) OVER (PARTITION BY sub.major_group
                                   ORDER BY sub.count_plants DESC) AS run_sum
  FROM sub
 ORDER BY sub.major_group, sub.count_plants DESC",
        params: &[],
    },
    QueryDefinition {
        name: "year_over_year_change",
        category: QueryCategory::IntervalJoin,
        // Percent change is undefined when the later year has no plants;
        // the CASE marks it NULL instead of leaning on engine division
        // behavior.
        sql: "\
WITH sub AS (
    SELECT p.major_group,
           p.assessment_year,
           COUNT(p.plant_name) * 1.00 AS count_plants
      FROM plants_assessment p
     WHERE p.interpreted_conservation_status = 'Threatened'
     GROUP BY p.major_group, p.assessment_year
)
SELECT s1.major_group,
       s1.assessment_year AS year1,
       s2.assessment_year AS year2,
       s1.count_plants AS count_plants_y1,
       s2.count_plants AS count_plants_y2,
       CASE
           WHEN s2.count_plants = 0 THEN NULL
           ELSE ROUND((s2.count_plants - s1.count_plants) / s2.count_plants, 2)
       END AS year_pct_change
  FROM sub s1
       INNER JOIN sub s2
          ON s1.major_group = s2.major_group
         AND s1.assessment_year = s2.assessment_year - 1
 ORDER BY s1.major_group, s1.assessment_year DESC, s2.assessment_year DESC",
        params: &[],
    },
];
