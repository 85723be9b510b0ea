//! SQL dialect tags.

use std::fmt;

/// The engine a statement is destined for.
///
/// The tag rides along through compilation without changing the text the
/// core emits; extension crates and callers branch on it when an engine
/// needs special treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    /// Standard SQL, the default.
    #[default]
    Ansi,
    /// Amazon Athena.
    Athena,
    /// Google BigQuery.
    BigQuery,
    /// ClickHouse.
    ClickHouse,
    /// Databricks SQL.
    Databricks,
    /// IBM Db2.
    Db2,
    /// DuckDB.
    DuckDb,
    /// Exasol.
    Exasol,
    /// Greenplum.
    Greenplum,
    /// MySQL and close relatives.
    MySql,
    /// Oracle Database.
    Oracle,
    /// PostgreSQL.
    Postgres,
    /// Amazon Redshift.
    Redshift,
    /// Snowflake.
    Snowflake,
    /// Salesforce Object Query Language.
    Soql,
    /// Apache Spark SQL.
    SparkSql,
    /// SQLite.
    Sqlite,
    /// Microsoft T-SQL.
    TransactSql,
    /// Teradata.
    Teradata,
    /// Trino and Presto.
    Trino,
}

impl Dialect {
    /// Returns the display name of the dialect.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ansi => "Ansi",
            Self::Athena => "Athena",
            Self::BigQuery => "BigQuery",
            Self::ClickHouse => "ClickHouse",
            Self::Databricks => "Databricks",
            Self::Db2 => "Db2",
            Self::DuckDb => "DuckDB",
            Self::Exasol => "Exasol",
            Self::Greenplum => "Greenplum",
            Self::MySql => "MySQL",
            Self::Oracle => "Oracle",
            Self::Postgres => "PostgreSQL",
            Self::Redshift => "Redshift",
            Self::Snowflake => "Snowflake",
            Self::Soql => "SOQL",
            Self::SparkSql => "SparkSQL",
            Self::Sqlite => "SQLite",
            Self::TransactSql => "T-SQL",
            Self::Teradata => "Teradata",
            Self::Trino => "Trino",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ansi() {
        assert_eq!(Dialect::default(), Dialect::Ansi);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Dialect::Postgres.as_str(), "PostgreSQL");
        assert_eq!(Dialect::TransactSql.as_str(), "T-SQL");
        assert_eq!(Dialect::SparkSql.to_string(), "SparkSQL");
    }
}
