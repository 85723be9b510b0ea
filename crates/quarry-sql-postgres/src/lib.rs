//! # quarry-sql-postgres
//!
//! PostgreSQL-specific extensions for `quarry-sql-core`.
//!
//! # How PostgreSQL differs from other dialects
//!
//! - **[UPSERT]**: PostgreSQL supports `INSERT ... ON CONFLICT DO NOTHING`
//!   and `ON CONFLICT DO UPDATE SET ...` (since PostgreSQL 9.5), with an
//!   optional `WHERE` guard on the update. This crate provides
//!   [`OnConflict`] fragments and the [`UpsertExt`] attachment trait.
//! - **[RETURNING]**: PostgreSQL supports `RETURNING` clauses on INSERT,
//!   UPDATE and DELETE. See [`Returning`] and [`ReturningExt`].
//! - **[Inheritance]**: `UPDATE ONLY` and `DELETE FROM ONLY` restrict a
//!   statement to the named table, excluding child tables. See
//!   [`OnlyTables`].
//! - **Identifier quoting**: PostgreSQL uses double quotes (`"`) and
//!   folds unquoted identifiers to lower case.
//!
//! All extensions ride on the statement start and end override slots,
//! so the result stays an ordinary core statement tree and compiles
//! through the same builder.
//!
//! [UPSERT]: https://www.postgresql.org/docs/current/sql-insert.html#SQL-ON-CONFLICT
//! [RETURNING]: https://www.postgresql.org/docs/current/dml-returning.html
//! [Inheritance]: https://www.postgresql.org/docs/current/ddl-inherit.html
//!
//! ## Example
//!
//! ```rust
//! use quarry_sql_core::{ParamSession, Query};
//! use quarry_sql_postgres::{OnConflict, ReturningExt, UpsertExt};
//!
//! let session = ParamSession::new();
//! let insert = Query::insert()
//!     .into_table("user")
//!     .add_values([("email", "ann@example.com"), ("name", "Ann")])
//!     .on_conflict(OnConflict::on_columns(["email"]).do_update(["name"]))
//!     .returning(["id"]);
//!
//! let expr = quarry_sql_postgres::builder(&session).build(&insert.into())?;
//! assert_eq!(
//!     expr.sql(),
//!     "INSERT INTO user (email, name) VALUES (:v1, :v2) \
//!      ON CONFLICT (email) DO UPDATE SET name = excluded.name RETURNING id"
//! );
//! # Ok::<(), quarry_sql_core::BuildError>(())
//! ```

mod fragment;
mod only;
mod returning;
mod upsert;

pub use only::OnlyTables;
pub use returning::{Returning, ReturningExt};
pub use upsert::{OnConflict, UpsertExt};

use quarry_sql_core::{Dialect, ParamSession, QueryBuilder};

/// Creates a statement builder tagged with the PostgreSQL dialect.
#[must_use]
pub const fn builder(session: &ParamSession) -> QueryBuilder<'_> {
    QueryBuilder::with_dialect(session, Dialect::Postgres)
}
