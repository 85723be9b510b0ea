//! # quarry-sql-core
//!
//! DML statements as plain data: build SELECT, INSERT, UPDATE and
//! DELETE trees with fluent setters, then compile them into SQL text
//! plus an ordered map of named parameters.
//!
//! ## Features
//!
//! - Statement trees for the four DML kinds with consuming, chainable setters
//! - Conditions as data: equality maps, AND/OR/NOT compounds, ranges,
//!   membership checks and raw fragments
//! - Session-scoped placeholder naming (`:v1`, `:v2`, ...) that stays
//!   disjoint across every statement compiled in the session
//! - Filter entry points that drop absent inputs before compiling
//! - Union branches with ORDER BY hoisted behind the last branch
//! - A dialect tag threaded through for engine-specific extension crates
//!
//! ## Building a statement
//!
//! ```rust
//! use quarry_sql_core::{Cond, ParamSession, Query, QueryBuilder};
//!
//! let session = ParamSession::new();
//! let query = Query::select()
//!     .from("user")
//!     .where_clause(Cond::equality([("id", 2), ("age", 30)]));
//!
//! let expr = QueryBuilder::new(&session).build(&query.into())?;
//! assert_eq!(expr.sql(), "SELECT * FROM user WHERE id = :v1 AND age = :v2");
//! assert_eq!(expr.params().len(), 2);
//! # Ok::<(), quarry_sql_core::BuildError>(())
//! ```
//!
//! ## Heterogeneous insert rows
//!
//! The first row fixes the column list; later rows reorder to it, fill
//! missing columns with `NULL` and drop surplus keys.
//!
//! ```rust
//! use quarry_sql_core::{ParamSession, Query, QueryBuilder};
//!
//! let session = ParamSession::new();
//! let insert = Query::insert()
//!     .into_table("user")
//!     .add_values([("name", "John"), ("surname", "Jonson")])
//!     .add_values([("surname", "Nelson"), ("name", "Mike")]);
//!
//! let expr = QueryBuilder::new(&session).build(&insert.into())?;
//! assert_eq!(
//!     expr.sql(),
//!     "INSERT INTO user (name, surname) VALUES (:v1, :v2), (:v3, :v4)"
//! );
//! # Ok::<(), quarry_sql_core::BuildError>(())
//! ```

pub mod builder;
pub mod cond;
pub mod dialect;
pub mod error;
pub mod expr;
pub mod query;
pub mod session;
pub mod value;

pub use builder::{QueryBuilder, MAX_DEPTH};
pub use cond::{CompoundOp, Cond};
pub use dialect::Dialect;
pub use error::{BuildError, Result};
pub use expr::{Expression, Params};
pub use query::{
    DeleteQuery, InsertQuery, InsertRow, Join, JoinKind, OrderItem, Query, SelectItem,
    SelectQuery, SetItem, Statement, TableRef, TableSource, UnionSource, UpdateQuery,
};
pub use session::ParamSession;
pub use value::{SqlValue, ToSqlValue, Value};
