//! `ONLY` table modifiers for statements against inheritance parents.

use quarry_sql_core::{DeleteQuery, UpdateQuery, Value};

/// Restricts UPDATE and DELETE statements to the named table itself,
/// excluding any inheriting child tables.
pub trait OnlyTables: Sized {
    /// Rewrites the statement keyword to address `ONLY` the table.
    #[must_use]
    fn only(self) -> Self;
}

impl OnlyTables for UpdateQuery {
    fn only(self) -> Self {
        self.start(Value::raw("UPDATE ONLY"))
    }
}

impl OnlyTables for DeleteQuery {
    fn only(self) -> Self {
        self.start(Value::raw("DELETE FROM ONLY"))
    }
}

#[cfg(test)]
mod tests {
    use quarry_sql_core::{Cond, ParamSession, Query, QueryBuilder, Statement};

    use super::*;

    fn compile(statement: &Statement) -> String {
        let session = ParamSession::new();
        QueryBuilder::new(&session)
            .build(statement)
            .expect("statement should compile")
            .sql()
            .to_owned()
    }

    #[test]
    fn test_update_only() {
        let statement = Query::update()
            .table("measurement")
            .add_set([("flag", "checked")])
            .only()
            .into();

        assert_eq!(compile(&statement), "UPDATE ONLY measurement SET flag = :v1");
    }

    #[test]
    fn test_delete_only() {
        let statement = Query::delete()
            .from("measurement")
            .where_clause(Cond::eq("city_id", 4))
            .only()
            .into();

        assert_eq!(
            compile(&statement),
            "DELETE FROM ONLY measurement WHERE city_id = :v1"
        );
    }
}
