use std::mem;

use super::{Comma, Formatter, Params, ToSql};

use crate::stmt::{self, Statement};
use tabula_core::{JoinKind, TableName};

impl ToSql for &Statement {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self {
            Statement::Select(stmt) => stmt.to_sql(f),
            Statement::Insert(stmt) => stmt.to_sql(f),
            Statement::Update(stmt) => stmt.to_sql(f),
            Statement::Delete(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(&self.columns);
        let filter = self.filter.as_ref().map(|expr| (" WHERE ", expr));
        let group_by = (!self.group_by.is_empty()).then_some((" GROUP BY ", Comma(&self.group_by)));

        fmt!(f, "SELECT " columns " FROM " self.from);

        for join in &self.joins {
            fmt!(f, " " join);
        }

        fmt!(f, filter group_by);
    }
}

impl ToSql for &stmt::Join {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let kind = match self.kind {
            None => "JOIN ",
            Some(JoinKind::Inner) => "INNER JOIN ",
            Some(JoinKind::Left) => "LEFT JOIN ",
        };

        fmt!(f, kind self.table);

        if !self.on.is_empty() {
            let prev = mem::replace(&mut f.inline_values, true);
            fmt!(f, " ON " self.on);
            f.inline_values = prev;
        }
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let columns = Comma(&self.columns);
        let rows = Comma(self.rows.iter().map(|row| ("(", (Comma(row), ")"))));

        fmt!(f, "INSERT INTO " self.into " (" columns ") VALUES " rows);
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let assignments = Comma(
            self.assignments
                .iter()
                .map(|(column, value)| (column, (" = ", value))),
        );

        fmt!(f, "UPDATE " self.table " SET " assignments " WHERE " self.filter);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        fmt!(f, "DELETE FROM " self.from " WHERE " self.filter);
    }
}

impl ToSql for &TableName {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if let Some(database) = &self.database {
            fmt!(f, database ".");
        }
        fmt!(f, self.name);
    }
}
