use super::{ColumnRef, Expr, Statement};

use tabula_core::{criteria, Criteria, JoinKind, ModelMeta, TableName};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub columns: Vec<ColumnRef>,
    pub from: TableName,
    pub joins: Vec<Join>,
    pub filter: Option<Expr>,
    pub group_by: Vec<ColumnRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub table: TableName,
    pub kind: Option<JoinKind>,

    /// Serialized with values embedded as escaped literals rather than bound
    pub on: Expr,
}

impl Statement {
    /// Select every declared column of `meta`, narrowed by `criteria`.
    ///
    /// Columns are qualified with the bare table name so joined tables
    /// cannot make them ambiguous, and the result is grouped by the primary
    /// key so a join never yields more than one row per entity.
    pub fn select(meta: &ModelMeta, criteria: &Criteria) -> Statement {
        let table = meta.table.name.as_str();

        let filter = criteria
            .filter
            .iter()
            .map(|(column, condition)| {
                Expr::predicate(ColumnRef::qualify(table, column), condition.clone())
            })
            .collect::<Vec<_>>();

        Select {
            columns: meta
                .column_names()
                .map(|column| ColumnRef::qualified(table, column))
                .collect(),
            from: meta.table.clone(),
            joins: criteria.joins.iter().map(Join::from).collect(),
            filter: (!filter.is_empty()).then_some(Expr::And(filter)),
            group_by: meta
                .primary_key_columns()
                .map(|column| ColumnRef::qualified(table, column))
                .collect(),
        }
        .into()
    }
}

impl From<&criteria::Join> for Join {
    fn from(join: &criteria::Join) -> Self {
        Join {
            table: join.table.clone(),
            kind: join.kind,
            on: Expr::And(
                join.on
                    .iter()
                    .map(|(column, condition)| {
                        Expr::predicate(ColumnRef::bare(column.as_str()), condition.clone())
                    })
                    .collect(),
            ),
        }
    }
}
