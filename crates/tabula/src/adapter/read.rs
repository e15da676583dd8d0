use super::Adapter;
use crate::{Model, Status};

use tabula_core::{Criteria, ModelMeta, Result, Row};
use tabula_sql::Statement;

impl Adapter<'_> {
    /// Selects the first row matching `criteria` and builds a model from it.
    ///
    /// No match is `Ok(None)`, not an error.
    pub async fn find<M, F>(
        &mut self,
        meta: &ModelMeta,
        criteria: &Criteria,
        build: F,
    ) -> Result<Option<M>>
    where
        M: Model,
        F: FnOnce(Row) -> Result<M>,
    {
        let stmt = Statement::select(meta, criteria);
        let (sql, params) = self.compile(&stmt);

        let Some(row) = self.one_row(&sql, &params).await? else {
            return Ok(None);
        };

        let mut model = build(row)?;
        model.set_status(Status::Loaded);
        Ok(Some(model))
    }

    /// Selects every row matching `criteria`, building one model per row in
    /// the order the database returned them.
    pub async fn find_all<M, F>(
        &mut self,
        meta: &ModelMeta,
        criteria: &Criteria,
        mut build: F,
    ) -> Result<Vec<M>>
    where
        M: Model,
        F: FnMut(Row) -> Result<M>,
    {
        let stmt = Statement::select(meta, criteria);
        let (sql, params) = self.compile(&stmt);

        self.all_rows(&sql, &params)
            .await?
            .into_iter()
            .map(|row| {
                let mut model = build(row)?;
                model.set_status(Status::Loaded);
                Ok(model)
            })
            .collect()
    }
}
