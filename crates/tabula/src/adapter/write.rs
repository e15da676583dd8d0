use super::Adapter;
use crate::{Model, Status};

use tabula_core::{Criteria, Error, ModelMeta, Result, Row, Value};
use tabula_sql::Statement;

impl Adapter<'_> {
    /// Inserts `model`, then reloads it by primary key.
    ///
    /// When the model declares an insert-id column and the database reports
    /// a nonzero generated id, that id addresses the reload and is assigned
    /// to the model. If anything fails, including a reload that finds no
    /// row, the model is left as it was. The inserted row is not rolled
    /// back; wrap the call in a transaction to get that.
    pub async fn insert<M: Model + ?Sized>(&mut self, model: &mut M) -> Result<()> {
        let values = model.insert_values(&self.config.converters);
        let stmt = Statement::insert(model.meta(), &values);
        let response = self.exec(&stmt).await?;

        let mut key = model.primary_key_values();

        let generated = match &model.meta().insert_id {
            Some(column) if response.last_insert_id != 0 => {
                let id = Value::U64(response.last_insert_id);
                key.insert(column.as_str(), id.clone());
                Some((column.clone(), id))
            }
            _ => None,
        };

        let row = self.reload(model.meta(), &key).await?;

        if let Some((column, id)) = generated {
            model.assign(&column, id)?;
        }

        model.load(row)?;
        model.set_status(Status::Loaded);
        Ok(())
    }

    /// Updates `model` by primary key, then reloads it. Failure semantics
    /// match [`Adapter::insert`].
    pub async fn update<M: Model + ?Sized>(&mut self, model: &mut M) -> Result<()> {
        let values = model.update_values(&self.config.converters);
        let key = model.primary_key_values();

        let stmt = Statement::update(model.meta(), &values, &key)?;
        self.exec(&stmt).await?;

        let row = self.reload(model.meta(), &key).await?;

        model.load(row)?;
        model.set_status(Status::Loaded);
        Ok(())
    }

    /// Deletes the row backing `model`. The model keeps its in-memory values
    /// and status; nothing is reloaded.
    pub async fn remove<M: Model + ?Sized>(&mut self, model: &M) -> Result<()> {
        let stmt = Statement::delete(model.meta(), &model.primary_key_values())?;
        self.exec(&stmt).await?;
        Ok(())
    }

    /// Inserts every model with one multi-row statement. Models are not
    /// reloaded and their status does not change.
    pub async fn bulk_insert<M: Model>(&mut self, models: &[M]) -> Result<()> {
        let meta = shared_meta(models, "bulk insert")?;

        let rows = models
            .iter()
            .map(|model| model.insert_values(&self.config.converters))
            .collect::<Vec<_>>();

        let stmt = Statement::insert_many(meta, &rows)?;
        self.exec(&stmt).await?;
        Ok(())
    }

    /// Deletes every model's row with one statement.
    pub async fn bulk_remove<M: Model>(&mut self, models: &[M]) -> Result<()> {
        let meta = shared_meta(models, "bulk remove")?;

        let keys = models
            .iter()
            .map(|model| model.primary_key_values())
            .collect::<Vec<_>>();

        let stmt = Statement::delete_many(meta, &keys)?;
        self.exec(&stmt).await?;
        Ok(())
    }

    /// Selects the row addressed by `key`.
    async fn reload(&mut self, meta: &ModelMeta, key: &Row) -> Result<Row> {
        if let Some(missing) = meta
            .primary_key_columns()
            .find(|column| key.get(column).map_or(true, Value::is_null))
        {
            return Err(Error::invalid_argument(format!(
                "cannot reload `{}` without primary key value `{missing}`",
                meta.table
            )));
        }

        let stmt = Statement::select(meta, &Criteria::by_primary_key(meta, key));
        let (sql, params) = self.compile(&stmt);

        match self.one_row(&sql, &params).await? {
            Some(row) => Ok(row),
            None => {
                tracing::warn!(table = %meta.table, "row not found when reloading after write");
                Err(Error::empty_result(format!(
                    "reload of `{}` found no row for {key:?}",
                    meta.table
                )))
            }
        }
    }
}

/// The metadata every model in `models` shares.
fn shared_meta<'a, M: Model>(models: &'a [M], op: &str) -> Result<&'a ModelMeta> {
    let [first, rest @ ..] = models else {
        return Err(Error::invalid_argument(format!("{op} needs at least one model")));
    };

    let meta = first.meta();

    if rest.iter().any(|model| !model.meta().same_table(meta)) {
        return Err(Error::invalid_argument(format!(
            "{op} models must all belong to `{}`",
            meta.table
        )));
    }

    Ok(meta)
}
