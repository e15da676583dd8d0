//! Models shared by the integration tests.

use std::sync::{Arc, LazyLock};
use tabula::{
    schema::Column, Converter, Converters, Error, Model, ModelMeta, Result, Row, Status, Value,
};

static USERS: LazyLock<Arc<ModelMeta>> = LazyLock::new(|| {
    Arc::new(
        ModelMeta::builder("users")
            .database("app")
            .column("id")
            .column("name")
            .column(Column::with_converter("active", Converter::Boolean))
            .column(Column::with_converter("born", Converter::Date))
            .primary_key(["id"])
            .insert_id("id")
            .build(),
    )
});

/// `app.users`, keyed by an auto-increment `id`.
pub fn users() -> Arc<ModelMeta> {
    USERS.clone()
}

/// `memberships`, keyed by `(user_id, team_id)` with no generated id.
pub fn memberships() -> Arc<ModelMeta> {
    Arc::new(
        ModelMeta::builder("memberships")
            .columns(["user_id", "team_id", "role"])
            .primary_key(["user_id", "team_id"])
            .build(),
    )
}

/// A hand-written model over `app.users`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct User {
    pub id: Option<u64>,
    pub name: String,
    pub active: bool,
    status: Status,
}

impl User {
    pub fn new(name: &str, active: bool) -> User {
        User {
            name: name.to_string(),
            active,
            ..User::default()
        }
    }

    pub fn from_row(row: Row) -> Result<User> {
        let mut user = User::default();
        user.load(row)?;
        Ok(user)
    }
}

impl Model for User {
    fn meta(&self) -> &ModelMeta {
        &USERS
    }

    fn insert_values(&self, converters: &Converters) -> Row {
        let mut row = Row::new();
        if let Some(id) = self.id {
            row.insert("id", id);
        }
        row.insert("name", &self.name);
        row.insert("active", self.active);
        converters.apply(self.meta(), row)
    }

    fn update_values(&self, converters: &Converters) -> Row {
        let mut row = self.insert_values(converters);
        row.remove("id");
        row
    }

    fn primary_key_values(&self) -> Row {
        let mut row = Row::new();
        row.insert("id", self.id);
        row
    }

    fn assign(&mut self, column: &str, value: Value) -> Result<()> {
        match column {
            "id" => self.id = Some(value.to_u64()?),
            _ => return Err(Error::invalid_argument(format!("cannot assign `{column}`"))),
        }
        Ok(())
    }

    fn load(&mut self, row: Row) -> Result<()> {
        for (column, value) in row {
            match column.as_str() {
                "id" => self.id = Some(value.to_u64()?),
                "name" => self.name = String::try_from(value)?,
                "active" => self.active = value.to_bool()?,
                _ => {}
            }
        }
        Ok(())
    }

    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}

/// A `users` row as the database would return it.
pub fn user_row(id: u64, name: &str, active: bool) -> Row {
    let mut row = Row::new();
    row.insert("id", id);
    row.insert("name", name);
    row.insert("active", i64::from(active));
    row
}
