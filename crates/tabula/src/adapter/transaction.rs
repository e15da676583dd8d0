use super::Adapter;

use tabula_core::Result;

impl Adapter<'_> {
    /// `START TRANSACTION`. Nesting is not tracked; starting a second
    /// transaction on the same connection is up to the database.
    pub async fn start_transaction(&mut self) -> Result<()> {
        tracing::debug!("starting transaction");
        self.run("START TRANSACTION", &[]).await?;
        Ok(())
    }

    pub async fn commit_transaction(&mut self) -> Result<()> {
        tracing::debug!("committing transaction");
        self.run("COMMIT", &[]).await?;
        Ok(())
    }

    pub async fn rollback_transaction(&mut self) -> Result<()> {
        tracing::debug!("rolling back transaction");
        self.run("ROLLBACK", &[]).await?;
        Ok(())
    }
}
