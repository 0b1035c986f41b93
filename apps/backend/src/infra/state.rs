use sea_orm::TransactionTrait;

use crate::config::palette::DEFAULT_PALETTE;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::services::color_wheel::seed_default_palette;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_url: Option<String>,
    default_palette: Vec<String>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_url: None,
            default_palette: DEFAULT_PALETTE.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    /// Replace the colors seeded into an empty color wheel.
    pub fn with_default_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_palette = palette.into_iter().map(Into::into).collect();
        self
    }

    /// Connect, migrate and seed; without a database URL the state has no DB.
    pub async fn build(self) -> Result<AppState, AppError> {
        let Some(url) = self.db_url else {
            return Ok(AppState::without_db());
        };

        let conn = bootstrap_db(&url).await?;

        let txn = conn.begin().await?;
        seed_default_palette(&txn, &self.default_palette).await?;
        txn.commit().await?;

        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
