//! Startup load / after-mutation save around the attendance store.
//!
//! Persistence problems never abort a command: they are logged, reported
//! as a warning, and the in-memory state carries on.

use crate::config::Config;
use crate::core::store::AttendanceStore;
use crate::db::log::append_journal;
use crate::db::pool::DbPool;
use crate::db::snapshot::{load_snapshot, save_snapshot};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

pub struct AppState {
    pool: Option<DbPool>,
    pub store: AttendanceStore,
}

impl AppState {
    /// Open the configured database and load the saved snapshot, falling
    /// back to the default roster.
    pub fn open(cfg: &Config) -> Self {
        let pool = match DbPool::new(&cfg.database) {
            Ok(p) => Some(p),
            Err(e) => {
                report(&AppError::Persistence(format!(
                    "cannot open {}: {}",
                    cfg.database, e
                )));
                None
            }
        };

        Self::with_pool(pool)
    }

    pub fn with_pool(pool: Option<DbPool>) -> Self {
        let store = match pool.as_ref().map(|p| load_snapshot(&p.conn)) {
            Some(Ok(Some(snapshot))) => AttendanceStore::from_snapshot(snapshot),
            Some(Ok(None)) | None => AttendanceStore::with_default_roster(),
            Some(Err(e)) => {
                report(&AppError::Persistence(format!("cannot load saved state: {}", e)));
                AttendanceStore::with_default_roster()
            }
        };

        Self { pool, store }
    }

    /// Persist the current store. Returns false when nothing was written.
    pub fn save(&self) -> bool {
        let Some(pool) = &self.pool else {
            return false;
        };

        match save_snapshot(&pool.conn, &self.store.snapshot()) {
            Ok(()) => true,
            Err(e) => {
                report(&AppError::Persistence(format!("cannot save state: {}", e)));
                false
            }
        }
    }

    /// Save, then record the operation in the journal.
    pub fn commit(&self, operation: &str, target: &str, message: &str) {
        if self.save() {
            self.journal(operation, target, message);
        }
    }

    pub fn journal(&self, operation: &str, target: &str, message: &str) {
        if let Some(pool) = &self.pool
            && let Err(e) = append_journal(&pool.conn, operation, target, message)
        {
            tracing::warn!(operation, error = %e, "failed to write journal entry");
        }
    }

    pub fn pool(&self) -> AppResult<&DbPool> {
        self.pool
            .as_ref()
            .ok_or_else(|| AppError::Persistence("database is not available".into()))
    }
}

fn report(err: &AppError) {
    tracing::error!(error = %err, "persistence failure");
    warning(format!("{err} (continuing without saved state)"));
}
