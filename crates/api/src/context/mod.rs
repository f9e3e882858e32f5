//! Application context - dependency injection container

use std::sync::Arc;

use shiftcal_core::{DocumentStore, IdentityProvider, ScheduleService};
use shiftcal_domain::{local_today, Config, Result, StoreBackend};
use shiftcal_infra::{DbManager, MemoryDocumentStore, SqliteDocumentStore, StaticIdentityProvider};
use tracing::info;

/// Type alias for document store port trait object
type DynDocumentStore = dyn DocumentStore;

/// Type alias for identity provider port trait object
type DynIdentityProvider = dyn IdentityProvider;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    /// `None` for the memory backend.
    pub db: Option<Arc<DbManager>>,
    pub store: Arc<DynDocumentStore>,
    pub identity: Arc<DynIdentityProvider>,
    pub schedule: Arc<ScheduleService>,
}

impl AppContext {
    /// Initialize the application context from the loaded configuration
    pub async fn new() -> Result<Self> {
        let config = shiftcal_infra::config::load()?;
        Self::new_with_config(config).await
    }

    /// Initialize the application context with a custom config
    ///
    /// Opens the configured store, resolves the identity and loads the
    /// signed-in user's document (writing defaults on first login).
    pub async fn new_with_config(config: Config) -> Result<Self> {
        let (db, store) = open_store(&config)?;
        let identity: Arc<DynIdentityProvider> =
            Arc::new(StaticIdentityProvider::from_config(config.identity.user_id.as_deref()));

        let schedule =
            Arc::new(ScheduleService::new(Arc::clone(&store), Arc::clone(&identity), local_today()));
        let state = schedule.load_session().await?;

        info!(
            backend = %config.store.backend,
            signed_in = state.user().is_some(),
            "application context ready"
        );

        Ok(Self { config, db, store, identity, schedule })
    }

    /// Probe the backing store. Always healthy for the memory backend.
    pub fn health_check(&self) -> Result<()> {
        match &self.db {
            Some(db) => db.health_check(),
            None => Ok(()),
        }
    }
}

fn open_store(config: &Config) -> Result<(Option<Arc<DbManager>>, Arc<DynDocumentStore>)> {
    match config.store.backend {
        StoreBackend::Memory => {
            info!("using in-memory document store");
            let store: Arc<DynDocumentStore> = Arc::new(MemoryDocumentStore::new());
            Ok((None, store))
        }
        StoreBackend::Sqlite => {
            let db = Arc::new(DbManager::new(&config.store.path, config.store.pool_size)?);
            db.run_migrations()?;
            info!(path = %db.path().display(), "using SQLite document store");
            let store: Arc<DynDocumentStore> = Arc::new(SqliteDocumentStore::new(Arc::clone(&db)));
            Ok((Some(db), store))
        }
    }
}
