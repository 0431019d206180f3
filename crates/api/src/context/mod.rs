//! Application context - dependency injection container

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use usersync_core::{
    BulkSyncController, EventDispatcher, EventTransport, InvocationAuthorizer, SettingsService,
    SettingsStore, UserSource,
};
use usersync_domain::{Config, Result};
use usersync_infra::{
    FileSettingsStore, HttpClient, JsonUserSource, KlaviyoClient, KlaviyoClientConfig,
    StaticTokenAuthorizer,
};

/// Type alias for user source port trait object
type DynUserSource = dyn UserSource;

/// Type alias for settings store port trait object
type DynSettingsStore = dyn SettingsStore;

/// Type alias for invocation authorizer port trait object
type DynInvocationAuthorizer = dyn InvocationAuthorizer;

/// Application context - holds all services and dependencies
///
/// The events transport is built per invocation from the stored
/// credentials, so a settings save takes effect on the next event.
pub struct AppContext {
    pub config: Config,
    pub users: Arc<DynUserSource>,
    pub settings: Arc<SettingsService>,
    pub authorizer: Arc<DynInvocationAuthorizer>,
    http: HttpClient,
}

impl AppContext {
    /// Wire the context from explicit port implementations.
    pub fn new(
        config: Config,
        users: Arc<DynUserSource>,
        settings_store: Arc<DynSettingsStore>,
        authorizer: Arc<DynInvocationAuthorizer>,
    ) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(KlaviyoClientConfig::from(&config.klaviyo).timeout)
            .user_agent(concat!("usersync/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            config,
            users,
            settings: Arc::new(SettingsService::new(settings_store)),
            authorizer,
            http,
        })
    }

    /// Wire the file-backed adapters: a JSON user export and a JSON
    /// settings file.
    pub fn from_files(
        config: Config,
        users_path: impl AsRef<Path>,
        settings_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let users = JsonUserSource::from_path(users_path)?;
        let store = FileSettingsStore::open(settings_path.as_ref())?;
        let authorizer = StaticTokenAuthorizer::new(config.sync.invocation_token.clone());

        info!(
            users = users.len(),
            settings = %store.path().display(),
            "Application context initialised"
        );

        Self::new(config, Arc::new(users), Arc::new(store), Arc::new(authorizer))
    }

    /// Events transport carrying the currently stored credentials.
    pub async fn transport(&self) -> Result<Arc<dyn EventTransport>> {
        let credentials = self.settings.credentials().await?;
        Ok(Arc::new(KlaviyoClient::with_http_client(
            self.http.clone(),
            KlaviyoClientConfig::from(&self.config.klaviyo),
            credentials,
        )))
    }

    pub async fn dispatcher(&self) -> Result<Arc<EventDispatcher>> {
        let transport = self.transport().await?;
        Ok(Arc::new(EventDispatcher::new(Arc::clone(&self.users), transport)))
    }

    pub async fn bulk_controller(&self) -> Result<BulkSyncController> {
        let dispatcher = self.dispatcher().await?;
        Ok(BulkSyncController::new(
            Arc::clone(&self.users),
            dispatcher,
            Arc::clone(&self.authorizer),
        ))
    }
}
