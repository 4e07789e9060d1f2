use crate::http::{
    AuthenticatedClient, CredentialSource, PublicClient, RemoteProfileResolver, Transport,
};
use crate::pages::{
    DashboardController, HistoryController, LoginController, ProfileController, RegisterController,
};
use crate::{ClientResult, Navigator, Session, SessionState};

use mm_auth::{CredentialStore, FileCredentialStore, IdentityResolver, LocalClaimResolver};
use mm_config::{Config, IdentityStrategy};
use mm_core::MoodTextBounds;

use std::sync::Arc;

use log::{info, warn};

/// Application root: one session, one client pair, and the page controllers
/// built on top of them.
pub struct MoodMuse {
    config: Config,
    session: Arc<Session>,
    public: Arc<PublicClient>,
    api: Arc<AuthenticatedClient>,
}

impl MoodMuse {
    /// Build the root with the credential file the configuration points at.
    ///
    /// Without a usable config directory the credential store is detached:
    /// nothing is remembered across runs and logins fail to persist.
    pub fn from_config(config: Config, navigator: Arc<dyn Navigator>) -> ClientResult<Self> {
        let key = config.storage.credential_key.clone();
        let store = match config.credential_path() {
            Ok(path) => FileCredentialStore::new(path, key),
            Err(e) => {
                warn!("No credential file available ({e}), credentials will not persist");
                FileCredentialStore::detached(key)
            }
        };
        Self::with_store(config, Arc::new(store), navigator)
    }

    pub fn with_store(
        config: Config,
        store: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> ClientResult<Self> {
        let transport = Transport::new(&config.api.normalized_base_url())?;
        let resolver = build_resolver(config.session.identity_strategy, &transport);
        info!(
            "Session uses {} identity resolution against {}",
            resolver.name(),
            transport.base_url()
        );

        let session = Arc::new(Session::new(store, resolver, navigator));
        let credentials: Arc<dyn CredentialSource> = session.clone();
        let api = Arc::new(AuthenticatedClient::new(transport.clone(), credentials));
        let public = Arc::new(PublicClient::new(transport));

        Ok(Self {
            config,
            session,
            public,
            api,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub fn public_client(&self) -> &Arc<PublicClient> {
        &self.public
    }

    pub fn api(&self) -> &Arc<AuthenticatedClient> {
        &self.api
    }

    pub async fn init(&self) -> ClientResult<SessionState> {
        self.session.init().await
    }

    pub fn dispose(&self) {
        self.session.dispose();
    }

    // =========================================================================
    // Pages
    // =========================================================================

    pub fn login_page(&self) -> LoginController {
        LoginController::new(self.public.clone(), self.session.clone())
    }

    pub fn register_page(&self) -> RegisterController {
        RegisterController::new(self.public.clone(), self.session.clone())
    }

    pub fn dashboard_page(&self) -> DashboardController {
        let bounds = MoodTextBounds {
            min: self.config.validation.min_mood_text_length,
            max: self.config.validation.max_mood_text_length,
        };
        DashboardController::new(self.api.clone(), bounds)
    }

    pub fn history_page(&self) -> HistoryController {
        HistoryController::new(self.api.clone(), self.config.history.page_size)
    }

    pub fn profile_page(&self) -> ProfileController {
        ProfileController::new(self.api.clone(), self.session.clone())
    }
}

/// The identity resolver for the configured strategy
pub fn build_resolver(
    strategy: IdentityStrategy,
    transport: &Transport,
) -> Arc<dyn IdentityResolver> {
    match strategy {
        IdentityStrategy::Remote => Arc::new(RemoteProfileResolver::new(transport.clone())),
        IdentityStrategy::LocalClaims => Arc::new(LocalClaimResolver::default()),
    }
}
