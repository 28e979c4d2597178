//! Effect executor.
//!
//! Checks describe their side effects as plain `Effect` values; this module
//! owns applying them to the real collaborators. Persistence failures are
//! logged and swallowed here: a failed write must never abort the remainder
//! of a pass or reach the UI layer as a crash.

use std::sync::Arc;

use log::{debug, error};

use crate::model::Effect;
use crate::traits::{AlertEmitter, AppStateStore, BannerStore, Navigator};

/// Applies check effects to the banner store, alert emitter, navigator, and
/// app state store.
pub struct EffectExecutor {
    banners: Arc<dyn BannerStore>,
    alerts: Arc<dyn AlertEmitter>,
    navigator: Arc<dyn Navigator>,
    app_state: Arc<dyn AppStateStore>,
}

impl EffectExecutor {
    /// Creates a new executor over the given collaborators.
    pub fn new(
        banners: Arc<dyn BannerStore>,
        alerts: Arc<dyn AlertEmitter>,
        navigator: Arc<dyn Navigator>,
        app_state: Arc<dyn AppStateStore>,
    ) -> Self {
        Self {
            banners,
            alerts,
            navigator,
            app_state,
        }
    }

    /// Applies effects in order.
    pub async fn apply(&self, effects: Vec<Effect>) {
        for effect in effects {
            debug!("Applying effect: {:?}", effect);
            match effect {
                Effect::AddBanner(banner) => self.banners.upsert(banner),
                Effect::RemoveBanner(id) => self.banners.remove(id),
                Effect::EmitAlert(alert) => self.alerts.emit(alert),
                Effect::Navigate(destination) => self.navigator.navigate(destination),
                Effect::GoBack => self.navigator.go_back(),
                Effect::PersistCredentialMetadata(metadata) => {
                    if let Err(err) = self.app_state.persist_credential_metadata(&metadata).await {
                        error!("Failed to persist credential metadata: {}", err);
                    }
                }
                Effect::RecordAppVersion(version) => {
                    if let Err(err) = self.app_state.record_app_version(&version).await {
                        error!("Failed to record app version {}: {}", version, err);
                    }
                }
            }
        }
    }
}
