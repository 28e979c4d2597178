//! Check set assembly.
//!
//! The surrounding app runs checks at two points in its lifecycle: once at
//! startup, before any navigation stack exists, and on every foreground of
//! the main stack once the user is authenticated. Each point gets its own
//! ordered check set, built fresh from a `CheckSnapshot` the host captures
//! immediately before the pass.
//!
//! Snapshot fields are optional when only one scope needs them; asking for
//! a scope whose required fields are absent is a caller bug surfaced as
//! `Error::MissingSnapshotField` rather than a silently skipped check.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::debug;

use crate::checks::{
    AccountExpiryWarningBannerCheck, AnalyticsCheck, CredentialEventCheck, DeviceCountCheck,
    DeviceInvalidatedCheck, ServerClockSkewCheck, ServerStatusCheck, UpdateAppCheck,
    UpdateDeviceRegistrationCheck,
};
use crate::errors::{Error, Result};
use crate::executor::EffectExecutor;
use crate::model::{CredentialMetadata, ServerStatus};
use crate::runner::run_system_checks;
use crate::traits::{
    AnalyticsTracker, IdTokenProvider, Navigator, RegistrationClient, SystemCheck, Translator,
};

/// Which point in the app lifecycle a pass runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckScope {
    /// App launch, before authentication.
    Startup,
    /// Foreground of the authenticated main stack.
    MainStack,
}

impl CheckScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckScope::Startup => "startup",
            CheckScope::MainStack => "main_stack",
        }
    }
}

/// Inputs captured by the host immediately before a pass.
///
/// The snapshot is immutable for the duration of the pass; checks never
/// re-read host state mid-evaluation.
#[derive(Debug, Clone)]
pub struct CheckSnapshot {
    /// Device clock at capture time.
    pub now: DateTime<Utc>,
    /// Latest server status document. Required for `Startup`.
    pub server_status: Option<ServerStatus>,
    /// Version of the running app binary.
    pub installed_version: String,
    /// Last app version a pass recorded, if any.
    pub last_known_version: Option<String>,
    /// Account expiry from the credential. Required for `MainStack`.
    pub account_expiry: Option<DateTime<Utc>>,
    /// Credential metadata projection persisted by an earlier pass.
    pub stored_metadata: Option<CredentialMetadata>,
    /// Access token for the registration refresh call.
    pub access_token: Option<String>,
    /// User-assigned device nickname, forwarded on re-registration.
    pub device_nickname: Option<String>,
    /// True when the user opted out of analytics.
    pub analytics_opted_out: bool,
}

/// Assembles and runs the check set for a scope.
pub struct SystemCheckService {
    provider: Arc<dyn IdTokenProvider>,
    registration: Arc<dyn RegistrationClient>,
    navigator: Arc<dyn Navigator>,
    tracker: Arc<dyn AnalyticsTracker>,
    translator: Arc<dyn Translator>,
    executor: EffectExecutor,
}

impl SystemCheckService {
    pub fn new(
        provider: Arc<dyn IdTokenProvider>,
        registration: Arc<dyn RegistrationClient>,
        navigator: Arc<dyn Navigator>,
        tracker: Arc<dyn AnalyticsTracker>,
        translator: Arc<dyn Translator>,
        executor: EffectExecutor,
    ) -> Self {
        Self {
            provider,
            registration,
            navigator,
            tracker,
            translator,
            executor,
        }
    }

    /// Runs the check set for `scope` against `snapshot`.
    ///
    /// Returns one verdict per check, in the order the scope defines.
    pub async fn run_scope(&self, scope: CheckScope, snapshot: &CheckSnapshot) -> Result<Vec<bool>> {
        debug!("Assembling {} check set", scope.as_str());

        let checks = match scope {
            CheckScope::Startup => self.startup_checks(snapshot)?,
            CheckScope::MainStack => self.main_stack_checks(snapshot)?,
        };

        Ok(run_system_checks(&checks, &self.executor).await)
    }

    fn startup_checks(&self, snapshot: &CheckSnapshot) -> Result<Vec<Arc<dyn SystemCheck>>> {
        let status = snapshot
            .server_status
            .as_ref()
            .ok_or(Error::MissingSnapshotField("server_status"))?;

        Ok(vec![
            Arc::new(AnalyticsCheck::new(
                self.tracker.clone(),
                snapshot.analytics_opted_out,
            )),
            Arc::new(ServerStatusCheck::new(
                status.clone(),
                self.translator.clone(),
            )),
            Arc::new(ServerClockSkewCheck::new(
                status.server_time,
                snapshot.now,
                self.translator.clone(),
            )),
            Arc::new(UpdateAppCheck::new(
                snapshot.installed_version.clone(),
                status.min_version.clone(),
                status.supported_versions.clone(),
                self.translator.clone(),
            )),
        ])
    }

    fn main_stack_checks(&self, snapshot: &CheckSnapshot) -> Result<Vec<Arc<dyn SystemCheck>>> {
        let account_expiry = snapshot
            .account_expiry
            .ok_or(Error::MissingSnapshotField("account_expiry"))?;

        Ok(vec![
            Arc::new(DeviceInvalidatedCheck::new(
                self.provider.clone(),
                self.navigator.clone(),
            )),
            Arc::new(DeviceCountCheck::new(
                self.provider.clone(),
                self.translator.clone(),
            )),
            Arc::new(AccountExpiryWarningBannerCheck::new(
                account_expiry,
                snapshot.now,
                self.translator.clone(),
            )),
            Arc::new(CredentialEventCheck::new(
                self.provider.clone(),
                snapshot.stored_metadata.clone(),
                self.translator.clone(),
            )),
            Arc::new(UpdateDeviceRegistrationCheck::new(
                snapshot.installed_version.clone(),
                snapshot.last_known_version.clone(),
                snapshot.access_token.clone(),
                snapshot.device_nickname.clone(),
                self.registration.clone(),
            )),
        ])
    }
}
