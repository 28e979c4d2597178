//! Abstract interfaces for the system checks engine.
//!
//! This module defines:
//! - `SystemCheck` - The contract every runtime check implements
//! - Collaborator seams owned by the surrounding app: banner store, alert
//!   emitter, navigator, app state store, translator, analytics tracker
//! - Async data providers: identity token fetch and device registration
//!
//! Everything here is injected as `Arc<dyn Trait>` so checks stay
//! independently testable with hand-rolled fakes.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;

use crate::constants::DEFAULT_CHECK_TIMEOUT;
use crate::errors::{ProviderError, Result};
use crate::model::{
    Alert, BannerId, BannerMessage, CredentialMetadata, Destination, Effect, IdToken,
    RegistrationResponse, Screen,
};

// =============================================================================
// System Check Contract
// =============================================================================

/// Contract for a single runtime condition.
///
/// A check instance is constructed fresh for each evaluation pass, closing
/// over an immutable snapshot of the inputs it needs. Instances are never
/// reused across passes.
///
/// # Implementation notes
///
/// - `run_check` is a predicate over the construction-time snapshot. It must
///   not mutate shared state, and any network access it performs is read-only
///   and classified into a boolean locally; it never propagates errors.
/// - `on_fail` / `on_success` return effects instead of touching the banner
///   store or navigator directly; the runner applies them in input order.
/// - "Success" does not always mean "do nothing": a check may clear a
///   previously added banner and show a different, non-failure banner.
#[async_trait]
pub trait SystemCheck: Send + Sync {
    /// Unique identifier for this check, used for logging.
    fn id(&self) -> &'static str;

    /// Runs the check. True means the condition passed.
    async fn run_check(&self) -> bool;

    /// Invoked only when `run_check` resolved false.
    async fn on_fail(&self) -> Vec<Effect>;

    /// Invoked only when `run_check` resolved true.
    async fn on_success(&self) -> Vec<Effect> {
        Vec::new()
    }

    /// Deadline for `run_check`. Checks that fetch remote data may lower
    /// this; snapshot-only checks settle immediately regardless.
    fn timeout(&self) -> Duration {
        DEFAULT_CHECK_TIMEOUT
    }

    /// Verdict to assume when `run_check` misses its deadline. Defaults to
    /// pass, so a hung provider cannot surface a failure banner on its own.
    fn verdict_on_timeout(&self) -> bool {
        true
    }
}

// =============================================================================
// UI collaborators
// =============================================================================

/// Storage for active banner messages.
///
/// Both operations must be idempotent and commutative: independent checks
/// add/remove distinct ids within one pass, and successive passes may race
/// on the same id. Upsert replaces, delete of a missing id is a no-op.
pub trait BannerStore: Send + Sync {
    /// Adds a banner, replacing any existing banner with the same id.
    fn upsert(&self, banner: BannerMessage);

    /// Removes the banner with the given id, if present.
    fn remove(&self, id: BannerId);

    /// Returns the currently active banners, in no particular order.
    fn active(&self) -> Vec<BannerMessage>;
}

/// Emits one-shot alert dialogs.
pub trait AlertEmitter: Send + Sync {
    fn emit(&self, alert: Alert);
}

/// Navigation methods the checks need, abstracted from the host navigator.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: Destination);

    fn go_back(&self);

    fn can_go_back(&self) -> bool;

    /// The screen currently on top of the stack, if it is one the checks
    /// care about. Used for idempotent-navigation guards.
    fn current_screen(&self) -> Option<Screen>;
}

/// Persisted app state the checks read at construction and update through
/// effects.
#[async_trait]
pub trait AppStateStore: Send + Sync {
    /// Persists the latest credential metadata projection.
    async fn persist_credential_metadata(&self, metadata: &CredentialMetadata) -> Result<()>;

    /// Records the installed app version as the last known one.
    async fn record_app_version(&self, version: &str) -> Result<()>;
}

/// Translation lookup for user-facing text.
///
/// Checks resolve their banner and alert copy through this seam; the
/// localization tables themselves live in the surrounding app.
pub trait Translator: Send + Sync {
    /// Resolves a translation key, interpolating the given arguments.
    fn translate(&self, key: &str, args: &HashMap<&str, String>) -> String;

    /// Resolves a translation key with no arguments.
    fn t(&self, key: &str) -> String {
        self.translate(key, &HashMap::new())
    }
}

/// Analytics tracker with lazy initialization.
pub trait AnalyticsTracker: Send + Sync {
    fn is_initialized(&self) -> bool;

    fn initialize(&self);
}

// =============================================================================
// Async data providers
// =============================================================================

/// Fetches the identity token claims.
///
/// Implementations classify their failures into `ProviderError` so checks
/// can apply their own degradation policy.
#[async_trait]
pub trait IdTokenProvider: Send + Sync {
    async fn id_token(&self) -> std::result::Result<IdToken, ProviderError>;
}

/// Performs the remote device re-registration call.
#[async_trait]
pub trait RegistrationClient: Send + Sync {
    async fn update_registration(
        &self,
        access_token: Option<&str>,
        nickname: Option<&str>,
    ) -> std::result::Result<RegistrationResponse, ProviderError>;
}
