//! Vigil Core - System checks engine for a mobile credential wallet.
//!
//! On every app-foreground/initialization cycle the surrounding app runs a
//! batch of independent runtime conditions (account and card expiry, device
//! registration limits, server availability, clock skew, app-version
//! staleness, device invalidation) and converts each boolean outcome into a
//! persistent, idempotent UI side effect: a banner, an alert, or a forced
//! navigation.
//!
//! # Architecture
//!
//! ```text
//! SystemCheckService → [ordered check set] → run_system_checks
//!        ↓                                        ↓
//!  CheckSnapshot                       fan-out run_check (parallel)
//!                                               ↓
//!                                      fan-in on_fail/on_success (ordered)
//!                                               ↓
//!                                      Effect[] → EffectExecutor
//! ```
//!
//! - **Models** (`model.rs`) - Banners, alerts, navigation targets, identity
//!   token claims, and the `Effect` command vocabulary
//! - **Traits** (`traits.rs`) - The `SystemCheck` contract and collaborator
//!   seams (banner store, alert emitter, navigator, data providers)
//! - **Errors** (`errors.rs`) - Provider error taxonomy and root error type
//! - **Checks** (`checks/`) - Individual check implementations
//! - **Runner** (`runner.rs`) - Fan-out/fan-in orchestration with per-check
//!   deadlines
//! - **Executor** (`executor.rs`) - Applies effects to the collaborators
//! - **Service** (`service.rs`) - Assembles check sets per scope

pub mod checks;
pub mod constants;
pub mod errors;
pub mod executor;
pub mod localization;
pub mod model;
pub mod runner;
pub mod service;
pub mod store;
pub mod traits;
pub mod utils;


// Re-export error types
pub use errors::{Error, ProviderError, Result};

// Re-export commonly used types
pub use model::{
    Alert, AlertAction, AlertActionStyle, AlertFollowUp, AppEventCode, BannerId, BannerKind,
    BannerMessage, BannerVariant, CredentialEvent, CredentialMetadata, CredentialReason,
    Destination, Effect, IdToken, RegistrationResponse, Screen, ServerStatus,
};

pub use executor::EffectExecutor;
pub use localization::{KeyTranslator, StaticCatalog};
pub use runner::run_system_checks;
pub use service::{CheckScope, CheckSnapshot, SystemCheckService};
pub use store::MemoryBannerStore;
pub use traits::{
    AlertEmitter, AnalyticsTracker, AppStateStore, BannerStore, IdTokenProvider, Navigator,
    RegistrationClient, SystemCheck, Translator,
};
