//! Domain models for the system checks engine.
//!
//! This module contains the core data structures the checks operate on:
//! - Banner messages keyed by stable identifiers
//! - Alerts with tappable actions
//! - Navigation targets for forced navigation
//! - Identity token claims and their comparable metadata projection
//! - Server status as reported by the identity server
//! - The `Effect` command vocabulary produced by check side-effect hooks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SERVER_STATUS_OK;

// =============================================================================
// Banners
// =============================================================================

/// Stable identifiers for banner surfaces.
///
/// At most one banner per id exists in the store at any time: adding with an
/// existing id replaces it, removing a missing id is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BannerId {
    AccountExpiringSoon,
    AccountExpired,
    CardExpiringSoon,
    DeviceLimitExceeded,
    ServerUnavailable,
    ServerNotification,
    AppUpdateAvailable,
}

impl BannerId {
    /// Returns the string representation of this banner id.
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerId::AccountExpiringSoon => "ACCOUNT_EXPIRING_SOON",
            BannerId::AccountExpired => "ACCOUNT_EXPIRED",
            BannerId::CardExpiringSoon => "CARD_EXPIRING_SOON",
            BannerId::DeviceLimitExceeded => "DEVICE_LIMIT_EXCEEDED",
            BannerId::ServerUnavailable => "SERVER_UNAVAILABLE",
            BannerId::ServerNotification => "SERVER_NOTIFICATION",
            BannerId::AppUpdateAvailable => "APP_UPDATE_AVAILABLE",
        }
    }
}

impl std::fmt::Display for BannerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Visual tone of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerKind {
    Error,
    Warning,
    Info,
    Success,
}

/// Layout variant of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BannerVariant {
    #[default]
    Summary,
    Inline,
}

/// A banner message surfaced by the banner store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerMessage {
    /// Stable identifier, unique across the store.
    pub id: BannerId,
    /// Headline text, already translated.
    pub title: String,
    /// Optional supporting text, already translated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Visual tone.
    pub kind: BannerKind,
    /// Layout variant.
    pub variant: BannerVariant,
    /// Whether the user can dismiss the banner in place.
    pub dismissible: bool,
}

impl BannerMessage {
    /// Creates a banner with no description and the default variant.
    pub fn new(id: BannerId, title: impl Into<String>, kind: BannerKind, dismissible: bool) -> Self {
        Self {
            id,
            title: title.into(),
            description: None,
            kind,
            variant: BannerVariant::Summary,
            dismissible,
        }
    }

    /// Attaches supporting text.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides the layout variant.
    pub fn with_variant(mut self, variant: BannerVariant) -> Self {
        self.variant = variant;
        self
    }
}

// =============================================================================
// Alerts
// =============================================================================

/// Application event codes attached to emitted alerts.
///
/// Consumers use these to correlate an alert with the condition that
/// produced it (analytics, dedupe, routing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppEventCode {
    CardStatusUpdated,
    CardTypeChanged,
    ClockSkewError,
    General,
}

/// Styling hint for an alert action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertActionStyle {
    Default,
    Cancel,
}

/// What pressing an alert action should do, beyond closing the alert.
/// The emitter owns the actual OS interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertFollowUp {
    /// Open the device settings app (e.g. to fix an automatic-time setting).
    OpenDeviceSettings,
}

/// A tappable action on an alert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertAction {
    /// Button label, already translated.
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<AlertActionStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up: Option<AlertFollowUp>,
}

impl AlertAction {
    /// A plain action that only closes the alert.
    pub fn close(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: None,
            follow_up: None,
        }
    }

    /// A cancel-styled action.
    pub fn cancel(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: Some(AlertActionStyle::Cancel),
            follow_up: None,
        }
    }

    /// An action that opens the device settings app.
    pub fn open_device_settings(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            style: None,
            follow_up: Some(AlertFollowUp::OpenDeviceSettings),
        }
    }
}

/// A one-shot alert dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub title: String,
    pub body: String,
    pub event: AppEventCode,
    pub actions: Vec<AlertAction>,
}

// =============================================================================
// Navigation
// =============================================================================

/// Screens the checks can force-navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Screen {
    AccountExpired,
    DeviceInvalidated,
    MandatoryUpdate,
}

/// A navigation target with its typed parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Destination {
    /// The account is past its expiration date.
    #[serde(rename_all = "camelCase")]
    AccountExpired {
        /// Account holder's display name.
        full_name: String,
        /// Formatted expiration date (e.g. "January 1, 1970").
        expired_on: String,
    },
    /// The device registration was invalidated server-side.
    #[serde(rename_all = "camelCase")]
    DeviceInvalidated { reason: Option<CredentialReason> },
    /// The installed app version is below the minimum the server accepts.
    MandatoryUpdate,
}

impl Destination {
    /// The screen this destination resolves to, for current-route comparison.
    pub fn screen(&self) -> Screen {
        match self {
            Destination::AccountExpired { .. } => Screen::AccountExpired,
            Destination::DeviceInvalidated { .. } => Screen::DeviceInvalidated,
            Destination::MandatoryUpdate => Screen::MandatoryUpdate,
        }
    }
}

// =============================================================================
// Identity token claims
// =============================================================================

/// Lifecycle event carried in the identity token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialEvent {
    Authorization,
    Renewal,
    Replace,
    Cancel,
    Expire,
}

/// Reason accompanying a credential lifecycle event. The serde names are the
/// literal reason strings the issuer puts on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialReason {
    #[serde(rename = "Approved by Agent")]
    ApprovedByAgent,
    #[serde(rename = "Renewed by Card Renew")]
    Renew,
    #[serde(rename = "Replaced by Card Replace")]
    Replace,
    #[serde(rename = "Canceled by Card Cancel")]
    Cancel,
    #[serde(rename = "Expired by System")]
    ExpiredBySystem,
    #[serde(rename = "Canceled by Agent")]
    CanceledByAgent,
    #[serde(rename = "Canceled by User")]
    CanceledByUser,
    #[serde(rename = "Canceled by Additional Card")]
    CanceledByAdditionalCard,
    #[serde(rename = "Canceled by Card Type Change")]
    CanceledByCardTypeChange,
    #[serde(rename = "Canceled due to Inactivity")]
    CanceledDueToInactivity,
}

/// Subset of the issuer-signed identity token claims the checks consume.
///
/// Fetched fresh per check invocation and never cached by the checks
/// themselves. The serde renames match the claim names on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdToken {
    #[serde(rename = "bcsc_event")]
    pub event: CredentialEvent,
    #[serde(rename = "bcsc_reason")]
    pub reason: CredentialReason,
    #[serde(rename = "bcsc_devices_count")]
    pub devices_count: u32,
    #[serde(rename = "bcsc_max_devices")]
    pub max_devices: u32,
}

/// Comparable projection of the token claims, persisted by the app store.
///
/// Structural equality against the previously stored value is how the
/// credential-event check detects "my credential's issuing event changed
/// since last observed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialMetadata {
    pub event: CredentialEvent,
    pub reason: CredentialReason,
}

impl From<&IdToken> for CredentialMetadata {
    fn from(token: &IdToken) -> Self {
        Self {
            event: token.event,
            reason: token.reason,
        }
    }
}

// =============================================================================
// Server status
// =============================================================================

/// Availability and version information reported by the identity server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    /// Raw availability flag; anything other than `"ok"` means unavailable.
    pub status: String,
    /// Optional operator-supplied message (maintenance notices etc.).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// Server wall-clock time at response creation.
    pub server_time: DateTime<Utc>,
    /// Lowest app version the server still accepts.
    pub min_version: String,
    /// App versions the server knows about, oldest first.
    pub supported_versions: Vec<String>,
}

impl ServerStatus {
    /// True when the server reports itself available.
    pub fn is_ok(&self) -> bool {
        self.status == SERVER_STATUS_OK
    }

    /// The status message, if the operator supplied a non-empty one.
    pub fn message(&self) -> Option<&str> {
        self.status_message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}

/// Acknowledgement of a device re-registration call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub client_id: String,
}

// =============================================================================
// Effects
// =============================================================================

/// Commands produced by check side-effect hooks.
///
/// Hooks return a list of effects instead of mutating the banner store or
/// navigator directly; the `EffectExecutor` applies them in order. This keeps
/// every check testable by asserting on plain values.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Upsert a banner (replaces any banner with the same id).
    AddBanner(BannerMessage),
    /// Remove a banner; a no-op when the id is absent.
    RemoveBanner(BannerId),
    /// Emit a one-shot alert dialog.
    EmitAlert(Alert),
    /// Force navigation to a destination.
    Navigate(Destination),
    /// Pop the current route.
    GoBack,
    /// Persist the latest credential metadata projection.
    PersistCredentialMetadata(CredentialMetadata),
    /// Record the installed app version as the last known one.
    RecordAppVersion(String),
}
