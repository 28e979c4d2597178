//! System check implementations.
//!
//! One file per runtime condition:
//! - Account expiry (hard expiry, warning banner, one-shot alert)
//! - Card expiry
//! - Device count limit
//! - Device invalidation
//! - Credential lifecycle events
//! - Internet connectivity
//! - Server clock skew
//! - Server availability
//! - App update availability
//! - Device registration freshness
//! - Analytics tracker initialization

pub mod account_expiry;
pub mod account_expiry_alert;
pub mod account_expiry_warning;
pub mod analytics;
pub mod card_expiry;
pub mod credential_event;
pub mod device_count;
pub mod device_invalidated;
pub mod internet_status;
pub mod server_clock_skew;
pub mod server_status;
pub mod update_app;
pub mod update_device_registration;

// Re-export check implementations
pub use account_expiry::AccountExpiryCheck;
pub use account_expiry_alert::AccountExpiryAlertCheck;
pub use account_expiry_warning::AccountExpiryWarningBannerCheck;
pub use analytics::AnalyticsCheck;
pub use card_expiry::CardExpiryCheck;
pub use credential_event::CredentialEventCheck;
pub use device_count::DeviceCountCheck;
pub use device_invalidated::DeviceInvalidatedCheck;
pub use internet_status::InternetStatusCheck;
pub use server_clock_skew::ServerClockSkewCheck;
pub use server_status::ServerStatusCheck;
pub use update_app::UpdateAppCheck;
pub use update_device_registration::UpdateDeviceRegistrationCheck;
