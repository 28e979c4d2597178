//! Device count check.
//!
//! Verifies the number of registered devices is within the limit the
//! identity token advertises.
//!
//! Error classification policy: a network failure while fetching the token
//! passes the check. The connectivity check owns the offline story, and a
//! "too many devices" banner while offline would be a lie. Any other
//! failure fails the check.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::model::{BannerId, BannerKind, BannerMessage, Effect};
use crate::traits::{IdTokenProvider, SystemCheck, Translator};

pub struct DeviceCountCheck {
    provider: Arc<dyn IdTokenProvider>,
    translator: Arc<dyn Translator>,
}

impl DeviceCountCheck {
    pub fn new(provider: Arc<dyn IdTokenProvider>, translator: Arc<dyn Translator>) -> Self {
        Self {
            provider,
            translator,
        }
    }
}

#[async_trait]
impl SystemCheck for DeviceCountCheck {
    fn id(&self) -> &'static str {
        "device_count"
    }

    async fn run_check(&self) -> bool {
        match self.provider.id_token().await {
            Ok(token) => token.devices_count < token.max_devices,
            Err(err) if err.is_network() => {
                warn!("Device count check skipped, token fetch failed offline: {}", err);
                true
            }
            Err(err) => {
                warn!("Device count check failed, token fetch error: {}", err);
                false
            }
        }
    }

    async fn on_fail(&self) -> Vec<Effect> {
        vec![Effect::AddBanner(BannerMessage::new(
            BannerId::DeviceLimitExceeded,
            self.translator.t("system_checks.device_limit.banner_title"),
            BannerKind::Warning,
            // Not dismissible in place; clears once the user reviews devices.
            false,
        ))]
    }

    async fn on_success(&self) -> Vec<Effect> {
        vec![Effect::RemoveBanner(BannerId::DeviceLimitExceeded)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProviderError;
    use crate::localization::KeyTranslator;
    use crate::model::{CredentialEvent, CredentialReason, IdToken};

    struct FakeProvider {
        outcome: Outcome,
    }

    enum Outcome {
        Token(u32, u32),
        NetworkError,
        DecodeError,
    }

    #[async_trait]
    impl IdTokenProvider for FakeProvider {
        async fn id_token(&self) -> Result<IdToken, ProviderError> {
            match &self.outcome {
                Outcome::Token(count, max) => Ok(IdToken {
                    event: CredentialEvent::Authorization,
                    reason: CredentialReason::ApprovedByAgent,
                    devices_count: *count,
                    max_devices: *max,
                }),
                Outcome::NetworkError => Err(ProviderError::network("offline")),
                Outcome::DecodeError => Err(ProviderError::decode("missing claim")),
            }
        }
    }

    fn check(outcome: Outcome) -> DeviceCountCheck {
        DeviceCountCheck::new(
            Arc::new(FakeProvider { outcome }),
            Arc::new(KeyTranslator),
        )
    }

    #[tokio::test]
    async fn test_passes_under_limit() {
        assert!(check(Outcome::Token(2, 5)).run_check().await);
    }

    #[tokio::test]
    async fn test_fails_at_limit() {
        assert!(!check(Outcome::Token(5, 5)).run_check().await);
    }

    #[tokio::test]
    async fn test_network_error_passes() {
        assert!(check(Outcome::NetworkError).run_check().await);
    }

    #[tokio::test]
    async fn test_non_network_error_fails() {
        assert!(!check(Outcome::DecodeError).run_check().await);
    }

    #[tokio::test]
    async fn test_fail_adds_non_dismissible_banner() {
        let effects = check(Outcome::Token(5, 5)).on_fail().await;

        match &effects[0] {
            Effect::AddBanner(banner) => {
                assert_eq!(banner.id, BannerId::DeviceLimitExceeded);
                assert!(!banner.dismissible);
                assert_eq!(banner.kind, BannerKind::Warning);
            }
            other => panic!("expected banner, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_clears_banner() {
        assert_eq!(
            check(Outcome::Token(1, 5)).on_success().await,
            vec![Effect::RemoveBanner(BannerId::DeviceLimitExceeded)]
        );
    }
}
