//! Credential lifecycle event check.
//!
//! Detects that the credential's issuing event changed since last observed
//! by comparing a metadata projection of the token claims against the
//! previously stored value. A `Cancel` event fails immediately regardless of
//! metadata. The remediation maps the reason to a user-facing surface:
//! renewal and replacement get informational alerts, cancellation forces the
//! invalidation modal, and anything else gets a generic alert.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::error;

use crate::model::{
    Alert, AlertAction, AppEventCode, CredentialEvent, CredentialMetadata, CredentialReason,
    Destination, Effect,
};
use crate::traits::{IdTokenProvider, SystemCheck, Translator};

/// Claims observed during `run_check`, carried over to the failure hook.
/// The instance is fresh per pass, so the lock is never contended.
#[derive(Debug, Clone)]
struct ObservedClaims {
    event: CredentialEvent,
    reason: CredentialReason,
    changed_metadata: Option<CredentialMetadata>,
}

pub struct CredentialEventCheck {
    provider: Arc<dyn IdTokenProvider>,
    stored_metadata: Option<CredentialMetadata>,
    translator: Arc<dyn Translator>,
    observed: Mutex<Option<ObservedClaims>>,
}

impl CredentialEventCheck {
    pub fn new(
        provider: Arc<dyn IdTokenProvider>,
        stored_metadata: Option<CredentialMetadata>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            provider,
            stored_metadata,
            translator,
            observed: Mutex::new(None),
        }
    }

    fn account_updated_alert(&self, event: AppEventCode) -> Effect {
        Effect::EmitAlert(Alert {
            title: self
                .translator
                .translate("alerts.account_updated.title", &HashMap::new()),
            body: self
                .translator
                .translate("alerts.account_updated.body", &HashMap::new()),
            event,
            actions: vec![AlertAction::cancel(self.translator.t("alerts.actions.ok"))],
        })
    }
}

#[async_trait]
impl SystemCheck for CredentialEventCheck {
    fn id(&self) -> &'static str {
        "credential_event"
    }

    async fn run_check(&self) -> bool {
        let token = match self.provider.id_token().await {
            Ok(token) => token,
            Err(err) => {
                // No claims, nothing to alert on; the failure hook degrades
                // to a no-op with an empty observation.
                error!("Credential event check: token fetch failed: {}", err);
                return false;
            }
        };

        let metadata = CredentialMetadata::from(&token);

        // A cancel event means the app must be reset; metadata comparison
        // is irrelevant at that point.
        if token.event == CredentialEvent::Cancel {
            *self.observed.lock().expect("observation lock poisoned") = Some(ObservedClaims {
                event: token.event,
                reason: token.reason,
                changed_metadata: None,
            });
            return false;
        }

        let unchanged = Some(&metadata) == self.stored_metadata.as_ref();

        *self.observed.lock().expect("observation lock poisoned") = Some(ObservedClaims {
            event: token.event,
            reason: token.reason,
            changed_metadata: (!unchanged).then_some(metadata),
        });

        unchanged
    }

    async fn on_fail(&self) -> Vec<Effect> {
        let observed = match self.observed.lock().expect("observation lock poisoned").clone() {
            Some(observed) => observed,
            // Token fetch failed; nothing to surface.
            None => return Vec::new(),
        };

        let mut effects = Vec::new();

        // Keep the stored projection current so the same change does not
        // alert again on the next pass.
        if let Some(metadata) = observed.changed_metadata {
            effects.push(Effect::PersistCredentialMetadata(metadata));
        }

        match observed.event {
            CredentialEvent::Cancel => effects.push(Effect::Navigate(
                Destination::DeviceInvalidated {
                    reason: Some(observed.reason),
                },
            )),
            CredentialEvent::Renewal => {
                effects.push(self.account_updated_alert(AppEventCode::CardStatusUpdated))
            }
            CredentialEvent::Replace => {
                effects.push(self.account_updated_alert(AppEventCode::CardTypeChanged))
            }
            _ => effects.push(self.account_updated_alert(AppEventCode::General)),
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProviderError;
    use crate::localization::KeyTranslator;
    use crate::model::IdToken;

    struct FakeProvider {
        token: Option<IdToken>,
    }

    #[async_trait]
    impl IdTokenProvider for FakeProvider {
        async fn id_token(&self) -> Result<IdToken, ProviderError> {
            self.token
                .clone()
                .ok_or_else(|| ProviderError::network("offline"))
        }
    }

    fn token(event: CredentialEvent, reason: CredentialReason) -> IdToken {
        IdToken {
            event,
            reason,
            devices_count: 1,
            max_devices: 5,
        }
    }

    fn check(token: Option<IdToken>, stored: Option<CredentialMetadata>) -> CredentialEventCheck {
        CredentialEventCheck::new(
            Arc::new(FakeProvider { token }),
            stored,
            Arc::new(KeyTranslator),
        )
    }

    #[tokio::test]
    async fn test_unchanged_metadata_passes() {
        let current = token(CredentialEvent::Authorization, CredentialReason::ApprovedByAgent);
        let stored = CredentialMetadata::from(&current);

        assert!(check(Some(current), Some(stored)).run_check().await);
    }

    #[tokio::test]
    async fn test_cancel_fails_even_with_matching_metadata() {
        let current = token(CredentialEvent::Cancel, CredentialReason::Cancel);
        let stored = CredentialMetadata::from(&current);
        let check = check(Some(current), Some(stored));

        assert!(!check.run_check().await);

        let effects = check.on_fail().await;
        assert_eq!(effects.len(), 1);
        assert!(matches!(
            effects[0],
            Effect::Navigate(Destination::DeviceInvalidated {
                reason: Some(CredentialReason::Cancel),
            })
        ));
    }

    #[tokio::test]
    async fn test_renewal_persists_metadata_and_alerts() {
        let current = token(CredentialEvent::Renewal, CredentialReason::Renew);
        let stored = CredentialMetadata {
            event: CredentialEvent::Authorization,
            reason: CredentialReason::ApprovedByAgent,
        };
        let check = check(Some(current.clone()), Some(stored));

        assert!(!check.run_check().await);

        let effects = check.on_fail().await;
        assert_eq!(effects.len(), 2);
        assert_eq!(
            effects[0],
            Effect::PersistCredentialMetadata(CredentialMetadata::from(&current))
        );
        match &effects[1] {
            Effect::EmitAlert(alert) => {
                assert_eq!(alert.event, AppEventCode::CardStatusUpdated)
            }
            other => panic!("expected alert, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_replace_maps_to_card_type_changed() {
        let current = token(CredentialEvent::Replace, CredentialReason::Replace);
        let check = check(Some(current), None);

        assert!(!check.run_check().await);

        let effects = check.on_fail().await;
        match effects.last().unwrap() {
            Effect::EmitAlert(alert) => assert_eq!(alert.event, AppEventCode::CardTypeChanged),
            other => panic!("expected alert, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_other_reasons_map_to_general_alert() {
        let current = token(CredentialEvent::Expire, CredentialReason::ExpiredBySystem);
        let check = check(Some(current), None);

        assert!(!check.run_check().await);

        let effects = check.on_fail().await;
        match effects.last().unwrap() {
            Effect::EmitAlert(alert) => assert_eq!(alert.event, AppEventCode::General),
            other => panic!("expected alert, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_failure_degrades_to_silent_fail() {
        let check = check(None, None);

        assert!(!check.run_check().await);
        assert!(check.on_fail().await.is_empty());
    }
}
