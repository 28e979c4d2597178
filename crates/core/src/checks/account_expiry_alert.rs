//! Account expiry alert check.
//!
//! One-shot alert companion to the warning banner: when the account enters
//! the warning band and the user has not yet acknowledged an alert for it,
//! emit a single dialog pointing at the renewal flow. The acknowledged flag
//! is part of the snapshot; recording it is the emitter's concern.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::checks::account_expiry_warning::is_account_expired;
use crate::constants::ACCOUNT_EXPIRY_WARNING_DAYS;
use crate::model::{Alert, AlertAction, AppEventCode, Effect};
use crate::traits::{SystemCheck, Translator};
use crate::utils::dates::days_until_ceil;

pub struct AccountExpiryAlertCheck {
    expiry: DateTime<Utc>,
    now: DateTime<Utc>,
    alert_acknowledged: bool,
    translator: Arc<dyn Translator>,
}

impl AccountExpiryAlertCheck {
    pub fn new(
        expiry: DateTime<Utc>,
        now: DateTime<Utc>,
        alert_acknowledged: bool,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            expiry,
            now,
            alert_acknowledged,
            translator,
        }
    }
}

#[async_trait]
impl SystemCheck for AccountExpiryAlertCheck {
    fn id(&self) -> &'static str {
        "account_expiry_alert"
    }

    async fn run_check(&self) -> bool {
        if self.alert_acknowledged {
            return true;
        }

        let expiring_soon = is_account_expired(self.expiry, self.now, ACCOUNT_EXPIRY_WARNING_DAYS);
        let expired = is_account_expired(self.expiry, self.now, 0);

        !expiring_soon || expired
    }

    async fn on_fail(&self) -> Vec<Effect> {
        let args = HashMap::from([(
            "days",
            days_until_ceil(self.expiry, self.now).to_string(),
        )]);

        vec![Effect::EmitAlert(Alert {
            title: self
                .translator
                .translate("alerts.account_expiring.title", &args),
            body: self
                .translator
                .translate("alerts.account_expiring.body", &args),
            event: AppEventCode::General,
            actions: vec![AlertAction::cancel(self.translator.t("alerts.actions.ok"))],
        })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::KeyTranslator;
    use chrono::Duration;

    fn check(expiry_offset: Duration, acknowledged: bool) -> AccountExpiryAlertCheck {
        let now = Utc::now();
        AccountExpiryAlertCheck::new(
            now + expiry_offset,
            now,
            acknowledged,
            Arc::new(KeyTranslator),
        )
    }

    #[tokio::test]
    async fn test_emits_alert_once_within_warning_band() {
        let check = check(Duration::days(10), false);
        assert!(!check.run_check().await);

        let effects = check.on_fail().await;
        match &effects[0] {
            Effect::EmitAlert(alert) => assert_eq!(alert.event, AppEventCode::General),
            other => panic!("expected alert, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_acknowledged_alert_suppresses_repeat() {
        assert!(check(Duration::days(10), true).run_check().await);
    }

    #[tokio::test]
    async fn test_expired_account_is_not_this_checks_business() {
        assert!(check(Duration::days(-2), false).run_check().await);
    }

    #[tokio::test]
    async fn test_success_is_silent() {
        assert!(check(Duration::days(60), false).on_success().await.is_empty());
    }
}
