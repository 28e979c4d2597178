//! Account expiry check.
//!
//! Passes while the account has more than the warning period left. A failure
//! inside the warning band surfaces a dismissible banner; an account that is
//! already past its date forces navigation to the expired-account screen
//! instead.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::constants::ACCOUNT_EXPIRY_WARNING_DAYS;
use crate::model::{BannerId, BannerKind, BannerMessage, Destination, Effect};
use crate::traits::{SystemCheck, Translator};
use crate::utils::dates::{format_long_date, whole_days_until};

pub struct AccountExpiryCheck {
    expiry: DateTime<Utc>,
    full_name: String,
    now: DateTime<Utc>,
    translator: Arc<dyn Translator>,
}

impl AccountExpiryCheck {
    pub fn new(
        expiry: DateTime<Utc>,
        full_name: impl Into<String>,
        now: DateTime<Utc>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            expiry,
            full_name: full_name.into(),
            now,
            translator,
        }
    }

    fn days_until_expiry(&self) -> i64 {
        whole_days_until(self.expiry, self.now)
    }
}

#[async_trait]
impl SystemCheck for AccountExpiryCheck {
    fn id(&self) -> &'static str {
        "account_expiry"
    }

    async fn run_check(&self) -> bool {
        self.days_until_expiry() > ACCOUNT_EXPIRY_WARNING_DAYS
    }

    async fn on_fail(&self) -> Vec<Effect> {
        let expired_on = format_long_date(self.expiry);

        if self.days_until_expiry() <= 0 {
            // Past the date entirely: the banner is not enough, the user has
            // to go through the renewal flow.
            return vec![Effect::Navigate(Destination::AccountExpired {
                full_name: self.full_name.clone(),
                expired_on,
            })];
        }

        let args = HashMap::from([("date", expired_on)]);
        let title = self
            .translator
            .translate("system_checks.account_expiry.expiring_banner_title", &args);

        vec![Effect::AddBanner(BannerMessage::new(
            BannerId::AccountExpired,
            title,
            BannerKind::Warning,
            true,
        ))]
    }

    async fn on_success(&self) -> Vec<Effect> {
        vec![Effect::RemoveBanner(BannerId::AccountExpired)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::KeyTranslator;
    use chrono::Duration;

    fn check(expiry_offset: Duration) -> AccountExpiryCheck {
        let now = Utc::now();
        AccountExpiryCheck::new(now + expiry_offset, "Jamie Doe", now, Arc::new(KeyTranslator))
    }

    #[tokio::test]
    async fn test_passes_outside_warning_period() {
        assert!(check(Duration::days(31)).run_check().await);
    }

    #[tokio::test]
    async fn test_fails_at_warning_boundary_with_banner() {
        let check = check(Duration::days(30));
        assert!(!check.run_check().await);

        let effects = check.on_fail().await;
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::AddBanner(banner) => {
                assert_eq!(banner.id, BannerId::AccountExpired);
                assert!(banner.dismissible);
                assert_eq!(banner.kind, BannerKind::Warning);
            }
            other => panic!("expected banner, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_expired_account_navigates_instead_of_banner() {
        let check = check(Duration::days(-1));
        assert!(!check.run_check().await);

        let effects = check.on_fail().await;
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::Navigate(Destination::AccountExpired { full_name, .. }) => {
                assert_eq!(full_name, "Jamie Doe");
            }
            other => panic!("expected navigation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_clears_banner() {
        let effects = check(Duration::days(45)).on_success().await;
        assert_eq!(effects, vec![Effect::RemoveBanner(BannerId::AccountExpired)]);
    }
}
