//! Account expiry warning banner check.
//!
//! A banner-only band distinct from the hard-expired case: fails only when
//! the account is expiring soon AND not yet expired. The day count shown to
//! the user rounds partial days up, so 1.2 days remaining reads as 2 days.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::constants::ACCOUNT_EXPIRY_WARNING_DAYS;
use crate::model::{BannerId, BannerKind, BannerMessage, Effect};
use crate::traits::{SystemCheck, Translator};
use crate::utils::dates::{days_until_ceil, format_long_date, whole_days_until};

/// True when the account is expired or within `warning_days` of expiring.
pub fn is_account_expired(expiry: DateTime<Utc>, now: DateTime<Utc>, warning_days: i64) -> bool {
    whole_days_until(expiry, now) <= warning_days
}

pub struct AccountExpiryWarningBannerCheck {
    expiry: DateTime<Utc>,
    now: DateTime<Utc>,
    translator: Arc<dyn Translator>,
}

impl AccountExpiryWarningBannerCheck {
    pub fn new(expiry: DateTime<Utc>, now: DateTime<Utc>, translator: Arc<dyn Translator>) -> Self {
        Self {
            expiry,
            now,
            translator,
        }
    }
}

#[async_trait]
impl SystemCheck for AccountExpiryWarningBannerCheck {
    fn id(&self) -> &'static str {
        "account_expiry_warning_banner"
    }

    async fn run_check(&self) -> bool {
        let expiring_soon = is_account_expired(self.expiry, self.now, ACCOUNT_EXPIRY_WARNING_DAYS);
        let expired = is_account_expired(self.expiry, self.now, 0);

        // Only fail if expiring soon but not yet expired.
        !expiring_soon || expired
    }

    async fn on_fail(&self) -> Vec<Effect> {
        let title_args = HashMap::from([(
            "days",
            days_until_ceil(self.expiry, self.now).to_string(),
        )]);
        let description_args = HashMap::from([("date", format_long_date(self.expiry))]);

        let banner = BannerMessage::new(
            BannerId::AccountExpiringSoon,
            self.translator.translate(
                "system_checks.account_expiry.warning_banner_title",
                &title_args,
            ),
            BannerKind::Warning,
            false,
        )
        .with_description(self.translator.translate(
            "system_checks.account_expiry.warning_banner_description",
            &description_args,
        ));

        vec![Effect::AddBanner(banner)]
    }

    async fn on_success(&self) -> Vec<Effect> {
        vec![Effect::RemoveBanner(BannerId::AccountExpiringSoon)]
    }
}
