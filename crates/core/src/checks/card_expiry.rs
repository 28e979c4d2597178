//! Card expiry check.
//!
//! Same day-diff pattern as account expiry, but a single threshold and a
//! dismissible banner as the only remediation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;

use crate::constants::CARD_EXPIRY_WARNING_DAYS;
use crate::model::{BannerId, BannerKind, BannerMessage, Effect};
use crate::traits::{SystemCheck, Translator};
use crate::utils::dates::{format_long_date, whole_days_until};

pub struct CardExpiryCheck {
    expiry: DateTime<Utc>,
    now: DateTime<Utc>,
    translator: Arc<dyn Translator>,
}

impl CardExpiryCheck {
    pub fn new(expiry: DateTime<Utc>, now: DateTime<Utc>, translator: Arc<dyn Translator>) -> Self {
        Self {
            expiry,
            now,
            translator,
        }
    }
}

#[async_trait]
impl SystemCheck for CardExpiryCheck {
    fn id(&self) -> &'static str {
        "card_expiry"
    }

    async fn run_check(&self) -> bool {
        whole_days_until(self.expiry, self.now) > CARD_EXPIRY_WARNING_DAYS
    }

    async fn on_fail(&self) -> Vec<Effect> {
        if whole_days_until(self.expiry, self.now) <= 0 {
            // TODO: route already-expired cards into the card renewal flow
            // once that screen exists; today only the warning band has UI.
            debug!("Card already expired, no dedicated surface yet");
            return Vec::new();
        }

        let args = HashMap::from([("date", format_long_date(self.expiry))]);

        vec![Effect::AddBanner(BannerMessage::new(
            BannerId::CardExpiringSoon,
            self.translator
                .translate("system_checks.card_expiry.expiring_banner_title", &args),
            BannerKind::Warning,
            true,
        ))]
    }

    async fn on_success(&self) -> Vec<Effect> {
        vec![Effect::RemoveBanner(BannerId::CardExpiringSoon)]
    }
}
