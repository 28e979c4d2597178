//! Server clock skew check.
//!
//! Compares the server timestamp from the status snapshot against the
//! device clock captured at the same moment. A skew at or above the
//! threshold breaks token validation, so the user is told to fix their
//! clock rather than being shown opaque auth failures later.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::warn;

use crate::constants::MAX_CLOCK_SKEW_MS;
use crate::model::{Alert, AlertAction, AppEventCode, Effect};
use crate::traits::{SystemCheck, Translator};

pub struct ServerClockSkewCheck {
    server_time: DateTime<Utc>,
    device_time: DateTime<Utc>,
    translator: Arc<dyn Translator>,
}

impl ServerClockSkewCheck {
    pub fn new(
        server_time: DateTime<Utc>,
        device_time: DateTime<Utc>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            server_time,
            device_time,
            translator,
        }
    }

    fn skew_ms(&self) -> i64 {
        (self.server_time.timestamp_millis() - self.device_time.timestamp_millis()).abs()
    }
}

#[async_trait]
impl SystemCheck for ServerClockSkewCheck {
    fn id(&self) -> &'static str {
        "server_clock_skew"
    }

    async fn run_check(&self) -> bool {
        // Strictly exclusive: a skew of exactly the threshold fails.
        self.skew_ms() < MAX_CLOCK_SKEW_MS
    }

    async fn on_fail(&self) -> Vec<Effect> {
        warn!(
            "Device clock out of sync: server={} device={} skew_ms={} threshold_ms={}",
            self.server_time,
            self.device_time,
            self.skew_ms(),
            MAX_CLOCK_SKEW_MS
        );

        vec![Effect::EmitAlert(Alert {
            title: self
                .translator
                .translate("alerts.clock_skew.title", &HashMap::new()),
            body: self
                .translator
                .translate("alerts.clock_skew.body", &HashMap::new()),
            event: AppEventCode::ClockSkewError,
            actions: vec![
                AlertAction::close(self.translator.t("alerts.actions.close")),
                AlertAction::open_device_settings(self.translator.t("alerts.actions.open_settings")),
            ],
        })]
    }
}
