//! Server status check.
//!
//! Evaluates the status document fetched during startup. An unavailable
//! server gets an error banner carrying the server-supplied message when one
//! exists. A healthy server may still carry a notification message, which
//! is surfaced as an info banner from the success hook.

use std::sync::Arc;

use async_trait::async_trait;
use log::warn;

use crate::model::{BannerId, BannerKind, BannerMessage, Effect, ServerStatus};
use crate::traits::{SystemCheck, Translator};

pub struct ServerStatusCheck {
    status: ServerStatus,
    translator: Arc<dyn Translator>,
}

impl ServerStatusCheck {
    pub fn new(status: ServerStatus, translator: Arc<dyn Translator>) -> Self {
        Self { status, translator }
    }
}

#[async_trait]
impl SystemCheck for ServerStatusCheck {
    fn id(&self) -> &'static str {
        "server_status"
    }

    async fn run_check(&self) -> bool {
        self.status.is_ok()
    }

    async fn on_fail(&self) -> Vec<Effect> {
        warn!("Server reported status '{}'", self.status.status);

        let title = match self.status.message() {
            Some(message) => message.to_string(),
            None => self
                .translator
                .t("system_checks.server_status.unavailable_banner_title"),
        };

        vec![Effect::AddBanner(BannerMessage::new(
            BannerId::ServerUnavailable,
            title,
            BannerKind::Error,
            false,
        ))]
    }

    async fn on_success(&self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::RemoveBanner(BannerId::ServerUnavailable),
            Effect::RemoveBanner(BannerId::ServerNotification),
        ];

        // A healthy server can still announce maintenance windows and the
        // like through the status message.
        if let Some(message) = self.status.message() {
            effects.push(Effect::AddBanner(BannerMessage::new(
                BannerId::ServerNotification,
                message,
                BannerKind::Info,
                true,
            )));
        }

        effects
    }
}
