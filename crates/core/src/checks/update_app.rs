//! App update check.
//!
//! Compares the installed version against the versions the status document
//! advertises. An installed version behind the newest supported one fails;
//! the remediation depends on how far behind it is. Still at or above the
//! minimum gets a dismissible banner, below the minimum forces the
//! mandatory update screen.
//!
//! Version ordering uses the character-code comparison in `utils::version`,
//! including its known positional quirk. See that module before changing
//! anything here.

use std::sync::Arc;

use async_trait::async_trait;
use log::{info, warn};

use crate::model::{BannerId, BannerKind, BannerMessage, Destination, Effect};
use crate::traits::{SystemCheck, Translator};
use crate::utils::version::{is_version_greater_than, max_supported_version};

pub struct UpdateAppCheck {
    installed_version: String,
    min_version: String,
    supported_versions: Vec<String>,
    translator: Arc<dyn Translator>,
}

impl UpdateAppCheck {
    pub fn new(
        installed_version: String,
        min_version: String,
        supported_versions: Vec<String>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            installed_version,
            min_version,
            supported_versions,
            translator,
        }
    }

    fn meets_minimum(&self) -> bool {
        is_version_greater_than(&self.installed_version, &self.min_version)
    }
}

#[async_trait]
impl SystemCheck for UpdateAppCheck {
    fn id(&self) -> &'static str {
        "update_app"
    }

    async fn run_check(&self) -> bool {
        match max_supported_version(&self.supported_versions) {
            Some(newest) => is_version_greater_than(&self.installed_version, newest),
            // No supported versions advertised; nothing to compare against.
            None => true,
        }
    }

    async fn on_fail(&self) -> Vec<Effect> {
        if !self.meets_minimum() {
            warn!(
                "Installed version {} below minimum {}, update is mandatory",
                self.installed_version, self.min_version
            );
            return vec![Effect::Navigate(Destination::MandatoryUpdate)];
        }

        info!(
            "Installed version {} behind newest supported, offering update",
            self.installed_version
        );

        vec![Effect::AddBanner(BannerMessage::new(
            BannerId::AppUpdateAvailable,
            self.translator
                .t("system_checks.update_app.optional_banner_title"),
            BannerKind::Info,
            true,
        ))]
    }

    async fn on_success(&self) -> Vec<Effect> {
        vec![Effect::RemoveBanner(BannerId::AppUpdateAvailable)]
    }
}
