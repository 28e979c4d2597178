//! Device invalidation check.
//!
//! Fails when the identity token says an agent canceled this device's
//! registration, which forces the user into the re-authorization modal.
//! Navigation is guarded against re-entry: the modal is a singleton, so the
//! check inspects the navigator's current route before pushing or popping.

use std::sync::Arc;

use async_trait::async_trait;
use log::{error, warn};

use crate::model::{CredentialEvent, CredentialReason, Destination, Effect, Screen};
use crate::traits::{IdTokenProvider, Navigator, SystemCheck};

pub struct DeviceInvalidatedCheck {
    provider: Arc<dyn IdTokenProvider>,
    navigator: Arc<dyn Navigator>,
}

impl DeviceInvalidatedCheck {
    pub fn new(provider: Arc<dyn IdTokenProvider>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            provider,
            navigator,
        }
    }

    fn modal_is_current(&self) -> bool {
        self.navigator.current_screen() == Some(Screen::DeviceInvalidated)
    }
}

#[async_trait]
impl SystemCheck for DeviceInvalidatedCheck {
    fn id(&self) -> &'static str {
        "device_invalidated"
    }

    async fn run_check(&self) -> bool {
        match self.provider.id_token().await {
            Ok(token) => {
                // Canceled by an agent means the device must re-authorize.
                !(token.event == CredentialEvent::Cancel
                    && token.reason == CredentialReason::CanceledByAgent)
            }
            Err(err) => {
                error!("Device invalidated check: token fetch failed: {}", err);
                false
            }
        }
    }

    async fn on_fail(&self) -> Vec<Effect> {
        warn!("Device registration invalidated");

        // Only navigate if the modal is not already visible.
        if self.modal_is_current() {
            return Vec::new();
        }

        vec![Effect::Navigate(Destination::DeviceInvalidated {
            reason: Some(CredentialReason::CanceledByAgent),
        })]
    }

    async fn on_success(&self) -> Vec<Effect> {
        // Only pop if the modal is visible and there is somewhere to go back to.
        if !self.modal_is_current() || !self.navigator.can_go_back() {
            return Vec::new();
        }

        vec![Effect::GoBack]
    }
}
