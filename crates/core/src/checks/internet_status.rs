//! Internet connectivity check.
//!
//! Pass-through over the connectivity flag the host sampled when building
//! the snapshot. The hooks only log; offline UI is owned by the screens
//! themselves, and the other network-backed checks apply their own
//! degradation policy when this one fails.

use async_trait::async_trait;
use log::{debug, warn};

use crate::model::Effect;
use crate::traits::SystemCheck;

pub struct InternetStatusCheck {
    connected: bool,
}

impl InternetStatusCheck {
    pub fn new(connected: bool) -> Self {
        Self { connected }
    }
}

#[async_trait]
impl SystemCheck for InternetStatusCheck {
    fn id(&self) -> &'static str {
        "internet_status"
    }

    async fn run_check(&self) -> bool {
        self.connected
    }

    async fn on_fail(&self) -> Vec<Effect> {
        warn!("No internet connection detected");
        Vec::new()
    }

    async fn on_success(&self) -> Vec<Effect> {
        debug!("Internet connection available");
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reflects_connectivity_flag() {
        assert!(InternetStatusCheck::new(true).run_check().await);
        assert!(!InternetStatusCheck::new(false).run_check().await);
    }

    #[tokio::test]
    async fn test_hooks_produce_no_effects() {
        let check = InternetStatusCheck::new(false);
        assert!(check.on_fail().await.is_empty());
        assert!(check.on_success().await.is_empty());
    }
}
