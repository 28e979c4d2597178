//! Analytics initialization check.
//!
//! Startup-scope check that lazily brings the analytics tracker up. Passes
//! when the tracker is already initialized or the user opted out; the
//! failure hook performs the initialization itself, so the check converges
//! on the next pass.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use crate::model::Effect;
use crate::traits::{AnalyticsTracker, SystemCheck};

pub struct AnalyticsCheck {
    tracker: Arc<dyn AnalyticsTracker>,
    opted_out: bool,
}

impl AnalyticsCheck {
    pub fn new(tracker: Arc<dyn AnalyticsTracker>, opted_out: bool) -> Self {
        Self { tracker, opted_out }
    }
}

#[async_trait]
impl SystemCheck for AnalyticsCheck {
    fn id(&self) -> &'static str {
        "analytics"
    }

    async fn run_check(&self) -> bool {
        if self.opted_out {
            debug!("Analytics opted out, skipping initialization");
            return true;
        }

        self.tracker.is_initialized()
    }

    async fn on_fail(&self) -> Vec<Effect> {
        info!("Initializing analytics tracker");
        self.tracker.initialize();
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[derive(Default)]
    struct FakeTracker {
        initialized: AtomicBool,
    }

    impl AnalyticsTracker for FakeTracker {
        fn is_initialized(&self) -> bool {
            self.initialized.load(Ordering::SeqCst)
        }

        fn initialize(&self) {
            self.initialized.store(true, Ordering::SeqCst);
        }
    }

    #[tokio::test]
    async fn test_uninitialized_tracker_fails_then_initializes() {
        let tracker = Arc::new(FakeTracker::default());
        let check = AnalyticsCheck::new(tracker.clone(), false);

        assert!(!check.run_check().await);
        assert!(check.on_fail().await.is_empty());
        assert!(tracker.is_initialized());
        assert!(check.run_check().await);
    }

    #[tokio::test]
    async fn test_opt_out_passes_without_initializing() {
        let tracker = Arc::new(FakeTracker::default());
        let check = AnalyticsCheck::new(tracker.clone(), true);

        assert!(check.run_check().await);
        assert!(!tracker.is_initialized());
    }
}
