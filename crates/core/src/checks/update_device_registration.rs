//! Device registration refresh check.
//!
//! The registration held by the server embeds the app version it was
//! created with. After an app update the stored last-known version no
//! longer matches the installed one, so the registration is refreshed
//! remotely and the new version recorded. The remote call happens inside
//! the failure hook; its errors are logged and swallowed so a flaky
//! refresh never breaks the pass.

use std::sync::Arc;

use async_trait::async_trait;
use log::{error, info};

use crate::model::Effect;
use crate::traits::{RegistrationClient, SystemCheck};

pub struct UpdateDeviceRegistrationCheck {
    installed_version: String,
    last_known_version: Option<String>,
    access_token: Option<String>,
    nickname: Option<String>,
    client: Arc<dyn RegistrationClient>,
}

impl UpdateDeviceRegistrationCheck {
    pub fn new(
        installed_version: String,
        last_known_version: Option<String>,
        access_token: Option<String>,
        nickname: Option<String>,
        client: Arc<dyn RegistrationClient>,
    ) -> Self {
        Self {
            installed_version,
            last_known_version,
            access_token,
            nickname,
            client,
        }
    }
}

#[async_trait]
impl SystemCheck for UpdateDeviceRegistrationCheck {
    fn id(&self) -> &'static str {
        "update_device_registration"
    }

    async fn run_check(&self) -> bool {
        self.last_known_version.as_deref() == Some(self.installed_version.as_str())
    }

    async fn on_fail(&self) -> Vec<Effect> {
        info!(
            "App version changed ({} -> {}), refreshing device registration",
            self.last_known_version.as_deref().unwrap_or("none"),
            self.installed_version
        );

        match self
            .client
            .update_registration(self.access_token.as_deref(), self.nickname.as_deref())
            .await
        {
            Ok(response) => {
                info!("Device registration refreshed for client {}", response.client_id);
            }
            Err(err) => {
                error!("Device registration refresh failed: {}", err);
            }
        }

        // Recorded even when the refresh failed, matching the original: the
        // registration call is best-effort, the version bookkeeping is not.
        vec![Effect::RecordAppVersion(self.installed_version.clone())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ProviderError;
    use crate::model::RegistrationResponse;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeClient {
        calls: AtomicUsize,
        fail: bool,
    }

    #[async_trait]
    impl RegistrationClient for FakeClient {
        async fn update_registration(
            &self,
            _access_token: Option<&str>,
            _nickname: Option<&str>,
        ) -> Result<RegistrationResponse, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(ProviderError::network("offline"))
            } else {
                Ok(RegistrationResponse {
                    client_id: "client-1".to_string(),
                })
            }
        }
    }

    fn check(installed: &str, last_known: Option<&str>, client: Arc<FakeClient>) -> UpdateDeviceRegistrationCheck {
        UpdateDeviceRegistrationCheck::new(
            installed.to_string(),
            last_known.map(str::to_string),
            Some("token".to_string()),
            None,
            client,
        )
    }

    #[tokio::test]
    async fn test_matching_version_passes() {
        let client = Arc::new(FakeClient::default());
        assert!(check("1.2.0", Some("1.2.0"), client.clone()).run_check().await);
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_version_change_refreshes_and_records() {
        let client = Arc::new(FakeClient::default());
        let check = check("1.3.0", Some("1.2.0"), client.clone());

        assert!(!check.run_check().await);

        let effects = check.on_fail().await;
        assert_eq!(effects, vec![Effect::RecordAppVersion("1.3.0".to_string())]);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_last_known_version_fails() {
        let client = Arc::new(FakeClient::default());
        assert!(!check("1.3.0", None, client).run_check().await);
    }

    #[tokio::test]
    async fn test_refresh_error_still_records_version() {
        let client = Arc::new(FakeClient {
            calls: AtomicUsize::new(0),
            fail: true,
        });
        let check = check("1.3.0", Some("1.2.0"), client.clone());

        let effects = check.on_fail().await;
        assert_eq!(effects, vec![Effect::RecordAppVersion("1.3.0".to_string())]);
        assert_eq!(client.calls.load(Ordering::SeqCst), 1);
    }
}
