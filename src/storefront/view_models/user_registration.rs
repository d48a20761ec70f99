//! # User Registration
//!
//! Name/password form posted to `POST /users`. Same shape as the listing
//! form: validation blocks the request, and the draft resets after any
//! attempt that reached the network.

use crate::storefront::events::ModelEvent;
use crate::storefront::io::Notifier;
use crate::storefront::models::{UserDraft, UserField};
use crate::storefront::services::StorefrontApi;

pub const REGISTERED_MESSAGE: &str = "User registered successfully";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Failed to register this user";

pub struct UserRegistrationViewModel {
    api: StorefrontApi,
    draft: UserDraft,
}

impl UserRegistrationViewModel {
    pub fn new(api: StorefrontApi) -> Self {
        Self {
            api,
            draft: UserDraft::default(),
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn update_field(&mut self, field: UserField, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
    }

    /// Returns the emitted event, or `None` when validation blocked the request
    pub async fn submit(&mut self, notifier: &mut dyn Notifier) -> Option<ModelEvent> {
        if let Err(e) = self.draft.validate() {
            notifier.alert(&e.to_string());
            return None;
        }

        let event = match self.api.register_user(&self.draft).await {
            Ok(()) => {
                tracing::info!("User '{}' registered", self.draft.name);
                notifier.alert(REGISTERED_MESSAGE);
                ModelEvent::UserRegistered {
                    name: self.draft.name.clone(),
                }
            }
            Err(e) => {
                tracing::error!("POST error: {e}");
                notifier.alert(REGISTRATION_FAILED_MESSAGE);
                ModelEvent::UserRegistrationFailed {
                    message: e.to_string(),
                }
            }
        };

        self.draft.clear();
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::io::RecordingNotifier;
    use crate::storefront::models::ResponseShape;
    use crate::storefront::services::{ApiResponse, MockReply, MockTransport};
    use std::sync::Arc;

    fn registration(mock: &Arc<MockTransport>) -> UserRegistrationViewModel {
        UserRegistrationViewModel::new(StorefrontApi::new(mock.clone(), ResponseShape::Envelope))
    }

    #[tokio::test]
    async fn missing_password_should_block_request() {
        let mock = Arc::new(MockTransport::new());
        let mut vm = registration(&mock);
        let mut notifier = RecordingNotifier::new();
        vm.update_field(UserField::Name, "alice");

        assert!(vm.submit(&mut notifier).await.is_none());
        assert_eq!(mock.call_count(), 0);
        assert_eq!(notifier.last(), Some("Name and password are required!"));
    }

    #[tokio::test]
    async fn submit_should_post_and_reset() {
        let mock = Arc::new(MockTransport::new());
        mock.push_post("/users", MockReply::Respond(ApiResponse::ok("{}")));
        let mut vm = registration(&mock);
        let mut notifier = RecordingNotifier::new();
        vm.update_field(UserField::Name, "alice");
        vm.update_field(UserField::Password, "pw");

        let event = vm.submit(&mut notifier).await;

        assert_eq!(
            event,
            Some(ModelEvent::UserRegistered {
                name: "alice".to_string()
            })
        );
        let form = mock.calls()[0].form.clone().unwrap();
        assert_eq!(form.field("password"), Some("pw"));
        assert_eq!(vm.draft(), &UserDraft::default());
    }

    #[tokio::test]
    async fn failed_submit_should_alert_and_reset() {
        let mock = Arc::new(MockTransport::new());
        mock.push_post("/users", MockReply::Fail("timeout".to_string()));
        let mut vm = registration(&mock);
        let mut notifier = RecordingNotifier::new();
        vm.update_field(UserField::Name, "alice");
        vm.update_field(UserField::Password, "pw");

        let event = vm.submit(&mut notifier).await;

        assert!(matches!(event, Some(ModelEvent::UserRegistrationFailed { .. })));
        assert_eq!(notifier.last(), Some(REGISTRATION_FAILED_MESSAGE));
        assert!(vm.draft().name.is_empty());
    }
}
