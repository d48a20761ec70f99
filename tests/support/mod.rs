//! Shared helpers for the storefront integration tests
//!
//! - Page construction over a scripted transport
//! - Event recording through the page's event bus

use simple_mercari::config::StorefrontConfig;
use simple_mercari::{ApiResponse, MockReply, MockTransport, ModelEvent, StorefrontPage};
use std::sync::{Arc, Mutex};

pub fn mock() -> Arc<MockTransport> {
    Arc::new(MockTransport::new())
}

pub fn page(mock: &Arc<MockTransport>) -> StorefrontPage {
    StorefrontPage::new(&StorefrontConfig::default(), mock.clone())
}

pub fn ok(body: &str) -> MockReply {
    MockReply::Respond(ApiResponse::ok(body))
}

/// Subscribe a recorder that keeps every published event
pub fn record_events(page: &mut StorefrontPage) -> Arc<Mutex<Vec<ModelEvent>>> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    page.subscribe(Box::new(move |event| {
        received_clone.lock().unwrap().push(event.clone());
    }));
    received
}

pub fn count(events: &Arc<Mutex<Vec<ModelEvent>>>, predicate: impl Fn(&ModelEvent) -> bool) -> usize {
    events.lock().unwrap().iter().filter(|e| predicate(e)).count()
}
