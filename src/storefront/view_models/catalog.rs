//! # Item Catalog
//!
//! Owns the fetched item list. Fetches run on spawned tasks and report back
//! through a channel, so a new load can start while an older one is still
//! pending. Every load gets a sequence number and a response is only applied
//! if it is newer than the last one applied; a slow superseded fetch can
//! never overwrite fresher data.
//!
//! ```text
//! Idle ──load()──▶ Loading ──ok──▶ Loaded
//!                     │
//!                     └──err──▶ Failed (previous items kept)
//! ```

use super::derive::{categories, derive_view, ListedItem};
use super::images::ImageResolver;
use crate::storefront::error::StorefrontResult;
use crate::storefront::events::ModelEvent;
use crate::storefront::models::{FilterState, Item};
use crate::storefront::services::StorefrontApi;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Loading,
    Loaded,
    /// Last fetch failed; the previous list is still shown
    Failed,
}

/// Where the catalog gets its items from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    /// `GET /items`
    #[default]
    All,
    /// `GET /search?keyword=...`
    Keyword(String),
}

/// Result of one spawned fetch
#[derive(Debug)]
struct FetchMessage {
    seq: u64,
    result: StorefrontResult<Vec<Item>>,
}

/// One row of the rendered catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u64,
    pub display_name: String,
    pub category: String,
    pub image_src: String,
}

pub struct CatalogViewModel {
    api: StorefrontApi,
    items: Vec<Item>,
    state: FetchState,
    /// State to return to once nothing is in flight
    settled_state: FetchState,
    source: CatalogSource,
    images: ImageResolver,
    /// Sequence number of the most recently issued load
    issued_seq: u64,
    /// Sequence number of the most recently applied response
    applied_seq: u64,
    in_flight: usize,
    /// Last reload flag seen by `sync_reload`; `None` until mounted
    observed_reload: Option<bool>,
    response_sender: mpsc::Sender<FetchMessage>,
    response_receiver: mpsc::Receiver<FetchMessage>,
}

impl CatalogViewModel {
    pub fn new(api: StorefrontApi, images: ImageResolver) -> Self {
        let (response_sender, response_receiver) = mpsc::channel(16);
        Self {
            api,
            items: Vec::new(),
            state: FetchState::Idle,
            settled_state: FetchState::Idle,
            source: CatalogSource::All,
            images,
            issued_seq: 0,
            applied_seq: 0,
            in_flight: 0,
            observed_reload: None,
            response_sender,
            response_receiver,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Change the item source; takes effect on the next load
    pub fn set_source(&mut self, source: CatalogSource) {
        self.source = source;
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_mounted(&self) -> bool {
        self.observed_reload.is_some()
    }

    /// Start a fetch and return its sequence number.
    ///
    /// Must be called from within a tokio runtime.
    pub fn load(&mut self) -> u64 {
        self.issued_seq += 1;
        let seq = self.issued_seq;
        self.in_flight += 1;
        self.state = FetchState::Loading;
        tracing::debug!("Catalog load #{seq} started ({:?})", self.source);

        let api = self.api.clone();
        let source = self.source.clone();
        let result_sender = self.response_sender.clone();

        tokio::spawn(async move {
            let result = match &source {
                CatalogSource::All => api.fetch_items().await,
                CatalogSource::Keyword(keyword) => api.search_items(keyword).await,
            };
            // Receiver lives as long as the view-model; a send error means it is gone
            let _ = result_sender.send(FetchMessage { seq, result }).await;
        });

        seq
    }

    /// Effect trigger: load on first mount and on every false→true flip of `reload`.
    pub fn sync_reload(&mut self, reload: bool) -> Option<u64> {
        let should_load = match self.observed_reload {
            None => true,
            Some(previous) => reload && !previous,
        };
        self.observed_reload = Some(reload);

        if should_load {
            Some(self.load())
        } else {
            None
        }
    }

    /// Apply every finished fetch without waiting
    pub fn poll_responses(&mut self) -> Vec<ModelEvent> {
        let mut events = Vec::new();
        while let Ok(message) = self.response_receiver.try_recv() {
            events.extend(self.apply(message));
        }
        events
    }

    /// Wait for the next fetch to finish and apply it. `None` when nothing is in flight.
    pub async fn next_response(&mut self) -> Option<Vec<ModelEvent>> {
        if self.in_flight == 0 {
            return None;
        }
        let message = self.response_receiver.recv().await?;
        Some(self.apply(message))
    }

    /// Wait until no fetch is in flight
    pub async fn settle(&mut self) -> Vec<ModelEvent> {
        let mut events = Vec::new();
        while let Some(applied) = self.next_response().await {
            events.extend(applied);
        }
        events
    }

    fn apply(&mut self, message: FetchMessage) -> Vec<ModelEvent> {
        let FetchMessage { seq, result } = message;
        self.in_flight = self.in_flight.saturating_sub(1);

        if seq <= self.applied_seq {
            tracing::warn!(
                "Discarding catalog response #{seq}; #{} already applied",
                self.applied_seq
            );
            self.refresh_state();
            return vec![ModelEvent::StaleResponseDiscarded {
                seq,
                latest: self.applied_seq,
            }];
        }

        let (settled, events) = match result {
            Ok(items) => {
                tracing::info!("GET success: {} items (load #{seq})", items.len());
                let count = items.len();
                self.items = items;
                self.applied_seq = seq;
                (
                    FetchState::Loaded,
                    vec![
                        ModelEvent::ItemsLoaded { seq, count },
                        ModelEvent::LoadCompleted { seq },
                    ],
                )
            }
            Err(e) => {
                tracing::error!("GET error (load #{seq}): {e}");
                (
                    FetchState::Failed,
                    vec![ModelEvent::LoadFailed {
                        seq,
                        message: e.to_string(),
                    }],
                )
            }
        };

        self.settled_state = settled;
        self.refresh_state();
        events
    }

    fn refresh_state(&mut self) {
        self.state = if self.in_flight > 0 {
            FetchState::Loading
        } else {
            self.settled_state
        };
    }

    /// Items matching `filter`, in fetch order
    pub fn view<'a>(&'a self, filter: &FilterState) -> Vec<ListedItem<'a>> {
        derive_view(&self.items, filter)
    }

    /// Rows ready for rendering, with resolved image sources
    pub fn entries(&self, filter: &FilterState) -> Vec<CatalogEntry> {
        self.view(filter)
            .into_iter()
            .map(|listed| CatalogEntry {
                id: listed.item.id,
                display_name: listed.display_name.to_string(),
                category: listed.item.category.clone(),
                image_src: self.images.source_for(listed.item),
            })
            .collect()
    }

    pub fn categories(&self) -> Vec<&str> {
        categories(&self.items)
    }

    pub fn image_source(&self, item: &Item) -> String {
        self.images.source_for(item)
    }

    /// Record a render-time image load failure; see [`ImageResolver::report_error`]
    pub fn report_image_error(&mut self, source: &str) -> bool {
        self.images.report_error(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storefront::models::ResponseShape;
    use crate::storefront::services::{ApiResponse, MockReply, MockTransport};
    use std::sync::Arc;

    const HAT_AND_MUG: &str = r#"{"items":[
        {"id":1,"name":"Hat","category":"Fashion","image":"hat.jpg"},
        {"id":2,"name":"Mug","category":"Home","image":""}
    ]}"#;

    fn catalog(mock: &Arc<MockTransport>) -> CatalogViewModel {
        CatalogViewModel::new(
            StorefrontApi::new(mock.clone(), ResponseShape::Envelope),
            ImageResolver::new("http://127.0.0.1:9000", "/logo192.png"),
        )
    }

    fn items_reply(body: &str) -> MockReply {
        MockReply::Respond(ApiResponse::ok(body))
    }

    #[tokio::test]
    async fn load_should_replace_items_and_complete() {
        let mock = Arc::new(MockTransport::new());
        mock.push_get("/items", items_reply(HAT_AND_MUG));
        let mut vm = catalog(&mock);

        assert_eq!(vm.state(), FetchState::Idle);
        let seq = vm.load();
        assert_eq!(vm.state(), FetchState::Loading);

        let events = vm.settle().await;
        assert_eq!(
            events,
            vec![
                ModelEvent::ItemsLoaded { seq, count: 2 },
                ModelEvent::LoadCompleted { seq },
            ]
        );
        assert_eq!(vm.state(), FetchState::Loaded);
        assert_eq!(vm.items().len(), 2);
    }

    #[tokio::test]
    async fn failed_load_should_keep_previous_items() {
        let mock = Arc::new(MockTransport::new());
        mock.push_get("/items", items_reply(HAT_AND_MUG));
        mock.push_get("/items", MockReply::Fail("connection reset".to_string()));
        mock.push_get("/items", items_reply("not json"));
        let mut vm = catalog(&mock);

        vm.load();
        vm.settle().await;

        vm.load();
        let events = vm.settle().await;
        assert!(matches!(events[..], [ModelEvent::LoadFailed { .. }]));
        assert_eq!(vm.state(), FetchState::Failed);
        assert_eq!(vm.items().len(), 2);

        vm.load();
        vm.settle().await;
        assert_eq!(vm.state(), FetchState::Failed);
        assert_eq!(vm.items().len(), 2);
    }

    #[tokio::test]
    async fn sync_reload_should_fetch_on_mount_and_rising_edge_only() {
        let mock = Arc::new(MockTransport::new());
        for _ in 0..3 {
            mock.push_get("/items", items_reply(r#"{"items":[]}"#));
        }
        let mut vm = catalog(&mock);

        assert!(vm.sync_reload(true).is_some());
        assert!(vm.sync_reload(true).is_none());
        assert!(vm.sync_reload(true).is_none());
        assert!(vm.sync_reload(false).is_none());
        assert!(vm.sync_reload(true).is_some());
        vm.settle().await;

        assert_eq!(mock.call_count(), 2);
    }

    #[tokio::test]
    async fn mount_with_reload_false_should_still_fetch_once() {
        let mock = Arc::new(MockTransport::new());
        mock.push_get("/items", items_reply(r#"{"items":[]}"#));
        let mut vm = catalog(&mock);

        assert!(!vm.is_mounted());
        assert_eq!(vm.sync_reload(false), Some(1));
        assert!(vm.sync_reload(false).is_none());
        assert!(vm.is_mounted());
        vm.settle().await;
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn older_response_arriving_last_should_be_discarded() {
        let mock = Arc::new(MockTransport::new());
        let release_first = mock.push_gated_get(
            "/items",
            items_reply(r#"{"items":[{"id":1,"name":"Old","category":"Home"}]}"#),
        );
        let release_second = mock.push_gated_get(
            "/items",
            items_reply(r#"{"items":[{"id":2,"name":"New","category":"Home"}]}"#),
        );
        let mut vm = catalog(&mock);

        let first = vm.load();
        let second = vm.load();

        release_second.send(()).unwrap();
        let events = vm.next_response().await.unwrap();
        assert_eq!(events[0], ModelEvent::ItemsLoaded { seq: second, count: 1 });
        assert_eq!(vm.state(), FetchState::Loading);

        release_first.send(()).unwrap();
        let events = vm.next_response().await.unwrap();
        assert_eq!(
            events,
            vec![ModelEvent::StaleResponseDiscarded {
                seq: first,
                latest: second
            }]
        );
        assert_eq!(vm.items()[0].name, "New");
        assert_eq!(vm.state(), FetchState::Loaded);
        assert!(vm.next_response().await.is_none());
    }

    #[tokio::test]
    async fn in_order_responses_should_both_apply() {
        let mock = Arc::new(MockTransport::new());
        mock.push_get("/items", items_reply(r#"{"items":[{"id":1,"name":"A","category":"X"}]}"#));
        mock.push_get("/items", items_reply(r#"{"items":[{"id":2,"name":"B","category":"X"}]}"#));
        let mut vm = catalog(&mock);

        vm.load();
        vm.settle().await;
        vm.load();
        vm.settle().await;

        assert_eq!(vm.items()[0].name, "B");
    }

    #[tokio::test]
    async fn keyword_source_should_use_search_endpoint() {
        let mock = Arc::new(MockTransport::new());
        mock.push_get("/search", items_reply(r#"{"items":[{"id":5,"name":"Mug","category":"Home"}]}"#));
        let mut vm = catalog(&mock);

        vm.set_source(CatalogSource::Keyword("mug".to_string()));
        vm.load();
        vm.settle().await;

        assert_eq!(vm.items()[0].id, 5);
        assert_eq!(mock.calls()[0].path, "/search");
    }

    #[tokio::test]
    async fn entries_should_resolve_images_with_placeholder() {
        let mock = Arc::new(MockTransport::new());
        mock.push_get("/items", items_reply(HAT_AND_MUG));
        let mut vm = catalog(&mock);
        vm.load();
        vm.settle().await;

        let entries = vm.entries(&FilterState::new());
        assert_eq!(entries[0].image_src, "http://127.0.0.1:9000/image/hat.jpg");
        assert_eq!(entries[1].image_src, "/logo192.png");

        let broken = entries[0].image_src.clone();
        assert!(vm.report_image_error(&broken));
        assert!(!vm.report_image_error(&broken));
        let entries = vm.entries(&FilterState::new());
        assert_eq!(entries[0].image_src, "/logo192.png");
    }

    #[tokio::test]
    async fn poll_responses_should_not_block() {
        let mock = Arc::new(MockTransport::new());
        let release = mock.push_gated_get("/items", items_reply(HAT_AND_MUG));
        let mut vm = catalog(&mock);

        vm.load();
        assert!(vm.poll_responses().is_empty());
        assert_eq!(vm.in_flight(), 1);

        release.send(()).unwrap();
        let events = vm.settle().await;
        assert_eq!(events.len(), 2);
        assert_eq!(vm.categories(), vec!["Fashion", "Home"]);
    }
}
