//! # Storefront Page Controller
//!
//! Composition root of the listing page. Owns the shared `reload` flag and
//! wires the two independent view-models together:
//!
//! ```text
//! ListingViewModel ──ListingCompleted──▶ reload = true ──▶ CatalogViewModel::sync_reload
//!        ▲                                                        │
//!        │                                                LoadCompleted
//!        └──────────────────────── reload = false ◀──────────────┘
//! ```
//!
//! Every change to the flag is followed by a trigger pass, the equivalent of
//! the next render.

use crate::config::StorefrontConfig;
use crate::storefront::events::{EventBus, ModelEvent, ModelEventHandler, SimpleEventBus};
use crate::storefront::io::Notifier;
use crate::storefront::models::{DraftField, FilterState, ImageFile};
use crate::storefront::services::{StorefrontApi, Transport};
use crate::storefront::view_models::{
    CatalogEntry, CatalogSource, CatalogViewModel, ImageResolver, ListedItem, ListingViewModel,
    SubmitResult,
};
use std::sync::Arc;

pub struct StorefrontPage {
    reload: bool,
    pending_reload: bool,
    filter: FilterState,
    listing: ListingViewModel,
    catalog: CatalogViewModel,
    event_bus: SimpleEventBus,
}

impl StorefrontPage {
    /// Build the page from one configuration value and a transport
    pub fn new(config: &StorefrontConfig, transport: Arc<dyn Transport>) -> Self {
        let api = StorefrontApi::new(transport, config.response_shape);
        let images = ImageResolver::new(&config.backend_url, &config.placeholder_image);

        Self {
            reload: true,
            pending_reload: false,
            filter: FilterState::default(),
            listing: ListingViewModel::new(api.clone(), config.submission),
            catalog: CatalogViewModel::new(api, images),
            event_bus: SimpleEventBus::new(),
        }
    }

    pub fn reload(&self) -> bool {
        self.reload
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: FilterState) {
        self.filter = filter;
    }

    pub fn listing(&self) -> &ListingViewModel {
        &self.listing
    }

    pub fn catalog(&self) -> &CatalogViewModel {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut CatalogViewModel {
        &mut self.catalog
    }

    pub fn subscribe(&mut self, handler: ModelEventHandler) {
        self.event_bus.subscribe_to_model_events(handler);
    }

    /// First render: runs the catalog's mount fetch
    pub fn mount(&mut self) {
        self.trigger_catalog();
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.listing.update_field(field, value);
    }

    pub fn set_image(&mut self, file: ImageFile) {
        self.listing.set_image(file);
    }

    /// Submit the listing draft; a completed submission requests a catalog reload
    pub async fn submit_listing(&mut self, notifier: &mut dyn Notifier) -> SubmitResult {
        let result = self.listing.submit(notifier).await;
        self.dispatch(result.events.clone());
        result
    }

    /// Search on the server instead of listing everything; `None` returns to `GET /items`
    pub fn search_remote(&mut self, keyword: Option<String>) -> u64 {
        let source = match keyword {
            Some(keyword) if !keyword.trim().is_empty() => CatalogSource::Keyword(keyword),
            _ => CatalogSource::All,
        };
        self.catalog.set_source(source);
        let seq = self.catalog.load();
        self.dispatch(vec![ModelEvent::LoadStarted { seq }]);
        seq
    }

    /// Apply finished fetches without waiting
    pub fn pump(&mut self) {
        let events = self.catalog.poll_responses();
        self.dispatch(events);
    }

    /// Wait until the catalog has no fetch in flight, including reloads
    /// triggered along the way
    pub async fn settle(&mut self) {
        while let Some(events) = self.catalog.next_response().await {
            self.dispatch(events);
        }
    }

    /// Items currently displayed: always `derive_view(items, filter)`
    pub fn visible_items(&self) -> Vec<ListedItem<'_>> {
        self.catalog.view(&self.filter)
    }

    pub fn visible_entries(&self) -> Vec<CatalogEntry> {
        self.catalog.entries(&self.filter)
    }

    fn dispatch(&mut self, events: Vec<ModelEvent>) {
        for event in events {
            if event.is_listing_completion() {
                self.publish(event);
                if self.reload && self.catalog.in_flight() > 0 {
                    // The fetch in flight was issued before this listing landed
                    tracing::debug!("Reload deferred until the current load finishes");
                    self.pending_reload = true;
                } else {
                    self.set_reload(true);
                }
            } else if event.is_load_completion() {
                // A failed load clears the flag as well, otherwise the next
                // listing could not produce a false→true transition
                self.publish(event);
                self.set_reload(false);
                if self.pending_reload {
                    self.pending_reload = false;
                    self.set_reload(true);
                }
            } else {
                self.publish(event);
            }
        }
    }

    fn set_reload(&mut self, reload: bool) {
        if reload && !self.reload {
            tracing::debug!("Reload requested");
            self.publish(ModelEvent::ReloadRequested);
        }
        self.reload = reload;
        self.render_pass();
    }

    /// Re-run the catalog's reload effect; nothing happens before mount
    fn render_pass(&mut self) {
        if self.catalog.is_mounted() {
            self.trigger_catalog();
        }
    }

    fn trigger_catalog(&mut self) {
        if let Some(seq) = self.catalog.sync_reload(self.reload) {
            self.publish(ModelEvent::LoadStarted { seq });
        }
    }

    fn publish(&mut self, event: ModelEvent) {
        self.event_bus.publish_model_event(event);
    }
}
