//! # Item Detail
//!
//! Single-item page backed by `GET /items/{id}`, with the item's Q&A from
//! `GET /qas/{id}` fetched alongside. Either fetch failing keeps whatever
//! that part showed before, like the catalog does.

use super::catalog::FetchState;
use super::images::ImageResolver;
use crate::storefront::events::ModelEvent;
use crate::storefront::models::{Item, Qa};
use crate::storefront::services::StorefrontApi;

pub struct ItemDetailViewModel {
    api: StorefrontApi,
    images: ImageResolver,
    item_id: u64,
    item: Option<Item>,
    qas: Vec<Qa>,
    state: FetchState,
}

impl ItemDetailViewModel {
    pub fn new(api: StorefrontApi, images: ImageResolver, item_id: u64) -> Self {
        Self {
            api,
            images,
            item_id,
            item: None,
            qas: Vec::new(),
            state: FetchState::Idle,
        }
    }

    pub fn item_id(&self) -> u64 {
        self.item_id
    }

    pub fn item(&self) -> Option<&Item> {
        self.item.as_ref()
    }

    pub fn qas(&self) -> &[Qa] {
        &self.qas
    }

    pub fn state(&self) -> FetchState {
        self.state
    }

    /// Resolved image source, or the placeholder when nothing is loaded
    pub fn image_source(&self) -> String {
        match &self.item {
            Some(item) => self.images.source_for(item),
            None => self.images.placeholder().to_string(),
        }
    }

    pub fn report_image_error(&mut self, source: &str) -> bool {
        self.images.report_error(source)
    }

    /// Fetch the item and its Q&A concurrently. `state` tracks the item
    /// fetch; a Q&A failure is logged and leaves the previous list in place.
    pub async fn load(&mut self) -> Vec<ModelEvent> {
        self.state = FetchState::Loading;
        let id = self.item_id;
        let (item, qas) = tokio::join!(self.api.fetch_item(id), self.api.fetch_qas(id));

        let mut events = Vec::new();
        match item {
            Ok(item) => {
                tracing::info!("GET success: item {id}");
                self.item = Some(item);
                self.state = FetchState::Loaded;
                events.push(ModelEvent::ItemDetailLoaded { id });
            }
            Err(e) => {
                tracing::error!("GET error for item {id}: {e}");
                self.state = FetchState::Failed;
            }
        }
        match qas {
            Ok(qas) => {
                tracing::info!("GET success: {} qas for item {id}", qas.len());
                events.push(ModelEvent::QasLoaded {
                    item_id: id,
                    count: qas.len(),
                });
                self.qas = qas;
            }
            Err(e) => tracing::error!("GET error for qas of item {id}: {e}"),
        }
        events
    }
}
