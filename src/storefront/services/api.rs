//! # Storefront API
//!
//! Typed calls against the backend REST contract, layered on a
//! [`Transport`]. Status checks and body decoding live here so view-models
//! only ever see items or a [`StorefrontError`].

use super::http::{FormPayload, Transport};
use crate::storefront::error::{StorefrontError, StorefrontResult};
use crate::storefront::models::{qa, Draft, Item, Qa, ResponseShape, UserDraft};
use serde::Deserialize;
use std::sync::Arc;

pub const ITEMS_PATH: &str = "/items";
pub const SEARCH_PATH: &str = "/search";
pub const USERS_PATH: &str = "/users";
pub const QAS_PATH: &str = "/qas";

/// Single-item reply; some backends answer a missing id with 200 and a detail message
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemReply {
    Missing { detail: String },
    Found(Item),
}

#[derive(Clone)]
pub struct StorefrontApi {
    transport: Arc<dyn Transport>,
    shape: ResponseShape,
}

impl StorefrontApi {
    pub fn new(transport: Arc<dyn Transport>, shape: ResponseShape) -> Self {
        Self { transport, shape }
    }

    pub fn response_shape(&self) -> ResponseShape {
        self.shape
    }

    /// `GET /items`
    pub async fn fetch_items(&self) -> StorefrontResult<Vec<Item>> {
        let response = self.transport.get(ITEMS_PATH, &[]).await?.ensure_success()?;
        self.shape.decode_items(&response.body)
    }

    /// `GET /search?keyword=...`
    pub async fn search_items(&self, keyword: &str) -> StorefrontResult<Vec<Item>> {
        let response = self
            .transport
            .get(SEARCH_PATH, &[("keyword", keyword)])
            .await?
            .ensure_success()?;
        self.shape.decode_items(&response.body)
    }

    /// `GET /items/{id}`
    pub async fn fetch_item(&self, id: u64) -> StorefrontResult<Item> {
        let path = format!("{ITEMS_PATH}/{id}");
        let response = self.transport.get(&path, &[]).await?.ensure_success()?;
        match serde_json::from_str::<ItemReply>(&response.body) {
            Ok(ItemReply::Found(item)) => Ok(item),
            Ok(ItemReply::Missing { detail }) => Err(StorefrontError::Decode(detail)),
            Err(e) => Err(e.into()),
        }
    }

    /// `GET /qas/{item_id}`
    pub async fn fetch_qas(&self, item_id: u64) -> StorefrontResult<Vec<Qa>> {
        let path = format!("{QAS_PATH}/{item_id}");
        let response = self.transport.get(&path, &[]).await?.ensure_success()?;
        qa::decode_qas(&response.body)
    }

    /// `POST /items` with multipart `name`, `category`, `image`
    pub async fn post_item(&self, draft: &Draft) -> StorefrontResult<()> {
        let image = draft
            .image
            .clone()
            .ok_or_else(|| StorefrontError::Validation("Please select an image file!".to_string()))?;
        let form = FormPayload::new()
            .text("name", draft.name.clone())
            .text("category", draft.category.clone())
            .file("image", image);

        self.transport
            .post_form(ITEMS_PATH, form)
            .await?
            .ensure_success()?;
        Ok(())
    }

    /// `POST /users` with multipart `name`, `password`
    pub async fn register_user(&self, user: &UserDraft) -> StorefrontResult<()> {
        let form = FormPayload::new()
            .text("name", user.name.clone())
            .text("password", user.password.clone());

        self.transport
            .post_form(USERS_PATH, form)
            .await?
            .ensure_success()?;
        Ok(())
    }
}
