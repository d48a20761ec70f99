//! # Application Controller
//!
//! Maps a parsed command line onto the page and view-models, then renders
//! the result. Configuration is loaded here, once, and injected downward.

use crate::cmd_args::{Command, CommandLineArgs};
use crate::config::{self, StorefrontConfig};
use crate::storefront::controllers::StorefrontPage;
use crate::storefront::events::ModelEvent;
use crate::storefront::io::Notifier;
use crate::storefront::models::{
    CategoryFilter, DraftField, FilterState, ImageFile, Language, MatchCase, UserField,
};
use crate::storefront::services::{ReqwestTransport, StorefrontApi, Transport};
use crate::storefront::view_models::{
    FetchState, ImageResolver, ItemDetailViewModel, SubmitOutcome, UserRegistrationViewModel,
};
use crate::storefront::views::ViewRenderer;
use anyhow::Result;
use std::sync::Arc;

pub struct AppController {
    config: StorefrontConfig,
    transport: Arc<dyn Transport>,
}

impl AppController {
    /// Load the profile named on the command line and connect to its backend
    pub fn new(cmd_args: &CommandLineArgs) -> Result<Self> {
        let profile_path = config::get_profile_path();
        let config = StorefrontConfig::load(cmd_args.profile(), &profile_path)?;
        tracing::info!("Using backend {}", config.backend_url);

        let transport = Arc::new(ReqwestTransport::new(&config.backend_url)?);
        Ok(Self::with_transport(config, transport))
    }

    /// Create with an injected transport (dependency injection)
    pub fn with_transport(config: StorefrontConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    fn api(&self) -> StorefrontApi {
        StorefrontApi::new(self.transport.clone(), self.config.response_shape)
    }

    fn images(&self) -> ImageResolver {
        ImageResolver::new(&self.config.backend_url, &self.config.placeholder_image)
    }

    /// Execute one command; returns false when the command did not succeed
    pub async fn run(
        &self,
        command: &Command,
        renderer: &mut impl ViewRenderer,
        notifier: &mut dyn Notifier,
    ) -> Result<bool> {
        match command {
            Command::List {
                category,
                search,
                lang,
                case_sensitive,
                keyword,
            } => {
                let match_case = if *case_sensitive {
                    MatchCase::Sensitive
                } else {
                    MatchCase::Insensitive
                };
                let filter = FilterState::new()
                    .with_category(CategoryFilter::from(category.as_str()))
                    .with_search(search.clone())
                    .with_language(lang.parse::<Language>()?)
                    .with_match_case(match_case);

                let mut page = self.page();
                page.set_filter(filter);
                match keyword {
                    Some(keyword) => {
                        page.search_remote(Some(keyword.clone()));
                    }
                    None => page.mount(),
                }
                page.settle().await;

                renderer.render_catalog(&page.visible_entries())?;
                Ok(page.catalog().state() == FetchState::Loaded)
            }
            Command::Categories => {
                let mut page = self.page();
                page.mount();
                page.settle().await;

                renderer.render_categories(&page.catalog().categories())?;
                Ok(true)
            }
            Command::Show { id } => {
                let mut detail = ItemDetailViewModel::new(self.api(), self.images(), *id);
                detail.load().await;

                match detail.item() {
                    Some(item) => {
                        renderer.render_item(item, &detail.image_source(), detail.qas())?;
                        Ok(true)
                    }
                    None => {
                        notifier.alert(&format!("Item {id} could not be loaded"));
                        Ok(false)
                    }
                }
            }
            Command::Sell {
                name,
                category,
                image,
            } => {
                let mut page = self.page();
                page.mount();
                page.settle().await;

                page.update_field(DraftField::Name, name.clone());
                page.update_field(DraftField::Category, category.clone());
                match ImageFile::read(image).await {
                    Ok(file) => page.set_image(file),
                    Err(e) => tracing::error!("Failed to read image {}: {e}", image.display()),
                }

                let result = page.submit_listing(notifier).await;
                page.settle().await;

                renderer.render_catalog(&page.visible_entries())?;
                Ok(result.outcome == SubmitOutcome::Listed)
            }
            Command::Register { name, password } => {
                let mut registration = UserRegistrationViewModel::new(self.api());
                registration.update_field(UserField::Name, name.clone());
                registration.update_field(UserField::Password, password.clone());

                let event = registration.submit(notifier).await;
                Ok(matches!(event, Some(ModelEvent::UserRegistered { .. })))
            }
        }
    }

    fn page(&self) -> StorefrontPage {
        StorefrontPage::new(&self.config, self.transport.clone())
    }
}
