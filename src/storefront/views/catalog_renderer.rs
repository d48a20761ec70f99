//! # Catalog Text Renderer
//!
//! Renders view-model output as plain text lines for the terminal front-end.

use crate::storefront::models::{Item, Qa};
use crate::storefront::view_models::CatalogEntry;
use anyhow::Result;
use std::io::Write;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Render the filtered catalog
    fn render_catalog(&mut self, entries: &[CatalogEntry]) -> Result<()>;

    /// Render the category menu
    fn render_categories(&mut self, categories: &[&str]) -> Result<()>;

    /// Render a single item page with its questions and answers
    fn render_item(&mut self, item: &Item, image_src: &str, qas: &[Qa]) -> Result<()>;
}

pub struct TextRenderer<W: Write> {
    writer: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ViewRenderer for TextRenderer<W> {
    fn render_catalog(&mut self, entries: &[CatalogEntry]) -> Result<()> {
        if entries.is_empty() {
            writeln!(self.writer, "No items")?;
            return Ok(());
        }
        for entry in entries {
            writeln!(self.writer, "#{} {}", entry.id, entry.display_name)?;
            writeln!(self.writer, "    Category: {}", entry.category)?;
            writeln!(self.writer, "    Image:    {}", entry.image_src)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn render_categories(&mut self, categories: &[&str]) -> Result<()> {
        writeln!(self.writer, "all")?;
        for category in categories {
            writeln!(self.writer, "{category}")?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn render_item(&mut self, item: &Item, image_src: &str, qas: &[Qa]) -> Result<()> {
        writeln!(self.writer, "{}", item.name)?;
        writeln!(self.writer, "Category: {}", item.category)?;
        if let Some(en) = &item.en_name {
            writeln!(self.writer, "English:  {en}")?;
        }
        if let Some(ja) = &item.ja_name {
            writeln!(self.writer, "Japanese: {ja}")?;
        }
        writeln!(self.writer, "Image:    {image_src}")?;
        for qa in qas {
            writeln!(self.writer, "Question: {}", qa.question)?;
            writeln!(self.writer, "Answer:   {}", qa.answer)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
