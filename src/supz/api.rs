//! # API Facade
//!
//! [`SupzApi`] is the single entry point for every registry operation,
//! regardless of the client driving it. It owns the [`SupplierStore`] and
//! the injected media capability, dispatches to the command layer, and
//! returns structured `Result<CmdResult>` values.
//!
//! No business logic lives here, and nothing here performs I/O or assumes
//! a terminal; the interactive session in `main.rs` is just one possible
//! client.
//!
//! ## Generic Over MediaAccess
//!
//! `SupzApi<M: MediaAccess>` is generic over the gallery capability:
//! - Production: `SupzApi<FileMedia>`
//! - Testing: `SupzApi<ScriptedMedia>`
//!
//! This keeps the image flow testable without a device or a terminal.

use crate::commands;
use crate::error::Result;
use crate::media::MediaAccess;
use crate::model::{Draft, Field};
use crate::store::SupplierStore;

pub struct SupzApi<M: MediaAccess> {
    store: SupplierStore,
    media: M,
    placeholder: String,
}

impl<M: MediaAccess> SupzApi<M> {
    /// `placeholder` is the image reference committed suppliers receive
    /// when none was selected (see `config::DEFAULT_PLACEHOLDER_IMAGE`).
    pub fn new(media: M, placeholder: impl Into<String>) -> Self {
        Self {
            store: SupplierStore::new(),
            media,
            placeholder: placeholder.into(),
        }
    }

    pub fn draft(&self) -> &Draft {
        self.store.draft()
    }

    /// The suppliers a client should render for `query`: the full
    /// collection composed with the name/category filter.
    pub fn visible_suppliers(&self, query: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, query)
    }

    pub fn set_field(&mut self, field: Field, value: String) -> Result<commands::CmdResult> {
        commands::draft::set(&mut self.store, field, value)
    }

    pub fn show_draft(&self) -> Result<commands::CmdResult> {
        commands::draft::show(&self.store)
    }

    pub fn commit(&mut self) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.placeholder)
    }

    pub fn request_image(&mut self) -> Result<commands::CmdResult> {
        commands::image::pick(&mut self.store, &mut self.media)
    }

    pub fn clear_image(&mut self) -> Result<commands::CmdResult> {
        commands::image::clear(&mut self.store)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
