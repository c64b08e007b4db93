//! Core types for the Lunartools SDK.
//!
//! This crate holds the records sent to the Lunartools API and to Discord-style
//! webhooks, together with the local validation each record must pass before it
//! is put on the wire:
//!
//! - **Products**: `AddProduct`
//! - **Orders**: `AddOrder`
//! - **Webhooks**: `Webhook`, `Embed`, `Field`, `Author`, `Footer`, `Thumbnail`,
//!   `Image`, `WebhookResponse`
//! - **Helpers**: the [`opt`] module for building optional fields
//!
//! # Optional fields
//!
//! Every optional field is an `Option<T>`. `None` is left out of the JSON body
//! entirely, while `Some(String::new())` is sent as `""`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod opt;
pub mod order;
pub mod product;
mod validation;
pub mod webhook;

pub use error::{Result, ValidationError};
pub use order::AddOrder;
pub use product::AddProduct;
pub use webhook::{
    Author, Embed, Field, Footer, Image, Thumbnail, Webhook, WebhookResponse,
    MAX_EMBEDS, MAX_FIELDS_PER_EMBED,
};
