//! Lunartools Client SDK.
//!
//! This crate is the single entry point of the SDK: it re-exports the record
//! types from `lunartools-core` next to the client, so one `use` is enough.
//!
//! # Example
//!
//! ```no_run
//! use lunartools_client::{opt, AddProduct, Config, Embed, LunarClient, Webhook};
//!
//! # async fn example() -> Result<(), lunartools_client::ClientError> {
//! let client = LunarClient::new(Config::new("client-id", "access-token"));
//!
//! // Register a product
//! client
//!     .add_product(&AddProduct {
//!         store: opt::string("StockX"),
//!         ..AddProduct::new("Dunk Low", "DD1391-100", 2)
//!     })
//!     .await?;
//!
//! // Post to a webhook
//! let response = client
//!     .webhook(
//!         "https://discord.com/api/webhooks/123/abc",
//!         &Webhook::with_content("restocked")
//!             .embed(Embed::new().with_title("Dunk Low").inline_field("Qty", "2")),
//!     )
//!     .await?;
//!
//! println!("queued behind {} messages", response.queue_length);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod client;
mod config;
mod error;
mod types;

pub use client::LunarClient;
pub use config::{ClientOptions, Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::ClientError;
pub use lunartools_core::opt;
pub use lunartools_core::{
    AddOrder, AddProduct, Author, Embed, Field, Footer, Image, Thumbnail, ValidationError,
    Webhook, WebhookResponse, MAX_EMBEDS, MAX_FIELDS_PER_EMBED,
};
pub use reqwest::Method;
