//! Discord-compatible webhook payloads.
//!
//! Field names follow Discord's snake_case wire format (`avatar_url`,
//! `icon_url`). The limits enforced by [`Webhook::validate`] are Discord's:
//! at most [`MAX_EMBEDS`] embeds per message and [`MAX_FIELDS_PER_EMBED`]
//! fields per embed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::validation::is_blank;

/// Maximum number of embeds in one webhook message.
pub const MAX_EMBEDS: usize = 10;

/// Maximum number of fields in one embed.
pub const MAX_FIELDS_PER_EMBED: usize = 25;

/// A webhook message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    /// Overrides the webhook's default username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Overrides the webhook's default avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Plain message text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Rich embeds, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

impl Webhook {
    /// Create a message with only text content.
    #[must_use]
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Set the username override.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set the avatar override.
    #[must_use]
    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }

    /// Append an embed.
    #[must_use]
    pub fn embed(mut self, embed: Embed) -> Self {
        self.embeds.push(embed);
        self
    }

    /// Check the message against Discord's constraints.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyWebhook`] when content is absent or blank and
    ///   there are no embeds.
    /// - [`ValidationError::TooManyEmbeds`] above [`MAX_EMBEDS`].
    /// - [`ValidationError::TooManyFields`] for the first embed above
    ///   [`MAX_FIELDS_PER_EMBED`].
    /// - [`ValidationError::FieldNameRequired`] / [`ValidationError::FieldValueRequired`]
    ///   for the first field with a blank name or value.
    pub fn validate(&self) -> Result<()> {
        let has_content = self.content.as_deref().is_some_and(|c| !is_blank(c));
        if !has_content && self.embeds.is_empty() {
            return Err(ValidationError::EmptyWebhook);
        }
        if self.embeds.len() > MAX_EMBEDS {
            return Err(ValidationError::TooManyEmbeds {
                count: self.embeds.len(),
            });
        }

        for (i, embed) in self.embeds.iter().enumerate() {
            embed.validate(i)?;
        }
        Ok(())
    }
}

/// A rich embed attached to a webhook message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    /// Author block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Link applied to the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sidebar color as an RGB integer (e.g., `0x5865F2`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<i64>,
    /// Name/value fields, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    /// Thumbnail image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<Thumbnail>,
    /// Large image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    /// Footer block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
    /// ISO-8601 timestamp shown in the footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Embed {
    /// Create an empty embed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the title link.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sidebar color.
    #[must_use]
    pub fn with_color(mut self, color: i64) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the author block.
    #[must_use]
    pub fn with_author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Set the footer block.
    #[must_use]
    pub fn with_footer(mut self, footer: Footer) -> Self {
        self.footer = Some(footer);
        self
    }

    /// Set the thumbnail URL.
    #[must_use]
    pub fn with_thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(Thumbnail {
            url: Some(url.into()),
        });
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(Image {
            url: Some(url.into()),
        });
        self
    }

    /// Set the timestamp from a preformatted ISO-8601 string.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Set the timestamp from a UTC instant, formatted as RFC 3339 with milliseconds.
    #[must_use]
    pub fn with_timestamp_at(self, at: DateTime<Utc>) -> Self {
        self.with_timestamp(at.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    /// Append a field.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field::new(name, value));
        self
    }

    /// Append a field rendered inline.
    #[must_use]
    pub fn inline_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(Field::inline(name, value));
        self
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.fields.len() > MAX_FIELDS_PER_EMBED {
            return Err(ValidationError::TooManyFields {
                embed: index,
                count: self.fields.len(),
            });
        }

        for (j, field) in self.fields.iter().enumerate() {
            if is_blank(&field.name) {
                return Err(ValidationError::FieldNameRequired {
                    embed: index,
                    field: j,
                });
            }
            if is_blank(&field.value) {
                return Err(ValidationError::FieldValueRequired {
                    embed: index,
                    field: j,
                });
            }
        }
        Ok(())
    }
}

/// A name/value pair inside an embed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name, must not be blank.
    pub name: String,
    /// Field value, must not be blank.
    pub value: String,
    /// Render next to neighbouring inline fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline: Option<bool>,
}

impl Field {
    /// Create a block field.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: None,
        }
    }

    /// Create an inline field.
    #[must_use]
    pub fn inline(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            inline: Some(true),
            ..Self::new(name, value)
        }
    }
}

/// Embed author block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Author name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Link applied to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Small icon next to the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Author {
    /// Create an author block with just a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Embed thumbnail.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Embed image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Embed footer block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    /// Footer text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Small icon next to the text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

impl Footer {
    /// Create a footer with just text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            icon_url: None,
        }
    }
}

/// Response returned by the webhook relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    /// Relay status (e.g., "ok").
    pub status: String,
    /// Messages waiting ahead of this one.
    pub queue_length: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn embed_with_fields(n: usize) -> Embed {
        (0..n).fold(Embed::new(), |e, i| e.field(format!("f{i}"), "v"))
    }

    #[test]
    fn empty_webhook_is_rejected() {
        assert_eq!(
            Webhook::default().validate(),
            Err(ValidationError::EmptyWebhook)
        );
        assert_eq!(
            Webhook::with_content("   ").validate(),
            Err(ValidationError::EmptyWebhook)
        );
    }

    #[test]
    fn content_or_embed_is_enough() {
        assert!(Webhook::with_content("hello").validate().is_ok());
        assert!(Webhook::default()
            .embed(Embed::new().with_title("t"))
            .validate()
            .is_ok());
    }

    #[test]
    fn embed_limit() {
        let at_limit = (0..MAX_EMBEDS).fold(Webhook::default(), |w, _| w.embed(Embed::new()));
        assert!(at_limit.validate().is_ok());

        let over = at_limit.embed(Embed::new());
        assert_eq!(
            over.validate(),
            Err(ValidationError::TooManyEmbeds { count: 11 })
        );
    }

    #[test]
    fn field_limit_names_the_embed() {
        let webhook = Webhook::default()
            .embed(embed_with_fields(MAX_FIELDS_PER_EMBED))
            .embed(embed_with_fields(MAX_FIELDS_PER_EMBED + 1));
        assert_eq!(
            webhook.validate(),
            Err(ValidationError::TooManyFields {
                embed: 1,
                count: 26
            })
        );
    }

    #[test]
    fn blank_field_names_embed_and_field() {
        let webhook = Webhook::default()
            .embed(Embed::new().field("a", "b"))
            .embed(Embed::new().field("a", "b").field(" ", "b"));
        assert_eq!(
            webhook.validate(),
            Err(ValidationError::FieldNameRequired { embed: 1, field: 1 })
        );

        let webhook = Webhook::default().embed(Embed::new().inline_field("a", "\t"));
        assert_eq!(
            webhook.validate(),
            Err(ValidationError::FieldValueRequired { embed: 0, field: 0 })
        );
    }

    #[test]
    fn error_messages_carry_indexes() {
        let err = ValidationError::FieldValueRequired { embed: 2, field: 4 };
        assert_eq!(err.to_string(), "embed 2, field 4: value is required");
        let err = ValidationError::TooManyFields {
            embed: 3,
            count: 30,
        };
        assert!(err.to_string().starts_with("embed 3 exceeds the maximum of 25 fields"));
    }

    #[test]
    fn minimal_webhook_serializes_only_content() {
        let body = serde_json::to_value(Webhook::with_content("hello")).unwrap();
        assert_eq!(body, json!({ "content": "hello" }));
    }

    #[test]
    fn full_embed_uses_discord_names() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let webhook = Webhook::with_content("restock")
            .with_username("Lunar")
            .with_avatar_url("https://cdn.example/avatar.png")
            .embed(
                Embed::new()
                    .with_author(Author {
                        icon_url: Some("https://cdn.example/a.png".into()),
                        ..Author::new("bot")
                    })
                    .with_title("Dunk Low")
                    .with_color(0x0058_65F2)
                    .inline_field("Size", "10")
                    .field("Price", "$120")
                    .with_thumbnail("https://cdn.example/t.png")
                    .with_footer(Footer::new("footer"))
                    .with_timestamp_at(at),
            );

        let body = serde_json::to_value(webhook).unwrap();
        assert_eq!(
            body,
            json!({
                "username": "Lunar",
                "avatar_url": "https://cdn.example/avatar.png",
                "content": "restock",
                "embeds": [{
                    "author": { "name": "bot", "icon_url": "https://cdn.example/a.png" },
                    "title": "Dunk Low",
                    "color": 5_793_266,
                    "fields": [
                        { "name": "Size", "value": "10", "inline": true },
                        { "name": "Price", "value": "$120" }
                    ],
                    "thumbnail": { "url": "https://cdn.example/t.png" },
                    "footer": { "text": "footer" },
                    "timestamp": "2024-05-01T12:30:00.000Z"
                }]
            })
        );
    }

    #[test]
    fn response_reads_camel_case() {
        let response: WebhookResponse =
            serde_json::from_str(r#"{"status":"ok","queueLength":3}"#).unwrap();
        assert_eq!(response.status, "ok");
        assert_eq!(response.queue_length, 3);
    }
}
