//! Validation error types.

/// Result type for local validation.
pub type Result<T> = std::result::Result<T, ValidationError>;

/// A record failed local validation before any request was made.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    #[error("{0} is required")]
    Required(&'static str),

    /// A numeric field is negative or not a finite number.
    #[error("{0} must be a non-negative number")]
    Negative(&'static str),

    /// A webhook has neither content nor embeds.
    #[error("webhook payload must contain either content or at least one embed")]
    EmptyWebhook,

    /// A webhook carries more embeds than Discord accepts.
    #[error("discord webhooks support a maximum of 10 embeds, got {count}")]
    TooManyEmbeds {
        /// Number of embeds in the payload.
        count: usize,
    },

    /// An embed carries more fields than Discord accepts.
    #[error("embed {embed} exceeds the maximum of 25 fields, got {count}")]
    TooManyFields {
        /// Index of the offending embed.
        embed: usize,
        /// Number of fields in that embed.
        count: usize,
    },

    /// An embed field has a blank name.
    #[error("embed {embed}, field {field}: name is required")]
    FieldNameRequired {
        /// Index of the embed.
        embed: usize,
        /// Index of the field within the embed.
        field: usize,
    },

    /// An embed field has a blank value.
    #[error("embed {embed}, field {field}: value is required")]
    FieldValueRequired {
        /// Index of the embed.
        embed: usize,
        /// Index of the field within the embed.
        field: usize,
    },
}
