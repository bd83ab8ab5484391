//! Model Request Types
//!
//! One logical model invocation: system instructions, ordered content parts
//! (text and/or inline binary attachments), and a response-format hint.
//! Part shapes serialize directly to the generateContent wire format.

use serde::{Deserialize, Serialize};

use crate::types::Attachment;

/// What the caller expects back from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Free text
    #[default]
    Text,
    /// Response must be JSON; the request carries an `application/json`
    /// response mime-type hint
    Json,
}

/// One content part of a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

/// Inline binary data (images, audio) as base64 with a mime type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn inline(attachment: &Attachment) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: attachment.mime_type.clone(),
                data: attachment.data.clone(),
            },
        }
    }
}

/// A complete section request, ready for dispatch.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub system_instruction: String,
    pub parts: Vec<Part>,
    pub format: ResponseFormat,
}

impl ModelRequest {
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            parts: Vec::new(),
            format: ResponseFormat::Text,
        }
    }

    /// Request JSON output instead of free text.
    pub fn expect_json(mut self) -> Self {
        self.format = ResponseFormat::Json;
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(Part::text(text));
        self
    }

    /// Attach binary data followed by a caption telling the model what it is.
    pub fn with_attachment(mut self, attachment: &Attachment, caption: impl Into<String>) -> Self {
        self.parts.push(Part::inline(attachment));
        self.parts.push(Part::text(caption));
        self
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        self.parts.push(Part::text(text));
    }

    pub fn push_attachment(&mut self, attachment: &Attachment, caption: impl Into<String>) {
        self.parts.push(Part::inline(attachment));
        self.parts.push(Part::text(caption));
    }
}
