//! Payload de mensagem aceito por Incoming Webhooks
//!
//! Formato: `{ text, attachments: [ { color, title, fields: [ {title, value, short} ] } ] }`

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mensagem completa enviada ao webhook
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Texto de cabeçalho da mensagem
    pub text: String,

    /// Blocos coloridos (um por item)
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Cria uma mensagem sem attachments
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            attachments: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn with_attachments(mut self, attachments: impl IntoIterator<Item = Attachment>) -> Self {
        self.attachments.extend(attachments);
        self
    }
}

/// Bloco visual com barra lateral colorida
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Cor hex (e.g., "#ff0000")
    pub color: String,

    pub title: String,

    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Attachment {
    pub fn new(color: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            title: title.into(),
            fields: Vec::new(),
        }
    }

    /// Adiciona um campo curto (exibido lado a lado)
    pub fn short_field(mut self, title: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.push(Field::short(title, value));
        self
    }
}

/// Campo título/valor dentro de um attachment
///
/// O Slack aceita texto ou número em `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub title: String,
    pub value: Value,
    pub short: bool,
}

impl Field {
    pub fn short(title: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }
}
