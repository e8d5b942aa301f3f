//! Cliente de Incoming Webhooks do Slack
//!
//! Este crate cobre apenas o necessário para publicar uma mensagem
//! em um webhook fixo:
//!
//! - Tipos da mensagem (`Message`, `Attachment`, `Field`)
//! - Cliente HTTP com timeouts (`WebhookClient`)
//! - Erros tipados (`SlackError`)
//!
//! # Exemplo Básico
//!
//! ```rust,ignore
//! use slack::{Attachment, Message, WebhookClient};
//!
//! #[tokio::main]
//! async fn main() -> slack::Result<()> {
//!     let webhook_url = std::env::var("SLACK_WEBHOOK_URL")
//!         .expect("SLACK_WEBHOOK_URL não configurado");
//!
//!     let client = WebhookClient::new(webhook_url)?;
//!     let message = Message::new("Deploy concluído")
//!         .with_attachment(Attachment::new("#36a64f", "Job Name: etl-diario"));
//!
//!     client.post_message(&message).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::WebhookClient;
pub use error::{Result, SlackError};
pub use types::{Attachment, Field, Message};
