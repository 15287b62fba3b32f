//! Telegram Bot API client with schema-driven typing.
//!
//! `solder` talks to the Bot API through a declarative catalog: every remote
//! operation and every domain object is described as const schema data, and
//! one casting engine ([`solder_core`]) hydrates wire JSON into typed objects
//! and validates outbound arguments. There is no generated per-type code.
//!
//! ```rust,ignore
//! use serde_json::json;
//! use solder::Bot;
//!
//! let bot = Bot::new("123456:ABC-DEF")?;
//! let me = bot.get_me().await?;
//! println!("@{}", me.as_object().unwrap().get_str("username").unwrap_or(""));
//!
//! bot.send_message(json!({"chat_id": 42, "text": "hello"})).await?;
//! ```
//!
//! Incoming updates are dispatched through registered handlers:
//!
//! ```rust,ignore
//! use solder::{Bot, MessageHandler};
//!
//! let bot = Bot::new("123456:ABC-DEF")?;
//! bot.add_handler(MessageHandler(|message| {
//!     println!("got: {:?}", message.get_str("text"));
//! }));
//! bot.handle_webhook(&body).await;
//! ```

mod bot;
mod config;
mod error;
mod handler;
mod method;
mod objects;
pub mod registry;

pub use bot::{Bot, BotBuilder};
pub use config::BotConfig;
pub use error::{Error, Result};
pub use handler::{CallbackQueryHandler, MessageHandler, UpdateHandler};
pub use method::{API_BASE, CallOptions, MethodSpec, Outcome};
pub use objects::schemas;

pub use solder_core::{
    CastError, FieldValue, Scalar, Schema, SchemaRegistry, TypeRef, TypedObject,
};
pub use solder_transport::{HttpReply, HttpTransport, Transport, TransportError};
