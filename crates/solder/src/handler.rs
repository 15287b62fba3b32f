//! Update handlers.
//!
//! A handler is a trigger predicate plus a reaction. Handlers are kept in an
//! ordered list on the bot; every incoming update is tested against each
//! registered handler in registration order, and *all* matching handlers
//! run — there is no first-match-wins cutoff.
//!
//! Plain closures registered via [`Bot::on`](crate::Bot::on) become
//! always-matching handlers; content-specific reactions implement
//! [`UpdateHandler`] directly or use the shipped [`MessageHandler`] /
//! [`CallbackQueryHandler`] wrappers.

use async_trait::async_trait;
use futures::future::BoxFuture;

use solder_core::TypedObject;

use crate::bot::Bot;

/// A registered reaction to incoming updates.
#[async_trait]
pub trait UpdateHandler: Send + Sync {
    /// Decides whether this handler wants the update.
    fn matches(&self, update: &TypedObject) -> bool;

    /// Reacts to the update. The bot is available for issuing calls.
    async fn handle(&self, bot: &Bot, update: &TypedObject);
}

/// Always-matching wrapper around a plain closure.
pub(crate) struct FnHandler<F>(pub F);

#[async_trait]
impl<F> UpdateHandler for FnHandler<F>
where
    F: Fn(&TypedObject) + Send + Sync,
{
    fn matches(&self, _update: &TypedObject) -> bool {
        true
    }

    async fn handle(&self, _bot: &Bot, update: &TypedObject) {
        (self.0)(update);
    }
}

/// Always-matching wrapper around an async closure.
pub(crate) struct AsyncFnHandler<F>(pub F);

#[async_trait]
impl<F> UpdateHandler for AsyncFnHandler<F>
where
    F: Fn(TypedObject) -> BoxFuture<'static, ()> + Send + Sync,
{
    fn matches(&self, _update: &TypedObject) -> bool {
        true
    }

    async fn handle(&self, _bot: &Bot, update: &TypedObject) {
        (self.0)(update.clone()).await;
    }
}

/// Runs a closure for updates that carry a `message`.
///
/// The closure receives the inner message object.
pub struct MessageHandler<F>(pub F);

#[async_trait]
impl<F> UpdateHandler for MessageHandler<F>
where
    F: Fn(&TypedObject) + Send + Sync,
{
    fn matches(&self, update: &TypedObject) -> bool {
        update.get_object("message").is_some()
    }

    async fn handle(&self, _bot: &Bot, update: &TypedObject) {
        if let Some(message) = update.get_object("message") {
            (self.0)(message);
        }
    }
}

/// Runs a closure for updates that carry a `callback_query`.
///
/// The closure receives the inner callback query object.
pub struct CallbackQueryHandler<F>(pub F);

#[async_trait]
impl<F> UpdateHandler for CallbackQueryHandler<F>
where
    F: Fn(&TypedObject) + Send + Sync,
{
    fn matches(&self, update: &TypedObject) -> bool {
        update.get_object("callback_query").is_some()
    }

    async fn handle(&self, _bot: &Bot, update: &TypedObject) {
        if let Some(query) = update.get_object("callback_query") {
            (self.0)(query);
        }
    }
}
