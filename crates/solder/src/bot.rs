//! The bot façade.
//!
//! [`Bot`] owns the credential, the default failure policy, the transport,
//! and the ordered handler list. Remote operations are invoked dynamically
//! by name ([`Bot::invoke`]) against the method registry, or through the
//! generated named wrappers ([`Bot::get_me`], [`Bot::send_message`], …).
//!
//! Calls are plain `async fn`s: calling one yields an unresolved future
//! (nothing is sent until it is polled), and the failure policy travels
//! with the call as an explicit [`CallOptions`] argument — there is no
//! shared mutable override state.

use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use parking_lot::RwLock;
use serde_json::Value;
use tracing::{debug, trace, warn};

use solder_core::{FieldValue, TypedObject, caster};
use solder_transport::{HttpTransport, Transport};

use crate::config::BotConfig;
use crate::error::{Error, Result};
use crate::handler::{AsyncFnHandler, FnHandler, UpdateHandler};
use crate::method::{CallOptions, Envelope, MethodSpec, Outcome};
use crate::objects::schemas;
use crate::registry;

// ============================================================================
// Bot
// ============================================================================

/// A Telegram Bot API client with update dispatch.
pub struct Bot {
    token: String,
    soft_fail: bool,
    transport: Arc<dyn Transport>,
    handlers: RwLock<Vec<Arc<dyn UpdateHandler>>>,
}

impl Bot {
    /// Creates a bot over the default HTTP transport.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder(token).build()
    }

    /// Starts building a bot.
    pub fn builder(token: impl Into<String>) -> BotBuilder {
        BotBuilder {
            token: token.into(),
            soft_fail: false,
            transport: None,
            handlers: Vec::new(),
        }
    }

    /// Builds a bot from deserialized settings.
    pub fn from_config(config: BotConfig) -> Result<Self> {
        Self::builder(config.token).soft_fail(config.soft_fail).build()
    }

    /// The configured default failure policy.
    pub fn soft_fail(&self) -> bool {
        self.soft_fail
    }

    // ------------------------------------------------------------------------
    // Dynamic invocation
    // ------------------------------------------------------------------------

    /// Invokes a Bot API operation by name under the bot's default policy.
    ///
    /// `args` is the operation's single argument mapping (or `None` for
    /// parameterless operations). Arguments are cast against the operation's
    /// parameter schema before anything touches the wire.
    pub async fn invoke(&self, method: &str, args: Option<Value>) -> Result<Outcome> {
        let options = CallOptions {
            soft_fail: self.soft_fail,
        };
        self.invoke_with(method, args, options).await
    }

    /// Invokes a Bot API operation with explicit per-call policy.
    ///
    /// Local failures (unknown name, argument shape violations, malformed
    /// envelopes) are always errors. Remote and transport failures are
    /// errors by default, or a soft [`Outcome::Failed`] when
    /// `options.soft_fail` is set.
    pub async fn invoke_with(
        &self,
        method: &str,
        args: Option<Value>,
        options: CallOptions,
    ) -> Result<Outcome> {
        let spec =
            registry::method(method).ok_or_else(|| Error::MethodNotFound(method.to_string()))?;
        let body = spec.build_body(schemas(), args.as_ref())?;

        match self.call(spec, body).await {
            Ok(value) => Ok(Outcome::Success(value)),
            Err(error) if options.soft_fail && error.is_soft() => {
                warn!(method = spec.name, %error, "call failed softly");
                Ok(Outcome::Failed(error))
            }
            Err(error) => Err(error),
        }
    }

    /// Issues the HTTP call and casts the envelope result.
    async fn call(&self, spec: &MethodSpec, body: Option<Value>) -> Result<FieldValue> {
        debug!(method = spec.name, "calling Bot API");
        if let Some(body) = &body {
            trace!(method = spec.name, body = %body, "request body");
        }

        let reply = self
            .transport
            .post_json(&spec.url(&self.token), body.as_ref())
            .await?;
        trace!(method = spec.name, status = reply.status, body = %reply.body, "reply envelope");

        // A body that is not an envelope on a non-2xx status is a remote-side
        // failure (proxies and gateways answer with their own JSON shapes),
        // so it stays under the soft-failure policy. On 2xx it is a protocol
        // violation and always fatal.
        let status = reply.status;
        let expects_envelope = reply.is_success();
        let envelope: Envelope = serde_json::from_value(reply.body).map_err(|e| {
            if expects_envelope {
                Error::Envelope(e.to_string())
            } else {
                Error::Remote {
                    code: i64::from(status),
                    description: format!("HTTP {status}: {e}"),
                }
            }
        })?;
        let result = envelope.into_result()?;

        let cast = caster::cast_value(schemas(), FieldValue::Scalar(result), &spec.returns)?;
        Ok(cast.unwrap_or(FieldValue::Scalar(Value::Null)))
    }

    // ------------------------------------------------------------------------
    // Handler registration
    // ------------------------------------------------------------------------

    /// Appends a handler to the dispatch order.
    pub fn add_handler(&self, handler: impl UpdateHandler + 'static) {
        self.handlers.write().push(Arc::new(handler));
    }

    /// Appends several pre-boxed handlers, preserving their order.
    pub fn add_handlers(&self, handlers: impl IntoIterator<Item = Arc<dyn UpdateHandler>>) {
        self.handlers.write().extend(handlers);
    }

    /// Registers a plain closure as an always-matching handler.
    pub fn on(&self, handler: impl Fn(&TypedObject) + Send + Sync + 'static) {
        self.add_handler(FnHandler(handler));
    }

    /// Registers an async closure as an always-matching handler.
    pub fn on_async<F, Fut>(&self, handler: F)
    where
        F: Fn(TypedObject) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.add_handler(AsyncFnHandler(move |update: TypedObject| {
            handler(update).boxed()
        }));
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    // ------------------------------------------------------------------------
    // Update dispatch
    // ------------------------------------------------------------------------

    /// Runs the handler chain against an already-hydrated update.
    ///
    /// Handlers are evaluated in registration order and every matching
    /// handler runs. The list is snapshotted up front, so handlers may
    /// register further handlers without deadlocking (they join from the
    /// next update on).
    pub async fn dispatch_update(&self, update: &TypedObject) {
        let handlers: Vec<Arc<dyn UpdateHandler>> = self.handlers.read().clone();
        debug!(
            update_id = ?update.get_i64("update_id"),
            handlers = handlers.len(),
            "dispatching update"
        );

        for handler in handlers {
            if handler.matches(update) {
                handler.handle(self, update).await;
            }
        }
    }

    /// Hydrates and dispatches a raw update payload.
    ///
    /// Soft ingestion: a payload without an `update_id`, or one that fails
    /// hydration, is dropped and `false` is returned — nothing dispatches.
    pub async fn handle_update(&self, raw: Value) -> bool {
        if raw.get("update_id").is_none() {
            warn!("dropping update without update_id");
            return false;
        }

        let update = match caster::hydrate(schemas(), "Update", raw) {
            Ok(update) => update,
            Err(error) => {
                warn!(%error, "dropping malformed update");
                return false;
            }
        };

        self.dispatch_update(&update).await;
        true
    }

    /// Webhook entry point: parses an inbound POST body and dispatches it.
    ///
    /// Reading the body off the wire is the host's job; this takes the raw
    /// text. Returns `false` for unparseable or malformed payloads.
    pub async fn handle_webhook(&self, body: &str) -> bool {
        match serde_json::from_str::<Value>(body) {
            Ok(raw) => self.handle_update(raw).await,
            Err(error) => {
                warn!(%error, "dropping unparseable webhook body");
                false
            }
        }
    }
}

// ============================================================================
// Named method wrappers
// ============================================================================

macro_rules! impl_method {
    // Parameterless operation.
    ($(#[$meta:meta])* $fn_name:ident, $method:literal) => {
        $(#[$meta])*
        pub async fn $fn_name(&self) -> Result<Outcome> {
            self.invoke($method, None).await
        }
    };
    // Operation taking an argument mapping.
    ($(#[$meta:meta])* $fn_name:ident, $method:literal, args) => {
        $(#[$meta])*
        pub async fn $fn_name(&self, args: Value) -> Result<Outcome> {
            self.invoke($method, Some(args)).await
        }
    };
}

impl Bot {
    impl_method!(
        /// Removes the webhook integration. Succeeds with `true`.
        delete_webhook,
        "deleteWebhook"
    );

    impl_method!(
        /// Exports a chat's invite link. Succeeds with the link string.
        export_chat_invite_link,
        "exportChatInviteLink",
        args
    );

    impl_method!(
        /// Forwards a message of any kind. Succeeds with the sent `Message`.
        forward_message,
        "forwardMessage",
        args
    );

    impl_method!(
        /// Tests the bot's auth token. Succeeds with the bot's `User`.
        get_me,
        "getMe"
    );

    impl_method!(
        /// Long-polls for incoming updates. Succeeds with an `Update` array.
        get_updates,
        "getUpdates",
        args
    );

    impl_method!(
        /// Fetches the current webhook status. Succeeds with `WebhookInfo`.
        get_webhook_info,
        "getWebhookInfo"
    );

    impl_method!(
        /// Leaves a group, supergroup or channel. Succeeds with `true`.
        leave_chat,
        "leaveChat",
        args
    );

    impl_method!(
        /// Sends an audio file. Succeeds with the sent `Message`.
        send_audio,
        "sendAudio",
        args
    );

    impl_method!(
        /// Sends a general file. Succeeds with the sent `Message`.
        send_document,
        "sendDocument",
        args
    );

    impl_method!(
        /// Sends a text message. Succeeds with the sent `Message`.
        send_message,
        "sendMessage",
        args
    );

    impl_method!(
        /// Sends a photo. Succeeds with the sent `Message`.
        send_photo,
        "sendPhoto",
        args
    );

    impl_method!(
        /// Sends a video. Succeeds with the sent `Message`.
        send_video,
        "sendVideo",
        args
    );

    impl_method!(
        /// Registers a webhook URL for update delivery. Succeeds with `true`.
        set_webhook,
        "setWebhook",
        args
    );
}

// ============================================================================
// BotBuilder
// ============================================================================

/// Builder for [`Bot`].
pub struct BotBuilder {
    token: String,
    soft_fail: bool,
    transport: Option<Arc<dyn Transport>>,
    handlers: Vec<Arc<dyn UpdateHandler>>,
}

impl BotBuilder {
    /// Sets the default failure policy (soft outcomes instead of errors).
    pub fn soft_fail(mut self, soft_fail: bool) -> Self {
        self.soft_fail = soft_fail;
        self
    }

    /// Replaces the transport (defaults to [`HttpTransport`]).
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Registers an initial handler; order of calls is dispatch order.
    pub fn handler(mut self, handler: impl UpdateHandler + 'static) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    /// Builds the bot. Fails with [`Error::Config`] on an empty token.
    pub fn build(self) -> Result<Bot> {
        if self.token.trim().is_empty() {
            return Err(Error::Config("bot token is required".to_string()));
        }

        Ok(Bot {
            token: self.token,
            soft_fail: self.soft_fail,
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(HttpTransport::new())),
            handlers: RwLock::new(self.handlers),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
