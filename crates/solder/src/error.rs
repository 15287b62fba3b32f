//! Error taxonomy for the bot façade.

use solder_core::CastError;
use solder_transport::TransportError;
use thiserror::Error;

/// Everything that can go wrong issuing a Bot API call.
///
/// [`Error::Remote`] and [`Error::Transport`] are *soft*: with
/// [`CallOptions::soft_fail`](crate::CallOptions) they are downgraded to an
/// [`Outcome::Failed`](crate::Outcome) instead of being returned as errors.
/// Everything else indicates a local bug (bad configuration, unknown
/// operation, shape violation) and is always fatal.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// Bad or missing setup, raised at construction time.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The dynamic operation name is not in the method registry.
    #[error("unknown method '{0}'")]
    MethodNotFound(String),

    /// A local argument or response violated its declared shape.
    #[error(transparent)]
    Cast(#[from] CastError),

    /// The wire failed before an envelope arrived.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The API answered with `ok: false`.
    #[error("telegram error {code}: {description}")]
    Remote {
        /// Remote `error_code` (0 when the envelope carried none).
        code: i64,
        /// Remote `description`.
        description: String,
    },

    /// A successful (2xx) response body was JSON but not a Bot API envelope.
    ///
    /// Non-envelope bodies on non-2xx statuses surface as [`Error::Remote`]
    /// instead, keeping them under the soft-failure policy.
    #[error("malformed response envelope: {0}")]
    Envelope(String),
}

impl Error {
    /// Whether this failure may be downgraded to a soft outcome.
    pub fn is_soft(&self) -> bool {
        matches!(self, Error::Remote { .. } | Error::Transport(_))
    }
}

/// Result type for bot operations.
pub type Result<T> = std::result::Result<T, Error>;
