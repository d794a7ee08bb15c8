//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, repositories and the combat state
//! machine so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use vyuha_core::{CombatError, ErrorSeverity, GameError, SessionId};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0} is already open")]
    SessionAlreadyOpen(SessionId),

    #[error("{0} is not open")]
    SessionNotOpen(SessionId),

    #[error("{0} was not found in the repository")]
    SessionNotFound(SessionId),

    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Combat(err) => err.severity(),
            Self::SessionAlreadyOpen(_) | Self::SessionNotOpen(_) | Self::SessionNotFound(_) => {
                ErrorSeverity::Validation
            }
            Self::Repository(_) => ErrorSeverity::Internal,
            Self::CommandChannelClosed
            | Self::ReplyChannelClosed(_)
            | Self::WorkerJoin(_)
            | Self::MissingOracles => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Combat(err) => err.error_code(),
            Self::SessionAlreadyOpen(_) => "RUNTIME_SESSION_ALREADY_OPEN",
            Self::SessionNotOpen(_) => "RUNTIME_SESSION_NOT_OPEN",
            Self::SessionNotFound(_) => "RUNTIME_SESSION_NOT_FOUND",
            Self::CommandChannelClosed => "RUNTIME_COMMAND_CHANNEL_CLOSED",
            Self::ReplyChannelClosed(_) => "RUNTIME_REPLY_CHANNEL_CLOSED",
            Self::WorkerJoin(_) => "RUNTIME_WORKER_JOIN",
            Self::Repository(_) => "RUNTIME_REPOSITORY",
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
        }
    }
}
