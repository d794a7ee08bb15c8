//! Session persistence.
//!
//! A repository stores the latest committed [`vyuha_core::SessionState`] of
//! each session. Workers save after every successful mutation, before replying.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSessionRepository;
pub use memory::InMemorySessionRepository;
pub use traits::SessionRepository;
