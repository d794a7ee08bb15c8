//! Worker tasks that back the runtime orchestration.
//!
//! Each open session is owned by exactly one [`SessionWorker`], which makes it
//! the single writer for that session's state.

mod session;

pub use session::{Command, SessionWorker};
