use thiserror::Error;

/// Errors surfaced by a [`SearchSession`](crate::SearchSession) handle.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
	/// The session task has stopped and no longer accepts commands.
	#[error("search session is closed")]
	Closed,
}

pub type Result<T> = std::result::Result<T, SearchError>;
