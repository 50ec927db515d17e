use std::future::Future;

use tokio::task::JoinHandle;

/// Classification attached to every task the search layer spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TaskClass {
	/// Long-lived session driver.
	Session,
	/// One provider request.
	Fetch,
}

impl TaskClass {
	const fn as_str(self) -> &'static str {
		match self {
			Self::Session => "session",
			Self::Fetch => "fetch",
		}
	}
}

/// Spawns onto the current runtime, tracing the task class.
pub(crate) fn spawn<F>(class: TaskClass, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	tracing::trace!(task_class = class.as_str(), "search.spawn");
	tokio::spawn(fut)
}
