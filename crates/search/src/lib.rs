//! Predictive search state coordination.
//!
//! # Purpose
//!
//! Turns a stream of keystrokes into at most one visible search outcome: the
//! outcome of the most recently issued request.
//!
//! # Mental model
//!
//! * [`Debouncer`] is a clock-injected state machine. It decides *when* a term
//!   becomes a request.
//! * [`Tracker`] numbers every request and accepts a response only when it
//!   belongs to the latest one. It owns the [`DisplayState`] and feeds it
//!   through the pure [`reduce`] function.
//! * [`present`] maps a display state to a [`PredictiveView`] with no hidden
//!   state.
//! * [`SearchSession`] drives all of the above on a tokio task and publishes
//!   snapshots behind a read lock.
//!
//! # Invariants
//!
//! * Sequence ids are strictly increasing, and clearing the input consumes one,
//!   so responses issued before a clear are stale.
//! * An accepted response replaces the previous one entirely.
//! * Superseded fetches still run to completion; their outcome is dropped.

mod config;
pub mod debounce;
mod error;
pub mod present;
pub mod session;
mod spawn;
pub mod state;
pub mod tracker;

pub use config::SearchOptions;
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer, Trigger};
pub use error::{Result, SearchError};
pub use present::{PredictiveView, ResultRow, Section, SectionKind, count_label, present, present_items};
pub use session::{SearchSession, Snapshot};
pub use state::{DisplayState, Event, reduce};
pub use tracker::{Acceptance, SearchRequest, Tracker};
