//! Bounded calculation history.
//!
//! The [`HistoryStore`] keeps the most recent salary results, oldest first,
//! and hands out independent copies to readers.

mod store;

pub use store::HistoryStore;
