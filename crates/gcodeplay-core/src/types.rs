//! Type aliases for commonly used complex types.
//!
//! Gives meaningful names to the shared-state wrappers used across the
//! playback crates, so the same pattern reads the same way everywhere.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

/// A thread-safe, mutex-protected wrapper for cross-thread sharing.
///
/// Used for state touched from async step tasks (the drawing surface,
/// the pen). Uses `parking_lot::Mutex` for better performance than
/// `std::sync::Mutex`.
pub type ThreadSafe<T> = Arc<Mutex<T>>;

/// A thread-safe reader-writer wrapper for read-mostly shared state.
pub type ThreadSafeRw<T> = Arc<RwLock<T>>;

/// Create a new [`ThreadSafe`] wrapper around a value.
pub fn thread_safe<T>(value: T) -> ThreadSafe<T> {
    Arc::new(Mutex::new(value))
}

/// Create a new [`ThreadSafeRw`] wrapper around a value.
pub fn thread_safe_rw<T>(value: T) -> ThreadSafeRw<T> {
    Arc::new(RwLock::new(value))
}
