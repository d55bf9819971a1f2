//! Core systems for listholder.
//!
//! This crate provides the pieces the adapter crate builds on:
//!
//! - **Signal/Slot System**: synchronous change notification ([`Signal`])
//! - **Logging**: `tracing` targets and target-pinned macros ([`logging`])
//!
//! # Signal/Slot Example
//!
//! ```
//! use listholder_core::Signal;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let data_set_changed = Signal::<()>::new();
//! let refreshes = Arc::new(AtomicUsize::new(0));
//!
//! let counter = refreshes.clone();
//! data_set_changed.connect(move |_| {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! });
//!
//! data_set_changed.emit(());
//! assert_eq!(refreshes.load(Ordering::SeqCst), 1);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionId, Signal};

// The logging macros expand to `$crate::tracing`; callers need no direct dependency.
pub use tracing;
