//! Logging facilities for listholder.
//!
//! listholder uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("listholder=debug")
//!         .init();
//! }
//! ```
//!
//! The [`targets`] constants name the subsystems so that directives can
//! narrow output, e.g. `listholder::render=trace` to watch slot recycling.

/// Target names for log filtering.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "listholder_core";
    /// Signal emission.
    pub const SIGNAL: &str = "listholder_core::signal";
    /// List mutations and selection changes.
    pub const ADAPTER: &str = "listholder::adapter";
    /// Row production: slot reuse, inflation, painting.
    pub const RENDER: &str = "listholder::render";
}

/// Trace-level event on the adapter target.
#[macro_export]
macro_rules! holder_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "listholder::adapter", $($arg)*)
    };
}

/// Debug-level event on the adapter target.
#[macro_export]
macro_rules! holder_debug {
    ($($arg:tt)*) => {
        $crate::tracing::debug!(target: "listholder::adapter", $($arg)*)
    };
}

/// Warn-level event on the adapter target.
#[macro_export]
macro_rules! holder_warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "listholder::adapter", $($arg)*)
    };
}

/// Trace-level event on the render target (slot reuse, inflation).
#[macro_export]
macro_rules! holder_render_trace {
    ($($arg:tt)*) => {
        $crate::tracing::trace!(target: "listholder::render", $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::targets;

    #[test]
    fn test_targets_are_namespaced() {
        for target in [targets::SIGNAL, targets::CORE] {
            assert!(target.starts_with("listholder_core"));
        }
        for target in [targets::ADAPTER, targets::RENDER] {
            assert!(target.starts_with("listholder::"));
        }
    }

    #[test]
    fn test_macros_expand() {
        // No subscriber installed; just make sure the macros compile and run.
        holder_trace!(value = 1, "trace");
        holder_debug!("debug {}", 2);
        holder_warn!(position = 3usize, "warn");
        holder_render_trace!(layout = 4u32, "render");
    }
}
