//! Logging support.
//!
//! When the `tracing` feature is enabled this module re-exports the `tracing`
//! macros the crate logs with.  When it is disabled, the same names expand to
//! nothing, so call sites need no `cfg` attributes of their own.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    pub(crate) use tracing::{debug, info_span, trace};

    /// Installs a `tracing-subscriber` formatter that writes through the
    /// test harness's captured output.  Only the first call has any effect.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        });
    }
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    macro_rules! noop_event {
        ($($arg:tt)*) => {{}};
    }

    macro_rules! noop_span {
        ($($arg:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub(crate) use noop_event as debug;
    pub(crate) use noop_event as trace;
    pub(crate) use noop_span as info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }
}

#[cfg(feature = "tracing")]
pub(crate) use enabled::{debug, info_span, trace};
#[cfg(feature = "tracing")]
pub use enabled::init_tracing;

#[cfg(not(feature = "tracing"))]
pub(crate) use disabled::{debug, info_span, trace};
#[cfg(not(feature = "tracing"))]
pub use disabled::{NoOpSpan, NoOpSpanGuard, init_tracing};
