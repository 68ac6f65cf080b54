//! Helpers to write tests for the media-client crates.

pub mod test_json;

/// Initialize a tracing subscriber writing to the test output, once per test
/// binary.
///
/// The filter is taken from `RUST_LOG`, and defaults to `info`.
#[macro_export]
macro_rules! init_tracing_for_tests {
    () => {
        #[cfg(not(target_family = "wasm"))]
        #[$crate::__macro_support::ctor]
        fn init_logging() {
            use $crate::__macro_support::tracing_subscriber::{
                self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
            };

            tracing_subscriber::registry()
                .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .with(tracing_subscriber::fmt::layer().with_test_writer())
                .init();
        }
    };
}

#[doc(hidden)]
pub mod __macro_support {
    #[cfg(not(target_family = "wasm"))]
    pub use ctor::ctor;
    #[cfg(not(target_family = "wasm"))]
    pub use tracing_subscriber;
}
