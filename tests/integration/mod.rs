//! Integration tests for the declaration surface.
//!
//! These exercise the crate the way a declarative front end would: a factory,
//! a collection owned by the test, and a sequence of declarations in mixed
//! notation shapes.

mod declaration_flow;
mod map_notation;

/// Enable log output for test runs when `RUST_LOG` is set.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
