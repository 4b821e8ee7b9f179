//! Log output for the driver.
//!
//! Libraries only emit `tracing` events; nothing is printed unless a filter
//! is given with `--log` or found in `MAL_LOG` (then `RUST_LOG`). Output is
//! an indented span tree on stderr, so nested applications read like a
//! call trace:
//!
//! ```text
//! MAL_LOG=mal_eval=trace mal eval "(+ 1 (* 2 3))"
//! ```

use std::sync::Once;

use tracing_subscriber::{prelude::*, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Install the global subscriber, at most once per process.
///
/// `filter` takes precedence over the environment.
pub fn init_tracing(filter: Option<&str>) {
    TRACING_INIT.call_once(|| {
        let Some(directives) = filter
            .map(str::to_owned)
            .or_else(|| std::env::var("MAL_LOG").ok())
            .or_else(|| std::env::var("RUST_LOG").ok())
        else {
            return;
        };

        tracing_subscriber::registry()
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .with(EnvFilter::new(directives))
            .init();
    });
}
