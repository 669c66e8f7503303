//! Diagnostic logging to stderr.
//!
//! Quiet by default (`warn`). `--verbose` turns on `debug` for this crate and
//! `RUST_LOG` overrides both:
//!
//! ```bash
//! RUST_LOG=itt=trace,reqwest=debug itt install vlc
//! ```
//!
//! User-facing messages never go through here; see [`crate::console`].

use std::sync::Once;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// HH:MM:SS.mmm
struct CompactTime;

impl FormatTime for CompactTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

fn filter_directive(verbose: bool) -> &'static str {
    if verbose {
        "warn,itt=debug"
    } else {
        "warn"
    }
}

/// Only the first call takes effect.
pub fn init(verbose: bool) {
    INIT.call_once(|| {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(filter_directive(verbose))
        };

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_timer(CompactTime)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
