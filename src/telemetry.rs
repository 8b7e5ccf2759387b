//! Opt-in tracing bootstrap for hosts embedding the punch-card writer.
//!
//! The crate itself only emits `tracing` events (aggregation and save
//! milestones, lenient-path rejects); installing a subscriber is the host's
//! choice. Binaries without their own setup can call `init_default_tracing`.

/// Installs a compact `tracing` subscriber honoring `RUST_LOG`.
///
/// Returns `true` when the subscriber was installed. Returns `false` when the
/// `telemetry` feature is disabled or the host already set a global
/// subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback("info")
}

/// Like [`init_default_tracing`] with an explicit filter directive used when
/// `RUST_LOG` is unset.
#[must_use]
pub fn init_tracing_with_fallback(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(fallback_filter));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
