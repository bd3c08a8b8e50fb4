//! Deck loading diagnostics.
use crate::ParsingError;

/// Receives per record decode failures while a deck loads. A malformed
/// record never aborts the load: it is reported here, skipped, and
/// decoding moves on. The sink is injected by the caller, which owns
/// its lifecycle.
pub trait DiagnosticsSink {
    /// One record failed to decode and was dropped. `record` is the
    /// record key as it appears in the source (timestamp, or
    /// storm/model/init/lead time).
    fn record_rejected(&mut self, record: &str, error: &ParsingError);
}

/// Forwards rejected records to the `log` facade as warnings.
/// This is the sink the convenience constructors inject.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn record_rejected(&mut self, record: &str, error: &ParsingError) {
        log::warn!("skipping record \"{}\": {}", record, error);
    }
}

/// Discards all diagnostics.
#[derive(Debug, Default, Copy, Clone)]
pub struct SilentSink;

impl DiagnosticsSink for SilentSink {
    fn record_rejected(&mut self, _record: &str, _error: &ParsingError) {}
}
