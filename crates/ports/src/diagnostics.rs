// crates/ports/src/diagnostics.rs

/// Destination of user-facing diagnostic lines.
pub trait DiagnosticSink {
    fn emit(&self, message: &str);
}
