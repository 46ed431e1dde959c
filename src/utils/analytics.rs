use serde_json::Value;

/// Event recording capability injected through `AppState`. Callers never
/// probe for an ambient global; contexts with no analytics configured get
/// the no-op sink.
pub trait AnalyticsSink: Send + Sync {
    fn record(&self, event: &str, properties: &Value);
}

/// Emits events into the structured log stream.
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, event: &str, properties: &Value) {
        tracing::info!(target: "analytics", event, %properties, "analytics event");
    }
}

/// Discards everything.
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn record(&self, _event: &str, _properties: &Value) {}
}
