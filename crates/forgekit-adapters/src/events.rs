//! Outcome event publishers.
//!
//! All publishers are fire-and-forget from the engine's point of view: a
//! publisher failure is logged and swallowed, never propagated into the
//! generation result.

use std::io::Write;
use std::sync::Mutex;

use tracing::{info, warn};

use forgekit_core::application::{EventPublisher, GenerationOutcome};

/// Publishes outcomes as structured log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogPublisher;

impl EventPublisher for LogPublisher {
    fn publish(&self, outcome: GenerationOutcome) {
        match &outcome {
            GenerationOutcome::Generated { request } => {
                info!(request = %request, "project generated");
            }
            GenerationOutcome::Failed { request, cause } => {
                warn!(request = %request, %cause, "project generation failed");
            }
        }
    }
}

/// Publishes each outcome as one JSON line on the wrapped writer.
///
/// Serialization or write failures are logged and dropped; the generation
/// attempt that produced the outcome is not affected.
pub struct JsonLinesPublisher<W: Write + Send> {
    sink: Mutex<W>,
}

impl<W: Write + Send> JsonLinesPublisher<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Consume the publisher and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl<W: Write + Send> EventPublisher for JsonLinesPublisher<W> {
    fn publish(&self, outcome: GenerationOutcome) {
        let line = match serde_json::to_string(&outcome) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "could not serialize generation outcome");
                return;
            }
        };
        let mut sink = self.sink.lock().unwrap_or_else(|e| e.into_inner());
        if let Err(e) = writeln!(sink, "{line}") {
            warn!(error = %e, "could not write generation outcome");
        }
    }
}

/// Records published outcomes in memory for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingPublisher {
    outcomes: Mutex<Vec<GenerationOutcome>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// All outcomes published so far, in publication order.
    pub fn outcomes(&self) -> Vec<GenerationOutcome> {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, outcome: GenerationOutcome) {
        self.outcomes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forgekit_core::domain::{ProjectType, ResolvedRequest};

    fn request() -> ResolvedRequest {
        ResolvedRequest {
            name: "demo".into(),
            version: "0.1.0".into(),
            description: String::new(),
            project_type: ProjectType::parse("manifest-build").unwrap(),
            dependencies: Vec::new(),
        }
    }

    #[test]
    fn json_lines_publisher_emits_one_line_per_outcome() {
        let publisher = JsonLinesPublisher::new(Vec::new());
        publisher.publish(GenerationOutcome::Generated { request: request() });
        publisher.publish(GenerationOutcome::Generated { request: request() });

        let written = String::from_utf8(publisher.into_inner()).unwrap();
        let lines: Vec<_> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(value["outcome"], "generated");
            assert_eq!(value["request"]["name"], "demo");
        }
    }

    #[test]
    fn recording_publisher_keeps_publication_order() {
        let publisher = RecordingPublisher::new();
        assert!(publisher.is_empty());

        publisher.publish(GenerationOutcome::Generated { request: request() });
        let outcomes = publisher.outcomes();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].request(), &request());
        assert!(outcomes[0].is_success());
    }
}
