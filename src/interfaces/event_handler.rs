// ============================================================================
// Event Handler Interface
// Defines the contract for observing the digit search
// ============================================================================

use crate::domain::{Fraction, Regime};
use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted by the approximator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ApproximationEvent {
    /// Inputs accepted, search about to start
    SearchStarted {
        numerator: BigUint,
        denominator: BigUint,
        precision: usize,
        algorithm: String,
        timestamp: DateTime<Utc>,
    },

    /// Denominator had more digits than the precision and was cut down
    DenominatorTruncated {
        dropped_digits: usize,
        denominator: BigUint,
        timestamp: DateTime<Utc>,
    },

    /// One search step committed its digit(s)
    DigitCommitted {
        iteration: usize,
        regime: Regime,
        fraction: Fraction,
        error: f64,
        timestamp: DateTime<Utc>,
    },

    /// Denominator reached the precision, result final
    SearchCompleted {
        fraction: Fraction,
        iterations: usize,
        error: f64,
        timestamp: DateTime<Utc>,
    },
}

/// Event handler trait for observing the search
/// Implementations can handle logging, tracing output, test recording, etc.
pub trait EventHandler: Send + Sync {
    /// Handle an approximation event
    fn on_event(&self, event: ApproximationEvent);
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ApproximationEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ApproximationEvent) {
        tracing::debug!("Approximation event: {:?}", event);
    }
}

/// Keeps every event in memory, in emission order
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<ApproximationEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<ApproximationEvent> {
        self.events.lock().clone()
    }

    /// `(regime, fraction after commit)` for every committed step
    pub fn committed_steps(&self) -> Vec<(Regime, Fraction)> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                ApproximationEvent::DigitCommitted {
                    regime, fraction, ..
                } => Some((*regime, fraction.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: ApproximationEvent) {
        self.events.lock().push(event);
    }
}
