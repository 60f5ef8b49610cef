// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod digit_search;
mod event_handler;

pub use digit_search::DigitSearch;
pub use event_handler::{
    ApproximationEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    RecordingEventHandler,
};
