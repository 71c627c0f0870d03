//! Shared test doubles for the studio engine.

mod clock;
mod log_capture;
mod repository;

pub use clock::{FixedClock, fixed_clock};
pub use log_capture::init_test_tracing;
pub use repository::{
    ConflictingEventRepository, EmptyEventRepository, FailingEventRepository,
    RecordingEventRepository,
};
