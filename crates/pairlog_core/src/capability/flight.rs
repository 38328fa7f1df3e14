//! Single-flight guard for capability-triggering controls.
//!
//! Models the "control is disabled while its call is outstanding" rule:
//! one permit per control, a second `begin` is refused until the permit
//! drops. Distinct controls hold distinct guards and may overlap.

use std::sync::atomic::{AtomicBool, Ordering};

/// In-flight state for one triggering control.
#[derive(Debug, Default)]
pub struct SingleFlight {
    busy: AtomicBool,
}

/// Live claim on a control. Releases the control on drop.
#[derive(Debug)]
pub struct FlightPermit<'flight> {
    flight: &'flight SingleFlight,
}

impl SingleFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the control, or returns `None` while a previous permit lives.
    pub fn begin(&self) -> Option<FlightPermit<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(FlightPermit { flight: self })
    }

    pub fn is_in_flight(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

impl Drop for FlightPermit<'_> {
    fn drop(&mut self) {
        self.flight.busy.store(false, Ordering::Release);
    }
}
