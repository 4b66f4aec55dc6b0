//! System load telemetry seam
//!
//! The analytics endpoint reports a "system load" percentage that no
//! collection can provide. It is treated as an external telemetry
//! source behind a trait so tests can pin it and a real probe can be
//! dropped in later.

use rand::Rng;

/// Source of the current system load figure
pub trait LoadProbe: Send + Sync {
    /// Current system load as an integer percentage
    fn system_load(&self) -> u32;
}

/// Synthetic placeholder probe: uniform 70-99
pub struct SyntheticLoadProbe;

impl LoadProbe for SyntheticLoadProbe {
    fn system_load(&self) -> u32 {
        rand::thread_rng().gen_range(70..100)
    }
}

/// Fixed-value probe for tests
pub struct FixedLoadProbe(pub u32);

impl LoadProbe for FixedLoadProbe {
    fn system_load(&self) -> u32 {
        self.0
    }
}
