//! Application state container

use std::sync::Arc;

use crate::core::Config;
use crate::engine::telemetry::{LoadProbe, SyntheticLoadProbe};
use crate::store::Store;

/// Shared server state, cloned into every handler
///
/// Cloning is cheap: the store and probe are behind `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<Store>,
    pub load_probe: Arc<dyn LoadProbe>,
}

impl ServerState {
    /// Build state with the seeded mock store and the synthetic probe
    pub fn new(config: Config) -> Self {
        Self::with_probe(config, Arc::new(SyntheticLoadProbe))
    }

    /// Build state with a caller-provided load probe
    ///
    /// Tests use this with a fixed probe to pin the analytics output.
    pub fn with_probe(config: Config, load_probe: Arc<dyn LoadProbe>) -> Self {
        Self {
            config,
            store: Arc::new(Store::seeded()),
            load_probe,
        }
    }
}
