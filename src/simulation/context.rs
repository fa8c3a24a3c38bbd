//! Shared state threaded through the traversals

use rand_chacha::ChaCha8Rng;

use crate::core::config::SimulationConfig;
use crate::simulation::journal::EventJournal;
use crate::simulation::pacing::Pacer;

/// Borrowed simulation state passed down every traversal call.
///
/// The driver owns the config, RNG, journal and pacer; traversals only
/// borrow them for the duration of the run, so the tree carries no hidden
/// global state.
pub struct SimContext<'a> {
    pub config: &'a SimulationConfig,
    pub rng: &'a mut ChaCha8Rng,
    pub journal: &'a mut EventJournal,
    pub pacer: &'a dyn Pacer,
}
