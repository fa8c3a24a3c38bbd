//! Simulation configuration with documented constants
//!
//! Every magic number in the simulation lives here, with a note on what it
//! controls and which guarantees depend on it.

use std::time::Duration;

/// Configuration for the simulation
///
/// All values are fixed at startup; the program takes no flags and reads no
/// environment, so changing behavior means changing these constants.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    // === FALL TRAVERSAL ===
    /// Maximum number of leaves one gust may shed from a branch
    ///
    /// Each gust draws a batch size in [1, wind_strength]. Must stay >= 1:
    /// every gust sheds at least one leaf, which is what guarantees the
    /// shedding loop on a branch terminates.
    pub wind_strength: u32,

    // === PACING ===
    /// Pause after each leaf event (fall or growth)
    ///
    /// Pure animation pacing for the console narration; carries no
    /// simulation semantics. Total runtime is roughly this delay times the
    /// number of leaf events across the whole tree, since the traversals
    /// are strictly sequential.
    pub step_delay: Duration,

    // === TREE GENERATION ===
    /// Leaves on the root branch at generation time
    pub root_leaves: u32,

    /// Sub-branches on the root branch at generation time
    pub root_sub_branches: usize,

    /// Upper bound on initial leaves for generated sub-branches
    ///
    /// Each generated sub-branch starts with a leaf count in
    /// [1, max_initial_leaves].
    pub max_initial_leaves: u32,

    /// Upper bound on sub-branch count below the root
    ///
    /// Each generated sub-branch gets a child count in [0, max_sub_branches].
    /// At the default of 1 the draw is frequently 0, so generation
    /// terminates almost surely even though it has no depth limit.
    pub max_sub_branches: usize,

    // === GROW TRAVERSAL ===
    /// Leaf count at which a childless branch counts as full
    ///
    /// A full childless branch skips its own growth step in spring.
    pub full_leaf_count: u32,

    /// Upper bound on new leaves per growth step
    ///
    /// Each growth step draws a leaf count in [1, max_spring_growth].
    pub max_spring_growth: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            wind_strength: 2,
            step_delay: Duration::from_millis(500),
            root_leaves: 3,
            root_sub_branches: 2,
            max_initial_leaves: 3,
            max_sub_branches: 1,
            full_leaf_count: 3,
            max_spring_growth: 3,
        }
    }
}
