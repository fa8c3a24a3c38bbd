//! Fall Forest - Entry Point
//!
//! Opens the log artifact, generates a random tree, and runs one season
//! cycle over it: every leaf falls in autumn, new leaves grow in spring.
//! Narration is mirrored to stdout and to `leaf_fall_log.txt` in the
//! working directory.

use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fall_forest::core::config::SimulationConfig;
use fall_forest::core::error::Result;
use fall_forest::forest::branch::Branch;
use fall_forest::simulation::context::SimContext;
use fall_forest::simulation::journal::{EventJournal, LOG_FILE_NAME};
use fall_forest::simulation::pacing::SleepPacer;
use fall_forest::simulation::run::run_season_cycle;

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("fall_forest=info")
        .init();

    tracing::info!("Fall Forest starting...");

    let config = SimulationConfig::default();
    let mut rng = ChaCha8Rng::from_entropy();
    let pacer = SleepPacer::new(config.step_delay);

    // The journal is opened before any narration so the log artifact holds
    // the same lines as the console, and it is released on every exit path.
    let mut journal = EventJournal::open(Path::new(LOG_FILE_NAME))?;

    let mut tree = Branch::generate_root(&config, &mut rng);
    tracing::info!(
        branches = tree.branch_count(),
        leaves = tree.total_leaves(),
        "tree generated"
    );

    let mut ctx = SimContext {
        config: &config,
        rng: &mut rng,
        journal: &mut journal,
        pacer: &pacer,
    };
    run_season_cycle(&mut tree, &mut ctx)?;

    journal.finish()?;
    tracing::info!(leaves = tree.total_leaves(), "season cycle complete");
    Ok(())
}
