//! Season cycle driver
//!
//! Sequences the two traversals with narration in program order: autumn
//! sheds every leaf, winter pauses, spring regrows.

use crate::core::error::Result;
use crate::forest::branch::Branch;
use crate::simulation::context::SimContext;
use crate::simulation::fall::fall_leaves;
use crate::simulation::grow::grow_leaves;

/// Run one full year over the tree.
///
/// All narration goes through the journal, so the console and the log file
/// stay line-for-line identical. Any journal failure aborts the cycle.
pub fn run_season_cycle(tree: &mut Branch, ctx: &mut SimContext<'_>) -> Result<()> {
    ctx.journal.record("The forest prepares for autumn...")?;
    tracing::info!(leaves = tree.total_leaves(), "fall traversal starting");
    fall_leaves(tree, 0, ctx)?;

    ctx.journal.record("The forest sleeps for winter.")?;
    ctx.journal.record("")?;

    ctx.journal.record("Spring returns to the forest...")?;
    tracing::info!("grow traversal starting");
    grow_leaves(tree, 0, ctx)?;

    ctx.journal.record("The forest is alive again!")?;
    Ok(())
}
