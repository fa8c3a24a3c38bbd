//! Autumn: the fall traversal
//!
//! Each branch sheds its leaves in gust-sized batches until it is bare,
//! then the traversal descends into its sub-branches. The walk is
//! depth-first and strictly sequential; recursion order is the only
//! schedule.

use rand::Rng;

use crate::core::error::Result;
use crate::forest::branch::Branch;
use crate::simulation::context::SimContext;

/// Shed every leaf on `branch`, then recurse into its sub-branches at
/// `level + 1`.
///
/// Each gust sheds a batch of `min(leaves, 1..=wind_strength)` leaves, one
/// message and one pause per leaf. The batch draw is always at least 1, so
/// the shedding loop terminates once per branch with `leaves == 0`.
pub fn fall_leaves(branch: &mut Branch, level: usize, ctx: &mut SimContext<'_>) -> Result<()> {
    debug_assert!(ctx.config.wind_strength >= 1);

    // A bare twig has nothing to shed and nowhere to recurse.
    if branch.leaves == 0 && branch.is_twig() {
        return Ok(());
    }

    while branch.leaves > 0 {
        let batch = branch
            .leaves
            .min(ctx.rng.gen_range(1..=ctx.config.wind_strength));
        tracing::debug!(level, batch, "gust");

        for _ in 0..batch {
            let line = format!(
                "{}🍂  A leaf falls from branch level {}",
                " ".repeat(level * 2),
                level
            );
            ctx.journal.record(&line)?;
            branch.leaves -= 1;
            ctx.pacer.pause();
        }
    }

    for sub in &mut branch.sub_branches {
        fall_leaves(sub, level + 1, ctx)?;
    }

    Ok(())
}
