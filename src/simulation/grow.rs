//! Spring: the grow traversal
//!
//! Each branch sprouts a random handful of new leaves, then the traversal
//! descends into its sub-branches. A full twig keeps what it has.

use rand::Rng;

use crate::core::error::Result;
use crate::forest::branch::Branch;
use crate::simulation::context::SimContext;

/// Grow 1 to `max_spring_growth` new leaves on `branch`, then recurse into
/// its sub-branches at `level + 1`.
///
/// A twig already holding `full_leaf_count` or more leaves is full and does
/// nothing. The fullness check only guards the twig's own growth step; a
/// branch with sub-branches always grows and always recurses.
pub fn grow_leaves(branch: &mut Branch, level: usize, ctx: &mut SimContext<'_>) -> Result<()> {
    if branch.is_twig() && branch.leaves >= ctx.config.full_leaf_count {
        return Ok(());
    }

    let new_leaves = ctx.rng.gen_range(1..=ctx.config.max_spring_growth);
    branch.leaves += new_leaves;
    tracing::debug!(level, new_leaves, "sprout");

    let line = format!(
        "{}🌱  {} new leaves grow on branch level {}",
        " ".repeat(level * 2),
        new_leaves,
        level
    );
    ctx.journal.record(&line)?;
    ctx.pacer.pause();

    for sub in &mut branch.sub_branches {
        grow_leaves(sub, level + 1, ctx)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::core::config::SimulationConfig;
    use crate::simulation::journal::testing::capture_journal;
    use crate::simulation::pacing::NoopPacer;

    #[test]
    fn test_full_twig_is_a_noop() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut tree = Branch::new(5, vec![]);
        let (mut journal, console, log) = capture_journal();
        let mut ctx = SimContext {
            config: &config,
            rng: &mut rng,
            journal: &mut journal,
            pacer: &NoopPacer,
        };

        grow_leaves(&mut tree, 0, &mut ctx).unwrap();

        assert_eq!(tree.leaves, 5);
        assert!(console.contents().is_empty());
        assert!(log.contents().is_empty());
    }

    #[test]
    fn test_twig_exactly_at_threshold_is_full() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut tree = Branch::new(config.full_leaf_count, vec![]);
        let (mut journal, console, _log) = capture_journal();
        let mut ctx = SimContext {
            config: &config,
            rng: &mut rng,
            journal: &mut journal,
            pacer: &NoopPacer,
        };

        grow_leaves(&mut tree, 0, &mut ctx).unwrap();

        assert_eq!(tree.leaves, config.full_leaf_count);
        assert!(console.contents().is_empty());
    }

    #[test]
    fn test_growth_amount_stays_in_range() {
        let config = SimulationConfig::default();

        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut tree = Branch::new(0, vec![]);
            let (mut journal, _console, _log) = capture_journal();
            let mut ctx = SimContext {
                config: &config,
                rng: &mut rng,
                journal: &mut journal,
                pacer: &NoopPacer,
            };

            grow_leaves(&mut tree, 0, &mut ctx).unwrap();

            assert!(tree.leaves >= 1);
            assert!(tree.leaves <= config.max_spring_growth);
        }
    }

    #[test]
    fn test_bare_branch_with_sub_branch_grows_then_recurses() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        // Not a twig, so the fullness check does not apply even at 0 leaves.
        let mut tree = Branch::new(0, vec![Branch::new(0, vec![])]);
        let (mut journal, console, _log) = capture_journal();
        let mut ctx = SimContext {
            config: &config,
            rng: &mut rng,
            journal: &mut journal,
            pacer: &NoopPacer,
        };

        grow_leaves(&mut tree, 0, &mut ctx).unwrap();

        let lines = console.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("new leaves grow on branch level 0"));
        assert!(lines[1].contains("new leaves grow on branch level 1"));
        assert!(tree.leaves >= 1);
    }

    #[test]
    fn test_full_branch_with_sub_branches_still_grows() {
        let config = SimulationConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let mut tree = Branch::new(10, vec![Branch::new(0, vec![])]);
        let (mut journal, console, _log) = capture_journal();
        let mut ctx = SimContext {
            config: &config,
            rng: &mut rng,
            journal: &mut journal,
            pacer: &NoopPacer,
        };

        grow_leaves(&mut tree, 0, &mut ctx).unwrap();

        assert!(tree.leaves > 10);
        assert_eq!(console.lines().len(), 2);
    }
}
