use super::{SortContext, Sorter, StepResult};

/// Repeated adjacent compare/swap passes with a shrinking upper bound.
///
/// Time complexity: O(n²)
/// Space complexity: O(1)
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl Sorter for BubbleSort {
    fn sort(&self, ctx: &mut SortContext<'_>) -> StepResult {
        let len = ctx.len();
        for pass in 0..len.saturating_sub(1) {
            for j in 0..len - pass - 1 {
                ctx.checkpoint()?;
                if ctx.get(j) > ctx.get(j + 1) {
                    ctx.swap(j, j + 1)?;
                }
            }
        }
        Ok(())
    }
}
