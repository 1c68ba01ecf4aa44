use super::{SortContext, Sorter, StepResult};

/// Scans for the minimum of the unsorted suffix and swaps it into place.
///
/// The swap happens once per outer iteration even when the minimum is
/// already in position, so every iteration shows up as one step.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl Sorter for SelectionSort {
    fn sort(&self, ctx: &mut SortContext<'_>) -> StepResult {
        let len = ctx.len();
        for i in 0..len.saturating_sub(1) {
            let mut min_index = i;
            for j in i + 1..len {
                ctx.checkpoint()?;
                if ctx.get(j) < ctx.get(min_index) {
                    min_index = j;
                }
            }
            ctx.swap(min_index, i)?;
        }
        Ok(())
    }
}
