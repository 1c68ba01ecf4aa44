use super::{SortContext, Sorter, StepResult};

/// Quick sort with the Lomuto partition scheme.
///
/// The pivot is the last element of each range. Every swap during
/// partitioning is a step, including swaps of an element with itself, and so
/// is the final pivot swap.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl Sorter for QuickSort {
    fn sort(&self, ctx: &mut SortContext<'_>) -> StepResult {
        let len = ctx.len();
        quick_sort(ctx, 0, len)
    }
}

fn quick_sort(ctx: &mut SortContext<'_>, lo: usize, hi: usize) -> StepResult {
    ctx.checkpoint()?;

    if hi - lo > 1 {
        let pivot_index = partition(ctx, lo, hi)?;
        quick_sort(ctx, lo, pivot_index)?;
        quick_sort(ctx, pivot_index + 1, hi)?;
    }
    Ok(())
}

/// Partitions `[lo, hi)` around `ctx[hi - 1]` and returns the pivot's final index.
fn partition(ctx: &mut SortContext<'_>, lo: usize, hi: usize) -> StepResult<usize> {
    let last = hi - 1;
    let pivot = ctx.get(last);
    let mut store = lo;

    for j in lo..last {
        ctx.checkpoint()?;
        if ctx.get(j) < pivot {
            ctx.swap(store, j)?;
            store += 1;
        }
    }

    ctx.swap(store, last)?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::super::{trace, Algorithm, Mutation, RunStatus};
    use crate::array::ArrayModel;
    use crate::cancel::CancelToken;

    #[test]
    fn cancel_after_first_partition() {
        let mut array = ArrayModel::new(vec![5, 3, 4, 1, 2]);
        let cancel = CancelToken::new();
        let mut log = Vec::new();
        // Pivot 2: only 1 is smaller, then the pivot swap. Two steps in total.
        let outcome = Algorithm::Quick.run(&mut array, &cancel, |step| {
            log.push(step.mutation);
            if step.number == 2 {
                cancel.cancel();
            }
        });

        assert_eq!(outcome.status, RunStatus::Cancelled);
        assert_eq!(log, vec![Mutation::Swap(0, 3), Mutation::Swap(1, 4)]);
        assert_eq!(array.values(), &[1, 2, 4, 5, 3]);
    }

    #[test]
    fn self_swaps_are_reported() {
        // Every element is below the pivot, so each swap is in place.
        let (output, log, _) = trace(Algorithm::Quick, &[1, 2, 3]);
        assert_eq!(output, vec![1, 2, 3]);
        assert_eq!(
            log,
            vec![
                Mutation::Swap(0, 0),
                Mutation::Swap(1, 1),
                Mutation::Swap(2, 2),
                Mutation::Swap(0, 0),
                Mutation::Swap(1, 1),
            ]
        );
    }
}
