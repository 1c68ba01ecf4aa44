use super::{SortContext, Sorter, StepResult};

/// Heap sort on an implicit binary max-heap.
///
/// Time complexity: O(n log n)
/// Space complexity: O(log n) for the recursive sift-down
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl Sorter for HeapSort {
    fn sort(&self, ctx: &mut SortContext<'_>) -> StepResult {
        let len = ctx.len();

        for root in (0..len / 2).rev() {
            ctx.checkpoint()?;
            sift_down(ctx, len, root)?;
        }

        for end in (1..len).rev() {
            ctx.checkpoint()?;
            ctx.swap(0, end)?;
            sift_down(ctx, end, 0)?;
        }
        Ok(())
    }
}

/// Restores the heap property for the subtree at `root` within `ctx[..len]`.
fn sift_down(ctx: &mut SortContext<'_>, len: usize, root: usize) -> StepResult {
    ctx.checkpoint()?;

    let left = 2 * root + 1;
    let right = left + 1;
    let mut largest = root;

    if left < len && ctx.get(left) > ctx.get(largest) {
        largest = left;
    }
    if right < len && ctx.get(right) > ctx.get(largest) {
        largest = right;
    }

    if largest != root {
        ctx.swap(root, largest)?;
        sift_down(ctx, len, largest)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{trace, Algorithm, Mutation};

    #[test]
    fn builds_heap_then_extracts() {
        let (output, log, _) = trace(Algorithm::Heap, &[1, 2, 3]);
        assert_eq!(output, vec![1, 2, 3]);
        assert_eq!(
            log,
            vec![
                // heapify: 3 rises to the root
                Mutation::Swap(0, 2),
                // extract 3, sift 1 down below 2
                Mutation::Swap(0, 2),
                Mutation::Swap(0, 1),
                // extract 2
                Mutation::Swap(0, 1),
            ]
        );
    }
}
