use super::{SortContext, Sorter, StepResult};

/// Top-down merge sort over half-open ranges.
///
/// Each merge copies both halves into temporary buffers and writes the merged
/// sequence back; every write is one step.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl Sorter for MergeSort {
    fn sort(&self, ctx: &mut SortContext<'_>) -> StepResult {
        let len = ctx.len();
        merge_sort(ctx, 0, len)
    }
}

fn merge_sort(ctx: &mut SortContext<'_>, lo: usize, hi: usize) -> StepResult {
    ctx.checkpoint()?;

    if hi - lo > 1 {
        // Left half gets the extra element on odd lengths.
        let mid = lo + (hi - lo + 1) / 2;
        merge_sort(ctx, lo, mid)?;
        merge_sort(ctx, mid, hi)?;
        merge(ctx, lo, mid, hi)?;
    }
    Ok(())
}

/// Merges the sorted runs `[lo, mid)` and `[mid, hi)`.
///
/// If the run is cancelled partway, the values still sitting in the buffers
/// are copied back into the unwritten tail so nothing is lost.
fn merge(ctx: &mut SortContext<'_>, lo: usize, mid: usize, hi: usize) -> StepResult {
    let left = ctx.values()[lo..mid].to_vec();
    let right = ctx.values()[mid..hi].to_vec();
    let mut taken = (0, 0);

    let merged = write_merged(ctx, lo, &left, &right, &mut taken);
    if merged.is_err() {
        let (i, j) = taken;
        let pending = left[i..].iter().chain(&right[j..]);
        for (k, &value) in (lo + i + j..).zip(pending) {
            ctx.restore(k, value);
        }
    }
    merged
}

fn write_merged(
    ctx: &mut SortContext<'_>,
    lo: usize,
    left: &[u32],
    right: &[u32],
    taken: &mut (usize, usize),
) -> StepResult {
    loop {
        let (i, j) = *taken;
        let (value, from_left) = match (left.get(i), right.get(j)) {
            (None, None) => return Ok(()),
            (Some(&l), Some(&r)) if l <= r => (l, true),
            (Some(&l), None) => (l, true),
            (_, Some(&r)) => (r, false),
        };
        ctx.checkpoint()?;

        if from_left {
            taken.0 += 1;
        } else {
            taken.1 += 1;
        }
        ctx.set(lo + i + j, value)?;
    }
}
