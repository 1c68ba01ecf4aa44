use super::{SortContext, Sorter, StepResult};

/// Shift-and-insert. Each shift and each final placement is one step.
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn sort(&self, ctx: &mut SortContext<'_>) -> StepResult {
        for i in 1..ctx.len() {
            insert(ctx, i)?;
        }
        Ok(())
    }
}

/// Moves `ctx[i]` left into the sorted prefix `ctx[..i]`.
///
/// While shifting, the key lives outside the array and one value appears
/// twice. On cancellation the key is dropped into the current hole first.
fn insert(ctx: &mut SortContext<'_>, i: usize) -> StepResult {
    let key = ctx.get(i);
    let mut hole = i;

    while hole > 0 && ctx.get(hole - 1) > key {
        if let Err(cancelled) = ctx.checkpoint() {
            ctx.restore(hole, key);
            return Err(cancelled);
        }

        let shifted = ctx.get(hole - 1);
        let reported = ctx.set(hole, shifted);
        hole -= 1;
        if let Err(cancelled) = reported {
            ctx.restore(hole, key);
            return Err(cancelled);
        }
    }

    ctx.set(hole, key)
}

#[cfg(test)]
mod tests {
    use super::super::{trace, Algorithm, Mutation, RunStatus};
    use crate::array::ArrayModel;
    use crate::cancel::CancelToken;

    #[test]
    fn shifts_then_places() {
        let (output, log, _) = trace(Algorithm::Insertion, &[3, 1, 2]);
        assert_eq!(output, vec![1, 2, 3]);
        assert_eq!(
            log,
            vec![
                // i = 1: shift 3 right, place 1
                Mutation::Write { index: 1, value: 3 },
                Mutation::Write { index: 0, value: 1 },
                // i = 2: shift 3 right, place 2
                Mutation::Write { index: 2, value: 3 },
                Mutation::Write { index: 1, value: 2 },
            ]
        );
    }

    #[test]
    fn cancelled_shift_puts_key_back() {
        let mut array = ArrayModel::new(vec![3, 1]);
        let cancel = CancelToken::new();
        let mut seen = Vec::new();
        let outcome = Algorithm::Insertion.run(&mut array, &cancel, |step| {
            seen.push(step.values.to_vec());
            cancel.cancel();
        });

        assert_eq!(outcome.status, RunStatus::Cancelled);
        assert_eq!(outcome.steps, 1);
        // The shift itself duplicates 3 until the key lands.
        assert_eq!(seen, vec![vec![3, 3]]);
        assert_eq!(array.values(), &[1, 3]);
    }
}
