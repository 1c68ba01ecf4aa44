//! Instrumented sorting algorithms.
//!
//! Every algorithm is written as a sequence of atomic mutations (a swap or a
//! single-slot write) applied through a [`SortContext`]. After each mutation
//! the context reports a [`Step`] to the caller and then polls the run's
//! [`CancelToken`]; a set flag surfaces as `Err(Cancelled)` and unwinds the
//! algorithm through `?`.
//!
//! Available algorithms:
//! - [`BubbleSort`]: adjacent compare/swap passes
//! - [`SelectionSort`]: one swap per outer iteration
//! - [`InsertionSort`]: shift-and-insert
//! - [`MergeSort`]: top-down merge with two temporary buffers
//! - [`QuickSort`]: Lomuto partition, last element as pivot
//! - [`HeapSort`]: max-heap build followed by root extraction

mod bubble;
mod heap;
mod insertion;
mod merge;
mod quick;
mod selection;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use std::fmt;

use crate::array::ArrayModel;
use crate::cancel::CancelToken;

/// Marker returned when a run observes its cancellation flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

pub type StepResult<T = ()> = Result<T, Cancelled>;

/// One atomic mutation applied to the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Swap(usize, usize),
    Write { index: usize, value: u32 },
}

impl Mutation {
    pub fn touches(&self, index: usize) -> bool {
        match *self {
            Mutation::Swap(i, j) => i == index || j == index,
            Mutation::Write { index: written, .. } => written == index,
        }
    }
}

/// What the step callback sees after each mutation.
#[derive(Debug, Clone, Copy)]
pub struct Step<'a> {
    /// 1-based position of this step within the run.
    pub number: usize,
    pub mutation: Mutation,
    /// The whole array right after the mutation.
    pub values: &'a [u32],
}

/// State shared by one sort run: the array, the step callback and the
/// cancellation flag.
pub struct SortContext<'a> {
    array: &'a mut ArrayModel,
    cancel: &'a CancelToken,
    on_step: &'a mut dyn FnMut(Step<'_>),
    steps: usize,
}

impl<'a> SortContext<'a> {
    pub fn new(
        array: &'a mut ArrayModel,
        cancel: &'a CancelToken,
        on_step: &'a mut dyn FnMut(Step<'_>),
    ) -> Self {
        Self {
            array,
            cancel,
            on_step,
            steps: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    pub fn get(&self, i: usize) -> u32 {
        self.array.get(i)
    }

    pub fn values(&self) -> &[u32] {
        self.array.values()
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns `Err(Cancelled)` once the run's flag is set.
    #[inline]
    pub fn checkpoint(&self) -> StepResult {
        if self.cancel.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Swaps two slots, reports the step, then polls for cancellation.
    pub fn swap(&mut self, i: usize, j: usize) -> StepResult {
        self.array.swap(i, j);
        self.report(Mutation::Swap(i, j));
        self.checkpoint()
    }

    /// Overwrites one slot, reports the step, then polls for cancellation.
    pub fn set(&mut self, index: usize, value: u32) -> StepResult {
        self.array.set(index, value);
        self.report(Mutation::Write { index, value });
        self.checkpoint()
    }

    /// Puts a value held outside the array back into it without reporting a
    /// step. Only used while unwinding a cancelled run.
    pub(crate) fn restore(&mut self, index: usize, value: u32) {
        self.array.set(index, value);
    }

    fn report(&mut self, mutation: Mutation) {
        self.steps += 1;
        (self.on_step)(Step {
            number: self.steps,
            mutation,
            values: self.array.values(),
        });
    }
}

/// Trait for instrumented sorting algorithms.
pub trait Sorter {
    /// Sort the context's array in ascending order.
    ///
    /// Returns `Err(Cancelled)` if the run was cancelled. The array is a
    /// permutation of its input either way.
    fn sort(&self, ctx: &mut SortContext<'_>) -> StepResult;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Completed,
    Cancelled,
}

/// Result of one sort run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub status: RunStatus,
    pub steps: usize,
}

impl Outcome {
    pub fn is_cancelled(&self) -> bool {
        self.status == RunStatus::Cancelled
    }
}

/// Available sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        }
    }

    /// The next algorithm in selector order, wrapping around.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn sorter(self) -> &'static dyn Sorter {
        match self {
            Algorithm::Bubble => &BubbleSort,
            Algorithm::Selection => &SelectionSort,
            Algorithm::Insertion => &InsertionSort,
            Algorithm::Merge => &MergeSort,
            Algorithm::Quick => &QuickSort,
            Algorithm::Heap => &HeapSort,
        }
    }

    /// Runs this algorithm over `array`, invoking `on_step` after every
    /// atomic mutation and stopping early once `cancel` is set.
    pub fn run<F>(self, array: &mut ArrayModel, cancel: &CancelToken, mut on_step: F) -> Outcome
    where
        F: FnMut(Step<'_>),
    {
        if array.len() <= 1 {
            return Outcome {
                status: RunStatus::Completed,
                steps: 0,
            };
        }

        let mut ctx = SortContext::new(array, cancel, &mut on_step);
        let status = match self.sorter().sort(&mut ctx) {
            Ok(()) => RunStatus::Completed,
            Err(Cancelled) => RunStatus::Cancelled,
        };
        Outcome {
            status,
            steps: ctx.steps(),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs `algorithm` over `input` and records every reported mutation.
#[cfg(test)]
pub(crate) fn trace(algorithm: Algorithm, input: &[u32]) -> (Vec<u32>, Vec<Mutation>, Outcome) {
    let mut array = ArrayModel::new(input.to_vec());
    let mut log = Vec::new();
    let outcome = algorithm.run(&mut array, &CancelToken::new(), |step| log.push(step.mutation));
    (array.values().to_vec(), log, outcome)
}
