//! An animated sorting algorithm visualizer.
//!
//! Six textbook sorts run on a background thread against a small array of
//! bar heights. Every swap or write is reported as a [`sort::Step`] so the UI
//! can redraw, and a shared [`cancel::CancelToken`] lets the user stop a run
//! at the next mutation. SDL2 is used only for window management and display;
//! the bars are drawn on the CPU.
//!
//! # Quick Start
//!
//! ```
//! use sortviz::prelude::*;
//!
//! let mut array = ArrayModel::new(vec![5, 3, 4, 1, 2]);
//! let mut swaps = 0;
//! let outcome = Algorithm::Bubble.run(&mut array, &CancelToken::new(), |_step| swaps += 1);
//!
//! assert_eq!(array.values(), &[1, 2, 3, 4, 5]);
//! assert_eq!(outcome.steps, swaps);
//! ```

pub mod array;
pub mod cancel;
pub mod colors;
pub mod config;
pub mod controller;
pub mod error;
pub mod renderer;
pub mod sort;
pub mod window;

pub use array::ArrayModel;
pub use cancel::CancelToken;
pub use config::Config;
pub use controller::{Controller, RunReport};
pub use error::{ControlError, Error};
pub use sort::{Algorithm, Mutation, Outcome, RunStatus, Step};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::array::ArrayModel;
    pub use crate::cancel::CancelToken;
    pub use crate::config::Config;
    pub use crate::controller::{Controller, RunReport};
    pub use crate::renderer::BarRenderer;
    pub use crate::sort::{Algorithm, Mutation, Outcome, RunStatus, Step};
    pub use crate::window::{Command, FrameLimiter, Window};
}
