//! Sort run lifecycle.
//!
//! The [`Controller`] owns the array between runs, hands it to a background
//! worker thread for the duration of one run, and takes it back when the
//! algorithm returns. While a run is active the UI thread only sees snapshots
//! delivered over a channel, so it cannot touch the array by construction.
//!
//! Each step on the worker is: mutate, send the snapshot, sleep the step
//! delay, poll the cancellation flag.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{self as cb, Receiver};
use tracing::{debug, info, warn};

use crate::array::ArrayModel;
use crate::cancel::CancelToken;
use crate::config::{Config, ConfigError};
use crate::error::ControlError;
use crate::sort::{Algorithm, Mutation, Outcome};

/// Per-step delay shared with the worker so speed changes apply mid-run.
#[derive(Debug, Clone, Default)]
struct StepDelay(Arc<AtomicU64>);

impl StepDelay {
    fn set(&self, delay: Duration) {
        self.0.store(delay.as_micros() as u64, Ordering::Relaxed);
    }

    fn get(&self) -> Duration {
        Duration::from_micros(self.0.load(Ordering::Relaxed))
    }
}

struct StepEvent {
    mutation: Mutation,
    values: Vec<u32>,
}

struct ActiveRun {
    algorithm: Algorithm,
    events: Receiver<StepEvent>,
    handle: JoinHandle<(ArrayModel, Outcome)>,
    started: Instant,
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub algorithm: Algorithm,
    pub outcome: Outcome,
    pub elapsed: Duration,
}

pub struct Controller {
    config: Config,
    algorithm: Algorithm,
    size: usize,
    speed: u32,
    delay: StepDelay,
    cancel: CancelToken,
    // None while a run owns the array.
    array: Option<ArrayModel>,
    snapshot: Vec<u32>,
    highlight: Option<Mutation>,
    run: Option<ActiveRun>,
}

impl Controller {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;

        let delay = StepDelay::default();
        delay.set(config.step_delay(config.default_speed));

        let mut array = ArrayModel::default();
        array.randomize(config.default_size, config.max_bar_height);

        Ok(Self {
            algorithm: Algorithm::default(),
            size: config.default_size,
            speed: config.default_speed,
            delay,
            cancel: CancelToken::new(),
            snapshot: array.values().to_vec(),
            array: Some(array),
            highlight: None,
            run: None,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// The array as the renderer should currently show it.
    pub fn values(&self) -> &[u32] {
        &self.snapshot
    }

    /// The mutation behind the current snapshot, if a run is showing one.
    pub fn highlight(&self) -> Option<Mutation> {
        self.highlight
    }

    /// Algorithm selection is locked while a run is active.
    pub fn select_algorithm(&mut self, algorithm: Algorithm) -> Result<(), ControlError> {
        if self.is_running() {
            return Err(ControlError::RunActive);
        }
        self.algorithm = algorithm;
        debug!(%algorithm, "algorithm selected");
        Ok(())
    }

    pub fn next_algorithm(&mut self) -> Result<(), ControlError> {
        self.select_algorithm(self.algorithm.next())
    }

    /// Takes effect on the next step, including mid-run.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = self.config.clamp_speed(speed);
        self.delay.set(self.config.step_delay(self.speed));
        debug!(speed = self.speed, delay = ?self.delay.get(), "speed changed");
    }

    /// Resizes and regenerates the array, stopping an active run first.
    pub fn set_size(&mut self, size: usize) -> Result<(), ControlError> {
        let size = self.config.clamp_size(size);
        self.stop()?;
        self.size = size;
        self.regenerate();
        info!(size, "array resized");
        Ok(())
    }

    /// Replaces the array with caller-provided values.
    ///
    /// The length must lie in the configured size range and every value in
    /// `1..=max_bar_height`; otherwise the current array is kept.
    pub fn set_values(&mut self, values: Vec<u32>) -> Result<(), ControlError> {
        if self.is_running() {
            return Err(ControlError::RunActive);
        }
        let (min, max) = (self.config.min_size, self.config.max_size);
        if !(min..=max).contains(&values.len()) {
            return Err(ControlError::SizeOutOfRange {
                len: values.len(),
                min,
                max,
            });
        }
        let max = self.config.max_bar_height;
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| !(1..=max).contains(&v))
        {
            return Err(ControlError::ValueOutOfRange { index, value, max });
        }
        self.size = values.len();
        self.install(ArrayModel::new(values));
        Ok(())
    }

    /// Starts the selected algorithm on a background worker.
    pub fn start(&mut self) -> Result<(), ControlError> {
        if self.is_running() {
            return Err(ControlError::RunActive);
        }
        let Some(mut array) = self.array.take() else {
            return Err(ControlError::RunActive);
        };

        self.cancel.reset();
        self.highlight = None;

        let algorithm = self.algorithm;
        let cancel = self.cancel.clone();
        let delay = self.delay.clone();
        let (sender, events) = cb::unbounded();

        let spawned = thread::Builder::new()
            .name("sort-run".to_string())
            .spawn(move || {
                let outcome = algorithm.run(&mut array, &cancel, |step| {
                    // A dropped receiver means the controller is gone and has
                    // already requested cancellation.
                    let _ = sender.send(StepEvent {
                        mutation: step.mutation,
                        values: step.values.to_vec(),
                    });
                    thread::sleep(delay.get());
                });
                (array, outcome)
            });

        let handle = match spawned {
            Ok(handle) => handle,
            Err(err) => {
                warn!(error = %err, "failed to spawn sort worker");
                self.regenerate();
                return Err(ControlError::WorkerSpawn(err));
            }
        };

        info!(%algorithm, size = self.size, speed = self.speed, "sort started");
        self.run = Some(ActiveRun {
            algorithm,
            events,
            handle,
            started: Instant::now(),
        });
        Ok(())
    }

    /// Requests cancellation of the active run. The run ends at its next
    /// checkpoint; [`poll`](Self::poll) or [`wait`](Self::wait) collects it.
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.cancel.cancel();
            debug!("cancellation requested");
        }
    }

    /// The start/stop button: starts when idle, cancels when running.
    pub fn toggle(&mut self) -> Result<(), ControlError> {
        if self.is_running() {
            self.cancel();
            Ok(())
        } else {
            self.start()
        }
    }

    /// Stops any active run and regenerates the array at the current size.
    pub fn reset(&mut self) -> Result<(), ControlError> {
        self.stop()?;
        self.regenerate();
        info!(size = self.size, "array reset");
        Ok(())
    }

    /// Applies pending snapshots and collects the run if it has ended.
    ///
    /// Call once per frame. Returns the report of a run that finished since
    /// the last call.
    pub fn poll(&mut self) -> Result<Option<RunReport>, ControlError> {
        self.drain_events();
        let finished = self
            .run
            .as_ref()
            .is_some_and(|run| run.handle.is_finished());
        if finished {
            self.wait()
        } else {
            Ok(None)
        }
    }

    /// Blocks until the active run returns, if there is one.
    pub fn wait(&mut self) -> Result<Option<RunReport>, ControlError> {
        match self.run.take() {
            Some(run) => self.finish(run).map(Some),
            None => Ok(None),
        }
    }

    fn stop(&mut self) -> Result<Option<RunReport>, ControlError> {
        self.cancel();
        self.wait()
    }

    fn drain_events(&mut self) {
        if let Some(run) = &self.run {
            for event in run.events.try_iter() {
                self.snapshot = event.values;
                self.highlight = Some(event.mutation);
            }
        }
    }

    fn finish(&mut self, run: ActiveRun) -> Result<RunReport, ControlError> {
        let joined = run.handle.join();
        self.cancel.reset();
        self.highlight = None;

        match joined {
            Ok((array, outcome)) => {
                let report = RunReport {
                    algorithm: run.algorithm,
                    outcome,
                    elapsed: run.started.elapsed(),
                };
                info!(
                    algorithm = %report.algorithm,
                    status = ?outcome.status,
                    steps = outcome.steps,
                    elapsed = ?report.elapsed,
                    "sort finished"
                );
                self.install(array);
                Ok(report)
            }
            Err(_) => {
                warn!(algorithm = %run.algorithm, "sort worker panicked");
                self.regenerate();
                Err(ControlError::WorkerPanicked)
            }
        }
    }

    fn regenerate(&mut self) {
        let mut array = ArrayModel::default();
        array.randomize(self.size, self.config.max_bar_height);
        self.install(array);
    }

    fn install(&mut self, array: ArrayModel) {
        self.snapshot = array.values().to_vec();
        self.highlight = None;
        self.array = Some(array);
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        if self.run.is_some() {
            let _ = self.stop();
        }
    }
}
