//! Background worker with debounce and supersession.
//!
//! Recomputes are triggered by UI edits that arrive in bursts: every
//! keystroke in the engraving field is a new job. The worker waits for a
//! quiet period before running, always runs the newest job it can see,
//! and drops a finished result if a newer job was issued while it ran.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::JoinHandle;

use figurine_engrave::{EngravingSpec, Typeface};
use figurine_types::IndexedMesh;
use tracing::{debug, warn};

use crate::config::PipelineConfig;
use crate::error::PipelineResult;
use crate::run::{run_pipeline, Keepsake};

/// Identifies one submitted job. Later submissions compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// Outcome of polling a submitted generation.
#[derive(Debug)]
pub enum Poll {
    /// The job has not finished yet.
    Pending,
    /// A newer submission replaced this job; its result will never arrive.
    Superseded,
    /// The job finished; the keepsake is handed over exactly once.
    Ready(Box<Keepsake>),
    /// The job ran and failed; the error is handed over exactly once.
    Failed(crate::PipelineError),
}

struct Job {
    generation: u64,
    figurine: IndexedMesh,
    engraving: EngravingSpec,
}

type ResultSlot = Mutex<Option<(u64, PipelineResult<Keepsake>)>>;

/// Handle to the background pipeline worker.
///
/// One worker thread serves all submissions. Submitting never blocks;
/// results are retrieved by polling.
///
/// # Example
///
/// ```no_run
/// use figurine_pipeline::{Pipeline, PipelineConfig, Poll};
/// use figurine_engrave::EngravingSpec;
/// use figurine_types::cuboid;
///
/// let pipeline = Pipeline::spawn(PipelineConfig::default(), None);
/// let generation = pipeline.submit(cuboid(10.0, 10.0, 10.0), EngravingSpec::empty());
///
/// loop {
///     match pipeline.poll(generation) {
///         Poll::Pending => std::thread::sleep(std::time::Duration::from_millis(50)),
///         Poll::Ready(keepsake) => {
///             println!("${:.2}", keepsake.estimate.rounded().price);
///             break;
///         }
///         Poll::Superseded | Poll::Failed(_) => break,
///     }
/// }
/// pipeline.shutdown();
/// ```
pub struct Pipeline {
    sender: Option<mpsc::Sender<Job>>,
    latest: Arc<AtomicU64>,
    slot: Arc<ResultSlot>,
    worker: Option<JoinHandle<()>>,
}

impl Pipeline {
    /// Start the worker thread.
    ///
    /// The worker owns the typeface; `None` means every keepsake ships
    /// with a plain pedestal.
    #[must_use]
    pub fn spawn(config: PipelineConfig, typeface: Option<Typeface>) -> Self {
        let (sender, receiver) = mpsc::channel::<Job>();
        let latest = Arc::new(AtomicU64::new(0));
        let slot: Arc<ResultSlot> = Arc::new(Mutex::new(None));

        let worker_latest = Arc::clone(&latest);
        let worker_slot = Arc::clone(&slot);
        let worker = std::thread::spawn(move || {
            worker_loop(
                &receiver,
                &worker_latest,
                &worker_slot,
                &config,
                typeface.as_ref(),
            );
        });

        Self {
            sender: Some(sender),
            latest,
            slot,
            worker: Some(worker),
        }
    }

    /// Submit a recompute job, superseding all earlier submissions.
    ///
    /// Returns immediately with the job's generation token.
    pub fn submit(&self, figurine: IndexedMesh, engraving: EngravingSpec) -> Generation {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let job = Job {
            generation,
            figurine,
            engraving,
        };

        if let Some(sender) = &self.sender {
            if sender.send(job).is_err() {
                warn!(generation, "pipeline worker is gone, job dropped");
            }
        }

        Generation(generation)
    }

    /// Check on a submitted job.
    ///
    /// `Ready` and `Failed` transfer the result out of the pipeline, so
    /// each finished generation yields them at most once.
    pub fn poll(&self, generation: Generation) -> Poll {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some((finished, outcome)) = slot.take() {
            if finished == generation.0 {
                return match outcome {
                    Ok(keepsake) => Poll::Ready(Box::new(keepsake)),
                    Err(err) => Poll::Failed(err),
                };
            }
            *slot = Some((finished, outcome));
        }
        drop(slot);

        if generation.0 < self.latest.load(Ordering::SeqCst) {
            Poll::Superseded
        } else {
            Poll::Pending
        }
    }

    /// Stop the worker and wait for it to exit.
    pub fn shutdown(mut self) {
        self.shutdown_inner();
    }

    fn shutdown_inner(&mut self) {
        // Dropping the sender closes the channel and ends the worker loop
        self.sender.take();
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                warn!("pipeline worker panicked");
            }
        }
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        self.shutdown_inner();
    }
}

fn worker_loop(
    receiver: &mpsc::Receiver<Job>,
    latest: &AtomicU64,
    slot: &ResultSlot,
    config: &PipelineConfig,
    typeface: Option<&Typeface>,
) {
    while let Ok(mut job) = receiver.recv() {
        // Debounce: adopt newer jobs until the queue stays quiet for the
        // whole window.
        loop {
            match receiver.recv_timeout(config.debounce) {
                Ok(newer) => {
                    debug!(
                        superseded = job.generation,
                        by = newer.generation,
                        "debounced job"
                    );
                    job = newer;
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => break,
            }
        }

        let generation = job.generation;
        debug!(generation, "running pipeline job");
        let outcome = run_pipeline(&job.figurine, &job.engraving, typeface, config);

        // A submission that arrived mid-compute wins; this result is stale
        if latest.load(Ordering::SeqCst) == generation {
            let mut current = slot.lock().unwrap_or_else(PoisonError::into_inner);
            *current = Some((generation, outcome));
        } else {
            debug!(generation, "result superseded mid-compute, discarded");
        }
    }
}
