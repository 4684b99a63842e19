//! Background angle sampling.
//!
//! Spawns a thread that owns the `AngleSensor` and pushes timestamped
//! readings via a bounded channel at a fixed cadence. This is the single
//! well-defined "await next sample" point that decouples the tracker state
//! machine from the concrete scheduling mechanism.
//!
//! The channel send is non-blocking: when the consumer falls behind (or has
//! stopped draining entirely), new samples are dropped rather than queued,
//! so the worker always reaches its shutdown check and `Drop` can join it.
//!
//! Safety: each `AngleSampler` spawns exactly one thread that is
//! automatically shut down when the sampler is dropped, preventing thread
//! leaks.
use crossbeam_channel as xch;
use kinsense_traits::{AngleSensor, Clock};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// One timestamped angle reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleSample {
    pub angle_deg: f64,
    pub ticks_ms: u32,
}

pub struct AngleSampler {
    rx: xch::Receiver<AngleSample>,
    /// Shutdown flag for immediate response (atomic for lock-free check)
    shutdown: Arc<AtomicBool>,
    /// Join handle for graceful thread cleanup
    join_handle: Option<std::thread::JoinHandle<()>>,
}

impl AngleSampler {
    /// Rate-paced sampler at the given cadence in milliseconds.
    pub fn spawn<A: AngleSensor + Send + 'static, C: Clock + Send + Sync + 'static>(
        mut sensor: A,
        sample_ms: u64,
        clock: C,
    ) -> Self {
        let (tx, rx) = xch::bounded(1);
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        let period = Duration::from_millis(sample_ms.max(1));

        let join_handle = std::thread::spawn(move || {
            loop {
                // Immediate shutdown check (lock-free atomic)
                if shutdown_clone.load(Ordering::Relaxed) {
                    tracing::debug!("angle sampler thread received shutdown signal");
                    break;
                }

                match sensor.read() {
                    Ok(angle_deg) => {
                        let sample = AngleSample {
                            angle_deg,
                            ticks_ms: clock.ticks_ms(),
                        };
                        // Never block on a full channel: the consumer may have
                        // stopped draining (cancellation latched), and Drop
                        // joins this thread.
                        match tx.try_send(sample) {
                            Ok(()) => {}
                            Err(xch::TrySendError::Full(_)) => {
                                tracing::trace!("angle channel full, dropping sample");
                            }
                            Err(xch::TrySendError::Disconnected(_)) => {
                                tracing::debug!(
                                    "angle sampler consumer disconnected, exiting thread"
                                );
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        // Transient read failure: skip the sample; the
                        // consumer keeps waiting at its own cadence.
                        tracing::warn!(error = %e, "angle read failed, skipping sample");
                    }
                }

                // Check shutdown before sleep to avoid unnecessary delay
                if shutdown_clone.load(Ordering::Relaxed) {
                    break;
                }
                clock.sleep(period);
            }
            tracing::trace!("angle sampler thread exiting cleanly");
        });

        Self {
            rx,
            shutdown,
            join_handle: Some(join_handle),
        }
    }

    /// Most recent sample, if any arrived since the last call.
    pub fn latest(&self) -> Option<AngleSample> {
        self.rx.try_iter().last()
    }
}

impl Drop for AngleSampler {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);

        // The thread exits immediately if it is between reads or asleep on
        // a simulated clock; at worst after one real sleep period.
        if let Some(handle) = self.join_handle.take() {
            match handle.join() {
                Ok(()) => {
                    tracing::trace!("angle sampler thread joined successfully");
                }
                Err(e) => {
                    // Thread panicked; log but don't propagate (we're in Drop)
                    tracing::warn!(?e, "angle sampler thread panicked during shutdown");
                }
            }
        }
    }
}
