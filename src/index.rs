use std::sync::{Mutex, mpsc};
use std::thread;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use crate::area::AreaEngine;
use crate::cancel::CancelToken;
use crate::error::Result;

/// Cached area figures for one distinct WKT value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexedArea {
    pub square_kilometers: u64,
    pub geometry_count: usize,
}

/// A memoization table over the engine's pure `wkt -> (km², count)`
/// function, keyed by exact string equality. Entries are write-once in
/// practice; the table grows unbounded for the life of a batch run.
pub struct AreaIndex {
    engine: AreaEngine,
    cache: DashMap<String, IndexedArea>,
}

impl AreaIndex {
    pub fn new(engine: AreaEngine) -> Self {
        Self { engine, cache: DashMap::new() }
    }

    /// Get the number of cached values.
    #[inline] pub fn len(&self) -> usize { self.cache.len() }

    /// Check if nothing has been cached yet.
    #[inline] pub fn is_empty(&self) -> bool { self.cache.is_empty() }

    /// Look up a previously computed value.
    pub fn get(&self, wkt: &str) -> Option<IndexedArea> {
        self.cache.get(wkt).map(|entry| *entry)
    }

    /// Look up or compute the area figures for one WKT value.
    ///
    /// No per-key lock is held while computing: threads racing on the
    /// same not-yet-cached value may compute it redundantly, and the
    /// last write wins with an equal value.
    pub fn get_or_compute(&self, wkt: &str) -> Result<IndexedArea> {
        if let Some(entry) = self.cache.get(wkt) {
            return Ok(*entry);
        }
        let result = self.engine.compute(wkt, None)?;
        let value = IndexedArea {
            square_kilometers: result.square_kilometers,
            geometry_count: result.geometry_count,
        };
        self.cache.insert(wkt.to_string(), value);
        Ok(value)
    }

    /// Build the index over a stream of WKT values with a pool of worker
    /// threads.
    ///
    /// The calling thread is the single producer, feeding a channel
    /// bounded to the worker count so it cannot run arbitrarily far ahead
    /// of the consumers (a full channel blocks the send). On cancellation
    /// the producer stops enqueueing and closes the channel; workers
    /// drain what is already queued before exiting, and in-flight
    /// computations finish.
    ///
    /// Values that fail to compute are logged and skipped; the batch
    /// keeps going.
    pub fn populate<I>(&self, values: I, workers: usize, cancel: &CancelToken)
    where
        I: IntoIterator<Item = String>,
    {
        let workers = workers.max(1);
        let (sender, receiver) = mpsc::sync_channel::<String>(workers);
        let receiver = Mutex::new(receiver);

        thread::scope(|scope| {
            for _ in 0..workers {
                scope.spawn(|| {
                    loop {
                        let message = receiver.lock().unwrap().recv();
                        let Ok(wkt) = message else { break };
                        if let Err(err) = self.get_or_compute(&wkt) {
                            log::warn!("area computation failed, skipping value: {err}");
                        }
                    }
                });
            }

            for value in values {
                if cancel.is_cancelled() {
                    break;
                }
                if sender.send(value).is_err() {
                    break;
                }
            }
            // Closing the channel lets the workers drain and exit.
            drop(sender);
        });
    }
}
