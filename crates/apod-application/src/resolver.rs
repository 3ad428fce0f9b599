//! Date resolution state machine.
//!
//! The [`Resolver`] owns the single "current" date and its lifecycle state.
//! Selecting a date is synchronous: the new date becomes current and
//! `Loading` is published before the call returns. The store lookup and the
//! remote request run on a spawned task, and their outcome is only applied if
//! the date they were started for is still current when they finish.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use apod_core::error::ApodError;
use apod_core::record::{DateKey, Record, RecordStore, RemoteService};
use apod_core::resolution::{ResolutionObserver, ResolutionSnapshot, ResolutionState};
use tokio::task::JoinHandle;

/// Resolves selected dates to records, store first and remote on a miss.
///
/// Cloning is cheap; clones share the same state.
///
/// # Example
///
/// ```ignore
/// let resolver = Resolver::new(store, remote, observer);
/// if let Some(task) = resolver.select_date(Some("2024-01-01".parse()?)) {
///     task.await?;
/// }
/// assert_eq!(resolver.current_state(), ResolutionState::Resolved);
/// ```
#[derive(Clone)]
pub struct Resolver {
    inner: Arc<ResolverInner>,
}

struct ResolverInner {
    store: Arc<dyn RecordStore>,
    remote: Arc<dyn RemoteService>,
    observer: Arc<dyn ResolutionObserver>,
    current: Mutex<CurrentSelection>,
}

#[derive(Default)]
struct CurrentSelection {
    snapshot: ResolutionSnapshot,
    /// Dates with a resolution task still running, current or not
    in_flight: HashSet<DateKey>,
}

impl Resolver {
    pub fn new(
        store: Arc<dyn RecordStore>,
        remote: Arc<dyn RemoteService>,
        observer: Arc<dyn ResolutionObserver>,
    ) -> Self {
        Self {
            inner: Arc::new(ResolverInner {
                store,
                remote,
                observer,
                current: Mutex::new(CurrentSelection::default()),
            }),
        }
    }

    /// Makes `key` the current selection; `None` clears it.
    ///
    /// Must be called from within a Tokio runtime. Returns the handle of the
    /// spawned resolution task, or `None` when no new work was started:
    ///
    /// - the selection was cleared,
    /// - `key` is already current and `Loading` or `Resolved`,
    /// - a task for `key` is still running from an earlier selection; its
    ///   result will be applied since `key` is current again.
    pub fn select_date(&self, key: Option<DateKey>) -> Option<JoinHandle<()>> {
        let mut current = self.inner.lock();

        let Some(key) = key else {
            tracing::debug!("Selection cleared");
            self.inner
                .publish(&mut current, ResolutionSnapshot::unselected());
            return None;
        };

        if current.snapshot.key == Some(key)
            && matches!(
                current.snapshot.state,
                ResolutionState::Loading | ResolutionState::Resolved
            )
        {
            tracing::debug!(date = %key, state = ?current.snapshot.state, "Date already selected");
            return None;
        }

        self.inner
            .publish(&mut current, ResolutionSnapshot::loading(key));

        if !current.in_flight.insert(key) {
            tracing::debug!(date = %key, "Resolution already in flight, awaiting its result");
            return None;
        }
        drop(current);

        let task = InFlight {
            inner: Arc::clone(&self.inner),
            key,
            settled: false,
        };
        Some(tokio::spawn(task.run()))
    }

    /// Selects `key` and waits for its resolution task, returning the
    /// snapshot current afterwards.
    ///
    /// When no task was started (see [`Resolver::select_date`]) the current
    /// snapshot is returned right away.
    pub async fn resolve(&self, key: DateKey) -> ResolutionSnapshot {
        if let Some(task) = self.select_date(Some(key)) {
            if let Err(e) = task.await {
                tracing::error!(date = %key, error = %e, "Resolution task did not complete");
            }
        }
        self.snapshot()
    }

    pub fn current_state(&self) -> ResolutionState {
        self.inner.lock().snapshot.state
    }

    pub fn current_record(&self) -> Option<Record> {
        self.inner.lock().snapshot.record.clone()
    }

    pub fn current_key(&self) -> Option<DateKey> {
        self.inner.lock().snapshot.key
    }

    /// The last published snapshot.
    pub fn snapshot(&self) -> ResolutionSnapshot {
        self.inner.lock().snapshot.clone()
    }
}

impl ResolverInner {
    fn lock(&self) -> MutexGuard<'_, CurrentSelection> {
        // A panicking observer must not wedge every later selection
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, current: &mut CurrentSelection, snapshot: ResolutionSnapshot) {
        current.snapshot = snapshot;
        self.observer.publish(&current.snapshot);
    }

    /// Releases `key` from the in-flight set and applies `outcome` if `key`
    /// is still the one waiting for it.
    fn finish(&self, key: DateKey, outcome: ResolutionSnapshot) {
        let mut current = self.lock();
        current.in_flight.remove(&key);

        if current.snapshot.key != Some(key)
            || current.snapshot.state != ResolutionState::Loading
        {
            tracing::debug!(
                date = %key,
                current = ?current.snapshot.key,
                "Discarding result for a date that is no longer current"
            );
            return;
        }

        self.publish(&mut current, outcome);
    }

    async fn lookup(&self, key: DateKey) -> ResolutionSnapshot {
        if let Some(record) = self.store.get(&key).await {
            tracing::debug!(date = %key, "Store hit");
            return ResolutionSnapshot::resolved(key, record);
        }
        tracing::debug!(date = %key, "Store miss");

        match self.remote.fetch(&key).await {
            Ok(Some(record)) => {
                // Stored even if the date is no longer current
                if let Err(e) = self.store.put(&key, &record).await {
                    tracing::warn!(date = %key, error = %e, "Record not persisted");
                }
                tracing::info!(date = %key, title = %record.title, "Fetched record");
                ResolutionSnapshot::resolved(key, record)
            }
            Ok(None) => {
                tracing::warn!(date = %key, "Remote service returned no usable record");
                ResolutionSnapshot::empty(key)
            }
            Err(e) => {
                tracing::error!(date = %key, error = %e, "Remote request failed");
                ResolutionSnapshot::failed(key, e.to_string())
            }
        }
    }
}

/// A running resolution for one date.
///
/// Owned by the spawned future, so a task that panics or is aborted still
/// releases its date and turns a waiting `Loading` into `Failed`.
struct InFlight {
    inner: Arc<ResolverInner>,
    key: DateKey,
    settled: bool,
}

impl InFlight {
    async fn run(mut self) {
        let outcome = self.inner.lookup(self.key).await;
        self.inner.finish(self.key, outcome);
        self.settled = true;
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        tracing::error!(date = %self.key, "Resolution task ended without a result");
        let error = ApodError::internal("resolution task ended without a result");
        self.inner
            .finish(self.key, ResolutionSnapshot::failed(self.key, error.to_string()));
    }
}
