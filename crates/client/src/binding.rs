//! Consumer bindings: loading/error/success state for one resource key.
//!
//! A [`Binding`] is what a view holds on to. It starts out `Idle`, loads on
//! the first [`Binding::activate`] for a key, and exposes a snapshot of its
//! state at every point of the cycle. [`Binding::refetch`] is the "try again"
//! action: it forces a reload even if the cache holds a fresh copy.

use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use tokio::sync::watch;

use folio_core::fetch::FetchError;

/// Future returned by a binding's loader.
pub type LoadFuture<T> = Pin<Box<dyn Future<Output = Result<T, FetchError>> + Send>>;

type Loader<K, T> = Arc<dyn Fn(K, Refresh) -> LoadFuture<T> + Send + Sync>;

/// Whether a load may be answered from the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refresh {
    /// Serve a fresh cached copy if there is one.
    IfStale,
    /// Invalidate the cached copy first.
    Force,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingState {
    Idle,
    Loading,
    Success,
    Error,
}

/// What a view renders from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsyncState<T> {
    pub data: Option<T>,
    pub loading: LoadingState,
    pub error: Option<String>,
}

impl<T> AsyncState<T> {
    pub fn idle() -> Self {
        Self {
            data: None,
            loading: LoadingState::Idle,
            error: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading == LoadingState::Loading
    }
}

impl<T> Default for AsyncState<T> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Reactive adapter between a loader and a view.
///
/// `K` is the logical key (a post id, a search query, `()` for singletons).
pub struct Binding<K, T> {
    loader: Loader<K, T>,
    key: Mutex<Option<K>>,
    generation: AtomicU64,
    state: watch::Sender<AsyncState<T>>,
}

impl<K, T> Binding<K, T>
where
    K: Clone + PartialEq + Send + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn(K, Refresh) -> LoadFuture<T> + Send + Sync + 'static,
    {
        let (state, _) = watch::channel(AsyncState::idle());
        Self {
            loader: Arc::new(loader),
            key: Mutex::new(None),
            generation: AtomicU64::new(0),
            state,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> AsyncState<T> {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state transition.
    pub fn subscribe(&self) -> watch::Receiver<AsyncState<T>> {
        self.state.subscribe()
    }

    /// The key of the current cycle, if the binding has been activated.
    pub fn key(&self) -> Option<K> {
        self.key
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Starts a load cycle for `key`.
    ///
    /// Activating again with the key of the current cycle does nothing; a
    /// different key starts a fresh cycle and any response still in flight
    /// for the old key is discarded.
    pub async fn activate(&self, key: K) {
        {
            let mut current = self.key.lock().unwrap_or_else(PoisonError::into_inner);
            if current.as_ref() == Some(&key) {
                return;
            }
            *current = Some(key.clone());
        }
        self.run(key, Refresh::IfStale).await;
    }

    /// Reloads the current key, bypassing the cache. Does nothing before the
    /// first activation.
    pub async fn refetch(&self) {
        let Some(key) = self.key() else {
            return;
        };
        self.run(key, Refresh::Force).await;
    }

    /// Returns to `Idle` with no data. The next activation loads again.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        *self.key.lock().unwrap_or_else(PoisonError::into_inner) = None;
        self.state.send_replace(AsyncState::idle());
    }

    async fn run(&self, key: K, refresh: Refresh) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        // Previously loaded data stays visible while loading.
        self.state.send_modify(|state| {
            state.loading = LoadingState::Loading;
            state.error = None;
        });

        let result = (self.loader)(key, refresh).await;

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::trace!("Discarding superseded load result");
            return;
        }

        self.state.send_modify(|state| match result {
            Ok(data) => {
                state.data = Some(data);
                state.loading = LoadingState::Success;
                state.error = None;
            }
            Err(err) => {
                state.loading = LoadingState::Error;
                state.error = Some(err.to_string());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use tokio::sync::oneshot;

    /// Loader that echoes the key, counting calls and recording refresh modes.
    fn echo_binding(
        calls: Arc<AtomicUsize>,
        forced: Arc<AtomicUsize>,
    ) -> Binding<String, String> {
        Binding::new(move |key: String, refresh| {
            calls.fetch_add(1, Ordering::SeqCst);
            if refresh == Refresh::Force {
                forced.fetch_add(1, Ordering::SeqCst);
            }
            let fut: LoadFuture<String> = Box::pin(async move {
                if key.is_empty() {
                    Err(FetchError::InvalidId)
                } else {
                    Ok(format!("value for {}", key))
                }
            });
            fut
        })
    }

    #[tokio::test]
    async fn test_starts_idle() {
        let binding = echo_binding(Default::default(), Default::default());
        let state = binding.state();

        assert_eq!(state.loading, LoadingState::Idle);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
        assert!(binding.key().is_none());
    }

    #[tokio::test]
    async fn test_activate_loads_once_per_key() {
        let calls = Arc::new(AtomicUsize::new(0));
        let binding = echo_binding(calls.clone(), Default::default());

        binding.activate("a".to_string()).await;
        binding.activate("a".to_string()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let state = binding.state();
        assert_eq!(state.loading, LoadingState::Success);
        assert_eq!(state.data.as_deref(), Some("value for a"));
    }

    #[tokio::test]
    async fn test_new_key_starts_new_cycle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let binding = echo_binding(calls.clone(), Default::default());

        binding.activate("a".to_string()).await;
        binding.activate("b".to_string()).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(binding.state().data.as_deref(), Some("value for b"));
        assert_eq!(binding.key().as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn test_error_surfaces_message() {
        let binding = echo_binding(Default::default(), Default::default());

        binding.activate(String::new()).await;

        let state = binding.state();
        assert_eq!(state.loading, LoadingState::Error);
        assert_eq!(state.error.as_deref(), Some("Blog post ID is required"));
        assert!(state.data.is_none());
    }

    #[tokio::test]
    async fn test_refetch_forces_reload() {
        let calls = Arc::new(AtomicUsize::new(0));
        let forced = Arc::new(AtomicUsize::new(0));
        let binding = echo_binding(calls.clone(), forced.clone());

        binding.refetch().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        binding.activate("a".to_string()).await;
        binding.refetch().await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(forced.load(Ordering::SeqCst), 1);
        assert_eq!(binding.state().loading, LoadingState::Success);
    }

    #[tokio::test]
    async fn test_refetch_recovers_from_error() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = attempts.clone();
        let binding: Binding<(), u32> = Binding::new(move |(), _| {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            let fut: LoadFuture<u32> = Box::pin(async move {
                if attempt == 0 {
                    Err(FetchError::Network {
                        url: "/cv.json".to_string(),
                        reason: "offline".to_string(),
                    })
                } else {
                    Ok(7)
                }
            });
            fut
        });

        binding.activate(()).await;
        assert_eq!(binding.state().loading, LoadingState::Error);

        binding.refetch().await;
        let state = binding.state();
        assert_eq!(state.loading, LoadingState::Success);
        assert_eq!(state.data, Some(7));
        assert!(state.error.is_none());
    }

    #[tokio::test]
    async fn test_transitions_are_observable() {
        let (release, gate) = oneshot::channel::<()>();
        let gate = Arc::new(tokio::sync::Mutex::new(Some(gate)));
        let binding: Arc<Binding<(), &'static str>> = Arc::new(Binding::new(move |(), _| {
            let gate = gate.clone();
            let fut: LoadFuture<&'static str> = Box::pin(async move {
                if let Some(gate) = gate.lock().await.take() {
                    let _ = gate.await;
                }
                Ok("done")
            });
            fut
        }));
        let mut rx = binding.subscribe();

        let task = tokio::spawn({
            let binding = binding.clone();
            async move { binding.activate(()).await }
        });

        rx.wait_for(|s| s.is_loading()).await.unwrap();
        assert_eq!(binding.state().loading, LoadingState::Loading);

        release.send(()).unwrap();
        task.await.unwrap();

        assert_eq!(binding.state().loading, LoadingState::Success);
        assert_eq!(binding.state().data, Some("done"));
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let (release_a, gate_a) = oneshot::channel::<()>();
        let gate_a = Arc::new(tokio::sync::Mutex::new(Some(gate_a)));
        let binding: Arc<Binding<&'static str, &'static str>> =
            Arc::new(Binding::new(move |key, _| {
                let gate_a = gate_a.clone();
                let fut: LoadFuture<&'static str> = Box::pin(async move {
                    if key == "a" {
                        if let Some(gate) = gate_a.lock().await.take() {
                            let _ = gate.await;
                        }
                    }
                    Ok(key)
                });
                fut
            }));
        let mut rx = binding.subscribe();

        let slow = tokio::spawn({
            let binding = binding.clone();
            async move { binding.activate("a").await }
        });
        rx.wait_for(|s| s.is_loading()).await.unwrap();

        binding.activate("b").await;
        release_a.send(()).unwrap();
        slow.await.unwrap();

        assert_eq!(binding.state().data, Some("b"));
        assert_eq!(binding.state().loading, LoadingState::Success);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let calls = Arc::new(AtomicUsize::new(0));
        let binding = echo_binding(calls.clone(), Default::default());

        binding.activate("a".to_string()).await;
        binding.reset();

        assert_eq!(binding.state(), AsyncState::idle());
        binding.activate("a".to_string()).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_state_serializes_for_views() {
        let state = AsyncState {
            data: Some(1),
            loading: LoadingState::Success,
            error: None,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["loading"], "success");
        assert_eq!(json["data"], 1);
    }
}
