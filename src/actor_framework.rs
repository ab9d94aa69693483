use std::fmt::{self, Debug};

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, trace};

// =============================================================================
// 1. THE ABSTRACTION (Reducer, Listeners)
// =============================================================================

/// Pure state transition function that a [`Store`] is built around.
///
/// `reduce` must be total and side-effect free: given the current state and
/// an intent it returns the next state and whether the intent changed
/// anything. A `false` flag means the intent was a no-op.
pub trait Reducer: Send + 'static {
    type State: Clone + Default + Debug + Send + Sync + 'static;
    type Intent: Debug + Send + 'static;

    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, bool);
}

/// Callback invoked with the new state after every committed change.
pub type Listener<S> = Box<dyn Fn(&S) + Send + 'static>;

pub type SubscriptionId = u64;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE SYNCHRONOUS STORE
// =============================================================================

/// Single-writer state holder.
///
/// All mutation goes through [`Store::dispatch`]; everything else only reads.
/// Listeners are called in subscription order, synchronously, after the new
/// state has been committed, and only when the state actually changed.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(SubscriptionId, Listener<R::State>)>,
    next_subscription: SubscriptionId,
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::with_state(R::State::default())
    }
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: R::State) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_subscription: 1,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Applies `intent` and returns whether the state changed.
    pub fn dispatch(&mut self, intent: R::Intent) -> bool {
        trace!(?intent, "Applying intent");
        let (next, changed) = R::reduce(self.state.clone(), intent);
        if !changed {
            trace!("Intent was a no-op");
            return false;
        }
        self.state = next;
        for (_, listener) in &self.listeners {
            listener(&self.state);
        }
        true
    }

    pub fn subscribe(&mut self, listener: impl Fn(&R::State) + Send + 'static) -> SubscriptionId {
        self.subscribe_boxed(Box::new(listener))
    }

    pub fn subscribe_boxed(&mut self, listener: Listener<R::State>) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        debug!(subscription_id = id, "Listener subscribed");
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        let removed = self.listeners.len() != before;
        if removed {
            debug!(subscription_id = id, "Listener unsubscribed");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

// =============================================================================
// 3. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<T>;

pub enum StoreRequest<R: Reducer> {
    Dispatch {
        intent: R::Intent,
        respond_to: Response<bool>,
    },
    Snapshot {
        respond_to: Response<R::State>,
    },
    Subscribe {
        listener: Listener<R::State>,
        respond_to: Response<SubscriptionId>,
    },
    Unsubscribe {
        id: SubscriptionId,
        respond_to: Response<bool>,
    },
}

impl<R: Reducer> Debug for StoreRequest<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreRequest::Dispatch { intent, .. } => {
                f.debug_struct("Dispatch").field("intent", intent).finish()
            }
            StoreRequest::Snapshot { .. } => f.write_str("Snapshot"),
            StoreRequest::Subscribe { .. } => f.write_str("Subscribe"),
            StoreRequest::Unsubscribe { id, .. } => {
                f.debug_struct("Unsubscribe").field("id", id).finish()
            }
        }
    }
}

// =============================================================================
// 4. THE GENERIC ACTOR SERVER
// =============================================================================

/// Hosts a [`Store`] on its own task.
///
/// The task is the only writer. Requests are handled one at a time, each to
/// completion, so transitions never interleave no matter how many clients
/// send concurrently. The actor stops once every client has been dropped.
pub struct StoreActor<R: Reducer> {
    receiver: mpsc::Receiver<StoreRequest<R>>,
    store: Store<R>,
}

impl<R: Reducer> StoreActor<R> {
    pub fn new(buffer_size: usize) -> (Self, StoreClient<R>) {
        Self::with_state(buffer_size, R::State::default())
    }

    pub fn with_state(buffer_size: usize, state: R::State) -> (Self, StoreClient<R>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Store::with_state(state),
        };
        (actor, StoreClient::new(sender))
    }

    #[instrument(name = "store_actor", skip(self))]
    pub async fn run(mut self) {
        info!("StoreActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Dispatch { intent, respond_to } => {
                    let changed = self.store.dispatch(intent);
                    let _ = respond_to.send(changed);
                }
                StoreRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(self.store.state().clone());
                }
                StoreRequest::Subscribe { listener, respond_to } => {
                    let id = self.store.subscribe_boxed(listener);
                    let _ = respond_to.send(id);
                }
                StoreRequest::Unsubscribe { id, respond_to } => {
                    let _ = respond_to.send(self.store.unsubscribe(id));
                }
            }
        }
        info!("StoreActor stopped");
    }
}

// =============================================================================
// 5. THE GENERIC CLIENT
// =============================================================================

pub struct StoreClient<R: Reducer> {
    sender: mpsc::Sender<StoreRequest<R>>,
}

impl<R: Reducer> Clone for StoreClient<R> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<R: Reducer> StoreClient<R> {
    pub fn new(sender: mpsc::Sender<StoreRequest<R>>) -> Self {
        Self { sender }
    }

    pub async fn dispatch(&self, intent: R::Intent) -> Result<bool, FrameworkError> {
        self.request(|respond_to| StoreRequest::Dispatch { intent, respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<R::State, FrameworkError> {
        self.request(|respond_to| StoreRequest::Snapshot { respond_to })
            .await
    }

    pub async fn subscribe(
        &self,
        listener: impl Fn(&R::State) + Send + 'static,
    ) -> Result<SubscriptionId, FrameworkError> {
        let listener: Listener<R::State> = Box::new(listener);
        self.request(|respond_to| StoreRequest::Subscribe { listener, respond_to })
            .await
    }

    pub async fn unsubscribe(&self, id: SubscriptionId) -> Result<bool, FrameworkError> {
        self.request(|respond_to| StoreRequest::Unsubscribe { id, respond_to })
            .await
    }

    async fn request<T>(
        &self,
        make: impl FnOnce(Response<T>) -> StoreRequest<R>,
    ) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(make(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }
}

// =============================================================================
// 6. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // --- Domain Definition ---

    #[derive(Debug)]
    enum CounterIntent {
        Add(i64),
        Reset,
    }

    struct CounterReducer;

    impl Reducer for CounterReducer {
        type State = i64;
        type Intent = CounterIntent;

        fn reduce(state: i64, intent: CounterIntent) -> (i64, bool) {
            let next = match intent {
                CounterIntent::Add(n) => state + n,
                CounterIntent::Reset => 0,
            };
            (next, next != state)
        }
    }

    // --- Tests ---

    #[test]
    fn test_store_notifies_only_on_change() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut store = Store::<CounterReducer>::new();
        let sink = seen.clone();
        store.subscribe(move |state| sink.lock().unwrap().push(*state));

        assert!(store.dispatch(CounterIntent::Add(2)));
        assert!(!store.dispatch(CounterIntent::Add(0)));
        assert!(store.dispatch(CounterIntent::Reset));
        assert!(!store.dispatch(CounterIntent::Reset));

        assert_eq!(*seen.lock().unwrap(), vec![2, 0]);
        assert_eq!(*store.state(), 0);
    }

    #[test]
    fn test_store_unsubscribe_stops_notifications() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut store = Store::<CounterReducer>::new();

        let counter = calls.clone();
        let first = store.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = calls.clone();
        let _second = store.subscribe(move |_| {
            counter.fetch_add(10, Ordering::SeqCst);
        });

        store.dispatch(CounterIntent::Add(1));
        assert_eq!(calls.load(Ordering::SeqCst), 11);

        assert!(store.unsubscribe(first));
        assert!(!store.unsubscribe(first));
        assert_eq!(store.listener_count(), 1);

        store.dispatch(CounterIntent::Add(1));
        assert_eq!(calls.load(Ordering::SeqCst), 21);
    }

    #[tokio::test]
    async fn test_store_actor_round_trip() {
        let (actor, client) = StoreActor::<CounterReducer>::new(10);
        let handle = tokio::spawn(actor.run());

        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let id = client
            .subscribe(move |state| sink.lock().unwrap().push(*state))
            .await
            .unwrap();

        assert!(client.dispatch(CounterIntent::Add(5)).await.unwrap());
        assert!(!client.dispatch(CounterIntent::Add(0)).await.unwrap());
        assert_eq!(client.snapshot().await.unwrap(), 5);

        assert!(client.unsubscribe(id).await.unwrap());
        client.dispatch(CounterIntent::Add(1)).await.unwrap();
        assert_eq!(*seen.lock().unwrap(), vec![5]);

        // Dropping the last client stops the actor.
        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_client_reports_closed_actor() {
        let (actor, client) = StoreActor::<CounterReducer>::new(10);
        drop(actor);
        assert_eq!(client.snapshot().await, Err(FrameworkError::ActorClosed));
    }
}
