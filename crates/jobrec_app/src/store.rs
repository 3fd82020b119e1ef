use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use jobrec_client::{JobsApi, TokenProvider};
use jobrec_core::{
    update, Effect, FetchFailure, FetchedJobs, Job, Msg, StoreState, StoreViewModel,
};
use store_logging::{store_error, store_info};

type Subscribers = Arc<Mutex<Vec<mpsc::Sender<StoreViewModel>>>>;

/// Process-lifetime container for the job-recommendation state.
///
/// Constructed once at application start and handed by reference to the UI
/// layer. Messages dispatch in arrival order on a dedicated worker thread;
/// fetch effects run on a tokio runtime owned by that thread.
pub struct JobStore {
    shared: Arc<Mutex<StoreState>>,
    subscribers: Subscribers,
    msg_tx: mpsc::Sender<Msg>,
}

impl JobStore {
    pub fn new(api: Arc<dyn JobsApi>, session: Arc<dyn TokenProvider>) -> Self {
        let shared = Arc::new(Mutex::new(StoreState::new()));
        let subscribers: Subscribers = Arc::new(Mutex::new(Vec::new()));
        let (msg_tx, msg_rx) = mpsc::channel::<Msg>();

        spawn_dispatch_loop(
            shared.clone(),
            subscribers.clone(),
            msg_rx,
            msg_tx.clone(),
            api,
            session,
        );

        Self {
            shared,
            subscribers,
            msg_tx,
        }
    }

    /// The store's single action: refresh the recommendation list.
    ///
    /// Calling again while a fetch is in flight starts a second, unguarded
    /// fetch; see `jobrec_core::update`.
    pub fn fetch_recommended_jobs(&self) {
        let _ = self.msg_tx.send(Msg::FetchRequested);
    }

    /// Current state snapshot.
    pub fn snapshot(&self) -> StoreViewModel {
        self.shared.lock().expect("lock store state").view()
    }

    /// Registers a change listener; one snapshot arrives per state change.
    pub fn subscribe(&self) -> mpsc::Receiver<StoreViewModel> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.lock().expect("lock subscribers").push(tx);
        rx
    }
}

fn spawn_dispatch_loop(
    shared: Arc<Mutex<StoreState>>,
    subscribers: Subscribers,
    msg_rx: mpsc::Receiver<Msg>,
    msg_tx: mpsc::Sender<Msg>,
    api: Arc<dyn JobsApi>,
    session: Arc<dyn TokenProvider>,
) {
    thread::spawn(move || {
        let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
        while let Ok(msg) = msg_rx.recv() {
            let effects = {
                let mut guard = shared.lock().expect("lock store state");
                let state = std::mem::take(&mut *guard);
                let (mut state, effects) = update(state, msg);
                let was_dirty = state.consume_dirty();
                let view = state.view();
                *guard = state;
                drop(guard);
                if was_dirty {
                    notify(&subscribers, view);
                }
                effects
            };

            for effect in effects {
                match effect {
                    Effect::FetchRecommendedJobs => {
                        run_fetch(&runtime, api.clone(), session.as_ref(), msg_tx.clone());
                    }
                }
            }
        }
    });
}

fn notify(subscribers: &Subscribers, view: StoreViewModel) {
    let mut listeners = subscribers.lock().expect("lock subscribers");
    // Drop listeners whose receiving end has gone away.
    listeners.retain(|tx| tx.send(view.clone()).is_ok());
}

fn run_fetch(
    runtime: &tokio::runtime::Runtime,
    api: Arc<dyn JobsApi>,
    session: &dyn TokenProvider,
    msg_tx: mpsc::Sender<Msg>,
) {
    // The credential is read once, at call time.
    let token = session.token();
    store_info!(
        "Fetching recommended jobs (token present: {})",
        token.is_some()
    );

    runtime.spawn(async move {
        let outcome = match api.recommended_jobs(token.as_deref()).await {
            Ok(fetched) => {
                let status_ok = fetched.status_ok();
                Ok(FetchedJobs {
                    jobs: fetched.jobs.into_iter().map(Job::from).collect(),
                    status_ok,
                })
            }
            Err(err) => {
                store_error!("Job fetch error: {}", err);
                Err(FetchFailure {
                    message: err.to_string(),
                })
            }
        };
        let _ = msg_tx.send(Msg::FetchSettled { outcome });
    });
}
