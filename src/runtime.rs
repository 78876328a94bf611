//! Controller that runs the reducer against a live session and API client.
//!
//! ARCHITECTURE
//! ============
//! `dispatch` applies a message, executes synchronous effects (token writes,
//! timer scheduling) immediately, and hands network calls back to the caller.
//! The caller awaits [`perform`] for each call and dispatches the resulting
//! message. Keeping awaits outside the controller means no borrow of it is
//! held across a suspension point, so UI events stay dispatchable while a
//! request is in flight.
//!
//! Time is explicit: the caller reports `now` through [`Controller::advance_to`],
//! and timers fire from there.

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;

use std::rc::Rc;
use std::time::Duration;

use crate::net::api::ApiClient;
use crate::net::transport::HttpTransport;
use crate::state::session::Session;
use crate::state::timers::TimerQueue;
use crate::state::update::{ApiCall, Effect, Msg, Timer, initial_effects, update};
use crate::state::view::{FormMode, ViewState};
use crate::util::storage::KeyValueStorage;

pub struct Controller<T, S> {
    state: ViewState,
    client: Rc<ApiClient<T>>,
    session: Rc<Session<S>>,
    timers: TimerQueue<Timer>,
    now: Duration,
}

impl<T: HttpTransport, S: KeyValueStorage> Controller<T, S> {
    /// Build the initial view from the session and return the calls it needs.
    pub fn start(client: ApiClient<T>, session: Session<S>) -> (Self, Vec<ApiCall>) {
        let state = ViewState::initial(session.is_authenticated());
        let effects = initial_effects(&state);
        let mut controller = Self {
            state,
            client: Rc::new(client),
            session: Rc::new(session),
            timers: TimerQueue::new(),
            now: Duration::ZERO,
        };
        let calls = controller.apply(effects);
        (controller, calls)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn client(&self) -> Rc<ApiClient<T>> {
        Rc::clone(&self.client)
    }

    pub fn session(&self) -> Rc<Session<S>> {
        Rc::clone(&self.session)
    }

    /// Clock value of the last [`Controller::advance_to`].
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Deadline of the next pending timer, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.next_deadline()
    }

    /// Apply `msg` and return the network calls it triggered.
    pub fn dispatch(&mut self, msg: Msg) -> Vec<ApiCall> {
        let effects = update(&mut self.state, msg);
        self.apply(effects)
    }

    /// Move the clock forward to `now` and fire every timer due by then.
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, now: Duration) -> Vec<ApiCall> {
        self.now = self.now.max(now);
        let mut calls = Vec::new();
        // Timers fired here may schedule new ones that are already due.
        loop {
            let due = self.timers.take_due(self.now);
            if due.is_empty() {
                break;
            }
            for timer in due {
                calls.extend(self.dispatch(timer.message()));
            }
        }
        calls
    }

    fn apply(&mut self, effects: Vec<Effect>) -> Vec<ApiCall> {
        let mut calls = Vec::new();
        for effect in effects {
            match effect {
                Effect::Request(call) => calls.push(call),
                Effect::StoreTokens(tokens) => self.session.set_tokens(&tokens),
                Effect::ClearTokens => self.session.clear_tokens(),
                Effect::Schedule { timer, after } => self.timers.schedule(timer, self.now + after),
                Effect::Cancel(timer) => {
                    self.timers.cancel(timer);
                }
            }
        }
        calls
    }
}

/// Execute one network call and turn its outcome into a reducer message.
pub async fn perform<T: HttpTransport, S: KeyValueStorage>(
    call: ApiCall,
    client: &ApiClient<T>,
    session: &Session<S>,
) -> Msg {
    match call {
        ApiCall::Authenticate { mode, credentials } => {
            let result = match mode {
                FormMode::SignIn => client.sign_in(&credentials).await,
                FormMode::SignUp => client.sign_up(&credentials).await,
            };
            match result {
                Ok(tokens) => Msg::AuthSucceeded { mode, tokens },
                Err(e) => {
                    log::error!("{} failed: {e}", mode.as_str());
                    Msg::AuthFailed { mode, message: e.to_string() }
                }
            }
        }
        ApiCall::FetchUserDetails => match client.get_user_details(session).await {
            Ok(user) => Msg::UserLoaded(user),
            Err(e) => {
                log::error!("failed to fetch user details: {e}");
                Msg::UserFailed(e.to_string())
            }
        },
    }
}
