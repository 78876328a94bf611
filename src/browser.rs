//! Browser driver that connects the controller to Leptos signals.
//!
//! SYSTEM CONTEXT
//! ==============
//! The driver owns the single [`Controller`], publishes its view state into a
//! `RwSignal` after every change, runs requested API calls on the local
//! executor, and keeps one wake-up pending for the earliest timer deadline.
//! Wake-ups carry a generation number; rescheduling bumps the generation so
//! stale sleeps exit without touching the controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::api::ApiClient;
use crate::net::transport::FetchTransport;
use crate::runtime::{Controller, perform};
use crate::state::session::Session;
use crate::state::update::{ApiCall, Msg};
use crate::state::view::ViewState;
use crate::util::storage::BrowserStorage;

type BrowserController = Controller<FetchTransport, BrowserStorage>;

struct Driver {
    controller: RefCell<BrowserController>,
    view: RwSignal<ViewState>,
    epoch_ms: f64,
    wake_generation: Cell<u64>,
}

/// Start the controller against the real browser and return the callback
/// pages use to report user intent.
pub fn install(config: &AppConfig, view: RwSignal<ViewState>) -> Callback<Msg> {
    log::info!("API URL is {}", config.api_url);
    let client = ApiClient::new(config.api_url.clone(), FetchTransport);
    let session = Session::restore(BrowserStorage);
    let (controller, calls) = Controller::start(client, session);

    let driver = Rc::new(Driver {
        controller: RefCell::new(controller),
        view,
        epoch_ms: js_sys::Date::now(),
        wake_generation: Cell::new(0),
    });
    Driver::after_change(&driver, calls);

    let stored = StoredValue::new_local(driver);
    Callback::new(move |msg: Msg| {
        let driver = stored.get_value();
        Driver::dispatch(&driver, msg);
    })
}

impl Driver {
    /// Wall-clock time since the driver started.
    fn now(&self) -> Duration {
        let elapsed_ms = (js_sys::Date::now() - self.epoch_ms).max(0.0);
        Duration::from_secs_f64(elapsed_ms / 1000.0)
    }

    fn dispatch(driver: &Rc<Self>, msg: Msg) {
        let calls = {
            let mut controller = driver.controller.borrow_mut();
            let mut calls = controller.advance_to(driver.now());
            calls.extend(controller.dispatch(msg));
            calls
        };
        Self::after_change(driver, calls);
    }

    fn wake(driver: &Rc<Self>) {
        let calls = driver.controller.borrow_mut().advance_to(driver.now());
        Self::after_change(driver, calls);
    }

    fn after_change(driver: &Rc<Self>, calls: Vec<ApiCall>) {
        driver.publish();
        Self::schedule_wake(driver);
        for call in calls {
            Self::spawn_call(driver, call);
        }
    }

    fn publish(&self) {
        let state = self.controller.borrow().state().clone();
        if self.view.with_untracked(|current| *current != state) {
            self.view.set(state);
        }
    }

    fn schedule_wake(driver: &Rc<Self>) {
        let generation = driver.wake_generation.get().wrapping_add(1);
        driver.wake_generation.set(generation);

        let Some(deadline) = driver.controller.borrow().next_deadline() else {
            return;
        };
        let delay = deadline.saturating_sub(driver.now());
        let driver = Rc::clone(driver);
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            if driver.wake_generation.get() == generation {
                Self::wake(&driver);
            }
        });
    }

    fn spawn_call(driver: &Rc<Self>, call: ApiCall) {
        let (client, session) = {
            let controller = driver.controller.borrow();
            (controller.client(), controller.session())
        };
        let driver = Rc::clone(driver);
        leptos::task::spawn_local(async move {
            let msg = perform(call, &client, &session).await;
            Self::dispatch(&driver, msg);
        });
    }
}
