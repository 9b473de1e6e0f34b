use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::AddEventListenerOptions;
use yew::Callback;

use super::inertia::{ScrollInertia, ScrollUpdate, Step, DEBOUNCE_MS};

/// Same monotonic time origin as the timestamps handed to animation-frame
/// callbacks.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

struct DriverState {
    inertia: ScrollInertia,
    debounce: Option<Timeout>,
    frame: Option<AnimationFrame>,
    on_update: Callback<ScrollUpdate>,
}

/// Owns the browser side of the logo animation: the scroll listener, the
/// debounce timer and the animation-frame loop. At most one of each is
/// alive at any time, and `dispose` (or drop) cancels all of them.
pub struct ScrollInertiaDriver {
    state: Rc<RefCell<DriverState>>,
    listener: Option<Closure<dyn Fn()>>,
}

impl ScrollInertiaDriver {
    pub fn new(on_update: Callback<ScrollUpdate>) -> Self {
        let state = DriverState {
            inertia: ScrollInertia::new(window_scroll_y()),
            debounce: None,
            frame: None,
            on_update,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            listener: None,
        }
    }

    pub fn start(&mut self) {
        if self.listener.is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        let weak = Rc::downgrade(&self.state);
        let listener = Closure::<dyn Fn()>::new(move || {
            if let Some(state) = weak.upgrade() {
                on_scroll(&state, window_scroll_y());
            }
        });

        let mut options = AddEventListenerOptions::new();
        options.passive(true);
        if window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                listener.as_ref().unchecked_ref(),
                &options,
            )
            .is_ok()
        {
            debug!("Scroll inertia listening");
            self.listener = Some(listener);
        }
    }

    pub fn dispose(&mut self) {
        if let Some(listener) = self.listener.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "scroll",
                    listener.as_ref().unchecked_ref(),
                );
            }
        }
        let mut state = self.state.borrow_mut();
        state.debounce = None;
        state.frame = None;
        debug!("Scroll inertia disposed while {:?}", state.inertia.phase());
    }
}

impl Drop for ScrollInertiaDriver {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn on_scroll(state: &Rc<RefCell<DriverState>>, scroll_y: f64) {
    let (update, on_update) = {
        let mut s = state.borrow_mut();
        let update = s.inertia.on_scroll(scroll_y);

        // Dropping the handles cancels the pending frame and timer.
        s.frame = None;
        let weak = Rc::downgrade(state);
        s.debounce = Some(Timeout::new(DEBOUNCE_MS, move || start_decay(&weak)));

        (update, s.on_update.clone())
    };
    on_update.emit(update);
}

fn start_decay(weak: &Weak<RefCell<DriverState>>) {
    if let Some(state) = weak.upgrade() {
        {
            let mut s = state.borrow_mut();
            s.inertia.begin_decay(now_ms());
            debug!("Scroll settled, coasting at {:.1}", s.inertia.velocity());
        }
        schedule_frame(&state);
    }
}

fn schedule_frame(state: &Rc<RefCell<DriverState>>) {
    let weak = Rc::downgrade(state);
    let frame = request_animation_frame(move |timestamp| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let (step, update) = {
            let mut s = state.borrow_mut();
            let step = s.inertia.tick(timestamp);
            if let Step::Settled(_) = step {
                s.frame = None;
            }
            (step, s.on_update.clone())
        };
        let is_scrolled = window_scroll_y() > super::inertia::SCROLLED_THRESHOLD_PX;
        update.emit(ScrollUpdate {
            is_scrolled,
            rotation: step.rotation(),
        });
        if let Step::Moving(_) = step {
            schedule_frame(&state);
        }
    });
    state.borrow_mut().frame = Some(frame);
}
