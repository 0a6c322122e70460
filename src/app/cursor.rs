use leptos::prelude::*;

use crate::cursor::CursorState;

const DOT_SIZE: f64 = 12.0;
const DOT_HOVER_SIZE: f64 = 40.0;
const RING_SIZE: f64 = 32.0;

/// Dot plus trailing ring drawn over the native pointer. Hidden on touch
/// devices through the `cursor-overlay` class.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let (state, set_state) = signal(CursorState::default());

    #[cfg(feature = "hydrate")]
    {
        use std::{cell::RefCell, rc::Rc};

        use leptos::ev;
        use wasm_bindgen::JsCast;

        use crate::cursor::{is_interactive, CursorTracker, PointerEvent};

        let tracker = Rc::new(RefCell::new(CursorTracker::new()));
        let apply = move |event: PointerEvent| {
            let mut tracker = tracker.borrow_mut();
            if tracker.handle(event) {
                set_state.set(tracker.state());
            }
        };

        // everything bubbles to the window, so one listener per event type
        // also covers elements inserted after mount
        let moved = {
            let apply = apply.clone();
            window_event_listener(ev::mousemove, move |ev| {
                apply(PointerEvent::Move {
                    x: ev.client_x() as f64,
                    y: ev.client_y() as f64,
                })
            })
        };
        let over = {
            let apply = apply.clone();
            window_event_listener(ev::mouseover, move |ev| {
                if ev.related_target().is_none() {
                    apply(PointerEvent::EnterDocument);
                }
                let interactive = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                    .is_some_and(|el| is_interactive(&el));
                apply(PointerEvent::Over { interactive });
            })
        };
        let out = window_event_listener(ev::mouseout, move |ev| {
            if ev.related_target().is_none() {
                apply(PointerEvent::LeaveDocument);
            }
        });
        on_cleanup(move || {
            moved.remove();
            over.remove();
            out.remove();
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_state;

    let dot_style = move || {
        let s = state.get();
        let size = if s.is_hovering { DOT_HOVER_SIZE } else { DOT_SIZE };
        format!(
            "width:{size}px;height:{size}px;transform:translate3d({}px,{}px,0);opacity:{}",
            s.x - size / 2.0,
            s.y - size / 2.0,
            if s.is_visible { 1.0 } else { 0.0 },
        )
    };
    let ring_style = move || {
        let s = state.get();
        let opacity = if s.is_visible && !s.is_hovering { 0.5 } else { 0.0 };
        format!(
            "width:{RING_SIZE}px;height:{RING_SIZE}px;transform:translate3d({}px,{}px,0);opacity:{opacity}",
            s.x - RING_SIZE / 2.0,
            s.y - RING_SIZE / 2.0,
        )
    };

    view! {
        <div class="cursor-overlay" aria-hidden="true">
            <div class="cursor-dot" style=dot_style></div>
            <div class="cursor-ring" style=ring_style></div>
        </div>
    }
}
