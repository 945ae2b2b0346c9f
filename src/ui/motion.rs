//! Motion plumbing shared by the animated sections
//!
//! Provides:
//! - Reactive media queries (`prefers-reduced-motion`, narrow viewport)
//! - [`AnimationLoop`], a `requestAnimationFrame` loop that stops when dropped
//! - [`ScrollTracker`], scroll progress of a pinned section with explicit
//!   `init` / `teardown`

use leptos::html;
use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

use crate::core::steps::clamp_progress;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Viewports below 768px wide
pub const NARROW_VIEWPORT_QUERY: &str = "(max-width: 767px)";

/// Track a CSS media query. Always `false` during server rendering.
pub fn use_media_query(query: &'static str) -> Signal<bool> {
    let matches = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::wasm_bindgen::JsCast;
        use leptos::wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(list) = web_sys::window().and_then(|w| w.match_media(query).ok().flatten())
            else {
                return;
            };
            matches.set(list.matches());

            let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |e: web_sys::MediaQueryListEvent| {
                    matches.set(e.matches());
                },
            );
            let _ =
                list.add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());

            let registration = StoredValue::new_local(Some((list, handler)));
            on_cleanup(move || {
                let _ = registration.try_update_value(|slot| {
                    if let Some((list, handler)) = slot.take() {
                        let _ = list.remove_event_listener_with_callback(
                            "change",
                            handler.as_ref().unchecked_ref(),
                        );
                    }
                });
            });
        });
    }

    #[cfg(feature = "ssr")]
    let _ = query;

    matches.into()
}

pub fn use_reduced_motion() -> Signal<bool> {
    use_media_query(REDUCED_MOTION_QUERY)
}

pub fn use_narrow_viewport() -> Signal<bool> {
    use_media_query(NARROW_VIEWPORT_QUERY)
}

/// `requestAnimationFrame` loop
///
/// The callback receives the milliseconds elapsed since the previous frame
/// (0 on the first one). The pending frame is cancelled and the closure
/// released when the loop is stopped or dropped.
#[cfg(not(feature = "ssr"))]
pub struct AnimationLoop {
    running: std::rc::Rc<std::cell::Cell<bool>>,
    frame: std::rc::Rc<std::cell::Cell<Option<i32>>>,
    callback: FrameSlot,
}

#[cfg(not(feature = "ssr"))]
type FrameSlot = std::rc::Rc<
    std::cell::RefCell<Option<leptos::wasm_bindgen::closure::Closure<dyn FnMut(f64)>>>,
>;

#[cfg(not(feature = "ssr"))]
impl AnimationLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        use leptos::wasm_bindgen::closure::Closure;
        use std::cell::{Cell, RefCell};
        use std::rc::Rc;

        let running = Rc::new(Cell::new(true));
        let frame = Rc::new(Cell::new(None));
        let callback: FrameSlot = Rc::new(RefCell::new(None));

        let tick_running = Rc::clone(&running);
        let tick_frame = Rc::clone(&frame);
        let tick_callback = Rc::clone(&callback);
        let mut last: Option<f64> = None;

        let tick = move |now: f64| {
            if !tick_running.get() {
                return;
            }
            let delta = last.map_or(0.0, |prev| (now - prev).max(0.0));
            last = Some(now);
            on_frame(delta);

            if tick_running.get() {
                tick_frame.set(request_frame(&tick_callback));
            }
        };

        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(tick));
        frame.set(request_frame(&callback));

        Self {
            running,
            frame,
            callback,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Cancel the pending frame; the loop does not resume
    pub fn stop(&self) {
        self.running.set(false);
        if let Some(handle) = self.frame.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(handle);
            }
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure -> slot -> closure cycle
        self.callback.borrow_mut().take();
    }
}

#[cfg(not(feature = "ssr"))]
fn request_frame(callback: &FrameSlot) -> Option<i32> {
    use leptos::wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let slot = callback.borrow();
    let closure = slot.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}

/// Scroll progress of a pinned section.
///
/// 0 while the section top is at or below the viewport top, 1 once its
/// bottom reaches the viewport bottom. A section no taller than the viewport
/// jumps straight from 0 to 1 when its top passes the viewport top.
pub fn pinned_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = height - viewport_height;
    if travel.is_nan() || travel <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    clamp_progress(-top / travel)
}

/// Window scroll/resize listeners feeding a section's pinned progress.
///
/// Owned by the component that created it; call [`ScrollTracker::teardown`]
/// from `on_cleanup`.
#[derive(Default)]
pub struct ScrollTracker {
    listeners: Vec<WindowListenerHandle>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.listeners.is_empty()
    }

    /// Measure `target` now and on every scroll and resize. Re-initializing
    /// replaces the previous listeners.
    pub fn init(&mut self, target: NodeRef<html::Section>, on_progress: impl Fn(f64) + Clone + 'static) {
        self.teardown();

        let update = move || {
            if let Some(progress) = measure_section(target) {
                on_progress(progress);
            }
        };
        update();

        let on_scroll = update.clone();
        self.listeners
            .push(window_event_listener(leptos::ev::scroll, move |_| on_scroll()));
        self.listeners
            .push(window_event_listener(leptos::ev::resize, move |_| update()));
    }

    pub fn teardown(&mut self) {
        for handle in self.listeners.drain(..) {
            handle.remove();
        }
    }
}

impl Drop for ScrollTracker {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn measure_section(target: NodeRef<html::Section>) -> Option<f64> {
    #[cfg(not(feature = "ssr"))]
    {
        let section = target.get_untracked()?;
        let rect = section.get_bounding_client_rect();
        let viewport = web_sys::window()?.inner_height().ok()?.as_f64()?;
        Some(pinned_progress(rect.top(), rect.height(), viewport))
    }
    #[cfg(feature = "ssr")]
    {
        let _ = target;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_progress_before_and_after() {
        // 5 screens tall section in a 800px viewport: 3200px of travel
        assert_eq!(pinned_progress(200.0, 4000.0, 800.0), 0.0);
        assert_eq!(pinned_progress(0.0, 4000.0, 800.0), 0.0);
        assert_eq!(pinned_progress(-1600.0, 4000.0, 800.0), 0.5);
        assert_eq!(pinned_progress(-3200.0, 4000.0, 800.0), 1.0);
        assert_eq!(pinned_progress(-9000.0, 4000.0, 800.0), 1.0);
    }

    #[test]
    fn test_pinned_progress_short_section() {
        assert_eq!(pinned_progress(10.0, 600.0, 800.0), 0.0);
        assert_eq!(pinned_progress(-1.0, 600.0, 800.0), 1.0);
        assert_eq!(pinned_progress(0.0, f64::NAN, 800.0), 1.0);
    }

    #[test]
    fn test_fresh_tracker_is_inactive() {
        let mut tracker = ScrollTracker::new();
        assert!(!tracker.is_active());
        tracker.teardown();
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_queries() {
        assert_eq!(NARROW_VIEWPORT_QUERY, "(max-width: 767px)");
        assert!(REDUCED_MOTION_QUERY.contains("reduce"));
    }
}
