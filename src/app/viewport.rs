//! Viewport width context driving the responsive menu layout.
//!
//! On the server the width comes from configuration (usually unknown). In the
//! browser it is read from `window.innerWidth` and kept current by a resize
//! listener that is removed when the provider unmounts.

use dioxus::prelude::*;

use crate::menu::MenuLayout;

#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct ViewportContext {
    width: Signal<Option<u32>>,
    breakpoint: u32,
}

impl ViewportContext {
    pub fn width(&self) -> Option<u32> {
        (self.width)()
    }

    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    pub fn menu_layout(&self) -> MenuLayout {
        MenuLayout::for_width(self.width(), self.breakpoint)
    }
}

#[cfg(target_arch = "wasm32")]
struct ResizeGuard {
    window: web_sys::Window,
    onresize: Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for ResizeGuard {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.onresize.as_ref().unchecked_ref());
    }
}

#[cfg(target_arch = "wasm32")]
fn inner_width(window: &web_sys::Window) -> Option<u32> {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w.max(0.0) as u32)
}

/// Initialize the viewport provider - call once at app root
pub fn use_viewport_provider(breakpoint: u32, initial_width: Option<u32>) -> ViewportContext {
    let width = use_signal(|| initial_width);

    let ctx = ViewportContext { width, breakpoint };
    use_context_provider(|| ctx);

    #[cfg(target_arch = "wasm32")]
    {
        let guard: Rc<RefCell<Option<ResizeGuard>>> = use_hook(|| Rc::new(RefCell::new(None)));

        use_effect(move || {
            if guard.borrow().is_some() {
                return;
            }
            let Some(window) = web_sys::window() else {
                return;
            };

            let mut current = width;
            current.set(inner_width(&window));

            let onresize = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(window) = web_sys::window() {
                    let mut current = width;
                    current.set(inner_width(&window));
                }
            }) as Box<dyn FnMut(_)>);

            if window
                .add_event_listener_with_callback("resize", onresize.as_ref().unchecked_ref())
                .is_err()
            {
                tracing::warn!("Failed to attach resize listener");
                return;
            }

            *guard.borrow_mut() = Some(ResizeGuard { window, onresize });
        });
    }

    ctx
}

/// Get the viewport context - use in any component below the provider
pub fn use_viewport() -> ViewportContext {
    use_context::<ViewportContext>()
}
