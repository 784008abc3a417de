use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::config;

/// Current viewport measurement plus derived breakpoint flags.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct ScreenSize {
    pub width: f64,
    pub height: f64,
    pub is_mobile: bool,
    pub is_super_mobile: bool,
    /// False until the first measurement has run. Consumers keep
    /// scroll-driven content invisible while this is false so the page never
    /// flashes a layout sized for an assumed viewport.
    pub is_loaded: bool,
}

/// Layout class selected by viewport width.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Breakpoint {
    Desktop,
    Mobile,
    SuperMobile,
}

impl ScreenSize {
    pub fn breakpoint(&self) -> Breakpoint {
        if self.is_super_mobile {
            Breakpoint::SuperMobile
        } else if self.is_mobile {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }
}

/// Classify a measured viewport. A super-mobile viewport is always also a
/// mobile one since its threshold sits below the mobile threshold.
pub fn classify(width: f64, height: f64) -> ScreenSize {
    ScreenSize {
        width,
        height,
        is_mobile: width < config::MOBILE_MAX_WIDTH,
        is_super_mobile: width < config::SUPER_MOBILE_MAX_WIDTH,
        is_loaded: true,
    }
}

fn measure(window: &web_sys::Window) -> ScreenSize {
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    classify(width, height)
}

/// Reports the current viewport classification, re-measured on every resize
/// event and once on mount. The resize listener is removed when the
/// consuming component unmounts.
#[hook]
pub fn use_screen_size() -> ScreenSize {
    let size = use_state(ScreenSize::default);

    {
        let size = size.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let initial = measure(&window);
                info!("viewport measured at {}x{}", initial.width, initial.height);
                size.set(initial);

                let resize_callback = {
                    let window = window.clone();
                    let size = size.clone();
                    Closure::wrap(Box::new(move || {
                        size.set(measure(&window));
                    }) as Box<dyn FnMut()>)
                };

                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    *size
}
