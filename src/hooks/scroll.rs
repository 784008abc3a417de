use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

/// Vertical scroll offset of the page, measured on mount and updated on
/// every scroll event. The listener is removed when the consuming component
/// unmounts. The reported offset is never negative; rubber-band scrolling
/// clamps to zero.
#[hook]
pub fn use_scroll_y() -> f64 {
    let scroll_y = use_state(|| 0.0_f64);

    {
        let scroll_y = scroll_y.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                scroll_y.set(window.scroll_y().unwrap_or(0.0).max(0.0));

                let scroll_callback = {
                    let window = window.clone();
                    let scroll_y = scroll_y.clone();
                    Closure::wrap(Box::new(move || {
                        scroll_y.set(window.scroll_y().unwrap_or(0.0).max(0.0));
                    }) as Box<dyn FnMut()>)
                };

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    *scroll_y
}
