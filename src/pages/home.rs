use yew::prelude::*;

use crate::components::hero::Hero;
use crate::components::how_we_make_coffee::HowWeMakeCoffee;

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                    if let Some(document) = window.document() {
                        document.set_title("beanlight - brewed to perfection");
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <main class="landing-page">
            <Hero />
            <HowWeMakeCoffee />
        </main>
    }
}
