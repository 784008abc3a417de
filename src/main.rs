use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod parallax;
mod theme;
mod hooks {
    pub mod screen_size;
    pub mod scroll;
}
mod components {
    pub mod hero;
    pub mod how_we_make_coffee;
    pub mod navbar;
}
mod pages {
    pub mod home;
}

use components::navbar::Navbar;
use pages::home::Home;
use theme::GlobalStyle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <GlobalStyle />
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
