use yew::prelude::*;

use crate::hooks::screen_size::use_screen_size;
use crate::hooks::scroll::use_scroll_y;
use crate::parallax::{section_height, Transform};

const LINKS: [(&str, &str); 3] = [
    ("order online", "#"),
    ("menu", "#"),
    ("contact", "#"),
];

/// Nav opacity ramps from 0 to 1 over the last 40% of the hero section.
fn nav_opacity(scroll_y: f64, section_height: f64) -> f64 {
    Transform::new([0.6 * section_height, section_height], [0.0, 1.0]).at(scroll_y)
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let screen = use_screen_size();
    let scroll_y = use_scroll_y();

    let opacity = if screen.is_loaded {
        nav_opacity(scroll_y, section_height(screen.breakpoint()))
    } else {
        0.0
    };

    html! {
        <nav class="top-nav" style={format!("opacity: {};", opacity)}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem;
                        color: #fff;
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .nav-logo img {
                        width: 2rem;
                        height: 2rem;
                    }
                    .nav-logo span {
                        font-family: var(--font-display);
                        font-size: 1.5rem;
                        font-weight: 700;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 3rem;
                    }
                    .nav-link {
                        font-weight: 200;
                        color: var(--beanlight-50);
                    }
                    .nav-link:hover {
                        color: var(--beanlight-200);
                    }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <img src="/assets/logo.svg" alt="beanlight logo" />
                    <span>{"beanlight"}</span>
                </div>
                {
                    if !screen.is_mobile {
                        html! {
                            <div class="nav-links">
                                { for LINKS.iter().map(|(text, href)| html! {
                                    <a class="nav-link" href={*href}>{*text}</a>
                                }) }
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn nav_is_hidden_at_the_top_of_the_page() {
        assert!(approx(nav_opacity(0.0, 900.0), 0.0));
    }

    #[test]
    fn nav_stays_hidden_before_its_ramp_starts() {
        // The ramp starts at 540 on desktop, so the midpoint still clamps.
        assert!(approx(nav_opacity(450.0, 900.0), 0.0));
        assert!(nav_opacity(0.6 * 900.0, 900.0).abs() < 1e-9);
    }

    #[test]
    fn nav_fades_in_over_the_last_forty_percent() {
        assert!(approx(nav_opacity(720.0, 900.0), 0.5));
        assert!(approx(nav_opacity(900.0, 900.0), 1.0));
    }

    #[test]
    fn nav_holds_full_opacity_past_the_section() {
        assert!(approx(nav_opacity(5_000.0, 900.0), 1.0));
    }
}
