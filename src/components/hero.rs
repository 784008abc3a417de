use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::hooks::screen_size::{use_screen_size, Breakpoint};
use crate::hooks::scroll::use_scroll_y;
use crate::parallax::{section_height, Direction, ParallaxItems, Transform};

/// Interpolation ranges for the hero, keyed by breakpoint. All windows are
/// expressed in scroll pixels; outputs carry the unit named in the field.
#[derive(Clone, Copy, Debug)]
pub struct HeroTuning {
    pub section_height: f64,
    pub container_width_pct: Transform,
    pub container_height_vh: Transform,
    pub title_y: Transform,
    pub title_font_rem: Transform,
    pub title_shadow_blur: Transform,
    pub title_shadow_alpha: Transform,
    pub image_y: Transform,
    pub image_scale: Transform,
    pub hint_opacity: Transform,
}

impl HeroTuning {
    pub fn for_breakpoint(breakpoint: Breakpoint) -> Self {
        let h = section_height(breakpoint);
        let over = [0.0, h];
        let image_window = [0.4 * h, h];
        let hint_window = [0.4 * h, 0.8 * h];
        match breakpoint {
            Breakpoint::Desktop => Self {
                section_height: h,
                container_width_pct: Transform::new(over, [30.0, 100.0]),
                container_height_vh: Transform::new(over, [75.0, 80.0]),
                title_y: Transform::new(over, [-100.0, 0.0]),
                title_font_rem: Transform::new(over, [4.0, 7.0]),
                title_shadow_blur: Transform::new(over, [0.0, 10.0]),
                title_shadow_alpha: Transform::new(over, [0.0, 0.5]),
                image_y: Transform::new(image_window, [-10.0, 0.0]),
                image_scale: Transform::new(image_window, [0.92, 1.0]),
                hint_opacity: Transform::new(hint_window, [1.0, 0.0]),
            },
            Breakpoint::Mobile => Self {
                section_height: h,
                container_width_pct: Transform::new(over, [60.0, 100.0]),
                container_height_vh: Transform::new(over, [70.0, 78.0]),
                title_y: Transform::new(over, [-40.0, 0.0]),
                title_font_rem: Transform::new(over, [1.7, 1.8]),
                title_shadow_blur: Transform::new(over, [0.0, 6.0]),
                title_shadow_alpha: Transform::new(over, [0.0, 0.5]),
                image_y: Transform::new(image_window, [-6.0, 0.0]),
                image_scale: Transform::new(image_window, [0.95, 1.0]),
                hint_opacity: Transform::new(hint_window, [1.0, 0.0]),
            },
            Breakpoint::SuperMobile => Self {
                section_height: h,
                container_width_pct: Transform::new(over, [70.0, 100.0]),
                container_height_vh: Transform::new(over, [68.0, 76.0]),
                title_y: Transform::new(over, [-30.0, 0.0]),
                title_font_rem: Transform::new(over, [1.5, 1.6]),
                title_shadow_blur: Transform::new(over, [0.0, 6.0]),
                title_shadow_alpha: Transform::new(over, [0.0, 0.5]),
                image_y: Transform::new(image_window, [-6.0, 0.0]),
                image_scale: Transform::new(image_window, [0.95, 1.0]),
                hint_opacity: Transform::new(hint_window, [1.0, 0.0]),
            },
        }
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let screen = use_screen_size();
    let tuning = HeroTuning::for_breakpoint(screen.breakpoint());

    html! {
        <section
            class="hero"
            style={format!("height: calc({}px + 100vh);", tuning.section_height)}
        >
            <style>{HERO_CSS}</style>
            <HeroStage />
            <div class="hero-bottom-fade"></div>
        </section>
    }
}

#[function_component(HeroStage)]
fn hero_stage() -> Html {
    let screen = use_screen_size();
    let scroll_y = use_scroll_y();

    let tuning = HeroTuning::for_breakpoint(screen.breakpoint());
    let width = format!("{}%", tuning.container_width_pct.at(scroll_y));
    let height = format!("{}vh", tuning.container_height_vh.at(scroll_y));

    let title_style = format!(
        "transform: translateY({}px); font-size: {}rem; text-shadow: 0px 0px {}px 0px rgba(0, 0, 0, {});",
        tuning.title_y.at(scroll_y),
        tuning.title_font_rem.at(scroll_y),
        tuning.title_shadow_blur.at(scroll_y),
        tuning.title_shadow_alpha.at(scroll_y),
    );

    let image_style = format!(
        "transform: translateY({}px) scale({});",
        tuning.image_y.at(scroll_y),
        tuning.image_scale.at(scroll_y),
    );

    // Nothing scroll-driven is shown until the viewport has been measured.
    let stage_style = if screen.is_loaded { "" } else { "opacity: 0;" };

    let hint_opacity = if screen.is_loaded {
        tuning.hint_opacity.at(scroll_y)
    } else {
        0.0
    };

    html! {
        <div class="hero-stage" style={stage_style}>
            <AnimatedContainer class="hero-panel-base" width={width.clone()} height={height.clone()} />
            <AnimatedContainer class="hero-panel-glow" width={width.clone()} height={height.clone()} />
            <AnimatedContainer class="hero-panel-pattern" width={width} height={height} />

            <h1 class="hero-title" style={title_style}>{"Brewed to perfection"}</h1>

            <div
                class={classes!("center-image", screen.is_mobile.then(|| "compact"))}
                style={image_style}
            ></div>

            <FeaturePanel />
            <PromoPanel />
            <ScrollHint opacity={hint_opacity} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct AnimatedContainerProps {
    #[prop_or_default]
    pub class: Classes,
    pub width: String,
    pub height: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnimatedContainer)]
fn animated_container(props: &AnimatedContainerProps) -> Html {
    html! {
        <div
            class={classes!("hero-panel", props.class.clone())}
            style={format!("width: {}; height: {};", props.width, props.height)}
        >
            { for props.children.iter() }
        </div>
    }
}

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "/assets/icons/coffee-bean.svg",
        title: "Premium Coffee Beans",
        description: "Crafted from the finest, ethically sourced coffee beans for a superior taste.",
    },
    Feature {
        icon: "/assets/icons/plant.svg",
        title: "Plant-Based Milk",
        description: "Delight in creamy, dairy-free options made from almond, oat, or soy milk.",
    },
    Feature {
        icon: "/assets/icons/no-sugar.svg",
        title: "No sugar added",
        description: "Pure, natural flavors of your favorite brews without any added sugar.",
    },
];

#[function_component(FeaturePanel)]
fn feature_panel() -> Html {
    let screen = use_screen_size();
    let scroll_y = use_scroll_y();

    let h = section_height(screen.breakpoint());
    let frame = ParallaxItems::new(Direction::Left, h).sample(scroll_y);
    let opacity = if screen.is_loaded { frame.opacity } else { 0.0 };
    let offsets = [frame.x1, frame.x2, frame.x3];

    html! {
        <div class="feature-panel" style={format!("opacity: {};", opacity)}>
            <ul class="feature-list">
                { for FEATURES.iter().zip(offsets).map(|(feature, x)| html! {
                    <li
                        class="feature-item"
                        style={format!("transform: translateX({}px);", x)}
                    >
                        <img class="feature-icon" src={feature.icon} alt="" />
                        <div class="feature-copy">
                            <p class="feature-title">{feature.title}</p>
                            <p class="feature-description">{feature.description}</p>
                        </div>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(PromoPanel)]
fn promo_panel() -> Html {
    let screen = use_screen_size();
    let scroll_y = use_scroll_y();

    let h = section_height(screen.breakpoint());
    let frame = ParallaxItems::new(Direction::Right, h).sample(scroll_y);
    let wrapper_opacity = if screen.is_loaded {
        frame.wrapper_opacity
    } else {
        0.0
    };

    let on_order = Callback::from(|_| {
        info!("Order button clicked");
    });

    html! {
        <div class="promo-panel" style={format!("opacity: {};", wrapper_opacity)}>
            <h2
                class="promo-heading"
                style={format!("transform: translateX({}px); opacity: {};", frame.x1, frame.opacity)}
            >
                {"Vietnamese Iced Coffee"}
                <br />
                {"with Almond Milk"}
            </h2>
            <div
                class="promo-prices"
                style={format!("transform: translateX({}px); opacity: {};", frame.x2, frame.opacity)}
            >
                <p class="promo-price-old">{"$13.99"}</p>
                <p class="promo-price">{"$9.99"}</p>
            </div>
            <button
                class="promo-cta"
                aria-label="Order now"
                onclick={on_order}
                style={format!("transform: translateX({}px); opacity: {};", frame.x3, frame.opacity)}
            >
                {"Order now"}
                <img class="promo-cta-arrow" src="/assets/icons/arrow-right.svg" alt="" />
            </button>
        </div>
    }
}

const BOUNCE_INTERVAL_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
struct ScrollHintProps {
    pub opacity: f64,
}

#[function_component(ScrollHint)]
fn scroll_hint(props: &ScrollHintProps) -> Html {
    let raised = use_state(|| false);

    {
        let raised = raised.clone();
        let phase = *raised;
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(BOUNCE_INTERVAL_MS, move || {
                    raised.set(!phase);
                });
                move || {
                    timeout.cancel();
                }
            },
            phase,
        );
    }

    let y = if *raised { 6.0 } else { 0.0 };
    let pulse = if *raised { 0.6 } else { 1.0 };

    html! {
        <div class="scroll-hint" style={format!("opacity: {};", props.opacity)}>
            <div
                class="scroll-hint-bounce"
                style={format!("transform: translateY({}px); opacity: {};", y, pulse)}
            >
                <img src="/assets/icons/arrow-down.svg" alt="" />
                <p>{"and has its own story"}</p>
            </div>
        </div>
    }
}

const HERO_CSS: &str = r#"
    .hero {
        position: relative;
        width: 100%;
        padding: 0 1.5rem;
        display: flex;
        justify-content: center;
    }
    .hero-stage {
        position: sticky;
        top: 6rem;
        z-index: 10;
        width: 100%;
        height: 80vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: flex-start;
        padding-top: 1rem;
    }
    .hero-panel {
        position: absolute;
        left: 50%;
        transform: translateX(-50%);
        border-radius: 0.75rem;
    }
    .hero-panel-base {
        z-index: 10;
        background: var(--beanlight-900);
    }
    .hero-panel-glow {
        z-index: 20;
        background: radial-gradient(
            ellipse at 50% 75%,
            var(--beanlight-200),
            var(--beanlight-400),
            var(--beanlight-900)
        );
        opacity: 0.4;
    }
    .hero-panel-pattern {
        z-index: 20;
        background-image: var(--geometric-pattern);
        background-repeat: repeat;
        background-position: center;
        opacity: 0.4;
    }
    .hero-title {
        font-family: var(--font-display);
        font-weight: 400;
        letter-spacing: -0.025em;
        color: var(--beanlight-100);
        z-index: 30;
        white-space: nowrap;
    }
    .center-image {
        z-index: 30;
        width: 60vh;
        height: 60vh;
        background-image: url('/assets/pouring-coffee.png');
        background-position: center;
        background-size: contain;
        background-repeat: no-repeat;
    }
    .center-image.compact {
        width: 40vh;
        height: 40vh;
    }
    .feature-panel {
        position: absolute;
        top: 50%;
        left: 8%;
        z-index: 40;
        max-width: 400px;
    }
    .feature-list {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }
    .feature-item {
        display: flex;
        align-items: center;
        gap: 1rem;
    }
    .feature-icon {
        width: 3rem;
        height: 3rem;
    }
    .feature-title {
        font-size: 1rem;
        font-weight: 500;
        letter-spacing: -0.05em;
        color: var(--beanlight-50);
    }
    .feature-description {
        font-size: 12px;
        font-weight: 100;
        letter-spacing: -0.05em;
        color: var(--beanlight-100);
    }
    .promo-panel {
        position: absolute;
        top: 50%;
        right: 6%;
        z-index: 40;
        display: flex;
        flex-direction: column;
        align-items: flex-start;
        gap: 0.75rem;
        max-width: 450px;
    }
    .promo-heading {
        font-size: 2.2rem;
        font-weight: 300;
        letter-spacing: -0.025em;
        line-height: 1.2;
        color: var(--beanlight-50);
    }
    .promo-prices {
        display: flex;
        align-items: baseline;
        gap: 1rem;
        margin-bottom: 0.5rem;
    }
    .promo-price-old {
        font-size: 1.25rem;
        font-weight: 300;
        text-decoration: line-through;
        color: var(--beanlight-300);
    }
    .promo-price {
        font-size: 2.5rem;
        font-weight: 700;
        color: var(--beanlight-50);
    }
    .promo-cta {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        font-size: 1.75rem;
        font-weight: 600;
        letter-spacing: -0.025em;
        color: var(--beanlight-50);
        transition: color 0.3s;
    }
    .promo-cta:hover {
        color: var(--beanlight-100);
    }
    .promo-cta-arrow {
        width: 1.5rem;
        height: 1.5rem;
        transition: transform 0.3s;
    }
    .promo-cta:hover .promo-cta-arrow {
        transform: translateX(0.5rem);
    }
    .scroll-hint {
        position: absolute;
        bottom: -40px;
        left: 0;
        right: 0;
        display: flex;
        justify-content: center;
    }
    .scroll-hint-bounce {
        display: flex;
        flex-direction: column;
        align-items: center;
        transition: transform 1s ease-in-out, opacity 1s ease-in-out;
    }
    .scroll-hint-bounce img {
        width: 1.5rem;
        height: 1.5rem;
    }
    .scroll-hint-bounce p {
        font-size: 0.625rem;
        font-weight: 300;
        letter-spacing: -0.025em;
        color: var(--beanlight-600);
    }
    .hero-bottom-fade {
        position: absolute;
        bottom: 0;
        left: 0;
        right: 0;
        height: 24rem;
        background: linear-gradient(to bottom, transparent, var(--beanlight-1000));
    }
    @media (max-width: 768px) {
        .hero {
            padding: 0 1rem;
        }
        .feature-panel {
            left: 1rem;
            top: 62%;
            max-width: 260px;
        }
        .feature-list {
            gap: 1rem;
        }
        .feature-icon {
            width: 2rem;
            height: 2rem;
        }
        .promo-panel {
            right: 1rem;
            top: 18%;
            max-width: 260px;
        }
        .promo-heading {
            font-size: 1.3rem;
        }
        .promo-price {
            font-size: 1.6rem;
        }
        .promo-cta {
            font-size: 1.2rem;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn desktop_title_rests_at_four_rem() {
        let tuning = HeroTuning::for_breakpoint(Breakpoint::Desktop);
        assert!(approx(tuning.title_font_rem.at(0.0), 4.0));
    }

    #[test]
    fn desktop_title_grows_to_seven_rem() {
        let tuning = HeroTuning::for_breakpoint(Breakpoint::Desktop);
        assert!(approx(tuning.title_font_rem.at(900.0), 7.0));
        assert!(approx(tuning.title_font_rem.at(2_000.0), 7.0));
    }

    #[test]
    fn mobile_title_stays_within_its_table() {
        let tuning = HeroTuning::for_breakpoint(Breakpoint::Mobile);
        for offset in [0.0, 100.0, 350.0, 700.0, 1_500.0] {
            let size = tuning.title_font_rem.at(offset);
            assert!((1.7..=1.8).contains(&size));
        }
    }

    #[test]
    fn resize_mid_scroll_swaps_tables_without_touching_the_offset() {
        use crate::hooks::screen_size::classify;

        let offset = 450.0;
        let before = HeroTuning::for_breakpoint(classify(1024.0, 768.0).breakpoint());
        let after = HeroTuning::for_breakpoint(classify(400.0, 800.0).breakpoint());
        assert!(before.title_font_rem.at(offset) > after.title_font_rem.at(offset));
        assert!(!approx(
            before.container_width_pct.at(offset),
            after.container_width_pct.at(offset),
        ));
        assert!(!approx(before.section_height, after.section_height));
    }

    #[test]
    fn container_spans_full_width_at_section_end() {
        for breakpoint in [Breakpoint::Desktop, Breakpoint::Mobile, Breakpoint::SuperMobile] {
            let tuning = HeroTuning::for_breakpoint(breakpoint);
            assert!(approx(
                tuning.container_width_pct.at(tuning.section_height),
                100.0,
            ));
        }
    }

    #[test]
    fn center_image_settles_at_section_end() {
        let tuning = HeroTuning::for_breakpoint(Breakpoint::Desktop);
        assert!(approx(tuning.image_y.at(0.0), -10.0));
        assert!(approx(tuning.image_y.at(900.0), 0.0));
        assert!(approx(tuning.image_scale.at(0.0), 0.92));
        assert!(approx(tuning.image_scale.at(900.0), 1.0));
    }

    #[test]
    fn scroll_hint_fades_out_before_section_end() {
        let tuning = HeroTuning::for_breakpoint(Breakpoint::Desktop);
        let h = tuning.section_height;
        assert!(approx(tuning.hint_opacity.at(0.0), 1.0));
        assert!(approx(tuning.hint_opacity.at(0.4 * h), 1.0));
        assert!(approx(tuning.hint_opacity.at(0.8 * h), 0.0));
        assert!(approx(tuning.hint_opacity.at(h), 0.0));
    }

    #[test]
    fn title_shadow_deepens_with_scroll() {
        let tuning = HeroTuning::for_breakpoint(Breakpoint::Desktop);
        assert!(approx(tuning.title_shadow_alpha.at(0.0), 0.0));
        assert!(approx(tuning.title_shadow_blur.at(0.0), 0.0));
        assert!(approx(tuning.title_shadow_alpha.at(900.0), 0.5));
        assert!(approx(tuning.title_shadow_blur.at(900.0), 10.0));
    }
}
