use yew::prelude::*;

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const STEPS: [Step; 3] = [
    Step {
        icon: "/assets/icons/coffee-bean.svg",
        title: "Sourcing",
        description: "Small farms, single origins. We pay growers directly and visit every harvest.",
    },
    Step {
        icon: "/assets/icons/roaster.svg",
        title: "Roasting",
        description: "Roasted in small batches, never more than a week before it reaches your cup.",
    },
    Step {
        icon: "/assets/icons/cup.svg",
        title: "Brewing",
        description: "Slow-poured over ice with almond milk, exactly the way it is served in Saigon.",
    },
];

#[function_component(HowWeMakeCoffee)]
pub fn how_we_make_coffee() -> Html {
    html! {
        <section class="how-we-make-coffee">
            <style>
                {r#"
                    .how-we-make-coffee {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 6rem 1.5rem 8rem;
                        text-align: center;
                    }
                    .how-we-make-coffee h2 {
                        font-family: var(--font-display);
                        font-size: 2.5rem;
                        font-weight: 400;
                        color: var(--beanlight-100);
                        margin-bottom: 3rem;
                    }
                    .process-steps {
                        display: flex;
                        justify-content: center;
                        gap: 3rem;
                        flex-wrap: wrap;
                    }
                    .process-step {
                        flex: 1;
                        min-width: 220px;
                        max-width: 320px;
                        padding: 2rem;
                        border-radius: 0.75rem;
                        background: var(--beanlight-900);
                    }
                    .process-step img {
                        width: 3rem;
                        height: 3rem;
                        margin-bottom: 1rem;
                    }
                    .process-step h3 {
                        font-size: 1.2rem;
                        font-weight: 500;
                        color: var(--beanlight-50);
                        margin-bottom: 0.5rem;
                    }
                    .process-step p {
                        font-size: 0.9rem;
                        font-weight: 200;
                        line-height: 1.5;
                        color: var(--beanlight-200);
                    }
                "#}
            </style>
            <h2>{"How we make coffee"}</h2>
            <div class="process-steps">
                { for STEPS.iter().map(|step| html! {
                    <div class="process-step">
                        <img src={step.icon} alt="" />
                        <h3>{step.title}</h3>
                        <p>{step.description}</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
