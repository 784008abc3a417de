use stylist::yew::Global;
use yew::prelude::*;

// Brand tokens and base page styles. The palette and the repeating
// geometric pattern are exposed as CSS custom properties so component
// style blocks can reference them by name.
const GLOBAL_CSS: &str = r#"
    :root {
        --beanlight-50: #f3f6f3;
        --beanlight-100: #e2eae1;
        --beanlight-200: #c5d5c6;
        --beanlight-300: #9db89f;
        --beanlight-400: #76987a;
        --beanlight-500: #527758;
        --beanlight-600: #3e5d44;
        --beanlight-700: #314b37;
        --beanlight-800: #293c2d;
        --beanlight-900: #223226;
        --beanlight-950: #121c14;
        --beanlight-1000: #0D120E;
        --geometric-pattern: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='250' height='250' viewBox='0 0 20 20'%3E%3Cg fill-opacity='0.17'%3E%3Cpolygon fill='%230C4832' points='20 10 10 0 0 0 20 20'/%3E%3Cpolygon fill='%230C4832' points='0 10 0 20 10 20'/%3E%3C/g%3E%3C/svg%3E");
        --font-display: 'Hedvig Letters Serif', serif;
        --font-body: 'Be Vietnam Pro', sans-serif;
    }

    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    body {
        background: linear-gradient(to bottom, var(--beanlight-950), var(--beanlight-1000));
        color: var(--beanlight-50);
        font-family: var(--font-body);
        overflow-x: hidden;
    }

    button {
        background: none;
        border: none;
        cursor: pointer;
        color: inherit;
        font-family: inherit;
    }

    a {
        color: inherit;
        text-decoration: none;
    }

    ul {
        list-style: none;
    }
"#;

#[function_component(GlobalStyle)]
pub fn global_style() -> Html {
    html! {
        <Global css={GLOBAL_CSS} />
    }
}
