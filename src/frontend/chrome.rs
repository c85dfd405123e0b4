use yew::prelude::*;

use crate::content::Brand;
use crate::scroll::{mobile_nav_items, SectionId, NAV_ITEMS};
use crate::theme::Theme;

use super::dom;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: Brand,
    pub active: SectionId,
    pub scrolled: bool,
    pub on_navigate: Callback<SectionId>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    let nav_button = |section: SectionId| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };

    html! {
        <header class={classes!("header", props.scrolled.then_some("scrolled"), theme.class())}>
            <nav class="nav-container" aria-label="Sections">
                <div class="nav-brand">
                    <div class="brand-icon" aria-hidden="true">{props.brand.monogram.clone()}</div>
                    <span class="brand-text">{props.brand.name.clone()}</span>
                </div>

                <div class="nav-menu">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <button
                            key={item.section.id()}
                            type="button"
                            class={classes!("nav-item", (props.active == item.section).then_some("active"))}
                            onclick={nav_button(item.section)}
                        >
                            <span class="nav-icon" aria-hidden="true">{item.icon}</span>
                            <span>{item.label}</span>
                        </button>
                    }) }
                </div>

                <div class="mobile-nav">
                    { for mobile_nav_items().map(|item| html! {
                        <button
                            key={item.section.id()}
                            type="button"
                            class={classes!("mobile-nav-item", (props.active == item.section).then_some("active"))}
                            aria-label={item.label}
                            onclick={nav_button(item.section)}
                        >
                            <span aria-hidden="true">{item.icon}</span>
                        </button>
                    }) }
                </div>
            </nav>
        </header>
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    html! {
        <button
            class={classes!("theme-toggle", theme.class())}
            type="button"
            aria-label={theme.toggle_label()}
            aria-pressed={theme.is_dark().to_string()}
            {onclick}
        >
            <span aria-hidden="true">{theme.toggle_icon()}</span>
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackToTopProps {
    pub show: bool,
}

#[function_component(BackToTop)]
pub fn back_to_top(props: &BackToTopProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();

    html! {
        <button
            class={classes!("back-to-top", props.show.then_some("show"), theme.class())}
            type="button"
            aria-label="Back to top"
            onclick={Callback::from(|_: MouseEvent| dom::scroll_to_top())}
        >
            <span aria-hidden="true">{"↑"}</span>
        </button>
    }
}
