mod chrome;
mod contact;
mod dom;
mod projects;
mod sections;

use std::rc::Rc;

use web_sys::window;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::scroll::{back_to_top_visible, header_scrolled, section_in_view, SectionId};
use crate::theme::{Theme, ThemeStore};

use chrome::{BackToTop, Header, ThemeToggle};
use contact::{Contact, ContactFormSection};
use dom::{use_window_scroll, LocalStorage};
use projects::Projects;
use sections::{About, Achievements, Hero, Skills};

#[derive(Properties, PartialEq)]
struct AppProps {
    config: SiteConfig,
    content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let theme = use_state_eq(|| ThemeStore::new(LocalStorage).load());
    let active = use_state_eq(SectionId::default);
    let scrolled = use_state_eq(|| false);
    let show_back_to_top = use_state_eq(|| false);

    use_effect_with(*theme, |theme| {
        dom::apply_theme(*theme);
        || ()
    });

    {
        let active = active.clone();
        let scrolled = scrolled.clone();
        let show_back_to_top = show_back_to_top.clone();
        use_window_scroll(Callback::from(move |scroll_y: f64| {
            scrolled.set(header_scrolled(scroll_y));
            show_back_to_top.set(back_to_top_visible(scroll_y));
            if let Some(section) = section_in_view(dom::section_span) {
                active.set(section);
            }
        }));
    }

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_: ()| {
            let next = ThemeStore::new(LocalStorage).toggle(*theme);
            theme.set(next);
        })
    };

    let on_navigate = {
        let active = active.clone();
        Callback::from(move |section: SectionId| match dom::scroll_to_section(section) {
            Ok(section) => {
                log::debug!("navigating to #{}", section.id());
                active.set(section);
            }
            Err(err) => log::debug!("navigation skipped: {err}"),
        })
    };

    let content = props.content.clone();

    html! {
        <ContextProvider<Theme> context={*theme}>
            <div class={classes!("app", theme.class())}>
                <Header
                    brand={content.brand.clone()}
                    active={*active}
                    scrolled={*scrolled}
                    {on_navigate}
                />
                <main>
                    <Hero content={content.clone()} />
                    <About content={content.clone()} />
                    <Skills content={content.clone()} config={props.config.clone()} />
                    <Achievements content={content.clone()} />
                    <Projects content={content.clone()} />
                    <ContactFormSection />
                    <Contact content={content.clone()} />
                </main>
                <ThemeToggle {on_toggle} />
                <BackToTop show={*show_back_to_top} />
            </div>
        </ContextProvider<Theme>>
    }
}

pub fn run() {
    let config = SiteConfig::from_build_env();
    if let Some(level) = config.log_level.to_level() {
        wasm_logger::init(wasm_logger::Config::new(level));
    }

    let content = SiteContent::embedded().unwrap_or_else(|err| {
        log::error!("{err}");
        SiteContent::default()
    });

    yew::Renderer::<App>::with_root_and_props(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
        AppProps {
            config,
            content: Rc::new(content),
        },
    )
    .render();
}
