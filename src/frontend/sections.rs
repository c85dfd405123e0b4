use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::{stagger_delay, SiteConfig, REVEAL_THRESHOLD, TYPEWRITER_TICK_MS};
use crate::content::SiteContent;
use crate::motion::{should_tick, Reveal, Typewriter};
use crate::scroll::SectionId;
use crate::theme::Theme;

use super::dom::{self, use_reveal};

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub content: Rc<SiteContent>,
}

#[derive(Properties, PartialEq)]
pub struct SkillsProps {
    pub content: Rc<SiteContent>,
    pub config: SiteConfig,
}

#[derive(PartialEq)]
struct TypewriterState(Typewriter);

impl Reducible for TypewriterState {
    type Action = ();

    fn reduce(self: Rc<Self>, _tick: ()) -> Rc<Self> {
        let mut writer = self.0.clone();
        writer.tick();
        Rc::new(Self(writer))
    }
}

fn card_glyph(icon: &str) -> &'static str {
    match icon {
        "code" => "</>",
        "database" => "⛁",
        "globe" => "◍",
        _ => "•",
    }
}

#[derive(Properties, PartialEq)]
pub(super) struct SectionHeaderProps {
    pub title: AttrValue,
    pub reveal: Reveal,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeader)]
pub(super) fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.reveal.class())}>
            <h2 class="section-title">{props.title.clone()}</h2>
            <div class="section-divider"></div>
            if let Some(subtitle) = props.subtitle.clone() {
                <p class="section-subtitle">{subtitle}</p>
            }
        </div>
    }
}

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (node, reveal) = use_reveal(REVEAL_THRESHOLD);
    let hero = &props.content.hero;
    let writer = {
        let tagline = hero.tagline.clone();
        use_reducer(move || TypewriterState(Typewriter::new(tagline)))
    };
    let finished = writer.0.is_finished();

    {
        let ticker = writer.dispatcher();
        use_effect_with((reveal, finished), move |&(reveal, finished)| {
            let interval = should_tick(reveal, finished)
                .then(|| Interval::new(TYPEWRITER_TICK_MS, move || ticker.dispatch(())));
            move || drop(interval)
        });
    }

    let to_projects = Callback::from(|_: MouseEvent| dom::jump_to(SectionId::Projects));
    let to_contact = Callback::from(|_: MouseEvent| dom::jump_to(SectionId::Contact));

    html! {
        <section ref={node} id={SectionId::Home.id()} class={classes!("hero", theme.class())}>
            <div class="hero-content">
                <div class={classes!("hero-text", reveal.class())}>
                    <h1 class="hero-title">
                        {"Hello, I'm "}<span class="gradient-text">{hero.first_name.clone()}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {writer.0.visible().to_string()}<span class="cursor">{"|"}</span>
                    </p>
                    <p class="hero-description">{hero.description.clone()}</p>
                    <div class="hero-buttons">
                        <button type="button" class="btn-primary" onclick={to_projects.clone()}>
                            {"View My Work"}
                            <span aria-hidden="true">{" ↗"}</span>
                        </button>
                        <button type="button" class="btn-secondary" onclick={to_contact}>
                            {"Get In Touch"}
                        </button>
                    </div>
                </div>
                <div class={classes!("hero-visual", reveal.class())}>
                    <div class="floating-elements">
                        { for hero.floating_cards.iter().map(|card| html! {
                            <div key={card.label.clone()} class="floating-card">
                                <span class="floating-icon" aria-hidden="true">{card_glyph(&card.icon)}</span>
                                <span>{card.label.clone()}</span>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
            <button type="button" class="scroll-indicator" aria-label="Scroll to projects" onclick={to_projects}>
                <span aria-hidden="true">{"⌄"}</span>
            </button>
        </section>
    }
}

#[function_component(About)]
pub fn about(props: &SectionProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (node, reveal) = use_reveal(REVEAL_THRESHOLD);
    let about = &props.content.about;

    html! {
        <section ref={node} id={SectionId::About.id()} class={classes!("about", theme.class())}>
            <div class="container">
                <SectionHeader title="About Me" {reveal} />
                <div class={classes!("about-content", reveal.class())}>
                    <div class="about-text">
                        { for about.paragraphs.iter().map(|paragraph| html! { <p>{paragraph.clone()}</p> }) }
                        <div class="stats-grid">
                            { for about.stats.iter().map(|stat| html! {
                                <div key={stat.label.clone()} class="stat-item">
                                    <h3>{stat.value.clone()}</h3>
                                    <p>{stat.label.clone()}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills(props: &SkillsProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (node, reveal) = use_reveal(REVEAL_THRESHOLD);

    html! {
        <section ref={node} id={SectionId::Skills.id()} class={classes!("skills", theme.class())}>
            <div class="container">
                <SectionHeader title="Skills & Tools" {reveal} />
                <div class="skills-grid">
                    { for props.content.skills.iter().map(|skill| html! {
                        <div key={skill.name.clone()} class="skill-card">
                            <div class="skill-icon">
                                <img src={props.config.skill_icon_src(&skill.icon)} alt={skill.name.clone()} loading="lazy" />
                            </div>
                            <h3 class="skill-name">{skill.name.clone()}</h3>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Achievements)]
pub fn achievements(props: &SectionProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (node, reveal) = use_reveal(REVEAL_THRESHOLD);

    html! {
        <section ref={node} id={SectionId::Achievements.id()} class={classes!("achievements", theme.class())}>
            <div class="container">
                <SectionHeader title="Achievements" {reveal} />
                <div class="achievements-grid">
                    { for props.content.achievements.iter().enumerate().map(|(index, achievement)| html! {
                        <div
                            key={achievement.title.clone()}
                            class={classes!("achievement-card", reveal.class())}
                            style={stagger_delay(index)}
                        >
                            <div class="achievement-icon" aria-hidden="true">{achievement.icon.clone()}</div>
                            <div class="achievement-content">
                                <div class="achievement-highlight">{achievement.highlight.clone()}</div>
                                <h3 class="achievement-title">{achievement.title.clone()}</h3>
                                <p class="achievement-description">{achievement.description.clone()}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
