use yew::prelude::*;

use crate::config::{stagger_delay, REVEAL_THRESHOLD};
use crate::content::{filter_projects, ProjectFilter};
use crate::scroll::SectionId;
use crate::theme::Theme;

use super::dom::use_reveal;
use super::sections::{SectionHeader, SectionProps};

#[function_component(Projects)]
pub fn projects(props: &SectionProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (node, reveal) = use_reveal(REVEAL_THRESHOLD);
    let filter = use_state_eq(ProjectFilter::default);
    let visible = filter_projects(&props.content.projects, *filter);

    html! {
        <section ref={node} id={SectionId::Projects.id()} class={classes!("projects", theme.class())}>
            <div class="container">
                <SectionHeader title="Featured Projects" {reveal} />

                <div class={classes!("filter-tabs", reveal.class())} role="tablist">
                    { for ProjectFilter::ALL.into_iter().map(|option| {
                        let onclick = {
                            let filter = filter.clone();
                            Callback::from(move |_: MouseEvent| filter.set(option))
                        };
                        html! {
                            <button
                                key={option.label()}
                                type="button"
                                role="tab"
                                aria-selected={(*filter == option).to_string()}
                                class={classes!("filter-tab", (*filter == option).then_some("active"))}
                                {onclick}
                            >
                                {option.label()}
                            </button>
                        }
                    }) }
                </div>

                <div class="projects-grid">
                    { for visible.into_iter().enumerate().map(|(index, project)| html! {
                        <article
                            key={project.title.clone()}
                            class={classes!("project-card", reveal.is_revealed().then_some("animate-slideUp"))}
                            style={stagger_delay(index)}
                        >
                            <div class="project-image">
                                <span class="project-emoji" aria-hidden="true">{project.image.clone()}</span>
                                <div class="project-overlay">
                                    <a
                                        class="project-btn"
                                        href={project.link.clone()}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                    >
                                        <span aria-hidden="true">{"↗ "}</span>
                                        {"View Project"}
                                        <span class="sr-only">{" (opens in a new tab)"}</span>
                                    </a>
                                </div>
                            </div>
                            <div class="project-content">
                                <h3 class="project-title">{project.title.clone()}</h3>
                                <p class="project-description">{project.description.clone()}</p>
                                <div class="project-features">
                                    { for project.features.iter().map(|feature| html! {
                                        <span class="feature-tag">{feature.clone()}</span>
                                    }) }
                                </div>
                                <div class="project-tech">
                                    { for project.tech.iter().map(|tech| html! {
                                        <span class="tech-tag">{tech.clone()}</span>
                                    }) }
                                </div>
                            </div>
                        </article>
                    }) }
                </div>
            </div>
        </section>
    }
}
