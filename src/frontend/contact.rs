use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::{stagger_delay, REVEAL_THRESHOLD};
use crate::content::{is_activation_key, ContactAction, ContactEntry, ContactKind, CopyTarget};
use crate::form::{ContactForm, Field};
use crate::scroll::SectionId;
use crate::theme::Theme;

use super::dom::{self, use_reveal};
use super::sections::{SectionHeader, SectionProps};

enum FormAction {
    Edit(Field, String),
    Submit,
    DismissSuccess,
}

#[derive(Default, PartialEq)]
struct FormState(ContactForm);

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut form = self.0.clone();
        match action {
            FormAction::Edit(field, value) => form.edit(field, value),
            FormAction::Submit => match form.submit() {
                Ok(()) => log::debug!("contact form accepted"),
                Err(errors) => log::debug!("contact form rejected: {errors:?}"),
            },
            FormAction::DismissSuccess => form.dismiss_success(),
        }
        Rc::new(Self(form))
    }
}

#[function_component(ContactFormSection)]
pub fn contact_form_section() -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (node, reveal) = use_reveal(REVEAL_THRESHOLD);
    let form = use_reducer_eq(FormState::default);

    {
        let dispatcher = form.dispatcher();
        let banner = (form.0.banner_timeout(), form.0.successes);
        use_effect_with(banner, move |&(timeout, _)| {
            let hide = timeout.map(|millis| {
                Timeout::new(millis, move || dispatcher.dispatch(FormAction::DismissSuccess))
            });
            move || drop(hide)
        });
    }

    let on_input = |field: Field| {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: InputEvent| {
            let value = match field {
                Field::Message => event.target_unchecked_into::<HtmlTextAreaElement>().value(),
                Field::Name | Field::Email => {
                    event.target_unchecked_into::<HtmlInputElement>().value()
                }
            };
            dispatcher.dispatch(FormAction::Edit(field, value));
        })
    };

    let onsubmit = {
        let dispatcher = form.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };

    let state = &form.0;
    let error_text = |field: Field| {
        state.errors.get(field).is_some().then(|| {
            html! { <span class="error-message" role="alert">{state.errors.text(field)}</span> }
        })
    };
    let error_class = |field: Field| state.errors.get(field).is_some().then_some("error");

    html! {
        <section ref={node} id={SectionId::ContactForm.id()} class={classes!("contact-form", theme.class())}>
            <div class="container">
                <SectionHeader
                    title="Send a Message"
                    subtitle="Drop me a message, and I'll get back to you soon!"
                    {reveal}
                />
                <div class={classes!("form-container", reveal.class())}>
                    if state.submitted {
                        <div class="success-message" role="status">
                            {"Message sent successfully! I'll respond soon."}
                        </div>
                    }
                    <form class="contact-form-grid" novalidate={true} {onsubmit}>
                        <div class="form-group">
                            <label for="name">{"Name"}</label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                placeholder="Your Name"
                                class={classes!(error_class(Field::Name))}
                                value={state.fields.name.clone()}
                                oninput={on_input(Field::Name)}
                            />
                            {error_text(Field::Name)}
                        </div>
                        <div class="form-group">
                            <label for="email">{"Email"}</label>
                            <input
                                type="email"
                                id="email"
                                name="email"
                                placeholder="Your Email"
                                class={classes!(error_class(Field::Email))}
                                value={state.fields.email.clone()}
                                oninput={on_input(Field::Email)}
                            />
                            {error_text(Field::Email)}
                        </div>
                        <div class="form-group full-width">
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                name="message"
                                placeholder="Your Message"
                                class={classes!(error_class(Field::Message))}
                                value={state.fields.message.clone()}
                                oninput={on_input(Field::Message)}
                            />
                            {error_text(Field::Message)}
                        </div>
                        <button type="submit" class="btn-primary">{"Send Message"}</button>
                    </form>
                </div>
            </div>
        </section>
    }
}

fn contact_glyph(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Email => "✉",
        ContactKind::Phone => "☎",
        ContactKind::Github => "⌥",
        ContactKind::Linkedin => "in",
    }
}

#[function_component(Contact)]
pub fn contact(props: &SectionProps) -> Html {
    let theme = use_context::<Theme>().unwrap_or_default();
    let (node, reveal) = use_reveal(REVEAL_THRESHOLD);
    let copied = use_state_eq(|| None::<CopyTarget>);
    // Dropping the pending timeout cancels it, on unmount or when a newer
    // copy replaces it.
    let feedback_timer = use_mut_ref(|| None::<Timeout>);

    let activate = |entry: &ContactEntry| {
        let entry = entry.clone();
        let copied = copied.clone();
        let feedback_timer = feedback_timer.clone();
        Callback::from(move |()| {
            let action = entry.action();
            let feedback = action.feedback_ms();
            match action {
                ContactAction::Copy { target, text } => {
                    dom::copy_to_clipboard(text);
                    copied.set(Some(target));
                    let copied = copied.clone();
                    *feedback_timer.borrow_mut() = feedback
                        .map(|millis| Timeout::new(millis, move || copied.set(None)));
                }
                ContactAction::Open { url } => {
                    if let Err(err) = dom::open_in_new_tab(url) {
                        log::warn!("{err}");
                    }
                }
            }
        })
    };

    html! {
        <section ref={node} id={SectionId::Contact.id()} class={classes!("contact", theme.class())}>
            <div class="container">
                <SectionHeader
                    title="Get In Touch"
                    subtitle="Let's collaborate on innovative projects! I'm always excited to work on challenging problems."
                    {reveal}
                />
                <div class="contact-grid">
                    { for props.content.contacts.iter().enumerate().map(|(index, entry)| {
                        let activate = activate(entry);
                        let onclick = activate.reform(|_: MouseEvent| ());
                        let onkeydown = Callback::from(move |event: KeyboardEvent| {
                            if is_activation_key(&event.key()) {
                                event.prevent_default();
                                activate.emit(());
                            }
                        });
                        html! {
                            <div
                                key={entry.label.clone()}
                                role="button"
                                tabindex="0"
                                class={classes!("contact-card", reveal.class())}
                                style={stagger_delay(index)}
                                {onclick}
                                {onkeydown}
                            >
                                <div class="contact-icon" aria-hidden="true">{contact_glyph(entry.kind)}</div>
                                <div class="contact-content">
                                    <h3 class="contact-label">{entry.label.clone()}</h3>
                                    <p class="contact-value">{entry.display.clone()}</p>
                                    if let Some(hint) = entry.copy_hint(*copied) {
                                        <span class="copy-indicator">{hint}</span>
                                    }
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
