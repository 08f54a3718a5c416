use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, info};

use folio::{
    contact::{ContactForm, Field, SubmitOutcome},
    content::{CONTACT_INFO, SOCIAL_LINKS},
    motion::{Effect, Motion},
    surface::{PanelKind, Surface, Tone, classes},
};

use crate::{
    common::context::{use_config, use_theme},
    components::{
        glass::{GlassButton, GlassCard, GlassInput},
        reveal::Reveal,
    },
};

// the mock form
//
// submitting only swaps the form for a confirmation panel, and a single timer puts
// the empty form back.  the pending timeout lives in a signal owned by this
// component, so leaving the page cancels it along with everything else
#[component]
fn MessageForm() -> Element {
    let theme = use_theme();
    let config = use_config();
    let mut form = use_signal(ContactForm::new);
    let mut pending = use_signal(|| None::<Timeout>);

    let reset_ms = config.submit_reset_ms;
    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let outcome = form.write().submit();
        match outcome {
            SubmitOutcome::Accepted(ticket) => {
                // never cleared from inside its own callback, the next submission or
                // unmount drops it
                let timeout = Timeout::new(reset_ms, move || {
                    if !form.write().expire(ticket) {
                        debug!("stale contact form reset ignored");
                    }
                });
                pending.set(Some(timeout));
            }
            SubmitOutcome::AlreadySubmitted => {}
            SubmitOutcome::Incomplete(missing) => {
                debug!({ missing = ?missing }, "contact form incomplete");
            }
        }
    };

    let oninput = move |(field, value): (Field, String)| {
        form.write().set_field(field, value);
    };

    if form.read().is_submitted() {
        let success = classes(Surface::Panel(PanelKind::Success), theme);
        return rsx! {
            Reveal { motion: Motion::new(Effect::Scale, 400),
                div { class: "{success} sent-panel",
                    div { class: "sent-glyph", "➤" }
                    h3 { "Message Sent!" }
                    p { "Thank you for reaching out. I'll get back to you soon." }
                }
            }
        };
    }

    let draft = form.read().draft().clone();

    rsx! {
        form { class: "contact-form", onsubmit,
            div { class: "field-pair",
                GlassInput {
                    field: Field::Name,
                    placeholder: "Your Name",
                    value: draft.name,
                    oninput,
                }
                GlassInput {
                    field: Field::Email,
                    input_type: "email",
                    placeholder: "Your Email",
                    value: draft.email,
                    oninput,
                }
            }
            GlassInput {
                field: Field::Subject,
                placeholder: "Subject",
                value: draft.subject,
                oninput,
            }
            GlassInput {
                field: Field::Message,
                placeholder: "Your Message",
                value: draft.message,
                rows: 6,
                oninput,
            }
            GlassButton { submit: true, class: "wide", "Send Message ➤" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let theme = use_theme();

    let heading = classes(Surface::Text(Tone::Heading), theme);
    let muted = classes(Surface::Text(Tone::Muted), theme);
    let body = classes(Surface::Text(Tone::Body), theme);
    let badge = classes(Surface::IconBadge, theme);
    let social_card = classes(Surface::Card { hover: true }, theme);

    rsx! {
        div { class: "page page-wide contact-page",
            Reveal { class: "page-header",
                h1 { class: "{heading}", "Get in Touch" }
                p { class: "{muted}", "Have a project in mind? Let's create something amazing together" }
            }

            div { class: "contact-grid",
                Reveal { motion: Motion::new(Effect::SlideLeft, 600).delayed(200),
                    GlassCard {
                        h2 { class: "{heading}", "Send a Message" }
                        MessageForm {}
                    }
                }

                div { class: "stack",
                    Reveal { motion: Motion::new(Effect::SlideRight, 600).delayed(300),
                        GlassCard {
                            h3 { class: "{heading}", "Contact Information" }
                            div { class: "stack",
                                for info in CONTACT_INFO.iter() {
                                    div { key: "{info.label}", class: "contact-row",
                                        div { class: "{badge} small", "{info.glyph}" }
                                        div {
                                            p { class: "{muted}", "{info.label}" }
                                            p { class: "{body}", "{info.value}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Reveal { motion: Motion::new(Effect::SlideRight, 600).delayed(400),
                        GlassCard {
                            h3 { class: "{heading}", "Social Links" }
                            div { class: "stack",
                                for link in SOCIAL_LINKS.iter() {
                                    a {
                                        key: "{link.label}",
                                        class: "{social_card} social-row",
                                        href: link.href,
                                        target: if link.opens_new_tab() { "_blank" } else { "_self" },
                                        rel: "noopener noreferrer",
                                        onclick: move |_| info!({ link = link.label }, "social link opened"),
                                        div { class: "{badge} small", "{link.glyph}" }
                                        div {
                                            p { class: "{muted}", "{link.label}" }
                                            p { class: "{body}", "{link.handle}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    Reveal { motion: Motion::new(Effect::SlideRight, 600).delayed(500),
                        GlassCard { class: "availability-card",
                            div { class: "{badge} large", span { class: "pulse-dot large" } }
                            h4 { class: "{heading}", "Currently Available" }
                            p { class: "{muted}", "Open for new projects and collaborations" }
                        }
                    }
                }
            }
        }
    }
}
