//! Contact details and the simulated message form

use dioxus::core::Task;
use dioxus::prelude::*;
use folio_core::content::{PROFILE, SOCIAL_LINKS};
use folio_core::style::{self, Motion, Surface};
use folio_core::{ContactState, Field, ThemeMode, SUBMIT_LATENCY, SUCCESS_NOTICE};
use tracing::debug;

use crate::ui::components::SectionHeading;
use crate::ui::icons::{Icon, IconKind};
use crate::ui::platform::{self, use_reveal};

#[component]
pub fn Contact(theme: ThemeMode) -> Element {
    let latch = use_reveal("contact");
    let visible = latch().is_revealed();
    let state = use_signal(ContactState::new);

    let info_class = format!("contact-info {}", style::reveal(Motion::FromLeft, visible));
    let form_class = format!("contact-form {}", style::reveal(Motion::FromRight, visible));

    rsx! {
        section { id: "contact", class: style::section(theme, Surface::Raised),
            div { class: "container",
                SectionHeading { theme, title: "Get In Touch", visible }

                div { class: "contact-inner",
                    div { class: "{info_class}", style: "transition-delay: 200ms;",
                        ContactInfo { theme }
                    }
                    div { class: "{form_class}", style: "transition-delay: 400ms;",
                        MessageForm { theme, state }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactInfo(theme: ThemeMode) -> Element {
    let accent = style::accent_text(theme);
    let link_class = style::icon_link(theme);
    let text_class = style::muted_text(theme);
    let social_class = style::social_button(theme);
    let mailto = PROFILE.mailto();
    let tel = PROFILE.tel();

    rsx! {
        div { class: style::card(theme),
            h3 { "Contact Information" }

            div { class: "contact-line",
                span { class: "{accent}", Icon { kind: IconKind::Mail } }
                div {
                    h4 { "Email" }
                    a { class: "{link_class}", href: "{mailto}", "{PROFILE.email}" }
                }
            }
            div { class: "contact-line",
                span { class: "{accent}", Icon { kind: IconKind::Phone } }
                div {
                    h4 { "Phone" }
                    a { class: "{link_class}", href: "{tel}", "{PROFILE.phone}" }
                }
            }
            div { class: "contact-line",
                span { class: "{accent}", Icon { kind: IconKind::MapPin } }
                div {
                    h4 { "Address" }
                    p { class: "{text_class}", "{PROFILE.address}" }
                }
            }
        }

        div { class: style::card(theme),
            h3 { "Connect With Me" }
            p { class: "{text_class}", "You can also find me on these platforms:" }
            div { class: "socials",
                for social in SOCIAL_LINKS {
                    a {
                        key: "{social.label}",
                        class: "{social_class}",
                        href: social.href,
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "aria-label": social.label,
                        Icon { kind: IconKind::from(social.kind), size: 20 }
                    }
                }
            }
        }
    }
}

/// Drive a submission that has already entered `Submitting` through the
/// two timed transitions. Each step is handed to `apply`.
async fn simulate_submission(mut apply: impl FnMut(fn(&mut ContactState) -> bool)) {
    platform::sleep(SUBMIT_LATENCY).await;
    apply(ContactState::complete_submit);
    platform::sleep(SUCCESS_NOTICE).await;
    apply(ContactState::dismiss_success);
}

/// The form card: banners, fields and the submit button.
#[component]
fn MessageForm(theme: ThemeMode, state: Signal<ContactState>) -> Element {
    let mut state = state;
    let mut pending = use_signal(|| None::<Task>);
    let current = state();
    let submitting = current.is_submitting();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(e) = state.write().begin_submit() {
            debug!(error = %e, "contact submission blocked");
            return;
        }

        // A resubmit during the success notice restarts the notice timer.
        if let Some(previous) = pending.write().take() {
            previous.cancel();
        }

        // Scoped to this component: unmounting cancels both timers.
        let task = spawn(simulate_submission(move |step| {
            step(&mut *state.write());
        }));
        pending.set(Some(task));
    };

    rsx! {
        div { class: style::card(theme),
            h3 { "Send Me a Message" }

            if current.show_success() {
                div { class: "banner banner-success", "role": "status",
                    "Your message has been sent successfully! I'll get back to you soon."
                }
            }
            if current.show_failure() {
                div { class: "banner banner-error", "role": "alert",
                    "There was an error sending your message. Please try again later."
                }
            }

            form { onsubmit,
                div { class: "form-row",
                    FormField { theme, field: Field::Name, state }
                    FormField { theme, field: Field::Email, state }
                }
                FormField { theme, field: Field::Subject, state }
                FormField { theme, field: Field::Message, state }

                button {
                    class: style::submit_button(theme, submitting),
                    r#type: "submit",
                    disabled: submitting,
                    if submitting {
                        Spinner {}
                        "Sending..."
                    } else {
                        "Send Message"
                        Icon { kind: IconKind::Send, size: 18 }
                    }
                }
            }
        }
    }
}

/// A labelled, required input bound to one field of the form.
#[component]
fn FormField(theme: ThemeMode, field: Field, state: Signal<ContactState>) -> Element {
    let mut state = state;
    let value = state.read().form.get(field).to_string();
    let key = field.key();
    let input_class = style::input(theme);
    let group_class = if field == Field::Name || field == Field::Email {
        ""
    } else {
        "form-group"
    };

    rsx! {
        div { class: "{group_class}",
            label { r#for: key, "{field.label()}" }
            if field == Field::Message {
                textarea {
                    id: key,
                    name: key,
                    class: "{input_class}",
                    rows: "5",
                    required: true,
                    value: "{value}",
                    oninput: move |evt: FormEvent| state.write().edit(field, evt.value()),
                }
            } else {
                input {
                    id: key,
                    name: key,
                    r#type: field.input_type(),
                    class: "{input_class}",
                    required: true,
                    value: "{value}",
                    oninput: move |evt: FormEvent| state.write().edit(field, evt.value()),
                }
            }
        }
    }
}

#[component]
fn Spinner() -> Element {
    rsx! {
        svg {
            class: "spinner",
            width: "20",
            height: "20",
            view_box: "0 0 24 24",
            fill: "none",
            "aria-hidden": "true",
            circle {
                cx: "12",
                cy: "12",
                r: "10",
                stroke: "currentColor",
                stroke_width: "4",
                opacity: "0.25",
            }
            path {
                fill: "currentColor",
                opacity: "0.75",
                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use folio_core::SubmissionStatus;
    use tokio::task::JoinHandle;
    use tokio::time::advance;

    type Shared = Arc<Mutex<ContactState>>;

    fn submitted(name: &str) -> ContactState {
        let mut state = ContactState::new();
        state.edit(Field::Name, name);
        state.edit(Field::Email, "ada@example.com");
        state.edit(Field::Subject, "Hello");
        state.edit(Field::Message, "Nice site");
        state.begin_submit().unwrap();
        state
    }

    fn start(shared: &Shared) -> JoinHandle<()> {
        let target = shared.clone();
        tokio::spawn(simulate_submission(move |step| {
            step(&mut *target.lock().unwrap());
        }))
    }

    async fn elapse(ms: u64) {
        advance(Duration::from_millis(ms)).await;
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
    }

    fn status(shared: &Shared) -> SubmissionStatus {
        shared.lock().unwrap().status
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_settles_on_its_own() {
        let shared: Shared = Arc::new(Mutex::new(submitted("Ada")));
        let task = start(&shared);
        elapse(0).await;

        elapse(1499).await;
        assert_eq!(status(&shared), SubmissionStatus::Submitting);
        assert_eq!(shared.lock().unwrap().form.name, "Ada");

        elapse(1).await;
        assert_eq!(status(&shared), SubmissionStatus::Succeeded);
        assert!(shared.lock().unwrap().form.is_empty());

        elapse(4999).await;
        assert_eq!(status(&shared), SubmissionStatus::Succeeded);

        elapse(1).await;
        assert_eq!(status(&shared), SubmissionStatus::Idle);
        assert!(!shared.lock().unwrap().failed);

        task.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submission_leaves_state_alone() {
        let shared: Shared = Arc::new(Mutex::new(submitted("Ada")));
        let task = start(&shared);
        elapse(0).await;

        elapse(1000).await;
        task.abort();
        elapse(10_000).await;

        assert_eq!(status(&shared), SubmissionStatus::Submitting);
        assert_eq!(shared.lock().unwrap().form.name, "Ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_resubmit_gets_a_full_notice() {
        let shared: Shared = Arc::new(Mutex::new(submitted("Ada")));
        let first = start(&shared);
        elapse(0).await;
        elapse(2000).await;
        assert_eq!(status(&shared), SubmissionStatus::Succeeded);

        // Resubmit during the notice; the form cancels the earlier task.
        *shared.lock().unwrap() = submitted("Grace");
        first.abort();
        let second = start(&shared);
        elapse(0).await;

        elapse(1500).await;
        assert_eq!(status(&shared), SubmissionStatus::Succeeded);

        // Past the point where the first notice would have ended.
        elapse(3500).await;
        assert_eq!(status(&shared), SubmissionStatus::Succeeded);

        elapse(1500).await;
        assert_eq!(status(&shared), SubmissionStatus::Idle);
        second.await.unwrap();
    }
}
