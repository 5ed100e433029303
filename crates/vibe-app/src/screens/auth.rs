//! Auth flow: Splash → Onboarding → Signup / Login.

use dioxus::prelude::*;
use vibe_core::{AuthEvent, AuthFlow, AuthOutcome, AuthStep, ONBOARDING_SLIDES};

/// Full auth flow component. Calls `on_complete` once a form is submitted
/// with both fields filled.
#[component]
pub fn AuthScreen(on_complete: EventHandler<()>) -> Element {
    let mut flow = use_signal(AuthFlow::new);

    let mut send = move |event: AuthEvent| {
        if flow.write().apply(event) == AuthOutcome::Complete {
            on_complete.call(());
        }
    };

    let current = flow.read().clone();

    match current.step {
        AuthStep::Splash => rsx! {
            div {
                class: "auth-screen auth-splash",
                onclick: move |_| send(AuthEvent::Tap),
                div { class: "pulse-vibe",
                    h1 { class: "auth-logo",
                        "VIBE"
                        span { class: "accent", "_" }
                        "OS"
                    }
                }
                p { class: "muted auth-tagline", "The Plot Operating System" }
                p { class: "muted small auth-hint", "Tap anywhere to continue" }
            }
        },

        AuthStep::Onboarding => {
            let slide = current.current_slide();
            let icon_class = format!("auth-slide-icon glow-{}", slide.accent.css_key());

            rsx! {
                div { class: "auth-screen",
                    div { class: "auth-slide",
                        div { class: "{icon_class}", "{slide.icon}" }
                        h2 { class: "auth-slide-title", "{slide.title}" }
                        p { class: "muted auth-slide-desc", "{slide.description}" }
                    }

                    div { class: "auth-dots",
                        for i in 0..ONBOARDING_SLIDES.len() {
                            button {
                                key: "{i}",
                                class: if i == current.slide { "auth-dot active" } else { "auth-dot" },
                                onclick: move |_| send(AuthEvent::SelectSlide(i)),
                            }
                        }
                    }

                    div { class: "auth-actions",
                        if current.is_last_slide() {
                            button {
                                class: "btn-primary btn-block",
                                onclick: move |_| send(AuthEvent::GetStarted),
                                "Get Started"
                            }
                            button {
                                class: "btn-secondary btn-block",
                                onclick: move |_| send(AuthEvent::HaveAccount),
                                "I already have an account"
                            }
                        } else {
                            button {
                                class: "btn-primary btn-block",
                                onclick: move |_| send(AuthEvent::NextSlide),
                                "Next \u{2192}"
                            }
                        }
                    }
                }
            }
        }

        AuthStep::Signup | AuthStep::Login => {
            let is_signup = current.is_signup();
            let can_submit = current.can_submit();
            let (title, subtitle, submit_label, switch_label) = if is_signup {
                ("Create Account", "Join the vibe", "Create Account", "Already have an account? Log in")
            } else {
                ("Welcome Back", "Let's get you back in", "Log In", "Need an account? Sign up")
            };

            rsx! {
                div { class: "auth-screen",
                    button {
                        class: "muted auth-back",
                        onclick: move |_| send(AuthEvent::Back),
                        "\u{2190} Back"
                    }

                    div { class: "auth-form",
                        h1 { class: "auth-form-title", "{title}" }
                        p { class: "muted auth-form-subtitle", "{subtitle}" }

                        label { class: "field-label", "Email or Phone" }
                        input {
                            class: "field-input",
                            r#type: "email",
                            placeholder: "you@example.com",
                            value: "{current.email}",
                            oninput: move |evt| send(AuthEvent::SetEmail(evt.value())),
                        }

                        label { class: "field-label", "Password" }
                        input {
                            class: "field-input",
                            r#type: "password",
                            placeholder: "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}",
                            value: "{current.password}",
                            oninput: move |evt| send(AuthEvent::SetPassword(evt.value())),
                            onkeydown: move |evt: KeyboardEvent| {
                                if evt.key() == Key::Enter && can_submit {
                                    send(AuthEvent::Submit);
                                }
                            },
                        }

                        if is_signup {
                            p { class: "muted small",
                                "By signing up, you agree to our Terms of Service and Privacy Policy."
                            }
                        }
                    }

                    div { class: "auth-actions",
                        button {
                            class: "btn-primary btn-block",
                            disabled: !can_submit,
                            onclick: move |_| send(AuthEvent::Submit),
                            "{submit_label}"
                        }
                        button {
                            class: "btn-ghost btn-block",
                            onclick: move |_| send(AuthEvent::SwitchMode),
                            "{switch_label}"
                        }
                    }
                }
            }
        }
    }
}
