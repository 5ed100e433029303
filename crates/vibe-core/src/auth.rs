//! Onboarding and sign-in flow.
//!
//! Splash → three onboarding slides → signup or login → complete. Nothing
//! is verified: either form completes once both fields are non-empty.

use crate::models::Vibe;

/// Current step of the auth flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStep {
    #[default]
    Splash,
    Onboarding,
    Signup,
    Login,
}

/// A single onboarding slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingSlide {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Vibe,
}

pub const ONBOARDING_SLIDES: [OnboardingSlide; 3] = [
    OnboardingSlide {
        icon: "\u{1f525}",
        title: "Broadcast Your Plot",
        description: "Post what you're doing NOW. Your crew sees it. They pull up.",
        accent: Vibe::Chaos,
    },
    OnboardingSlide {
        icon: "\u{26a1}",
        title: "Real-Time Vibes",
        description: "CHAOS, ACTIVE, or CHILL - let your squad know your energy.",
        accent: Vibe::Active,
    },
    OnboardingSlide {
        icon: "\u{1f465}",
        title: "Your Crews, Your Rules",
        description: "Different squads, different vibes. Control who sees what.",
        accent: Vibe::Chill,
    },
];

/// User input on the auth screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// Tap on the splash screen.
    Tap,
    NextSlide,
    SelectSlide(usize),
    /// "Get Started" on the last slide.
    GetStarted,
    /// "I already have an account" on the last slide.
    HaveAccount,
    /// Back from a form to the onboarding slides.
    Back,
    /// Toggle between signup and login.
    SwitchMode,
    SetEmail(String),
    SetPassword(String),
    Submit,
}

/// Whether the flow has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Pending,
    Complete,
}

/// State of the auth screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFlow {
    pub step: AuthStep,
    pub slide: usize,
    pub email: String,
    pub password: String,
}

impl AuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_slide(&self) -> &'static OnboardingSlide {
        &ONBOARDING_SLIDES[self.slide.min(ONBOARDING_SLIDES.len() - 1)]
    }

    pub fn is_last_slide(&self) -> bool {
        self.slide + 1 >= ONBOARDING_SLIDES.len()
    }

    pub fn is_signup(&self) -> bool {
        self.step == AuthStep::Signup
    }

    /// Both fields filled; no other rule applies.
    pub fn can_submit(&self) -> bool {
        !self.email.is_empty() && !self.password.is_empty()
    }

    /// Applies an event, reporting whether the flow is complete.
    pub fn apply(&mut self, event: AuthEvent) -> AuthOutcome {
        match (self.step, event) {
            (AuthStep::Splash, AuthEvent::Tap) => {
                self.step = AuthStep::Onboarding;
            }
            (AuthStep::Onboarding, AuthEvent::NextSlide) => {
                if !self.is_last_slide() {
                    self.slide += 1;
                }
            }
            (AuthStep::Onboarding, AuthEvent::SelectSlide(i)) => {
                self.slide = i.min(ONBOARDING_SLIDES.len() - 1);
            }
            (AuthStep::Onboarding, AuthEvent::GetStarted) if self.is_last_slide() => {
                self.step = AuthStep::Signup;
            }
            (AuthStep::Onboarding, AuthEvent::HaveAccount) if self.is_last_slide() => {
                self.step = AuthStep::Login;
            }
            (AuthStep::Signup | AuthStep::Login, AuthEvent::Back) => {
                self.step = AuthStep::Onboarding;
            }
            (AuthStep::Signup, AuthEvent::SwitchMode) => self.step = AuthStep::Login,
            (AuthStep::Login, AuthEvent::SwitchMode) => self.step = AuthStep::Signup,
            (AuthStep::Signup | AuthStep::Login, AuthEvent::SetEmail(email)) => {
                self.email = email;
            }
            (AuthStep::Signup | AuthStep::Login, AuthEvent::SetPassword(password)) => {
                self.password = password;
            }
            (AuthStep::Signup | AuthStep::Login, AuthEvent::Submit) if self.can_submit() => {
                tracing::debug!(signup = self.is_signup(), "Auth form submitted");
                return AuthOutcome::Complete;
            }
            (step, event) => {
                tracing::trace!(?step, ?event, "Ignored auth event");
            }
        }
        AuthOutcome::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_last_slide() -> AuthFlow {
        let mut flow = AuthFlow::new();
        flow.apply(AuthEvent::Tap);
        flow.apply(AuthEvent::NextSlide);
        flow.apply(AuthEvent::NextSlide);
        flow
    }

    #[test]
    fn test_splash_to_onboarding() {
        let mut flow = AuthFlow::new();
        assert_eq!(flow.step, AuthStep::Splash);
        assert_eq!(flow.apply(AuthEvent::Tap), AuthOutcome::Pending);
        assert_eq!(flow.step, AuthStep::Onboarding);
        assert_eq!(flow.slide, 0);
    }

    #[test]
    fn test_slides_stop_at_last() {
        let mut flow = at_last_slide();
        assert!(flow.is_last_slide());
        flow.apply(AuthEvent::NextSlide);
        assert_eq!(flow.slide, 2);
        flow.apply(AuthEvent::SelectSlide(9));
        assert_eq!(flow.slide, 2);
        flow.apply(AuthEvent::SelectSlide(0));
        assert_eq!(flow.slide, 0);
    }

    #[test]
    fn test_get_started_only_on_last_slide() {
        let mut flow = AuthFlow::new();
        flow.apply(AuthEvent::Tap);
        flow.apply(AuthEvent::GetStarted);
        assert_eq!(flow.step, AuthStep::Onboarding);

        let mut flow = at_last_slide();
        flow.apply(AuthEvent::GetStarted);
        assert_eq!(flow.step, AuthStep::Signup);
    }

    #[test]
    fn test_back_keeps_slide() {
        let mut flow = at_last_slide();
        flow.apply(AuthEvent::HaveAccount);
        assert_eq!(flow.step, AuthStep::Login);
        flow.apply(AuthEvent::Back);
        assert_eq!(flow.step, AuthStep::Onboarding);
        assert!(flow.is_last_slide());
    }

    #[test]
    fn test_switch_mode() {
        let mut flow = at_last_slide();
        flow.apply(AuthEvent::GetStarted);
        flow.apply(AuthEvent::SwitchMode);
        assert_eq!(flow.step, AuthStep::Login);
        flow.apply(AuthEvent::SwitchMode);
        assert_eq!(flow.step, AuthStep::Signup);
    }

    #[test]
    fn test_submit_requires_both_fields() {
        let mut flow = at_last_slide();
        flow.apply(AuthEvent::GetStarted);
        assert_eq!(flow.apply(AuthEvent::Submit), AuthOutcome::Pending);

        flow.apply(AuthEvent::SetEmail("you@example.com".to_string()));
        assert!(!flow.can_submit());
        assert_eq!(flow.apply(AuthEvent::Submit), AuthOutcome::Pending);

        flow.apply(AuthEvent::SetPassword("x".to_string()));
        assert!(flow.can_submit());
        assert_eq!(flow.apply(AuthEvent::Submit), AuthOutcome::Complete);
    }
}
