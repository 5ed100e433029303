//! Profile screen state: the user's vibe and ghost mode.

use crate::models::{User, Vibe};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileState {
    pub vibe: Vibe,
    pub is_ghost: bool,
}

impl ProfileState {
    pub fn new(user: &User) -> Self {
        Self {
            vibe: user.current_vibe,
            is_ghost: user.is_ghost(),
        }
    }

    /// Entering ghost mode sets the ghost vibe; leaving it resets to active.
    pub fn toggle_ghost(&mut self) {
        if self.is_ghost {
            self.is_ghost = false;
            self.vibe = Vibe::Active;
        } else {
            self.is_ghost = true;
            self.vibe = Vibe::Ghost;
        }
        tracing::debug!(ghost = self.is_ghost, "Ghost mode toggled");
    }

    /// Picks a visible vibe. Ignored in ghost mode.
    pub fn set_vibe(&mut self, vibe: Vibe) {
        if self.is_ghost || !vibe.is_visible() {
            return;
        }
        self.vibe = vibe;
    }

    /// The user as shown on the profile card.
    pub fn preview_user(&self, user: &User) -> User {
        user.with_vibe(self.vibe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockStore;
    use chrono::Utc;

    #[test]
    fn test_ghost_round_trip_resets_to_active() {
        let store = MockStore::seeded(Utc::now());
        let mut profile = ProfileState::new(store.current_user());
        profile.set_vibe(Vibe::Chill);

        profile.toggle_ghost();
        assert!(profile.is_ghost);
        assert_eq!(profile.vibe, Vibe::Ghost);

        profile.set_vibe(Vibe::Chaos);
        assert_eq!(profile.vibe, Vibe::Ghost);

        profile.toggle_ghost();
        assert_eq!(profile.vibe, Vibe::Active);
    }

    #[test]
    fn test_preview_user() {
        let store = MockStore::seeded(Utc::now());
        let mut profile = ProfileState::new(store.current_user());
        profile.set_vibe(Vibe::Chaos);
        let preview = profile.preview_user(store.current_user());
        assert_eq!(preview.current_vibe, Vibe::Chaos);
        assert_eq!(store.current_user().current_vibe, Vibe::Active);
    }
}
