//! Avatar display helpers.

use crate::models::User;

const AVATAR_COLORS: [&str; 4] = ["bg-vibe-chaos", "bg-vibe-active", "bg-vibe-chill", "bg-primary"];

/// Upper-cased first character of the display name.
pub fn initial(user: &User) -> String {
    user.display_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Stable background class derived from the username's first character.
pub fn color_class(user: &User) -> &'static str {
    let code = user.username.chars().next().map(|c| c as usize).unwrap_or(0);
    AVATAR_COLORS[code % AVATAR_COLORS.len()]
}

/// Splits a user list into the avatars shown and the overflow count.
pub fn avatar_stack(users: &[User], max: usize) -> (&[User], usize) {
    let shown = &users[..users.len().min(max)];
    (shown, users.len() - shown.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Vibe;

    fn named(username: &str, display_name: &str) -> User {
        User {
            id: username.to_string(),
            username: username.to_string(),
            display_name: display_name.to_string(),
            avatar: None,
            current_vibe: Vibe::Chill,
            is_online: true,
            location: None,
        }
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial(&named("kael", "kael")), "K");
        assert_eq!(initial(&named("x", "")), "?");
    }

    #[test]
    fn test_color_class_is_stable() {
        // 'k' = 107, 107 % 4 = 3
        assert_eq!(color_class(&named("kael", "Kael")), "bg-primary");
        // 'z' = 122, 122 % 4 = 2
        assert_eq!(color_class(&named("zara", "Zara")), "bg-vibe-chill");
    }

    #[test]
    fn test_avatar_stack_overflow() {
        let users: Vec<_> = ["a", "b", "c", "d", "e"].iter().map(|n| named(n, n)).collect();
        let (shown, remaining) = avatar_stack(&users, 3);
        assert_eq!(shown.len(), 3);
        assert_eq!(remaining, 2);

        let (shown, remaining) = avatar_stack(&users[..2], 3);
        assert_eq!(shown.len(), 2);
        assert_eq!(remaining, 0);
    }
}
