//! In-memory mock data standing in for a backend.
//!
//! The store is built once at startup relative to a reference instant and
//! never written to afterwards. Screens copy whatever they mutate.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Chat, ChatKind, Comment, Crew, Location, Message, Plot, Reactions, User, Vibe};

/// Read-only collections of mock users, plots, crews, chats and messages.
#[derive(Debug, Clone, PartialEq)]
pub struct MockStore {
    current_user: User,
    users: Vec<User>,
    plots: Vec<Plot>,
    crews: Vec<Crew>,
    chats: Vec<Chat>,
    messages: Vec<Message>,
    comments: Vec<Comment>,
}

fn user(
    id: &str,
    username: &str,
    display_name: &str,
    vibe: Vibe,
    is_online: bool,
    location: Option<Location>,
) -> User {
    User {
        id: id.to_string(),
        username: username.to_string(),
        display_name: display_name.to_string(),
        avatar: None,
        current_vibe: vibe,
        is_online,
        location,
    }
}

fn message(id: &str, sender: &User, content: &str, created_at: DateTime<Utc>, is_read: bool) -> Message {
    Message {
        id: id.to_string(),
        sender: sender.clone(),
        content: content.to_string(),
        created_at,
        is_read,
        plot_embed: None,
    }
}

impl MockStore {
    /// Builds the mock data set with timestamps relative to `now`.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mins = |m: i64| now - Duration::minutes(m);
        let hours_ahead = |h: i64| now + Duration::hours(h);

        let current_user = user(
            "0",
            "you",
            "You",
            Vibe::Active,
            true,
            Some(Location::new("Westlands", -1.2641, 36.8034)),
        );

        let users = vec![
            user("1", "kael", "Kael", Vibe::Chaos, true, Some(Location::new("Westlands", -1.2641, 36.8034))),
            user("2", "zara", "Zara", Vibe::Active, true, Some(Location::new("Kilimani", -1.2892, 36.7870))),
            user("3", "mwangi", "Mwangi", Vibe::Chill, true, Some(Location::new("Karen", -1.3187, 36.7119))),
            user("4", "amara", "Amara", Vibe::Ghost, false, None),
            user("5", "jayden", "Jayden", Vibe::Active, true, Some(Location::new("Lavington", -1.2769, 36.7651))),
        ];
        let [kael, zara, mwangi, _amara, jayden] = [&users[0], &users[1], &users[2], &users[3], &users[4]];

        let plots = vec![
            Plot {
                id: "p1".to_string(),
                author: kael.clone(),
                content: "\u{1f525} CHAOS at Alchemist - vibes are immaculate rn. Who's linking?".to_string(),
                vibe: Vibe::Chaos,
                location: Some("Westlands".to_string()),
                created_at: mins(15),
                expires_at: hours_ahead(23),
                pulling_up: vec![zara.clone(), jayden.clone()],
                reactions: Reactions::new(12, 5, 3, 8),
                comment_count: 7,
            },
            Plot {
                id: "p2".to_string(),
                author: zara.clone(),
                content: "\u{26a1} ACTIVE - Someone pull up to Java, I'm bored af. Need company for lunch".to_string(),
                vibe: Vibe::Active,
                location: Some("Kilimani".to_string()),
                created_at: mins(45),
                expires_at: hours_ahead(20),
                pulling_up: vec![mwangi.clone()],
                reactions: Reactions::new(3, 8, 1, 2),
                comment_count: 4,
            },
            Plot {
                id: "p3".to_string(),
                author: mwangi.clone(),
                content: "\u{1f319} CHILL - Movie night at mine, got snacks. 3 spots left, first come first served".to_string(),
                vibe: Vibe::Chill,
                location: Some("Karen".to_string()),
                created_at: mins(120),
                expires_at: hours_ahead(18),
                pulling_up: vec![kael.clone(), zara.clone(), jayden.clone()],
                reactions: Reactions::new(6, 15, 2, 4),
                comment_count: 12,
            },
            Plot {
                id: "p4".to_string(),
                author: jayden.clone(),
                content: "\u{26a1} Pool session at Village Market. Water's perfect, sun's out. Pull up!".to_string(),
                vibe: Vibe::Active,
                location: Some("Gigiri".to_string()),
                created_at: mins(30),
                expires_at: hours_ahead(21),
                pulling_up: Vec::new(),
                reactions: Reactions::new(4, 2, 0, 6),
                comment_count: 2,
            },
        ];

        let crews = vec![
            Crew {
                id: "c1".to_string(),
                name: "Day Ones".to_string(),
                emoji: Some("\u{1f525}".to_string()),
                member_count: 8,
                members: users[..4].to_vec(),
                invite_code: "DAY1-2024".to_string(),
                last_activity: Some(mins(5)),
                unread_count: Some(3),
            },
            Crew {
                id: "c2".to_string(),
                name: "Work Fam".to_string(),
                emoji: Some("\u{1f4bc}".to_string()),
                member_count: 12,
                members: users.clone(),
                invite_code: "WORK-SQUAD".to_string(),
                last_activity: Some(mins(60)),
                unread_count: Some(0),
            },
            Crew {
                id: "c3".to_string(),
                name: "Gym Bros".to_string(),
                emoji: Some("\u{1f4aa}".to_string()),
                member_count: 5,
                members: vec![kael.clone(), jayden.clone()],
                invite_code: "LIFT-IT".to_string(),
                last_activity: Some(mins(180)),
                unread_count: Some(1),
            },
        ];

        let chats = vec![
            Chat {
                id: "chat1".to_string(),
                kind: ChatKind::Dm,
                name: "Kael".to_string(),
                avatar: None,
                participants: vec![kael.clone()],
                last_message: Some(message("m1", kael, "Yo, you pulling up to Alchemist later?", mins(5), false)),
                unread_count: 2,
                crew: None,
            },
            Chat {
                id: "chat2".to_string(),
                kind: ChatKind::Crew,
                name: "Day Ones".to_string(),
                avatar: None,
                participants: users[..4].to_vec(),
                last_message: Some(message("m2", zara, "Who's free this weekend?", mins(30), true)),
                unread_count: 3,
                crew: Some(crews[0].clone()),
            },
            Chat {
                id: "chat3".to_string(),
                kind: ChatKind::Dm,
                name: "Zara".to_string(),
                avatar: None,
                participants: vec![zara.clone()],
                last_message: Some(message("m3", zara, "Thanks for linking earlier! \u{1f64c}", mins(120), true)),
                unread_count: 0,
                crew: None,
            },
            Chat {
                id: "chat4".to_string(),
                kind: ChatKind::Crew,
                name: "Work Fam".to_string(),
                avatar: None,
                participants: users.clone(),
                last_message: Some(message("m4", mwangi, "Happy Friday everyone! \u{1f389}", mins(300), true)),
                unread_count: 0,
                crew: Some(crews[1].clone()),
            },
        ];

        let messages = vec![
            message("msg1", kael, "Yo what's the move tonight?", mins(60), true),
            message("msg2", &current_user, "Not sure yet, thinking Alchemist maybe", mins(55), true),
            message("msg3", kael, "Bet, I'm down. What time?", mins(50), true),
            message("msg4", &current_user, "Like 9ish? I'll post a plot when I'm heading out", mins(45), true),
            message("msg5", kael, "Yo, you pulling up to Alchemist later?", mins(5), false),
        ];

        let comments = vec![
            Comment {
                id: "c1".to_string(),
                author: zara.clone(),
                content: "On my way! Save me a spot \u{1f525}".to_string(),
                created_at: mins(10),
            },
            Comment {
                id: "c2".to_string(),
                author: mwangi.clone(),
                content: "What's the dress code?".to_string(),
                created_at: mins(8),
            },
            Comment {
                id: "c3".to_string(),
                author: kael.clone(),
                content: "Come as you are, vibes only \u{1f64c}".to_string(),
                created_at: mins(5),
            },
        ];

        tracing::debug!(
            users = users.len(),
            plots = plots.len(),
            crews = crews.len(),
            chats = chats.len(),
            "Seeded mock store"
        );

        Self {
            current_user,
            users,
            plots,
            crews,
            chats,
            messages,
            comments,
        }
    }

    /// The signed-in user.
    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    pub fn crews(&self) -> &[Crew] {
        &self.crews
    }

    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    /// The message sequence shown in a chat room.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Comments shown under a plot.
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        if self.current_user.id == id {
            return Some(&self.current_user);
        }
        self.users.iter().find(|u| u.id == id)
    }

    pub fn plot(&self, id: &str) -> Option<&Plot> {
        self.plots.iter().find(|p| p.id == id)
    }

    pub fn chat(&self, id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| c.id == id)
    }

    pub fn crew(&self, id: &str) -> Option<&Crew> {
        self.crews.iter().find(|c| c.id == id)
    }

    /// Finds a crew by invite code, ignoring case and surrounding spaces.
    pub fn crew_by_invite_code(&self, code: &str) -> Option<&Crew> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.crews
            .iter()
            .find(|c| c.invite_code.eq_ignore_ascii_case(code))
    }

    /// The crew chat linked to a crew.
    pub fn chat_for_crew(&self, crew_id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| {
            c.kind == ChatKind::Crew && c.crew.as_ref().is_some_and(|crew| crew.id == crew_id)
        })
    }

    /// The direct-message chat with a user.
    pub fn dm_with(&self, user_id: &str) -> Option<&Chat> {
        self.chats.iter().find(|c| {
            c.kind == ChatKind::Dm && c.primary_participant().is_some_and(|u| u.id == user_id)
        })
    }
}
