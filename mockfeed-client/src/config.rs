use crate::api::Author;

/// Session-wide settings of the feed
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// The single local user, copied into everything it creates
    pub profile: Author,

    /// Initial reveal cutoff of a thread, and how many more a "show more" reveals
    pub reveal_step: usize,

    /// In bytes
    pub max_media_size: usize,

    /// Artificial latency between a successful login and navigating away
    pub login_delay_ms: u64,
}

impl Config {
    /// Default settings, acting as `username`
    pub fn for_user(username: &str) -> Config {
        let mut res = Config::default();
        res.profile.name = username.to_string();
        res.profile.username = format!("@{username}");
        res
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            profile: Author {
                name: String::from("Local User"),
                username: String::from("@local"),
                avatar: String::from("images/avatar.png"),
            },
            reveal_step: 3,
            max_media_size: 10 * 1024 * 1024,
            login_delay_ms: 3000,
        }
    }
}
