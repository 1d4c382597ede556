use regex::Regex;

use crate::api::Author;

lazy_static::lazy_static! {
    static ref AVATAR_LINE: Regex = Regex::new(r"(?i)^https?://\S+\.(jpg|jpeg|png|gif)$")
        .expect("avatar line regex does not compile");
}

/// Raw comment text split into its author overrides and its body
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CommentInput {
    pub avatar: Option<String>,
    pub name: Option<String>,
    pub content: String,
}

/// Lines that are an image URL override the avatar, lines starting with `@`
/// override the display name, and the remaining lines form the body
pub fn parse_comment_input(raw: &str) -> CommentInput {
    let mut res = CommentInput::default();
    let mut body = Vec::new();
    for line in raw.lines() {
        let trimmed = line.trim();
        if AVATAR_LINE.is_match(trimmed) {
            res.avatar = Some(trimmed.to_string());
        } else if let Some(name) = trimmed.strip_prefix('@') {
            let name = name.trim();
            if !name.is_empty() {
                res.name = Some(name.to_string());
            }
        } else {
            body.push(line);
        }
    }
    res.content = body.join("\n").trim().to_string();
    res
}

impl CommentInput {
    /// The author to record, falling back to `profile` for anything not overridden
    pub fn author(&self, profile: &Author) -> Author {
        Author {
            name: self.name.clone().unwrap_or_else(|| profile.name.clone()),
            username: profile.username.clone(),
            avatar: self.avatar.clone().unwrap_or_else(|| profile.avatar.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Author {
        Author {
            name: String::from("Me"),
            username: String::from("@me"),
            avatar: String::from("me.png"),
        }
    }

    #[test]
    fn avatar_name_and_body() {
        let input = parse_comment_input("https://x.com/a.png\n@Alice\nhello");
        assert_eq!(
            input,
            CommentInput {
                avatar: Some(String::from("https://x.com/a.png")),
                name: Some(String::from("Alice")),
                content: String::from("hello"),
            }
        );
        let author = input.author(&profile());
        assert_eq!(author.name, "Alice");
        assert_eq!(author.avatar, "https://x.com/a.png");
        assert_eq!(author.username, "@me");
    }

    #[test]
    fn plain_text_uses_profile() {
        let input = parse_comment_input("just text");
        assert_eq!(input.content, "just text");
        assert_eq!(input.author(&profile()), profile());
    }

    #[test]
    fn body_lines_keep_their_order() {
        let input = parse_comment_input("one\n@Bob\ntwo\nHTTP://cdn.example.org/x/y.JPEG\nthree");
        assert_eq!(input.content, "one\ntwo\nthree");
        assert_eq!(input.name.as_deref(), Some("Bob"));
        assert_eq!(input.avatar.as_deref(), Some("HTTP://cdn.example.org/x/y.JPEG"));
    }

    #[test]
    fn urls_that_are_not_images_stay_in_the_body() {
        for line in [
            "https://x.com/a.png?size=2",
            "see https://x.com/a.png",
            "https://x.com/a.webp",
            "ftp://x.com/a.png",
        ] {
            let input = parse_comment_input(line);
            assert_eq!(input.avatar, None, "{line}");
            assert_eq!(input.content, line);
        }
    }

    #[test]
    fn overrides_only_is_an_empty_body() {
        let input = parse_comment_input("@Alice\nhttps://x.com/a.gif");
        assert_eq!(input.content, "");
    }

    #[test]
    fn lone_at_sign_is_ignored() {
        let input = parse_comment_input("@\nhi");
        assert_eq!(input.name, None);
        assert_eq!(input.content, "hi");
    }
}
