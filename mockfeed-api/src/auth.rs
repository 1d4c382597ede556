use sha2::{Digest, Sha256};

/// One accepted login, stored as SHA-256 digests of the trimmed fields
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Credential {
    pub user_digest: &'static str,
    pub pass_digest: &'static str,

    /// Page to navigate to once logged in
    pub redirect_to: &'static str,
}

pub const CREDENTIALS: &[Credential] = &[
    Credential {
        user_digest: "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918",
        pass_digest: "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918",
        redirect_to: "index.html",
    },
    Credential {
        user_digest: "e5d6dc87d0a3d4c0c374ec7f5c8b16d3e850e24dd1fbf0e5b81c3783a4bc7f7a",
        pass_digest: "e5d6dc87d0a3d4c0c374ec7f5c8b16d3e850e24dd1fbf0e5b81c3783a4bc7f7a",
        redirect_to: "index.html",
    },
    Credential {
        user_digest: "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08",
        pass_digest: "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08",
        redirect_to: "index.html",
    },
];

#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("Wrong username")]
    UnknownUser,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Wrong username and password")]
    UnknownUserAndPassword,

    #[error("Please turn off caps lock")]
    CapsLock,
}

/// Lower-case hex SHA-256 of a login field
pub fn digest(field: &str) -> String {
    hex::encode(Sha256::digest(field.as_bytes()))
}

pub fn check_login(user: &str, pass: &str) -> Result<&'static Credential, LoginError> {
    check_login_against(CREDENTIALS, user, pass)
}

pub fn check_login_against<'a>(
    table: &'a [Credential],
    user: &str,
    pass: &str,
) -> Result<&'a Credential, LoginError> {
    let user = digest(user.trim());
    let pass = digest(pass.trim());
    match table.iter().find(|c| c.user_digest == user) {
        Some(c) if c.pass_digest == pass => Ok(c),
        Some(_) => Err(LoginError::WrongPassword),
        None if table.iter().any(|c| c.pass_digest == pass) => Err(LoginError::UnknownUser),
        None => Err(LoginError::UnknownUserAndPassword),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_lowercase_hex_sha256() {
        assert_eq!(
            digest("admin"),
            "8c6976e5b5410415bde908bd4dee15dfb167a9c873fc4bb8a81f6f2ab448a918"
        );
        assert_eq!(
            digest("test"),
            "9f86d081884c7d659a2feaa0c55ad015a3bf4f1b2b0b822cd15d6c15b0f00a08"
        );
    }

    #[test]
    fn login_outcomes() {
        assert_eq!(check_login("admin", "admin").map(|c| c.redirect_to), Ok("index.html"));
        assert_eq!(check_login("  test ", "test\n").map(|c| c.redirect_to), Ok("index.html"));
        assert_eq!(check_login("admin", "test"), Err(LoginError::WrongPassword));
        assert_eq!(check_login("nobody", "test"), Err(LoginError::UnknownUser));
        assert_eq!(
            check_login("nobody", "nothing"),
            Err(LoginError::UnknownUserAndPassword)
        );
    }

    #[test]
    fn every_login_lands_on_the_feed_page() {
        for c in CREDENTIALS {
            assert_eq!(c.redirect_to, "index.html", "{c:?}");
        }
    }

    #[test]
    fn login_is_case_sensitive() {
        assert_eq!(check_login("Admin", "admin"), Err(LoginError::UnknownUser));
    }

    #[test]
    fn custom_table() {
        let alice = digest("alice");
        let table = [Credential {
            user_digest: Box::leak(alice.into_boxed_str()),
            pass_digest: "0000",
            redirect_to: "feed.html",
        }];
        assert_eq!(
            check_login_against(&table, "alice", "x"),
            Err(LoginError::WrongPassword)
        );
        assert_eq!(
            check_login_against(&table, "bob", "x"),
            Err(LoginError::UnknownUserAndPassword)
        );
    }
}
