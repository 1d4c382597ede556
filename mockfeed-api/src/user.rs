/// Identity under which reactions are recorded
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct UserId(pub String);

/// Author snapshot, copied into each entity at creation time
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Author {
    pub name: String,
    pub username: String,
    pub avatar: String,
}

impl Author {
    pub fn user_id(&self) -> UserId {
        UserId(self.username.clone())
    }
}
