#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Media {
    #[serde(rename = "type")]
    pub kind: MediaKind,

    /// Either a remote address or a `data:` URL
    pub url: String,
}
