use crate::api::{Error, Media, MediaKind};

/// Embed an upload as a `data:` URL, rejecting anything larger than `max_size` bytes
pub fn encode_media(mime: &str, bytes: &[u8], max_size: usize) -> Result<Media, Error> {
    if bytes.len() > max_size {
        return Err(Error::MediaTooLarge {
            size: bytes.len(),
            max: max_size,
        });
    }
    let mime = match mime {
        "" => "application/octet-stream",
        m => m,
    };
    let kind = match mime.starts_with("image/") {
        true => MediaKind::Image,
        false => MediaKind::Video,
    };
    Ok(Media {
        kind,
        url: format!("data:{};base64,{}", mime, base64::encode(bytes)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn images_and_videos() {
        let m = encode_media("image/png", b"abc", 10).unwrap();
        assert_eq!(m.kind, MediaKind::Image);
        assert_eq!(m.url, "data:image/png;base64,YWJj");
        let m = encode_media("video/mp4", b"abc", 10).unwrap();
        assert_eq!(m.kind, MediaKind::Video);
    }

    #[test]
    fn size_limit_is_inclusive() {
        assert!(encode_media("image/png", &[0; 10], 10).is_ok());
        assert_eq!(
            encode_media("image/png", &[0; 11], 10),
            Err(Error::MediaTooLarge { size: 11, max: 10 })
        );
    }

    #[test]
    fn unknown_mime() {
        let m = encode_media("", b"", 10).unwrap();
        assert_eq!(m.url, "data:application/octet-stream;base64,");
    }
}
