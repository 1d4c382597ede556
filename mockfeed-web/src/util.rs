use std::str::FromStr;

use anyhow::anyhow;
use mockfeed_client::{
    api::{Error, Media},
    encode_media,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = "
    export function get_timezone() {
        return Intl.DateTimeFormat().resolvedOptions().timeZone;
    }
")]
extern "C" {
    fn get_timezone() -> String;
}

lazy_static::lazy_static! {
    static ref LOCAL_TZ: chrono_tz::Tz = {
        let name = get_timezone();
        chrono_tz::Tz::from_str(&name).unwrap_or_else(|_| {
            tracing::warn!(name, "host js timezone is not in chrono-tz database, using UTC");
            chrono_tz::UTC
        })
    };
}

pub fn local_tz() -> chrono_tz::Tz {
    *LOCAL_TZ
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        if let Err(err) = w.alert_with_message(message) {
            tracing::error!(?err, message, "failed showing alert");
        }
    }
}

pub fn navigate(target: &str) {
    let res = web_sys::window()
        .ok_or(JsValue::NULL)
        .and_then(|w| w.location().set_href(target));
    if let Err(err) = res {
        tracing::error!(?err, target, "failed to navigate");
    }
}

/// Read an uploaded file into an embeddable [`Media`]
pub async fn read_media(file: web_sys::File, max_size: usize) -> anyhow::Result<Media> {
    let size = file.size() as usize;
    if size > max_size {
        return Err(Error::MediaTooLarge {
            size,
            max: max_size,
        }
        .into());
    }
    let buf = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| anyhow!("reading {:?}: {e:?}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    Ok(encode_media(&file.type_(), &bytes, max_size)?)
}
