use std::rc::Rc;

use mockfeed_client::api::{Media, MediaKind};
use yew::prelude::*;

use crate::{ui::FeedAction, util};

#[derive(Clone, PartialEq, Properties)]
pub struct ComposerProps {
    pub max_media_size: usize,
    pub on_action: Callback<FeedAction>,
}

#[derive(Default, PartialEq)]
struct SelectedMedia(Vec<Media>);

enum MediaAction {
    Add(Media),
    Remove(usize),
}

impl Reducible for SelectedMedia {
    type Action = MediaAction;

    fn reduce(self: Rc<Self>, action: MediaAction) -> Rc<Self> {
        let mut media = self.0.clone();
        match action {
            MediaAction::Add(m) => media.push(m),
            MediaAction::Remove(i) if i < media.len() => {
                media.remove(i);
            }
            MediaAction::Remove(_) => return self,
        }
        Rc::new(SelectedMedia(media))
    }
}

#[function_component(Composer)]
pub fn composer(p: &ComposerProps) -> Html {
    let text = use_state(String::new);
    let selected = use_reducer(SelectedMedia::default);

    let on_text = {
        let text = text.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            text.set(input.value())
        })
    };

    let on_files = {
        let dispatcher = selected.dispatcher();
        let max_size = p.max_media_size;
        Callback::from(move |e: Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let files = match input.files() {
                Some(list) => (0..list.length())
                    .filter_map(|i| list.get(i))
                    .collect::<Vec<_>>(),
                None => return,
            };
            // Let the same file be picked again after removing it
            input.set_value("");
            let dispatcher = dispatcher.clone();
            wasm_bindgen_futures::spawn_local(async move {
                for file in files {
                    match util::read_media(file, max_size).await {
                        Ok(media) => dispatcher.dispatch(MediaAction::Add(media)),
                        Err(err) => {
                            tracing::info!(?err, "rejected media file");
                            util::alert(&format!("{err:#}"));
                        }
                    }
                }
            });
        })
    };

    let empty = text.trim().is_empty() && selected.0.is_empty();
    // The feed remounts this component once the post is saved, keeping the draft on failure
    let on_publish = {
        let text = text.clone();
        let selected = selected.clone();
        p.on_action.reform(move |_| FeedAction::CreatePost {
            content: (*text).clone(),
            media: selected.0.clone(),
        })
    };

    html! {
        <div class="composer card mb-3">
            <div class="card-body">
                <textarea
                    class="form-control mb-2"
                    placeholder="What's on your mind?"
                    value={ (*text).clone() }
                    oninput={ on_text }
                />
                <div class="media-preview d-flex flex-wrap">
                    { for selected.0.iter().enumerate().map(|(i, media)| {
                        let dispatcher = selected.dispatcher();
                        html! {
                            <div class="media-preview-item position-relative me-2 mb-2">
                                { media_html(media) }
                                <button
                                    type="button"
                                    class="btn-close position-absolute top-0 end-0"
                                    aria-label="Remove"
                                    onclick={ Callback::from(move |_| dispatcher.dispatch(MediaAction::Remove(i))) }
                                />
                            </div>
                        }
                    }) }
                </div>
                <div class="d-flex justify-content-between">
                    <input
                        type="file"
                        class="form-control w-auto"
                        accept="image/*,video/*"
                        multiple=true
                        onchange={ on_files }
                    />
                    <button
                        type="button"
                        class="btn btn-primary"
                        disabled={ empty }
                        onclick={ on_publish }
                    >
                        { "Post" }
                    </button>
                </div>
            </div>
        </div>
    }
}

pub fn media_html(media: &Media) -> Html {
    match media.kind {
        MediaKind::Image => html! {
            <img class="media-item" src={ media.url.clone() } alt="Post media" />
        },
        MediaKind::Video => html! {
            <video class="media-item" src={ media.url.clone() } controls=true />
        },
    }
}
