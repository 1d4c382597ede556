use yew::prelude::*;

mod app;
mod comment_view;
mod composer;
mod feed_view;
mod login;
mod post_view;
mod reaction_bar;

pub use app::App;
pub use comment_view::CommentView;
pub use composer::Composer;
pub use feed_view::{FeedAction, FeedView};
pub use login::Login;
pub use post_view::PostView;
pub use reaction_bar::ReactionBar;

/// Submit a textarea's trimmed content on Enter, Shift+Enter inserting a newline
pub fn submit_on_enter(on_submit: Callback<String>) -> Callback<KeyboardEvent> {
    Callback::from(move |e: KeyboardEvent| {
        if e.key() != "Enter" || e.shift_key() {
            return;
        }
        e.prevent_default();
        let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
        let text = input.value();
        if text.trim().is_empty() {
            return;
        }
        input.set_value("");
        on_submit.emit(text);
    })
}
