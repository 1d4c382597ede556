use mockfeed_client::api::{ReactionKind, Reactions, UserId};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ReactionBarProps {
    pub reactions: Reactions,
    pub user: UserId,
    pub on_react: Callback<ReactionKind>,
}

#[function_component(ReactionBar)]
pub fn reaction_bar(p: &ReactionBarProps) -> Html {
    let held = p.reactions.of(&p.user);
    html! {
        <div class="reactions btn-group btn-group-sm">
            { for ReactionKind::ALL.iter().map(|&kind| html! {
                <button
                    type="button"
                    class={ classes!("btn", "reaction", (held == Some(kind)).then(|| "active")) }
                    title={ label(kind) }
                    onclick={ p.on_react.reform(move |_| kind) }
                >
                    { icon(kind) }
                    <span class="reaction-count ms-1">{ p.reactions.counts.get(kind).to_string() }</span>
                </button>
            }) }
        </div>
    }
}

fn icon(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Likes => "👍",
        ReactionKind::Hearts => "❤️",
        ReactionKind::Angry => "😠",
    }
}

fn label(kind: ReactionKind) -> &'static str {
    match kind {
        ReactionKind::Likes => "Like",
        ReactionKind::Hearts => "Love",
        ReactionKind::Angry => "Angry",
    }
}
