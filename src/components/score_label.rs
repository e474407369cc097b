use yew::prelude::*;

use crate::model::BigHit;

#[derive(Properties, PartialEq, Clone)]
pub struct ScoreLabelProps {
    #[prop_or_default]
    pub big_hit: Option<BigHit>,
}

/// Large hit label floating above the board. A shadow hit is a preview and is drawn dimmed.
#[function_component(ScoreLabel)]
pub fn score_label(props: &ScoreLabelProps) -> Html {
    let Some(big_hit) = props.big_hit else {
        return html! {};
    };
    let opacity = if big_hit.is_shadow { 0.45 } else { 0.95 };
    html! {<div style={format!("position:absolute; left:50%; top:42%; transform:translate(-50%, -50%); pointer-events:none; font-family:sans-serif; font-weight:800; font-size:22vmin; color:#fff; text-shadow:0 0 12px rgba(0,0,0,0.8); opacity:{};", opacity)}>
        { big_hit.hit.label() }
    </div>}
}
