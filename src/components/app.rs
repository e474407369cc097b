use std::rc::Rc;

use yew::prelude::*;

use super::board::Board;
use crate::model::{BigHit, BoardConfig, Color, DartHit, OverlayColors, RegionId};
use crate::state::Vector2;

/// Overlay colour of the region under the finger.
const HIGHLIGHT: Color = Color::new(255, 214, 0, 0.55);

/// Home view centred on the 20 segment.
const TWENTY_HOME: (Vector2, f64) = (Vector2::new(0.0, -95.0), 2.2);

/// Host-side view of the board's notifications.
#[derive(Clone, Debug, PartialEq)]
pub struct HostState {
    pub overlay: Rc<OverlayColors>,
    pub big_hit: Option<BigHit>,
    pub status: String,
    pub resets: u32,
    pub zoomed_home: bool,
}

impl Default for HostState {
    fn default() -> Self {
        Self {
            overlay: Rc::new(OverlayColors::new()),
            big_hit: None,
            status: "Touch and hold to aim".to_string(),
            resets: 0,
            zoomed_home: false,
        }
    }
}

pub enum HostAction {
    StartSelection,
    StopSelection,
    Activate(RegionId),
    Deactivate(RegionId),
    Trigger(RegionId),
    ScreenViewReset,
    ToggleHome,
}

impl Reducible for HostState {
    type Action = HostAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use HostAction::*;
        let mut new = (*self).clone();
        match action {
            StartSelection => new.status = "Aiming".to_string(),
            StopSelection => {
                if new.big_hit.is_some_and(|b| b.is_shadow) {
                    new.big_hit = None;
                }
                new.status = "No throw".to_string();
            }
            Activate(region) => {
                Rc::make_mut(&mut new.overlay)
                    .entry(region.number)
                    .or_default()
                    .insert(region.part, HIGHLIGHT);
                new.big_hit = Some(BigHit {
                    hit: DartHit::from(region),
                    is_shadow: true,
                });
            }
            Deactivate(region) => {
                let overlay = Rc::make_mut(&mut new.overlay);
                if let Some(parts) = overlay.get_mut(&region.number) {
                    parts.remove(&region.part);
                    if parts.is_empty() {
                        overlay.remove(&region.number);
                    }
                }
                if new.big_hit.is_some_and(|b| b.is_shadow && b.hit == DartHit::from(region)) {
                    new.big_hit = None;
                }
            }
            Trigger(region) => {
                let hit = DartHit::from(region);
                new.big_hit = Some(BigHit {
                    hit,
                    is_shadow: false,
                });
                new.status = format!("Hit {}", hit.label());
            }
            ScreenViewReset => new.resets += 1,
            ToggleHome => new.zoomed_home = !new.zoomed_home,
        }
        new.into()
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: Rc<BoardConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let host = use_reducer(HostState::default);

    let (position, zoom) = if host.zoomed_home {
        TWENTY_HOME
    } else {
        (Vector2::from(props.config.initial_position), props.config.initial_zoom)
    };

    let dispatch = |make: fn(RegionId) -> HostAction| {
        let host = host.clone();
        Callback::from(move |region: RegionId| host.dispatch(make(region)))
    };
    let notify = |action: fn() -> HostAction| {
        let host = host.clone();
        Callback::from(move |_: ()| host.dispatch(action()))
    };
    let toggle_home = {
        let host = host.clone();
        Callback::from(move |_: MouseEvent| host.dispatch(HostAction::ToggleHome))
    };
    let home_label = if host.zoomed_home { "Whole board" } else { "Zoom on 20" };

    html! {<div style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#10141a;">
        <Board
            config={props.config.clone()}
            initial_zoom={zoom}
            initial_position={position}
            overlay_colors={Some(host.overlay.clone())}
            big_hit_display={host.big_hit}
            on_start_selection={notify(|| HostAction::StartSelection)}
            on_stop_selection={notify(|| HostAction::StopSelection)}
            on_activate_element={dispatch(HostAction::Activate)}
            on_deactivate_element={dispatch(HostAction::Deactivate)}
            on_trigger_element={dispatch(HostAction::Trigger)}
            on_screen_view_reset={notify(|| HostAction::ScreenViewReset)}
        />
        <div style="position:absolute; left:12px; right:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; display:flex; gap:12px; align-items:center; color:#e6edf3; font-family:sans-serif; font-size:14px;">
            <span style="flex:1;">{ host.status.clone() }</span>
            <span style="opacity:0.7;">{ format!("resets: {}", host.resets) }</span>
            <button onclick={toggle_home}>{ home_label }</button>
        </div>
    </div>}
}
