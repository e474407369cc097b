// Board component: touch events and the tick interval drive the GestureController.
use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, TouchEvent, TouchList};
use yew::prelude::*;

use super::board_region::{BoardBull, BoardRim, BoardSlice, bull_overlay, sector_overlay};
use super::score_label::ScoreLabel;
use crate::animation::AnimationLoop;
use crate::error::Result;
use crate::geometry::Dartboard;
use crate::model::{
    BOARD_SLICE_NUMBERS, BigHit, BoardConfig, OverlayColors, RIM_NUMBER, RegionId, SlicePart,
};
use crate::state::{AnimationToken, BoardEvent, GestureController, ScreenMapping, TouchPoint, Vector2};
use crate::util;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub config: Rc<BoardConfig>,
    /// Home zoom; clamped to `[1, max_zoom]`.
    pub initial_zoom: f64,
    pub initial_position: Vector2,
    #[prop_or_default]
    pub overlay_colors: Option<Rc<OverlayColors>>,
    #[prop_or_default]
    pub big_hit_display: Option<BigHit>,
    #[prop_or_default]
    pub on_start_selection: Callback<()>,
    #[prop_or_default]
    pub on_stop_selection: Callback<()>,
    #[prop_or_default]
    pub on_activate_element: Callback<RegionId>,
    #[prop_or_default]
    pub on_deactivate_element: Callback<RegionId>,
    #[prop_or_default]
    pub on_trigger_element: Callback<RegionId>,
    #[prop_or_default]
    pub on_screen_view_reset: Callback<()>,
}

#[derive(Clone)]
struct HostCallbacks {
    start_selection: Callback<()>,
    stop_selection: Callback<()>,
    activate: Callback<RegionId>,
    deactivate: Callback<RegionId>,
    trigger: Callback<RegionId>,
    screen_view_reset: Callback<()>,
}

impl HostCallbacks {
    fn from_props(props: &BoardProps) -> Self {
        Self {
            start_selection: props.on_start_selection.clone(),
            stop_selection: props.on_stop_selection.clone(),
            activate: props.on_activate_element.clone(),
            deactivate: props.on_deactivate_element.clone(),
            trigger: props.on_trigger_element.clone(),
            screen_view_reset: props.on_screen_view_reset.clone(),
        }
    }

    fn emit(&self, event: BoardEvent) {
        match event {
            BoardEvent::StartSelection => self.start_selection.emit(()),
            BoardEvent::StopSelection => self.stop_selection.emit(()),
            BoardEvent::Activate(region) => self.activate.emit(region),
            BoardEvent::Deactivate(region) => self.deactivate.emit(region),
            BoardEvent::Trigger(region) => self.trigger.emit(region),
            BoardEvent::ScreenViewReset => self.screen_view_reset.emit(()),
        }
    }
}

struct Driver {
    controller: GestureController,
    animation: Option<AnimationLoop>,
    tick_fn: Option<Function>,
    callbacks: HostCallbacks,
    redraw: UseForceUpdateHandle,
}

type SharedDriver = Rc<RefCell<Driver>>;

impl Driver {
    fn sync_animation(&mut self) -> Result<()> {
        let wanted = self.controller.scheduled();
        match (self.animation.as_mut(), self.tick_fn.as_ref()) {
            (Some(animation), Some(tick_fn)) => animation.sync(wanted, tick_fn),
            _ => Ok(()),
        }
    }

    fn teardown(&mut self) {
        if let Some(animation) = self.animation.as_mut() {
            animation.cancel();
        }
        self.animation = None;
        self.tick_fn = None;
        self.controller.teardown();
    }

    fn run(
        shared: &SharedDriver,
        mapping: Option<ScreenMapping>,
        step: impl FnOnce(&mut GestureController) -> Vec<BoardEvent>,
    ) {
        let (events, callbacks, redraw) = {
            let mut driver = shared.borrow_mut();
            if let Some(mapping) = mapping {
                driver.controller.set_viewport(mapping.viewport());
            }
            let before = driver.controller.screen_view();
            let events = step(&mut driver.controller);
            if let Err(err) = driver.sync_animation() {
                log::error!("{}", err);
            }
            let moved = driver.controller.screen_view() != before;
            if !events.is_empty() {
                log::trace!(
                    "{:?} in {:?}, active {:?}",
                    events,
                    driver.controller.phase(),
                    driver.controller.active_region()
                );
            }
            (
                events,
                driver.callbacks.clone(),
                moved.then(|| driver.redraw.clone()),
            )
        };
        for event in events {
            callbacks.emit(event);
        }
        if let Some(redraw) = redraw {
            redraw.force_update();
        }
    }
}

fn mapping_of(node: &NodeRef) -> Option<ScreenMapping> {
    let rect = node.cast::<Element>()?.get_bounding_client_rect();
    Some(ScreenMapping::new(rect.left(), rect.top(), rect.width(), rect.height()))
}

fn touch_points(list: &TouchList, mapping: &ScreenMapping) -> Vec<TouchPoint> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| {
            let screen = mapping.to_screen(f64::from(t.client_x()), f64::from(t.client_y()));
            TouchPoint::new(t.identifier(), screen)
        })
        .collect()
}

#[derive(Clone, Copy)]
enum TouchKind {
    Start,
    Move,
    End,
    Cancel,
}

fn touch_handler(driver: &SharedDriver, svg_ref: &NodeRef, kind: TouchKind) -> Callback<TouchEvent> {
    let driver = driver.clone();
    let svg_ref = svg_ref.clone();
    Callback::from(move |e: TouchEvent| {
        let Some(mapping) = mapping_of(&svg_ref) else {
            return;
        };
        let touches = match kind {
            TouchKind::Start | TouchKind::Move => touch_points(&e.touches(), &mapping),
            TouchKind::End | TouchKind::Cancel => touch_points(&e.changed_touches(), &mapping),
        };
        Driver::run(&driver, Some(mapping), |controller| match kind {
            TouchKind::Start => controller.touch_start(&touches, &Dartboard),
            TouchKind::Move => controller.touch_move(&touches, &Dartboard),
            TouchKind::End => controller.touch_end(&touches),
            TouchKind::Cancel => controller.touch_cancel(&touches),
        });
    })
}

#[function_component(Board)]
pub fn board(props: &BoardProps) -> Html {
    let svg_ref = use_node_ref();
    let redraw = use_force_update();
    let driver = {
        let props = props.clone();
        use_mut_ref(move || Driver {
            controller: GestureController::new(&BoardConfig {
                initial_zoom: props.initial_zoom,
                initial_position: [props.initial_position.x, props.initial_position.y],
                ..(*props.config).clone()
            }),
            animation: None,
            tick_fn: None,
            callbacks: HostCallbacks::from_props(&props),
            redraw,
        })
    };
    if let Ok(mut d) = driver.try_borrow_mut() {
        d.callbacks = HostCallbacks::from_props(props);
    }

    // Mount: tick closure, interval owner, resize listener.
    {
        let driver = driver.clone();
        let svg_ref = svg_ref.clone();
        use_effect_with((), move |_| {
            let tick_cb = {
                let driver = driver.clone();
                Closure::wrap(Box::new(move |raw: f64| {
                    let Some(token) = AnimationToken::from_js(raw) else {
                        log::warn!("tick with malformed token {}", raw);
                        return;
                    };
                    Driver::run(&driver, None, |controller| controller.tick(token, &Dartboard));
                }) as Box<dyn FnMut(f64)>)
            };
            let resize_cb = {
                let driver = driver.clone();
                let svg_ref = svg_ref.clone();
                Closure::wrap(Box::new(move |_e: web_sys::Event| {
                    if let Some(mapping) = mapping_of(&svg_ref) {
                        driver.borrow_mut().controller.set_viewport(mapping.viewport());
                    }
                }) as Box<dyn FnMut(_)>)
            };
            let window = match util::window() {
                Ok(window) => Some(window),
                Err(err) => {
                    log::error!("{}; board will not animate", err);
                    None
                }
            };
            if let Some(window) = &window {
                if let Err(err) = window
                    .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                {
                    log::warn!("resize listener not installed: {:?}", err);
                }
                let mut d = driver.borrow_mut();
                d.animation = Some(AnimationLoop::new(window.clone()));
                d.tick_fn = Some(tick_cb.as_ref().unchecked_ref::<Function>().clone());
                if let Some(mapping) = mapping_of(&svg_ref) {
                    d.controller.set_viewport(mapping.viewport());
                }
            }
            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                driver.borrow_mut().teardown();
                drop(tick_cb);
                drop(resize_cb);
            }
        });
    }
    // Home changes snap the view without animation.
    {
        let driver = driver.clone();
        use_effect_with(
            (props.initial_position, props.initial_zoom),
            move |(position, zoom)| {
                let (position, zoom) = (*position, *zoom);
                Driver::run(&driver, None, |controller| controller.set_home(position, zoom));
                || ()
            },
        );
    }

    let view = driver.borrow().controller.screen_view();
    let overlay = props.overlay_colors.as_deref();
    let rim_overlay = sector_overlay(overlay, RIM_NUMBER).and_then(|parts| parts.get(&SlicePart::None).copied());
    let slices = BOARD_SLICE_NUMBERS.iter().enumerate().map(|(index, number)| {
        html! { <BoardSlice number={*number} index={index} overlay={sector_overlay(overlay, *number)} /> }
    });

    html! {<div style="position:absolute; inset:0; display:flex; background:#10141a; touch-action:none; user-select:none; -webkit-user-select:none; overflow:hidden;"
        ontouchstart={touch_handler(&driver, &svg_ref, TouchKind::Start)}
        ontouchmove={touch_handler(&driver, &svg_ref, TouchKind::Move)}
        ontouchend={touch_handler(&driver, &svg_ref, TouchKind::End)}
        ontouchcancel={touch_handler(&driver, &svg_ref, TouchKind::Cancel)}>
        <svg ref={svg_ref.clone()} viewBox="-200 -200 400 400" preserveAspectRatio="xMidYMid meet"
            xmlns="http://www.w3.org/2000/svg" style="flex:1; width:100%; height:100%; display:block;">
            <g style={format!("transform:{}; transform-origin:0 0;", view.css_transform())}>
                <BoardRim overlay={rim_overlay} />
                { for slices }
                <BoardBull overlay={bull_overlay(overlay)} />
            </g>
        </svg>
        <ScoreLabel big_hit={props.big_hit_display} />
    </div>}
}
