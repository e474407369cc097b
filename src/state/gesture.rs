// Touch gesture controller: tracking zoom, edge panning and spring-back.
use super::arbiter::{HitSurface, RegionArbiter};
use super::camera::{CoordinateSystem, Vector2, diff};
use super::touch::{TouchPoint, Viewport};
use crate::model::{BoardConfig, RegionId};

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

const RELEASE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    StartSelection,
    StopSelection,
    Activate(RegionId),
    Deactivate(RegionId),
    Trigger(RegionId),
    ScreenViewReset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationToken(u32);

impl AnimationToken {
    pub fn to_js(self) -> f64 {
        f64::from(self.0)
    }

    pub fn from_js(value: f64) -> Option<Self> {
        if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) && value.fract() == 0.0 {
            Some(Self(value as u32))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GesturePhase {
    Idle,
    Tracking,
    /// Spring-back toward home; `remaining` runs from 1 to 0.
    Releasing { remaining: f64, held_scale: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureTuning {
    pub max_zoom: f64,
    pub tick_interval_ms: u32,
    pub zoom_rate: f64,
    pub saturation: f64,
    pub release_step: f64,
    pub pan_dead_zone: f64,
    pub pan_gain: f64,
}

impl From<&BoardConfig> for GestureTuning {
    fn from(c: &BoardConfig) -> Self {
        Self {
            max_zoom: c.max_zoom,
            tick_interval_ms: c.tick_interval_ms,
            zoom_rate: c.zoom_rate,
            saturation: c.saturation,
            release_step: c.release_step,
            pan_dead_zone: c.pan_dead_zone,
            pan_gain: c.pan_gain,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GestureState {
    pub screen_view: CoordinateSystem,
    pub touch_center: Option<Vector2>,
    pub center_velocity: Vector2,
    pub active_touch: Option<i32>,
    pub touch_screen: Option<Vector2>,
    pub phase: GesturePhase,
    pub animation: Option<AnimationToken>,
}

impl GestureState {
    fn at(view: CoordinateSystem) -> Self {
        Self {
            screen_view: view,
            touch_center: None,
            center_velocity: Vector2::ZERO,
            active_touch: None,
            touch_screen: None,
            phase: GesturePhase::Idle,
            animation: None,
        }
    }
}

/// Pan speed for a finger at `offset` from the viewport centre: zero inside
/// the dead zone, proportional to the overshoot beyond it, per axis.
pub fn pan_velocity(offset: Vector2, viewport: Viewport, dead_zone: f64, gain: f64) -> Vector2 {
    let axis = |value: f64, half: f64| {
        let threshold = half * dead_zone;
        if value > threshold {
            gain * (value - threshold)
        } else if value < -threshold {
            gain * (value + threshold)
        } else {
            0.0
        }
    };
    Vector2::new(
        axis(offset.x, viewport.half_width),
        axis(offset.y, viewport.half_height),
    )
}

#[derive(Debug, Clone)]
pub struct GestureController {
    tuning: GestureTuning,
    home: CoordinateSystem,
    viewport: Viewport,
    state: GestureState,
    arbiter: RegionArbiter,
    next_token: u32,
}

impl GestureController {
    pub fn new(config: &BoardConfig) -> Self {
        let tuning = GestureTuning::from(config);
        let home = home_view(&tuning, config.initial_position.into(), config.initial_zoom);
        Self {
            tuning,
            home,
            viewport: Viewport::default(),
            state: GestureState::at(home),
            arbiter: RegionArbiter::new(),
            next_token: 0,
        }
    }

    pub fn screen_view(&self) -> CoordinateSystem {
        self.state.screen_view
    }

    pub fn phase(&self) -> GesturePhase {
        self.state.phase
    }

    pub fn active_region(&self) -> Option<RegionId> {
        self.arbiter.active()
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn scheduled(&self) -> Option<(AnimationToken, u32)> {
        self.state
            .animation
            .map(|token| (token, self.tuning.tick_interval_ms))
    }

    pub fn set_home(&mut self, position: Vector2, zoom: f64) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        self.home = home_view(&self.tuning, position, zoom);
        if matches!(self.state.phase, GesturePhase::Releasing { .. }) {
            self.state.phase = GesturePhase::Idle;
            self.state.animation = None;
            self.state.touch_center = None;
            self.state.touch_screen = None;
            events.push(BoardEvent::ScreenViewReset);
        }
        self.state.screen_view = self.home;
        log::debug!("home view set to {:?}", self.home);
        events
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint], surface: &dyn HitSurface) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if touches.len() > 1 {
            if self.state.active_touch.is_none() {
                log::debug!("{} touches with nothing tracked, ignored", touches.len());
                return events;
            }
            log::debug!("second touch, aborting gesture");
            self.state.active_touch = None;
            self.arbiter.abandon(&mut events);
            self.start_release();
            return events;
        }
        let Some(touch) = touches.first() else {
            return events;
        };
        log::debug!("touch {} started at {:?}", touch.id, touch.screen);
        self.state.active_touch = Some(touch.id);
        self.state.touch_screen = Some(touch.screen);
        self.state.center_velocity = Vector2::ZERO;
        self.arbiter
            .update(surface, touch.screen, &self.state.screen_view, &mut events);
        self.state.touch_center = Some(self.state.screen_view.to_board_space(touch.screen));
        self.begin(GesturePhase::Tracking);
        events
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint], surface: &dyn HitSurface) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        let Some(touch) = self.tracked(touches) else {
            return events;
        };
        self.state.touch_screen = Some(touch.screen);
        self.arbiter
            .update(surface, touch.screen, &self.state.screen_view, &mut events);
        let view = self.state.screen_view;
        if view.scale < self.tuning.max_zoom * self.tuning.saturation {
            self.state.touch_center = Some(view.to_board_space(touch.screen));
        } else {
            self.state.center_velocity = pan_velocity(
                touch.screen,
                self.viewport,
                self.tuning.pan_dead_zone,
                self.tuning.pan_gain,
            );
        }
        events
    }

    /// `changed` is the list of touches that ended.
    pub fn touch_end(&mut self, changed: &[TouchPoint]) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if self.tracked(changed).is_none() {
            return events;
        }
        log::debug!("touch ended");
        self.state.active_touch = None;
        self.start_release();
        self.arbiter.commit(&mut events);
        for event in &events {
            if let BoardEvent::Trigger(region) = event {
                log::info!("triggered {}", region);
            }
        }
        events
    }

    pub fn touch_cancel(&mut self, changed: &[TouchPoint]) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if self.tracked(changed).is_none() {
            return events;
        }
        log::debug!("touch cancelled");
        self.state.active_touch = None;
        self.arbiter.abandon(&mut events);
        self.start_release();
        events
    }

    pub fn tick(&mut self, token: AnimationToken, surface: &dyn HitSurface) -> Vec<BoardEvent> {
        let mut events = Vec::new();
        if self.state.animation != Some(token) {
            log::trace!("stale tick {:?} ignored", token);
            return events;
        }
        match self.state.phase {
            GesturePhase::Idle => self.state.animation = None,
            GesturePhase::Tracking => {
                self.step_tracking();
                if let Some(screen) = self.state.touch_screen {
                    self.arbiter
                        .update(surface, screen, &self.state.screen_view, &mut events);
                }
            }
            GesturePhase::Releasing {
                remaining,
                held_scale,
            } => self.step_release(remaining, held_scale, &mut events),
        }
        events
    }

    pub fn teardown(&mut self) {
        self.state = GestureState::at(self.state.screen_view);
        self.arbiter = RegionArbiter::new();
    }

    fn tracked(&self, touches: &[TouchPoint]) -> Option<TouchPoint> {
        let id = self.state.active_touch?;
        touches.iter().copied().find(|t| t.id == id)
    }

    fn begin(&mut self, phase: GesturePhase) {
        let token = AnimationToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.state.phase = phase;
        self.state.animation = Some(token);
    }

    fn start_release(&mut self) {
        self.state.center_velocity = Vector2::ZERO;
        self.begin(GesturePhase::Releasing {
            remaining: 1.0,
            held_scale: self.state.screen_view.scale,
        });
    }

    fn step_tracking(&mut self) {
        let t = &self.tuning;
        let view = self.state.screen_view;
        let growth = t.zoom_rate.powf((t.max_zoom - view.scale) / t.max_zoom);
        let new_scale = (view.scale * growth).min(t.max_zoom);
        let focus = self.state.touch_center.unwrap_or(view.center());
        let dt = f64::from(t.tick_interval_ms) / 1000.0;
        self.state.screen_view = view
            .zoom_on_point(focus, new_scale)
            .translate(self.state.center_velocity * dt);
        log::trace!("tracking tick -> {:?}", self.state.screen_view);
    }

    fn step_release(&mut self, remaining: f64, held_scale: f64, events: &mut Vec<BoardEvent>) {
        let step = self.tuning.release_step;
        let zoom_weight = remaining;
        let remaining = remaining - step;
        if remaining <= RELEASE_EPSILON {
            self.state.screen_view = self.home;
            self.state.phase = GesturePhase::Idle;
            self.state.animation = None;
            self.state.touch_center = None;
            self.state.touch_screen = None;
            log::debug!("view back home");
            events.push(BoardEvent::ScreenViewReset);
            return;
        }

        let view = self.state.screen_view;
        let home = self.home;
        let focus = self.state.touch_center.unwrap_or(view.center());
        let zoom_only = view.zoom_on_point(focus, home.scale);
        // Front-loaded share of the remaining offset error.
        let nudge = diff(home.center(), zoom_only.center()) * (step / remaining);
        let target = held_scale * zoom_weight + home.scale * (1.0 - zoom_weight);
        self.state.screen_view = view.zoom_on_point(focus, target).translate(nudge);
        self.state.phase = GesturePhase::Releasing {
            remaining,
            held_scale,
        };
    }
}

fn home_view(tuning: &GestureTuning, position: Vector2, zoom: f64) -> CoordinateSystem {
    let clamped = if zoom.is_finite() {
        zoom.clamp(1.0, tuning.max_zoom)
    } else {
        1.0
    };
    if clamped != zoom {
        log::warn!("initial zoom {} clamped to {}", zoom, clamped);
    }
    CoordinateSystem::new(position, clamped)
}
