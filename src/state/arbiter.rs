// Region arbiter: which region is under the tracked touch.
use super::camera::{CoordinateSystem, Vector2};
use super::gesture::BoardEvent;
use crate::model::RegionId;

#[cfg(test)]
#[path = "arbiter_test.rs"]
mod arbiter_test;

pub trait HitSurface {
    /// Topmost region under `screen` when the board is drawn with `cs`.
    fn locate(&self, screen: Vector2, cs: &CoordinateSystem) -> Option<RegionId>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegionArbiter {
    active: Option<RegionId>,
}

impl RegionArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<RegionId> {
        self.active
    }

    pub fn update(
        &mut self,
        surface: &dyn HitSurface,
        screen: Vector2,
        cs: &CoordinateSystem,
        events: &mut Vec<BoardEvent>,
    ) {
        let located = surface.locate(screen, cs);
        if located == self.active {
            return;
        }
        match self.active {
            Some(previous) => events.push(BoardEvent::Deactivate(previous)),
            None => events.push(BoardEvent::StartSelection),
        }
        if let Some(region) = located {
            events.push(BoardEvent::Activate(region));
        }
        log::trace!("active region {:?} -> {:?}", self.active, located);
        self.active = located;
    }

    pub fn commit(&mut self, events: &mut Vec<BoardEvent>) {
        match self.active.take() {
            Some(region) => {
                events.push(BoardEvent::Deactivate(region));
                events.push(BoardEvent::Trigger(region));
            }
            None => events.push(BoardEvent::StopSelection),
        }
    }

    pub fn abandon(&mut self, events: &mut Vec<BoardEvent>) {
        if let Some(region) = self.active.take() {
            events.push(BoardEvent::Deactivate(region));
        }
        events.push(BoardEvent::StopSelection);
    }
}
