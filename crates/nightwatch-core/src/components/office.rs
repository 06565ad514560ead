//! Office Components
//!
//! The player's doors, lights and camera monitor.

use nightwatch_events::{Side, Subsystem, SubsystemsSnapshot};

/// Door subsystem on one side of the office.
pub fn door_of(side: Side) -> Subsystem {
    match side {
        Side::Left => Subsystem::LeftDoor,
        Side::Right => Subsystem::RightDoor,
    }
}

/// Light subsystem on one side of the office.
pub fn light_of(side: Side) -> Subsystem {
    match side {
        Side::Left => Subsystem::LeftLight,
        Side::Right => Subsystem::RightLight,
    }
}

/// Independently toggleable power consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subsystems {
    pub camera_active: bool,
    pub left_door_closed: bool,
    pub right_door_closed: bool,
    pub left_light_on: bool,
    pub right_light_on: bool,
}

impl Subsystems {
    pub fn is_active(&self, subsystem: Subsystem) -> bool {
        match subsystem {
            Subsystem::Camera => self.camera_active,
            Subsystem::LeftDoor => self.left_door_closed,
            Subsystem::RightDoor => self.right_door_closed,
            Subsystem::LeftLight => self.left_light_on,
            Subsystem::RightLight => self.right_light_on,
        }
    }

    /// Flips one flag and returns its new value.
    pub fn toggle(&mut self, subsystem: Subsystem) -> bool {
        let flag = match subsystem {
            Subsystem::Camera => &mut self.camera_active,
            Subsystem::LeftDoor => &mut self.left_door_closed,
            Subsystem::RightDoor => &mut self.right_door_closed,
            Subsystem::LeftLight => &mut self.left_light_on,
            Subsystem::RightLight => &mut self.right_light_on,
        };
        *flag = !*flag;
        *flag
    }

    pub fn door_closed(&self, side: Side) -> bool {
        self.is_active(door_of(side))
    }

    pub fn light_on(&self, side: Side) -> bool {
        self.is_active(light_of(side))
    }

    /// Active subsystems in declaration order.
    pub fn active(&self) -> impl Iterator<Item = Subsystem> + '_ {
        Subsystem::ALL.into_iter().filter(|s| self.is_active(*s))
    }

    pub fn any_active(&self) -> bool {
        self.active().next().is_some()
    }

    /// Blackout: every flag off.
    pub fn shut_down(&mut self) {
        *self = Self::default();
    }

    pub fn snapshot(&self) -> SubsystemsSnapshot {
        SubsystemsSnapshot {
            camera_active: self.camera_active,
            left_door_closed: self.left_door_closed,
            right_door_closed: self.right_door_closed,
            left_light_on: self.left_light_on,
            right_light_on: self.right_light_on,
        }
    }
}
