//! Door state machine.
//!
//! Each movable part is either open or closed. A click on a closed door plays
//! its segment in reverse, a click on an open door plays it forward, and the
//! flag flips at click time rather than when the animation ends.

use showroom_animation::PlayDirection;

/// A movable part of the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Door {
    Bottom,
    Right,
    Left,
}

impl Door {
    /// Every door, in segment order.
    pub const ALL: [Door; 3] = [Door::Bottom, Door::Right, Door::Left];

    /// Index of this door's segment (and track) in the source clip.
    #[must_use]
    pub const fn segment_index(self) -> usize {
        match self {
            Door::Bottom => 0,
            Door::Right => 1,
            Door::Left => 2,
        }
    }

    /// Door toggled by the hotspot marker at `index`.
    #[must_use]
    pub const fn from_hotspot(index: usize) -> Option<Door> {
        match index {
            0 => Some(Door::Left),
            1 => Some(Door::Right),
            2 => Some(Door::Bottom),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Door::Bottom => "bottom",
            Door::Right => "right",
            Door::Left => "left",
        }
    }
}

/// Open/closed flags for every door. All doors start open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorStates {
    open: [bool; Door::ALL.len()],
}

impl Default for DoorStates {
    fn default() -> Self {
        Self {
            open: [true; Door::ALL.len()],
        }
    }
}

impl DoorStates {
    #[must_use]
    pub fn is_open(&self, door: Door) -> bool {
        self.open[door.segment_index()]
    }

    /// Direction a click on `door` would play, without changing state.
    #[must_use]
    pub fn direction_for(&self, door: Door) -> PlayDirection {
        if self.is_open(door) {
            PlayDirection::Forward
        } else {
            PlayDirection::Reverse
        }
    }

    /// Flips `door` and returns the direction its segment must play in.
    pub fn toggle(&mut self, door: Door) -> PlayDirection {
        let direction = self.direction_for(door);
        let flag = &mut self.open[door.segment_index()];
        *flag = !*flag;
        direction
    }
}
