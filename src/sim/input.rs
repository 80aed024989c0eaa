use bitflags::bitflags;

bitflags! {
    /// Logical actions a frontend can report, independent of key layout.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct Action: u16 {
        const FORWARD        = 1 << 0;
        const BACK           = 1 << 1;
        const STRAFE_LEFT    = 1 << 2;
        const STRAFE_RIGHT   = 1 << 3;
        const TURN_LEFT      = 1 << 4;
        const TURN_RIGHT     = 1 << 5;
        const FOV_NARROW     = 1 << 6;
        const FOV_WIDEN      = 1 << 7;
        const TOGGLE_MINIMAP = 1 << 8;
        const PAUSE          = 1 << 9;
    }
}

/// Keyboard state for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    /// Actions whose key is currently held.
    pub held: Action,
    /// Actions whose key went down this frame (edge-triggered).
    pub pressed: Action,
    /// Window closed / Escape.
    pub quit: bool,
}

/// Per-frame movement intent derived from held actions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputCmd {
    pub forward: f64, // –1 … +1
    pub strafe: f64,  // –1 … +1  (left / right)
    pub turn: f64,    // –1 … +1  (left / right)
    pub zoom: f64,    // –1 … +1  (narrow / widen)
}

/// `+1` / `-1` / `0` for a pair of opposing actions.
#[inline]
fn axis(held: Action, pos: Action, neg: Action) -> f64 {
    match (held.contains(pos), held.contains(neg)) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

impl InputCmd {
    pub fn from_snapshot(snap: &InputSnapshot) -> Self {
        let h = snap.held;
        Self {
            forward: axis(h, Action::FORWARD, Action::BACK),
            strafe: axis(h, Action::STRAFE_RIGHT, Action::STRAFE_LEFT),
            turn: axis(h, Action::TURN_RIGHT, Action::TURN_LEFT),
            zoom: axis(h, Action::FOV_WIDEN, Action::FOV_NARROW),
        }
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}
