//! The kinematic agent — position plus constant speed.
//!
//! # Movement model
//!
//! An agent moves in a straight line toward a target point at constant
//! speed.  One call to [`KinematicAgent::advance_toward`] covers one time
//! step of `dt` seconds, so the travel budget for a step is `speed * dt`.
//!
//! The overshoot clamp uses a strict `distance < max_step` comparison: when
//! the remaining distance is strictly inside the budget, the agent snaps
//! exactly onto the target.  When `distance == max_step` the normal update
//! `pos + unit * max_step` already lands on the target, so the strict
//! comparison loses nothing while keeping the original threshold semantics.

use crate::Point2;

// ── Role ─────────────────────────────────────────────────────────────────────

/// Which side of the chase an agent is on.  Labeling only — the movement
/// math is identical for both roles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Chases the evader's current position each step.
    Pursuer,
    /// Heads for the fixed safe-zone point each step.
    Evader,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Pursuer => write!(f, "pursuer"),
            Role::Evader => write!(f, "evader"),
        }
    }
}

// ── KinematicAgent ───────────────────────────────────────────────────────────

/// A point agent with a fixed speed.
///
/// `speed` is set at construction and never changes; `pos` is mutated only
/// by [`advance_toward`][Self::advance_toward].  Agents live for exactly one
/// trial — build fresh ones per trial instead of resetting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KinematicAgent {
    pub pos: Point2,
    pub speed: f64,
    pub role: Role,
}

impl KinematicAgent {
    pub fn new(pos: Point2, speed: f64, role: Role) -> Self {
        Self { pos, speed, role }
    }

    /// Euclidean distance from the agent to `target`.  Pure; no side effects.
    #[inline]
    pub fn distance_to(&self, target: Point2) -> f64 {
        self.pos.distance_to(target)
    }

    /// Advance one time step of `dt` seconds toward `target`.
    ///
    /// Moves `speed * dt` along the unit direction vector, except:
    /// - already at the target (distance zero): no movement, which also
    ///   guards the unit-vector division;
    /// - target within this step's travel budget: snap exactly onto the
    ///   target, never past it.
    pub fn advance_toward(&mut self, target: Point2, dt: f64) {
        let dx = target.x - self.pos.x;
        let dy = target.y - self.pos.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance == 0.0 {
            return;
        }

        let max_step = self.speed * dt;

        if distance < max_step {
            self.pos = target;
        } else {
            let ux = dx / distance;
            let uy = dy / distance;
            self.pos.x += ux * max_step;
            self.pos.y += uy * max_step;
        }
    }
}
