//! One trial of the chase, advanced step by step to a terminal outcome.

use chase_core::config::{EVADER_SPAWN_MAX, PURSUER_SPAWN_SPREAD};
use chase_core::{KinematicAgent, Outcome, Point2, Role, ScenarioConfig, TrialRecord, TrialRng};

// ── TrialStatus ──────────────────────────────────────────────────────────────

/// Where a trial stands after a step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrialStatus {
    Running,
    Terminal(Outcome),
}

// ── Trial ────────────────────────────────────────────────────────────────────

/// The live state of one chase: two agents, the scenario parameters, and a
/// step counter.
///
/// Both agents are owned by the trial and discarded with it — nothing is
/// shared across trials except the read-only [`ScenarioConfig`].
pub struct Trial<'a> {
    scenario: &'a ScenarioConfig,
    pursuer: KinematicAgent,
    evader: KinematicAgent,
    steps_completed: u64,
}

impl<'a> Trial<'a> {
    /// Spawn a trial with randomized starting positions.
    ///
    /// The evader starts uniformly in `[0, 10]²`; the pursuer starts at the
    /// evader's position plus independent uniform `[-5, 5]` offsets per axis,
    /// so the chase always begins at close quarters.
    pub fn spawn(scenario: &'a ScenarioConfig, rng: &mut TrialRng) -> Self {
        let evader_start = Point2::new(
            rng.gen_range(0.0..=EVADER_SPAWN_MAX),
            rng.gen_range(0.0..=EVADER_SPAWN_MAX),
        );
        let pursuer_start = Point2::new(
            evader_start.x + rng.gen_range(-PURSUER_SPAWN_SPREAD..=PURSUER_SPAWN_SPREAD),
            evader_start.y + rng.gen_range(-PURSUER_SPAWN_SPREAD..=PURSUER_SPAWN_SPREAD),
        );
        Self::with_positions(scenario, pursuer_start, evader_start)
    }

    /// Build a trial with explicit starting positions (tests, replays).
    pub fn with_positions(
        scenario: &'a ScenarioConfig,
        pursuer_start: Point2,
        evader_start: Point2,
    ) -> Self {
        Self {
            scenario,
            pursuer: KinematicAgent::new(pursuer_start, scenario.pursuer_speed, Role::Pursuer),
            evader: KinematicAgent::new(evader_start, scenario.evader_speed, Role::Evader),
            steps_completed: 0,
        }
    }

    /// Advance one tick and classify the result.
    ///
    /// The pursuer moves first, aiming at the evader's position *before* the
    /// evader's own move this tick.  Terminal predicates are evaluated on the
    /// post-move positions; Caught is checked before Safe, so a tick that
    /// satisfies both is Caught.
    pub fn step(&mut self) -> TrialStatus {
        let evader_pre_step = self.evader.pos;
        self.pursuer
            .advance_toward(evader_pre_step, self.scenario.step_duration);
        self.evader
            .advance_toward(self.scenario.safe_zone, self.scenario.step_duration);
        self.steps_completed += 1;

        if self.pursuer.distance_to(self.evader.pos) <= self.scenario.capture_radius {
            return TrialStatus::Terminal(Outcome::Caught);
        }
        if self.evader.distance_to(self.scenario.safe_zone) <= self.scenario.capture_radius / 2.0 {
            return TrialStatus::Terminal(Outcome::Safe);
        }
        TrialStatus::Running
    }

    /// Drive the trial to a terminal outcome and emit its record.
    ///
    /// Runs at most [`ScenarioConfig::step_cap`] steps; hitting the cap
    /// yields a Timeout record, never an error or an unbounded loop.
    /// Elapsed time is `completed_steps * step_duration`.
    pub fn run(mut self, attempt_id: u32) -> TrialRecord {
        let cap = self.scenario.step_cap();
        let mut outcome = Outcome::Timeout;

        for _ in 0..cap {
            if let TrialStatus::Terminal(o) = self.step() {
                outcome = o;
                break;
            }
        }

        TrialRecord::new(
            attempt_id,
            outcome,
            self.steps_completed as f64 * self.scenario.step_duration,
            self.evader.pos.x,
            self.evader.pos.y,
        )
    }

    /// Steps executed so far.
    #[inline]
    pub fn steps_completed(&self) -> u64 {
        self.steps_completed
    }

    #[inline]
    pub fn pursuer(&self) -> &KinematicAgent {
        &self.pursuer
    }

    #[inline]
    pub fn evader(&self) -> &KinematicAgent {
        &self.evader
    }
}
