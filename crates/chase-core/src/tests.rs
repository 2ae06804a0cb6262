//! Unit tests for chase-core primitives.

#[cfg(test)]
mod point {
    use crate::Point2;

    #[test]
    fn zero_distance() {
        let p = Point2::new(3.0, 4.0);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn pythagorean_triple() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Point2::new(1.0, 2.345).to_string(), "(1.00, 2.35)");
    }
}

#[cfg(test)]
mod agent {
    use crate::{KinematicAgent, Point2, Role};

    fn agent_at(x: f64, y: f64, speed: f64) -> KinematicAgent {
        KinematicAgent::new(Point2::new(x, y), speed, Role::Evader)
    }

    #[test]
    fn at_target_does_not_move() {
        let mut a = agent_at(5.0, 5.0, 3.0);
        a.advance_toward(Point2::new(5.0, 5.0), 1.0);
        assert_eq!(a.pos, Point2::new(5.0, 5.0));
    }

    #[test]
    fn snaps_to_target_instead_of_overshooting() {
        // Budget 3.0 per step, target only 1.0 away.
        let mut a = agent_at(0.0, 0.0, 3.0);
        a.advance_toward(Point2::new(1.0, 0.0), 1.0);
        assert_eq!(a.pos, Point2::new(1.0, 0.0));
    }

    #[test]
    fn exact_budget_lands_on_target() {
        // distance == speed * dt: the unclamped update must land exactly.
        let mut a = agent_at(0.0, 0.0, 5.0);
        a.advance_toward(Point2::new(5.0, 0.0), 1.0);
        assert!((a.pos.x - 5.0).abs() < 1e-12);
        assert_eq!(a.pos.y, 0.0);
    }

    #[test]
    fn partial_move_shrinks_distance_by_exactly_the_budget() {
        let target = Point2::new(10.0, 10.0);
        let mut a = agent_at(0.0, 0.0, 2.0);
        let before = a.distance_to(target);
        a.advance_toward(target, 0.5); // budget = 1.0
        let after = a.distance_to(target);
        assert!((before - after - 1.0).abs() < 1e-12, "got {before} -> {after}");
    }

    #[test]
    fn partial_move_preserves_direction() {
        let target = Point2::new(8.0, 6.0); // unit vector (0.8, 0.6)
        let mut a = agent_at(0.0, 0.0, 1.0);
        a.advance_toward(target, 1.0);
        assert!((a.pos.x - 0.8).abs() < 1e-12);
        assert!((a.pos.y - 0.6).abs() < 1e-12);
    }

    #[test]
    fn repeated_steps_converge_without_oscillation() {
        let target = Point2::new(4.0, 0.0);
        let mut a = agent_at(0.0, 0.0, 3.0);
        for _ in 0..10 {
            a.advance_toward(target, 1.0);
        }
        // Must sit exactly on the target, not jitter around it.
        assert_eq!(a.pos, target);
    }
}

#[cfg(test)]
mod config {
    use crate::{BatchConfig, Point2, ScenarioConfig};

    fn valid_scenario() -> ScenarioConfig {
        ScenarioConfig {
            field_size: 100.0,
            safe_zone: Point2::new(50.0, 50.0),
            pursuer_speed: 5.0,
            evader_speed: 4.0,
            capture_radius: 1.0,
            step_duration: 0.1,
        }
    }

    #[test]
    fn valid_config_passes() {
        let cfg = BatchConfig { scenario: valid_scenario(), num_trials: 100, seed: 42 };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_speeds_and_step() {
        for mutate in [
            (|s: &mut ScenarioConfig| s.pursuer_speed = 0.0) as fn(&mut ScenarioConfig),
            |s| s.evader_speed = -1.0,
            |s| s.step_duration = 0.0,
            |s| s.capture_radius = 0.0,
            |s| s.pursuer_speed = f64::NAN,
            |s| s.field_size = f64::INFINITY,
        ] {
            let mut s = valid_scenario();
            mutate(&mut s);
            assert!(s.validate().is_err(), "accepted bad scenario: {s:?}");
        }
    }

    #[test]
    fn rejects_zero_trials() {
        let cfg = BatchConfig { scenario: valid_scenario(), num_trials: 0, seed: 42 };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn step_cap_formula() {
        // floor(2 * 100 / 4 / 0.1) = 500
        assert_eq!(valid_scenario().step_cap(), 500);
    }
}

#[cfg(test)]
mod rng {
    use crate::TrialRng;

    #[test]
    fn same_attempt_same_stream() {
        let mut a = TrialRng::for_attempt(42, 7);
        let mut b = TrialRng::for_attempt(42, 7);
        for _ in 0..16 {
            let x: f64 = a.gen_range(0.0..10.0);
            let y: f64 = b.gen_range(0.0..10.0);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn different_attempts_diverge() {
        let mut a = TrialRng::for_attempt(42, 1);
        let mut b = TrialRng::for_attempt(42, 2);
        let xs: Vec<f64> = (0..8).map(|_| a.gen_range(0.0..10.0)).collect();
        let ys: Vec<f64> = (0..8).map(|_| b.gen_range(0.0..10.0)).collect();
        assert_ne!(xs, ys);
    }
}

#[cfg(test)]
mod outcome {
    use crate::outcome::round2;
    use crate::{Outcome, TrialRecord};

    #[test]
    fn record_rounds_to_two_decimals() {
        let r = TrialRecord::new(1, Outcome::Safe, 1.2345, 9.876, 0.004);
        assert_eq!(r.time_s, 1.23);
        assert_eq!(r.evader_x, 9.88);
        assert_eq!(r.evader_y, 0.0);
    }

    #[test]
    fn labels() {
        assert_eq!(Outcome::Caught.as_str(), "Caught");
        assert_eq!(Outcome::Safe.as_str(), "Safe");
        assert_eq!(Outcome::Timeout.as_str(), "Timeout");
    }

    #[test]
    fn round2_midpoints() {
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
    }
}
