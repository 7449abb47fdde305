//! Property-based tests for the physics core using proptest.
//!
//! These tests verify physical invariants across a wide range of body
//! configurations.

use bevy::math::DVec2;
use bevy::prelude::Color;
use proptest::prelude::*;

use super::{Simulator, pairwise_force};
use crate::body::{Body, total_momentum};
use crate::types::{AU_TO_METERS, DEFAULT_TIMESTEP, G};

fn body(name: &str, pos: DVec2, vel: DVec2, mass: f64) -> Body {
    Body::new(name, pos, 1.0, Color::WHITE, mass)
        .and_then(|b| b.with_velocity(vel))
        .unwrap()
}

fn position() -> impl Strategy<Value = DVec2> {
    (-5.0f64..5.0, -5.0f64..5.0).prop_map(|(x, y)| DVec2::new(x, y) * AU_TO_METERS)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Newton's third law: the pull of A on B mirrors the pull of B on A.
    #[test]
    fn prop_pairwise_force_symmetry(
        a in position(),
        b in position(),
        mass_a in 1.0e20f64..1.0e31,
        mass_b in 1.0e20f64..1.0e31,
    ) {
        prop_assume!((a - b).length() > 1.0e6);

        let (on_a, d_ab) = pairwise_force(a, mass_a, b, mass_b, G).unwrap();
        let (on_b, d_ba) = pairwise_force(b, mass_b, a, mass_a, G).unwrap();

        prop_assert_eq!(d_ab, d_ba);
        let residual = (on_a + on_b).length();
        prop_assert!(
            residual <= on_a.length() * 1e-12,
            "Forces not equal and opposite: {:?} vs {:?}", on_a, on_b
        );
        // Attraction points from A toward B
        prop_assert!(on_a.dot(b - a) > 0.0);
    }

    /// Each tick appends exactly one trail point per body, equal to the
    /// position right after that tick.
    #[test]
    fn prop_orbit_path_grows_by_one_per_tick(
        ticks in 1usize..40,
        a in position(),
        b in position(),
    ) {
        prop_assume!((a - b).length() > 0.1 * AU_TO_METERS);

        let mut bodies = vec![
            body("A", a, DVec2::ZERO, 1.0e30),
            body("B", b, DVec2::new(0.0, 2.0e4), 6.0e24),
        ];
        let simulator = Simulator::default();

        for k in 1..=ticks {
            simulator.advance(&mut bodies, DEFAULT_TIMESTEP).unwrap();
            for b in &bodies {
                prop_assert_eq!(b.orbit_path().len(), k);
                prop_assert_eq!(*b.orbit_path().last().unwrap(), b.position());
            }
        }
    }

    /// Synchronous updates do not depend on the order bodies are stored in.
    #[test]
    fn prop_synchronous_update_is_order_independent(
        xs in (0.5f64..1.5, 2.0f64..3.0, 3.5f64..4.5),
        masses in (1.0e24f64..1.0e30, 1.0e24f64..1.0e30, 1.0e24f64..1.0e30),
        vy in (-3.0e4f64..3.0e4, -3.0e4f64..3.0e4, -3.0e4f64..3.0e4),
    ) {
        let forward = vec![
            body("A", DVec2::new(xs.0 * AU_TO_METERS, 0.0), DVec2::new(0.0, vy.0), masses.0),
            body("B", DVec2::new(xs.1 * AU_TO_METERS, 0.0), DVec2::new(0.0, vy.1), masses.1),
            body("C", DVec2::new(xs.2 * AU_TO_METERS, 0.0), DVec2::new(0.0, vy.2), masses.2),
        ];
        let mut reversed: Vec<Body> = forward.iter().rev().cloned().collect();
        let mut forward = forward;

        let simulator = Simulator::default();
        simulator.advance(&mut forward, DEFAULT_TIMESTEP).unwrap();
        simulator.advance(&mut reversed, DEFAULT_TIMESTEP).unwrap();

        for (f, r) in forward.iter().zip(reversed.iter().rev()) {
            prop_assert_eq!(f.position(), r.position());
            prop_assert_eq!(f.velocity(), r.velocity());
        }
    }

    /// Momentum is conserved up to integration round-off.
    #[test]
    fn prop_momentum_conserved_two_body(
        distance_au in 0.3f64..5.0,
        mass_ratio in 1.0e-7f64..1.0,
    ) {
        let star_mass = 1.98892e30;
        let r = distance_au * AU_TO_METERS;
        let v = (G * star_mass / r).sqrt();
        let mut bodies = vec![
            body("Star", DVec2::ZERO, DVec2::ZERO, star_mass),
            body("Planet", DVec2::new(r, 0.0), DVec2::new(0.0, v), star_mass * mass_ratio),
        ];
        let initial = total_momentum(&bodies);
        let scale = bodies[1].momentum().length();

        let simulator = Simulator::default();
        for _ in 0..200 {
            simulator.advance(&mut bodies, DEFAULT_TIMESTEP).unwrap();
        }

        let drift = (total_momentum(&bodies) - initial).length() / scale;
        prop_assert!(drift < 1e-9, "Momentum drift {:e} too large", drift);
    }
}
