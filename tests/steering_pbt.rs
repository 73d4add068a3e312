use flocksim_lib::model::boundary::wrap_position;
use flocksim_lib::model::snapshot::AgentSnapshot;
use flocksim_lib::model::steering::SteeringLogic;
use flocksim_lib::model::state::WanderState;
use flocksim_lib::{Agent, AgentParams, AgentRole, Liveness, Vec2, WorldBounds};
use proptest::prelude::*;
use uuid::Uuid;

const EPS: f32 = 1e-4;

prop_compose! {
    fn arb_vec(range: f32)(
        x in -range..range,
        y in -range..range
    ) -> Vec2 {
        Vec2::new(x, y)
    }
}

prop_compose! {
    fn arb_params()(
        mass in 0.1f32..10.0,
        max_speed in 0.0f32..20.0,
        max_force in 0.0f32..5.0,
        desired_separation in 0.0f32..5.0,
        neighbor_radius in 0.0f32..10.0
    ) -> AgentParams {
        AgentParams {
            mass,
            max_speed,
            max_force,
            desired_separation,
            neighbor_radius,
            chase_radius: 4.0,
        }
    }
}

prop_compose! {
    fn arb_agent()(
        position in arb_vec(20.0),
        velocity in arb_vec(10.0),
        params in arb_params()
    ) -> Agent {
        let velocity = velocity.clamp_length_max(params.max_speed);
        Agent {
            id: Uuid::new_v4(),
            role: AgentRole::Prey,
            position,
            velocity,
            acceleration: Vec2::ZERO,
            params,
            liveness: Liveness::Alive,
            wander: WanderState::default(),
        }
    }
}

fn snapshots(agents: &[Agent]) -> Vec<AgentSnapshot> {
    agents.iter().map(AgentSnapshot::from).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn test_primitives_respect_force_bound(
        agent in arb_agent(),
        target in arb_vec(30.0),
        target_vel in arb_vec(10.0),
        others in prop::collection::vec(arb_agent(), 0..12)
    ) {
        let snaps = snapshots(&others);
        let limit = agent.params.max_force + EPS;
        let forces = [
            ("seek", agent.seek(target)),
            ("flee", agent.flee(target)),
            ("pursue", agent.pursue(target, target_vel, 1.0)),
            ("evade", agent.evade(target, target_vel, 1.0)),
            ("separate", agent.separate(&snaps)),
            ("align", agent.align(&snaps)),
            ("cohesion", agent.cohesion(&snaps)),
            ("avoid", agent.avoid_point(target)),
        ];
        for (name, f) in forces {
            prop_assert!(f.is_finite(), "{} produced non-finite force {}", name, f);
            prop_assert!(f.length() <= limit, "{} force {} exceeds {}", name, f.length(), limit);
        }
    }

    #[test]
    fn test_single_agent_population_yields_zero(agent in arb_agent()) {
        let own = snapshots(std::slice::from_ref(&agent));
        prop_assert_eq!(agent.separate(&own), Vec2::ZERO);
        prop_assert_eq!(agent.align(&own), Vec2::ZERO);
        prop_assert_eq!(agent.cohesion(&own), Vec2::ZERO);
    }

    #[test]
    fn test_finalize_bounds_speed_and_position(
        mut agent in arb_agent(),
        force in arb_vec(1000.0),
        dt in 0.0f32..1.0
    ) {
        let bounds = WorldBounds::default();
        agent.position = wrap_position(agent.position, &bounds);
        agent.apply_force(force);
        agent.finalize_movement(dt, &bounds);
        prop_assert!(agent.velocity.length() <= agent.params.max_speed + EPS);
        prop_assert!(bounds.contains(agent.position), "{} escaped bounds", agent.position);
        prop_assert_eq!(agent.acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_wrap_lands_inside_bounds(
        p in arb_vec(500.0),
        half_w in 0.5f32..50.0,
        half_h in 0.5f32..50.0
    ) {
        let bounds = WorldBounds::from_center(Vec2::new(3.0, -2.0), half_w, half_h);
        let wrapped = wrap_position(p, &bounds);
        prop_assert!(bounds.contains(wrapped), "{} wrapped to {} outside {:?}", p, wrapped, bounds);
        if bounds.contains(p) {
            prop_assert_eq!(wrapped, p);
        }
    }
}
