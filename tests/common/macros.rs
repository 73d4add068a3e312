/// Asserts that the agent with the given ID is alive.
#[macro_export]
macro_rules! assert_agent_alive {
    ($flock:expr, $id:expr) => {
        let agent = $flock.agent($id).expect("Agent not found in flock");
        assert!(agent.is_alive(), "Agent {} should be alive but is dead", $id);
    };
}

/// Asserts that the agent with the given ID is dead but still in the population.
#[macro_export]
macro_rules! assert_agent_dead {
    ($flock:expr, $id:expr) => {
        let agent = $flock.agent($id).expect("Agent not found in flock");
        assert!(!agent.is_alive(), "Agent {} should be dead but is alive", $id);
    };
}

/// Asserts that every agent's speed is within its max speed.
#[macro_export]
macro_rules! assert_speeds_bounded {
    ($flock:expr) => {
        for agent in $flock.agents() {
            assert!(
                agent.velocity.length() <= agent.params.max_speed + 1e-4,
                "Agent {} speed {} exceeds max {}",
                agent.id,
                agent.velocity.length(),
                agent.params.max_speed
            );
        }
    };
}

/// Asserts that every agent lies inside the flock's current bounds.
#[macro_export]
macro_rules! assert_inside_bounds {
    ($flock:expr) => {
        let bounds = $flock.bounds();
        for agent in $flock.agents() {
            assert!(
                bounds.contains(agent.position),
                "Agent {} at {} is outside {:?}",
                agent.id,
                agent.position,
                bounds
            );
        }
    };
}

/// Asserts two vectors are equal within a tolerance.
#[macro_export]
macro_rules! assert_vec_near {
    ($left:expr, $right:expr) => {
        let (l, r) = ($left, $right);
        assert!((l - r).length() <= 1e-4, "{} is not within 1e-4 of {}", l, r);
    };
    ($left:expr, $right:expr, $eps:expr) => {
        let (l, r) = ($left, $right);
        assert!((l - r).length() <= $eps, "{} is not within {} of {}", l, $eps, r);
    };
}
