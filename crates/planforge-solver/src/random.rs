//! Random number source shared by the selectors of one session.

use planforge_config::EngineConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Creates the selectors' random number generator.
///
/// Seeded from `random_seed` when set, so runs are reproducible; otherwise
/// seeded from the operating system.
pub fn selection_rng(config: &EngineConfig) -> StdRng {
    match config.random_seed {
        Some(seed) => {
            debug!(event = "rng_created", seeded = true, seed);
            StdRng::seed_from_u64(seed)
        }
        None => {
            debug!(event = "rng_created", seeded = false);
            StdRng::from_os_rng()
        }
    }
}

#[cfg(test)]
mod tests {
    use planforge_config::EngineConfig;
    use planforge_test::routing::RoutingSolution;
    use rand::Rng;

    use super::selection_rng;
    use crate::heuristic::selector::list::tests::{entities, values};
    use crate::heuristic::selector::list::{RandomSubListSelector, SubList};

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = EngineConfig::new().with_random_seed(42);
        let mut first = selection_rng(&config);
        let mut second = selection_rng(&config);

        let a: Vec<u64> = (0..8).map(|_| first.random()).collect();
        let b: Vec<u64> = (0..8).map(|_| second.random()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_seeded_selection_repeats() {
        let config = EngineConfig::new()
            .with_random_seed(7)
            .with_sub_list_sizes(1, 3);
        let solution = RoutingSolution::with_route_lengths(&[4, 2, 5]);
        let supply = solution.build_list_state();
        let selector =
            RandomSubListSelector::from_config(&config.sub_list_selector, entities(), values())
                .unwrap();

        let draw = || -> Vec<SubList> {
            let mut rng = selection_rng(&config);
            selector
                .iter(&solution, &supply, &mut rng)
                .take(50)
                .collect::<Result<_, _>>()
                .unwrap()
        };
        assert_eq!(draw(), draw());
    }
}
