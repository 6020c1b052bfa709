//! Vehicle routing fixtures.
//!
//! Vehicles are planning entities owning a list of visit ids. Visits are
//! numbered `0..visit_count`. The free functions match the accessor shapes
//! the list selectors take (`fn(&S) -> usize`, `fn(&S, usize) -> usize`).
//!
//! # Example
//!
//! ```
//! use planforge_core::ListVariableState;
//! use planforge_test::routing::RoutingSolution;
//!
//! let solution = RoutingSolution::new(vec![vec![2, 0], vec![1]]);
//! let supply = solution.build_list_state();
//!
//! assert_eq!(supply.inverse_singleton(&1), Some(1));
//! assert_eq!(supply.index_of(&0), Some(1));
//! ```

use planforge_core::ListStateSupply;

/// A vehicle with its ordered visits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vehicle {
    pub id: usize,
    pub visits: Vec<usize>,
}

/// A routing solution: vehicles plus the visit pool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutingSolution {
    pub vehicles: Vec<Vehicle>,
    /// Number of visits, assigned or not.
    pub visit_count: usize,
}

impl RoutingSolution {
    /// Creates a solution where every visit is assigned to one of the routes.
    pub fn new(routes: Vec<Vec<usize>>) -> Self {
        let visit_count = routes.iter().map(Vec::len).sum();
        Self::with_visit_count(routes, visit_count)
    }

    /// Creates a solution with a visit pool larger than the assigned visits.
    pub fn with_visit_count(routes: Vec<Vec<usize>>, visit_count: usize) -> Self {
        let vehicles = routes
            .into_iter()
            .enumerate()
            .map(|(id, visits)| Vehicle { id, visits })
            .collect();
        Self {
            vehicles,
            visit_count,
        }
    }

    /// Creates a solution whose routes have the given lengths, filled with
    /// consecutive visit ids.
    pub fn with_route_lengths(lengths: &[usize]) -> Self {
        let mut next = 0;
        let routes = lengths
            .iter()
            .map(|&len| {
                let route: Vec<usize> = (next..next + len).collect();
                next += len;
                route
            })
            .collect();
        Self::new(routes)
    }

    /// Builds the owner/position supply for the current routes.
    pub fn build_list_state(&self) -> ListStateSupply<usize> {
        let mut supply = ListStateSupply::with_unassigned(self.visit_count);
        for (entity_idx, vehicle) in self.vehicles.iter().enumerate() {
            for (list_idx, &visit) in vehicle.visits.iter().enumerate() {
                supply.assign(visit, entity_idx, list_idx);
            }
        }
        supply
    }

    /// Moves `visits[from..from + length]` of one vehicle to `index` of another.
    ///
    /// `index` is a position in the destination list after removal.
    pub fn move_sub_list(
        &mut self,
        source: usize,
        from: usize,
        length: usize,
        destination: usize,
        index: usize,
    ) {
        let moved: Vec<usize> = self.vehicles[source]
            .visits
            .drain(from..from + length)
            .collect();
        let target = &mut self.vehicles[destination].visits;
        for (offset, visit) in moved.into_iter().enumerate() {
            target.insert(index + offset, visit);
        }
    }
}

/// Number of vehicles.
pub fn vehicle_count(solution: &RoutingSolution) -> usize {
    solution.vehicles.len()
}

/// Length of a vehicle's visit list; 0 for an unknown vehicle.
pub fn list_len(solution: &RoutingSolution, vehicle: usize) -> usize {
    solution.vehicles.get(vehicle).map_or(0, |v| v.visits.len())
}

/// Size of the visit pool.
pub fn visit_count(solution: &RoutingSolution) -> usize {
    solution.visit_count
}

/// The visit with the given id.
pub fn visit_at(_solution: &RoutingSolution, index: usize) -> usize {
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use planforge_core::ListVariableState;

    #[test]
    fn test_route_lengths() {
        let solution = RoutingSolution::with_route_lengths(&[3, 0, 2]);
        assert_eq!(vehicle_count(&solution), 3);
        assert_eq!(solution.vehicles[0].visits, vec![0, 1, 2]);
        assert_eq!(solution.vehicles[2].visits, vec![3, 4]);
        assert_eq!(visit_count(&solution), 5);
    }

    #[test]
    fn test_list_state_tracks_owner_and_index() {
        let solution = RoutingSolution::new(vec![vec![4, 1], vec![0, 3, 2]]);
        let supply = solution.build_list_state();

        assert_eq!(supply.inverse_singleton(&3), Some(1));
        assert_eq!(supply.index_of(&3), Some(1));
        assert_eq!(supply.inverse_singleton(&1), Some(0));
        assert_eq!(supply.assigned_count(), 5);
        assert_eq!(supply.unassigned_count(), 0);
    }

    #[test]
    fn test_list_state_counts_unassigned_visits() {
        let solution = RoutingSolution::with_visit_count(vec![vec![0, 1]], 4);
        let supply = solution.build_list_state();

        assert_eq!(supply.unassigned_count(), 2);
        assert!(!supply.is_assigned(&3));
    }

    #[test]
    fn test_move_sub_list() {
        let mut solution = RoutingSolution::new(vec![vec![0, 1, 2], vec![3]]);
        solution.move_sub_list(0, 1, 2, 1, 0);

        assert_eq!(solution.vehicles[0].visits, vec![0]);
        assert_eq!(solution.vehicles[1].visits, vec![1, 2, 3]);
        assert_eq!(list_len(&solution, 1), 3);
    }
}
