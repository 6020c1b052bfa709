//! Tests for the list selectors.

mod random_sub_list;

use planforge_test::routing::{list_len, vehicle_count, visit_at, visit_count, RoutingSolution};

use super::{ListEntitySelector, ListValueSelector};

pub(crate) fn entities() -> ListEntitySelector<RoutingSolution> {
    ListEntitySelector::new(vehicle_count, list_len)
}

pub(crate) fn values() -> ListValueSelector<RoutingSolution, usize> {
    ListValueSelector::new(visit_count, visit_at)
}
