//! Tests for the score inliners.

mod configured;
mod diagnostics;

use planforge_core::ConstraintRef;

use crate::api::analysis::{ConstraintJustification, EntityRef};

pub(super) fn constraint(name: &str) -> ConstraintRef {
    ConstraintRef::new("routing", name)
}

#[derive(Clone, Debug, PartialEq)]
pub(super) struct Visit(pub usize);

pub(super) fn visits(ids: &[usize]) -> ConstraintJustification {
    ConstraintJustification::new(ids.iter().map(|&id| EntityRef::new(&Visit(id))).collect())
}
