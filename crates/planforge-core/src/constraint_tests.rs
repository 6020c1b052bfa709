//! Tests for constraint types

use super::constraint::*;

#[test]
fn test_constraint_ref_full_name() {
    let cr = ConstraintRef::new("my.package", "TestConstraint");
    assert_eq!(cr.full_name(), "my.package/TestConstraint");
    assert_eq!(cr.to_string(), "my.package/TestConstraint");
}

#[test]
fn test_constraint_ref_empty_package() {
    let cr = ConstraintRef::new("", "Simple");
    assert_eq!(cr.full_name(), "Simple");
}

#[test]
fn test_constraint_ref_parse() {
    assert_eq!(
        ConstraintRef::parse("routing/VehicleCapacity"),
        ConstraintRef::new("routing", "VehicleCapacity")
    );
    assert_eq!(
        ConstraintRef::parse("a/b/Distance"),
        ConstraintRef::new("a/b", "Distance")
    );
    assert_eq!(ConstraintRef::parse("Simple"), ConstraintRef::new("", "Simple"));
}
