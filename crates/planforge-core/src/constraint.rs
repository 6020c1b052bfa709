//! Core constraint types.
//!
//! Constraint identification shared by score inliners, match diagnostics and
//! weight overrides.

use std::fmt;

/// Reference to a constraint for identification.
///
/// # Example
///
/// ```
/// use planforge_core::ConstraintRef;
///
/// let cr = ConstraintRef::new("routing", "VehicleCapacity");
/// assert_eq!(cr.full_name(), "routing/VehicleCapacity");
///
/// let simple = ConstraintRef::new("", "Simple");
/// assert_eq!(simple.full_name(), "Simple");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintRef {
    /// Package/module containing the constraint.
    pub package: String,
    /// Name of the constraint.
    pub name: String,
}

impl ConstraintRef {
    /// Creates a new constraint reference.
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Parses a fully qualified name produced by [`full_name`](Self::full_name).
    ///
    /// The package is everything before the last `/`.
    pub fn parse(full_name: &str) -> Self {
        match full_name.rsplit_once('/') {
            Some((package, name)) => Self::new(package, name),
            None => Self::new("", full_name),
        }
    }

    /// Returns the fully qualified name.
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.package, self.name)
        }
    }
}

impl fmt::Display for ConstraintRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}/{}", self.package, self.name)
        }
    }
}
