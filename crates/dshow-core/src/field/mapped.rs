use std::fmt;

/// A two-value enumeration stored on the wire as a bool.
pub trait BoolMapped: Copy {
    fn from_bool(value: bool) -> Self;
    fn to_bool(self) -> bool;
}

/// EQ band response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EqType {
    #[default]
    Shelf,
    Curve,
}

impl BoolMapped for EqType {
    fn from_bool(value: bool) -> Self {
        if value { EqType::Curve } else { EqType::Shelf }
    }

    fn to_bool(self) -> bool {
        matches!(self, EqType::Curve)
    }
}

impl fmt::Display for EqType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EqType::Shelf => write!(f, "Shelf"),
            EqType::Curve => write!(f, "Curve"),
        }
    }
}

/// Position of the EQ relative to the dynamics section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EqDyn {
    #[default]
    PreDyn,
    PostDyn,
}

impl BoolMapped for EqDyn {
    fn from_bool(value: bool) -> Self {
        if value { EqDyn::PostDyn } else { EqDyn::PreDyn }
    }

    fn to_bool(self) -> bool {
        matches!(self, EqDyn::PostDyn)
    }
}

impl fmt::Display for EqDyn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EqDyn::PreDyn => write!(f, "PreDyn"),
            EqDyn::PostDyn => write!(f, "PostDyn"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BoolMapped, EqDyn, EqType};

    #[test]
    fn eq_type_mapping() {
        assert_eq!(EqType::from_bool(false), EqType::Shelf);
        assert_eq!(EqType::from_bool(true), EqType::Curve);
        assert!(EqType::Curve.to_bool());
    }

    #[test]
    fn eq_dyn_mapping() {
        assert_eq!(EqDyn::from_bool(true), EqDyn::PostDyn);
        assert!(!EqDyn::PreDyn.to_bool());
        assert_eq!(EqDyn::PostDyn.to_string(), "PostDyn");
    }
}
