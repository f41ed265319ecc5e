// Accessor type tags and their component counts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownAccessorType;

/// Number of scalar components per accessor type tag.
pub const COMPONENT_COUNTS: &[(&str, usize)] = &[("SCALAR", 1), ("VEC2", 2), ("VEC3", 3)];

/// Look up how many components an accessor type occupies.
///
/// The match is exact and case-sensitive. Tags missing from
/// [`COMPONENT_COUNTS`] give `None`.
pub fn component_count_of(type_tag: &str) -> Option<usize> {
    let count = COMPONENT_COUNTS
        .iter()
        .find(|(tag, _)| *tag == type_tag)
        .map(|&(_, count)| count);
    if count.is_none() {
        log::debug!("no component count for accessor type {:?}", type_tag);
    }
    count
}

/// Accessor type tags known to the component table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AccessorType {
    Scalar,
    Vec2,
    Vec3,
}

impl AccessorType {
    /// The tag as it appears in asset files.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessorType::Scalar => "SCALAR",
            AccessorType::Vec2 => "VEC2",
            AccessorType::Vec3 => "VEC3",
        }
    }

    pub fn component_count(self) -> usize {
        match self {
            AccessorType::Scalar => 1,
            AccessorType::Vec2 => 2,
            AccessorType::Vec3 => 3,
        }
    }
}

impl FromStr for AccessorType {
    type Err = UnknownAccessorType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SCALAR" => Ok(AccessorType::Scalar),
            "VEC2" => Ok(AccessorType::Vec2),
            "VEC3" => Ok(AccessorType::Vec3),
            _ => Err(UnknownAccessorType::new(s)),
        }
    }
}

impl TryFrom<String> for AccessorType {
    type Error = UnknownAccessorType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccessorType> for &'static str {
    fn from(ty: AccessorType) -> Self {
        ty.as_str()
    }
}

impl fmt::Display for AccessorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AccessorType; 3] = [AccessorType::Scalar, AccessorType::Vec2, AccessorType::Vec3];

    #[test]
    fn known_tags() {
        assert_eq!(component_count_of("SCALAR"), Some(1));
        assert_eq!(component_count_of("VEC2"), Some(2));
        assert_eq!(component_count_of("VEC3"), Some(3));
    }

    #[test]
    fn unknown_tags_are_absent() {
        for tag in ["VEC4", "MAT4", "FOO", "", "vec3", "SCALAR "] {
            assert_eq!(component_count_of(tag), None, "tag {:?}", tag);
        }
    }

    #[test]
    fn enum_agrees_with_table() {
        assert_eq!(ALL.len(), COMPONENT_COUNTS.len());
        for ty in ALL {
            assert_eq!(component_count_of(ty.as_str()), Some(ty.component_count()));
            assert_eq!(ty.as_str().parse::<AccessorType>(), Ok(ty));
            assert_eq!(ty.to_string(), ty.as_str());
        }
    }

    #[test]
    fn parse_unknown_tag() {
        let err = "VEC4".parse::<AccessorType>().unwrap_err();
        assert_eq!(err, UnknownAccessorType::new("VEC4"));
        assert_eq!(err.to_string(), "unknown accessor type: \"VEC4\"");
    }
}
