//! Semantic types for keys and parameters, written in OData notation.
//!
//! | Notation                 | Meaning                                  |
//! |--------------------------|------------------------------------------|
//! | `Edm.Int32`              | primitive type                           |
//! | `Collection(Edm.String)` | collection of the inner type             |
//! | `Enum(NS.Color)`         | enum type with its fully qualified name  |
//! | `QueryOptions`           | bulk query options marker                |
//! | `ActionParameters`       | bound-action payload container marker    |
//! | `NS.Product`             | any other structured (entity/complex)    |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive kinds of the entity data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Binary,
    Boolean,
    Byte,
    Date,
    DateTimeOffset,
    Decimal,
    Double,
    Duration,
    Guid,
    Int16,
    Int32,
    Int64,
    SByte,
    Single,
    Stream,
    String,
    TimeOfDay,
    Geography,
    GeographyPoint,
    GeographyLineString,
    GeographyPolygon,
    GeographyCollection,
    GeographyMultiPolygon,
    GeographyMultiLineString,
    GeographyMultiPoint,
    Geometry,
    GeometryPoint,
    GeometryLineString,
    GeometryPolygon,
    GeometryCollection,
    GeometryMultiPolygon,
    GeometryMultiLineString,
    GeometryMultiPoint,
}

const PRIMITIVE_NAMES: &[(&str, PrimitiveKind)] = &[
    ("Binary", PrimitiveKind::Binary),
    ("Boolean", PrimitiveKind::Boolean),
    ("Byte", PrimitiveKind::Byte),
    ("Date", PrimitiveKind::Date),
    ("DateTimeOffset", PrimitiveKind::DateTimeOffset),
    ("Decimal", PrimitiveKind::Decimal),
    ("Double", PrimitiveKind::Double),
    ("Duration", PrimitiveKind::Duration),
    ("Guid", PrimitiveKind::Guid),
    ("Int16", PrimitiveKind::Int16),
    ("Int32", PrimitiveKind::Int32),
    ("Int64", PrimitiveKind::Int64),
    ("SByte", PrimitiveKind::SByte),
    ("Single", PrimitiveKind::Single),
    ("Stream", PrimitiveKind::Stream),
    ("String", PrimitiveKind::String),
    ("TimeOfDay", PrimitiveKind::TimeOfDay),
    ("Geography", PrimitiveKind::Geography),
    ("GeographyPoint", PrimitiveKind::GeographyPoint),
    ("GeographyLineString", PrimitiveKind::GeographyLineString),
    ("GeographyPolygon", PrimitiveKind::GeographyPolygon),
    ("GeographyCollection", PrimitiveKind::GeographyCollection),
    ("GeographyMultiPolygon", PrimitiveKind::GeographyMultiPolygon),
    ("GeographyMultiLineString", PrimitiveKind::GeographyMultiLineString),
    ("GeographyMultiPoint", PrimitiveKind::GeographyMultiPoint),
    ("Geometry", PrimitiveKind::Geometry),
    ("GeometryPoint", PrimitiveKind::GeometryPoint),
    ("GeometryLineString", PrimitiveKind::GeometryLineString),
    ("GeometryPolygon", PrimitiveKind::GeometryPolygon),
    ("GeometryCollection", PrimitiveKind::GeometryCollection),
    ("GeometryMultiPolygon", PrimitiveKind::GeometryMultiPolygon),
    ("GeometryMultiLineString", PrimitiveKind::GeometryMultiLineString),
    ("GeometryMultiPoint", PrimitiveKind::GeometryMultiPoint),
];

impl PrimitiveKind {
    /// Short name without the `Edm.` namespace.
    #[must_use]
    pub fn name(self) -> &'static str {
        PRIMITIVE_NAMES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("Untyped")
    }

    /// `Geography` and every spatial subtype derived from it.
    #[must_use]
    pub fn is_geography(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Geography
                | PrimitiveKind::GeographyPoint
                | PrimitiveKind::GeographyLineString
                | PrimitiveKind::GeographyPolygon
                | PrimitiveKind::GeographyCollection
                | PrimitiveKind::GeographyMultiPolygon
                | PrimitiveKind::GeographyMultiLineString
                | PrimitiveKind::GeographyMultiPoint
        )
    }

    /// `Geometry` and every spatial subtype derived from it.
    #[must_use]
    pub fn is_geometry(self) -> bool {
        matches!(
            self,
            PrimitiveKind::Geometry
                | PrimitiveKind::GeometryPoint
                | PrimitiveKind::GeometryLineString
                | PrimitiveKind::GeometryPolygon
                | PrimitiveKind::GeometryCollection
                | PrimitiveKind::GeometryMultiPolygon
                | PrimitiveKind::GeometryMultiLineString
                | PrimitiveKind::GeometryMultiPoint
        )
    }
}

/// The semantic type of an entity key, operation parameter or parameter description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SemanticType {
    Primitive(PrimitiveKind),
    Enum { full_name: String },
    Collection(Box<SemanticType>),
    Structured { full_name: String },
    /// Bulk query options bound by the runtime, never a query-string parameter.
    QueryOptions,
    /// Payload container for bound actions, never a query-string parameter.
    ActionParameters,
}

impl SemanticType {
    #[must_use]
    pub fn primitive(kind: PrimitiveKind) -> Self {
        SemanticType::Primitive(kind)
    }

    #[must_use]
    pub fn collection_of(element: SemanticType) -> Self {
        SemanticType::Collection(Box::new(element))
    }

    #[must_use]
    pub fn enumeration(full_name: impl Into<String>) -> Self {
        SemanticType::Enum {
            full_name: full_name.into(),
        }
    }

    #[must_use]
    pub fn is_collection(&self) -> bool {
        matches!(self, SemanticType::Collection(_))
    }

    /// True for the two runtime-bound marker types.
    #[must_use]
    pub fn is_built_in_marker(&self) -> bool {
        matches!(
            self,
            SemanticType::QueryOptions | SemanticType::ActionParameters
        )
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SemanticType::Primitive(kind) => write!(f, "Edm.{}", kind.name()),
            SemanticType::Enum { full_name } => write!(f, "Enum({})", full_name),
            SemanticType::Collection(element) => write!(f, "Collection({})", element),
            SemanticType::Structured { full_name } => f.write_str(full_name),
            SemanticType::QueryOptions => f.write_str("QueryOptions"),
            SemanticType::ActionParameters => f.write_str("ActionParameters"),
        }
    }
}

/// Error returned when a semantic type string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSemanticTypeError {
    pub input: String,
    pub reason: &'static str,
}

impl fmt::Display for ParseSemanticTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid semantic type '{}': {}", self.input, self.reason)
    }
}

impl std::error::Error for ParseSemanticTypeError {}

/// Strips `Wrapper(` ... `)` around `inner`.
fn unwrap_call<'a>(input: &'a str, wrapper: &str) -> Option<&'a str> {
    input
        .strip_prefix(wrapper)?
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

impl FromStr for SemanticType {
    type Err = ParseSemanticTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let error = |reason| ParseSemanticTypeError {
            input: s.to_string(),
            reason,
        };

        if input.is_empty() {
            return Err(error("type name is empty"));
        }

        if let Some(inner) = unwrap_call(input, "Collection") {
            return inner.parse().map(SemanticType::collection_of);
        }

        if let Some(inner) = unwrap_call(input, "Enum") {
            if inner.is_empty() {
                return Err(error("enum type requires a qualified name"));
            }
            return Ok(SemanticType::enumeration(inner));
        }

        if let Some(name) = input.strip_prefix("Edm.") {
            return PRIMITIVE_NAMES
                .iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|(_, kind)| SemanticType::Primitive(*kind))
                .ok_or_else(|| error("unknown Edm primitive"));
        }

        match input {
            "QueryOptions" => Ok(SemanticType::QueryOptions),
            "ActionParameters" => Ok(SemanticType::ActionParameters),
            other if other.contains(['(', ')', '{', '}']) => {
                Err(error("unexpected delimiter in type name"))
            }
            other => Ok(SemanticType::Structured {
                full_name: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for SemanticType {
    type Error = ParseSemanticTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SemanticType> for String {
    fn from(value: SemanticType) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_primitive() {
        let ty: SemanticType = "Edm.Int32".parse().unwrap();
        assert_eq!(ty, SemanticType::Primitive(PrimitiveKind::Int32));
    }

    #[test]
    fn test_parse_nested_collection_of_enum() {
        let ty: SemanticType = "Collection(Enum(Contoso.Color))".parse().unwrap();
        assert_eq!(
            ty,
            SemanticType::collection_of(SemanticType::enumeration("Contoso.Color"))
        );
        assert_eq!(ty.to_string(), "Collection(Enum(Contoso.Color))");
    }

    #[test]
    fn test_parse_structured_and_markers() {
        assert_eq!(
            "Contoso.Address".parse::<SemanticType>().unwrap(),
            SemanticType::Structured {
                full_name: "Contoso.Address".to_string()
            }
        );
        assert!("QueryOptions"
            .parse::<SemanticType>()
            .unwrap()
            .is_built_in_marker());
        assert!("ActionParameters"
            .parse::<SemanticType>()
            .unwrap()
            .is_built_in_marker());
    }

    #[test]
    fn test_parse_rejects_unknown_primitive() {
        let err = "Edm.Int128".parse::<SemanticType>().unwrap_err();
        assert_eq!(err.reason, "unknown Edm primitive");
        assert!("".parse::<SemanticType>().is_err());
        assert!("Collection(".parse::<SemanticType>().is_err());
    }

    #[test]
    fn test_spatial_families() {
        assert!(PrimitiveKind::GeographyPoint.is_geography());
        assert!(!PrimitiveKind::GeographyPoint.is_geometry());
        assert!(PrimitiveKind::GeometryMultiPolygon.is_geometry());
        assert!(!PrimitiveKind::String.is_geography());
    }
}
