use thiserror::Error;

/// Every way shape construction can fail. All failures are reported
/// before any shared state is touched, so a failed construction leaves
/// nothing behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Field '{field}' must be a number greater than 0 (got {value})")]
    InvalidDimension { field: &'static str, value: f64 },

    #[error("Missing required dimension '{field}' for {kind}")]
    MissingDimension {
        kind: &'static str,
        field: &'static str,
    },

    #[error("Unknown shape type '{tag}'")]
    UnknownType { tag: String },
}

impl ShapeError {
    pub fn invalid_dimension(field: &'static str, value: f64) -> Self {
        Self::InvalidDimension { field, value }
    }

    pub fn missing_dimension(kind: &'static str, field: &'static str) -> Self {
        Self::MissingDimension { kind, field }
    }

    pub fn unknown_type(tag: impl Into<String>) -> Self {
        Self::UnknownType { tag: tag.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_names_the_field() {
        let err = ShapeError::invalid_dimension("radius", -5.0);
        assert!(err.to_string().contains("'radius'"));
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn missing_dimension_names_field_and_kind() {
        let err = ShapeError::missing_dimension("Circle", "radius");
        let msg = err.to_string();
        assert!(msg.contains("'radius'"));
        assert!(msg.contains("Circle"));
    }

    #[test]
    fn unknown_type_carries_the_tag() {
        let err = ShapeError::unknown_type("desconocido");
        assert_eq!(
            err,
            ShapeError::UnknownType {
                tag: "desconocido".to_string()
            }
        );
    }
}
