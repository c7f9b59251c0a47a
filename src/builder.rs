use crate::error::ShapeError;
use crate::shapes::{Circle, Cube, Rectangle, RegularPentagon, Shape};

/// Step-by-step shape construction: pick a kind up front, set dimensions
/// in any order, then `build()` once. Dimensions a kind does not use are
/// ignored. Kind tags are matched case-insensitively, in English or in
/// the original Spanish.
#[derive(Debug, Clone, Default)]
pub struct ShapeBuilder {
    kind: String,
    radius: Option<f64>,
    side: Option<f64>,
    width: Option<f64>,
    height: Option<f64>,
    apothem: Option<f64>,
}

impl ShapeBuilder {
    pub fn new(kind: impl Into<String>) -> Self {
        ShapeBuilder {
            kind: kind.into(),
            ..ShapeBuilder::default()
        }
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn side(mut self, side: f64) -> Self {
        self.side = Some(side);
        self
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn apothem(mut self, apothem: f64) -> Self {
        self.apothem = Some(apothem);
        self
    }

    /// Produce the shape. Unset required dimensions fail here; dimension
    /// values themselves are validated by the shape constructors and the
    /// error propagated unchanged.
    pub fn build(self) -> Result<Shape, ShapeError> {
        match self.kind.to_lowercase().as_str() {
            "circle" | "circulo" => {
                let radius = require(self.radius, "Circle", "radius")?;
                Ok(Circle::new(radius)?.into())
            }
            "rectangle" | "rectangulo" => {
                let width = require(self.width, "Rectangle", "width")?;
                let height = require(self.height, "Rectangle", "height")?;
                Ok(Rectangle::new(width, height)?.into())
            }
            "pentagon" | "pentagono" => {
                let side = require(self.side, "RegularPentagon", "side")?;
                let apothem = require(self.apothem, "RegularPentagon", "apothem")?;
                Ok(RegularPentagon::new(side, apothem)?.into())
            }
            "cube" | "cubo" => {
                let side = require(self.side, "Cube", "side")?;
                Ok(Cube::new(side)?.into())
            }
            _ => Err(ShapeError::unknown_type(self.kind)),
        }
    }
}

fn require(
    value: Option<f64>,
    kind: &'static str,
    field: &'static str,
) -> Result<f64, ShapeError> {
    value.ok_or(ShapeError::MissingDimension { kind, field })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_rectangle_from_the_spanish_tag() {
        let shape = ShapeBuilder::new("rectangulo")
            .width(10.0)
            .height(5.0)
            .build()
            .unwrap();
        assert_eq!(shape.kind_name(), "Rectangle");
        assert!((shape.area() - 50.0).abs() < 1e-9);
        assert_eq!(shape.perimeter(), Some(30.0));
    }

    #[test]
    fn tag_matching_ignores_case() {
        let shape = ShapeBuilder::new("CIRCLE").radius(2.0).build().unwrap();
        assert_eq!(shape.kind_name(), "Circle");
    }

    #[test]
    fn setters_chain_in_any_order() {
        let a = ShapeBuilder::new("pentagon").side(6.0).apothem(4.0).build();
        let b = ShapeBuilder::new("pentagon").apothem(4.0).side(6.0).build();
        assert_eq!(a.unwrap().area(), b.unwrap().area());
    }

    #[test]
    fn irrelevant_dimensions_are_ignored() {
        let shape = ShapeBuilder::new("cubo")
            .radius(99.0)
            .width(99.0)
            .side(3.0)
            .build()
            .unwrap();
        assert_eq!(shape.kind_name(), "Cube");
        assert_eq!(shape.volume(), Some(27.0));
    }

    #[test]
    fn unknown_tag_is_an_error() {
        assert_eq!(
            ShapeBuilder::new("desconocido").build(),
            Err(ShapeError::unknown_type("desconocido"))
        );
    }

    #[test]
    fn hexagon_is_not_buildable() {
        assert!(matches!(
            ShapeBuilder::new("hexagon").side(10.0).build(),
            Err(ShapeError::UnknownType { .. })
        ));
    }

    #[test]
    fn missing_dimension_is_reported_at_build() {
        assert_eq!(
            ShapeBuilder::new("circle").build(),
            Err(ShapeError::missing_dimension("Circle", "radius"))
        );
        assert_eq!(
            ShapeBuilder::new("rectangle").width(10.0).build(),
            Err(ShapeError::missing_dimension("Rectangle", "height"))
        );
    }

    #[test]
    fn invalid_dimension_propagates_from_the_constructor() {
        assert_eq!(
            ShapeBuilder::new("circle").radius(-5.0).build(),
            Err(ShapeError::invalid_dimension("radius", -5.0))
        );
    }
}
