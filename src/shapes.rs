use std::mem;

use uuid::Uuid;

use crate::error::ShapeError;

// ============================================================================
// Validation
// ============================================================================

/// Every dimension in this module must be a finite number greater than 0.
fn validate_positive(value: f64, field: &'static str) -> Result<f64, ShapeError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ShapeError::invalid_dimension(field, value));
    }
    Ok(value)
}

// ============================================================================
// Capability traits
// ============================================================================

/// Anything with a measurable area.
pub trait Area {
    fn area(&self) -> f64;
}

/// Flat shapes: a perimeter and a console drawing on top of an area.
pub trait Planar: Area {
    fn perimeter(&self) -> f64;
    fn ascii_art(&self) -> String;
}

/// Solid shapes: a volume on top of an area (surface area).
pub trait Solid: Area {
    fn volume(&self) -> f64;
}

// ============================================================================
// Concrete shapes
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    id: Uuid,
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        Ok(Circle {
            id: Uuid::new_v4(),
            radius: validate_positive(radius, "radius")?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Area for Circle {
    fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

impl Planar for Circle {
    fn perimeter(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    fn ascii_art(&self) -> String {
        if self.radius < 2.0 {
            " o ".to_string()
        } else {
            " O ".to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    id: Uuid,
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        Ok(Rectangle {
            id: Uuid::new_v4(),
            width: validate_positive(width, "width")?,
            height: validate_positive(height, "height")?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Area for Rectangle {
    fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl Planar for Rectangle {
    fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    fn ascii_art(&self) -> String {
        // Clamp so a huge rectangle does not flood the console.
        let cols = self.width.min(10.0) as usize;
        let rows = self.height.min(5.0) as usize;
        let mut drawing = String::new();
        for _ in 0..rows {
            drawing.push_str(&"*".repeat(cols));
            drawing.push('\n');
        }
        drawing
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegularPentagon {
    id: Uuid,
    side: f64,
    apothem: f64,
}

impl RegularPentagon {
    pub fn new(side: f64, apothem: f64) -> Result<Self, ShapeError> {
        Ok(RegularPentagon {
            id: Uuid::new_v4(),
            side: validate_positive(side, "side")?,
            apothem: validate_positive(apothem, "apothem")?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn side(&self) -> f64 {
        self.side
    }

    pub fn apothem(&self) -> f64 {
        self.apothem
    }
}

impl Area for RegularPentagon {
    fn area(&self) -> f64 {
        self.perimeter() * self.apothem / 2.0
    }
}

impl Planar for RegularPentagon {
    fn perimeter(&self) -> f64 {
        self.side * 5.0
    }

    fn ascii_art(&self) -> String {
        "  /\\\n /  \\\n|____|".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegularHexagon {
    id: Uuid,
    side: f64,
}

impl RegularHexagon {
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        Ok(RegularHexagon {
            id: Uuid::new_v4(),
            side: validate_positive(side, "side")?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Area for RegularHexagon {
    fn area(&self) -> f64 {
        (3.0 * 3.0_f64.sqrt() / 2.0) * self.side * self.side
    }
}

impl Planar for RegularHexagon {
    fn perimeter(&self) -> f64 {
        self.side * 6.0
    }

    fn ascii_art(&self) -> String {
        " _\n/ \\\n\\_/".to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cube {
    id: Uuid,
    side: f64,
}

impl Cube {
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        Ok(Cube {
            id: Uuid::new_v4(),
            side: validate_positive(side, "side")?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn side(&self) -> f64 {
        self.side
    }
}

impl Area for Cube {
    /// Total surface area (6 faces), NOT the area of a single face.
    fn area(&self) -> f64 {
        6.0 * self.side * self.side
    }
}

impl Solid for Cube {
    fn volume(&self) -> f64 {
        self.side * self.side * self.side
    }
}

// ============================================================================
// Closed set of shape variants
// ============================================================================

/// The closed set of shapes the system knows about. Dispatch is
/// exhaustive, so adding a variant forces every match below to be
/// revisited.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Pentagon(RegularPentagon),
    Hexagon(RegularHexagon),
    Cube(Cube),
}

impl Shape {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Circle(_) => "Circle",
            Shape::Rectangle(_) => "Rectangle",
            Shape::Pentagon(_) => "RegularPentagon",
            Shape::Hexagon(_) => "RegularHexagon",
            Shape::Cube(_) => "Cube",
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            Shape::Circle(c) => c.id(),
            Shape::Rectangle(r) => r.id(),
            Shape::Pentagon(p) => p.id(),
            Shape::Hexagon(h) => h.id(),
            Shape::Cube(c) => c.id(),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Rectangle(r) => r.area(),
            Shape::Pentagon(p) => p.area(),
            Shape::Hexagon(h) => h.area(),
            Shape::Cube(c) => c.area(),
        }
    }

    /// Perimeter for flat shapes; a cube has none.
    pub fn perimeter(&self) -> Option<f64> {
        self.as_planar().map(|p| p.perimeter())
    }

    /// Volume for solid shapes; flat shapes have none.
    pub fn volume(&self) -> Option<f64> {
        match self {
            Shape::Cube(c) => Some(c.volume()),
            _ => None,
        }
    }

    /// Console drawing for flat shapes.
    pub fn ascii_art(&self) -> Option<String> {
        self.as_planar().map(|p| p.ascii_art())
    }

    fn as_planar(&self) -> Option<&dyn Planar> {
        match self {
            Shape::Circle(c) => Some(c),
            Shape::Rectangle(r) => Some(r),
            Shape::Pentagon(p) => Some(p),
            Shape::Hexagon(h) => Some(h),
            Shape::Cube(_) => None,
        }
    }

    /// One report line: concrete kind plus the opaque id. A cube also
    /// reports its volume to two decimal places.
    pub fn describe(&self) -> String {
        let base = format!("[{}] ID:{}", self.kind_name(), self.id());
        match self {
            Shape::Cube(c) => format!("{} - Volume: {:.2}", base, c.volume()),
            _ => base,
        }
    }

    /// Two shapes are similar when they are the same concrete kind and
    /// their areas differ by at most 10% (ratio within [0.9, 1.1]).
    /// Sharing a capability (say, both being flat) is not enough.
    pub fn is_similar(&self, other: &Shape) -> bool {
        if mem::discriminant(self) != mem::discriminant(other) {
            return false;
        }
        let ratio = self.area() / other.area();
        (0.9..=1.1).contains(&ratio)
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<Rectangle> for Shape {
    fn from(r: Rectangle) -> Self {
        Shape::Rectangle(r)
    }
}

impl From<RegularPentagon> for Shape {
    fn from(p: RegularPentagon) -> Self {
        Shape::Pentagon(p)
    }
}

impl From<RegularHexagon> for Shape {
    fn from(h: RegularHexagon) -> Self {
        Shape::Hexagon(h)
    }
}

impl From<Cube> for Shape {
    fn from(c: Cube) -> Self {
        Shape::Cube(c)
    }
}

// ============================================================================
// Tests
// ============================================================================
