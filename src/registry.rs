use std::sync::Mutex;

use colored::Colorize;
use lazy_static::lazy_static;

use crate::shapes::Shape;

lazy_static! {
    static ref SHARED_REGISTRY: Mutex<ShapeRegistry> = Mutex::new(ShapeRegistry::new());
}

/// Ordered, append-only store of every shape created during a run.
/// Tests construct their own isolated registries; the demonstration
/// driver goes through [`ShapeRegistry::shared`], which always hands
/// back the same process-wide instance.
#[derive(Debug, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
}

impl ShapeRegistry {
    pub fn new() -> Self {
        ShapeRegistry { shapes: Vec::new() }
    }

    /// The single process-wide registry. Every call returns the same
    /// instance; the mutex is all the protection appends and reads need.
    pub fn shared() -> &'static Mutex<ShapeRegistry> {
        &SHARED_REGISTRY
    }

    /// Append a shape, keeping insertion order, and log the addition.
    pub fn add(&mut self, shape: impl Into<Shape>) {
        let shape = shape.into();
        println!(
            "{} Added: {} ({})",
            "[registry]".cyan(),
            shape.kind_name(),
            shape.id()
        );
        self.shapes.push(shape);
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> + '_ {
        self.shapes.iter()
    }

    /// Build the report text: one description per shape in insertion
    /// order, with a drawing after every flat shape.
    pub fn render_report(&self) -> String {
        let mut report = String::from("--- SHAPE REPORT ---\n");
        for shape in &self.shapes {
            report.push_str(&shape.describe());
            report.push('\n');
            if let Some(art) = shape.ascii_art() {
                report.push_str("Drawing:\n");
                report.push_str(&art);
                report.push('\n');
            }
        }
        report.push_str("--------------------");
        report
    }

    pub fn print_report(&self) {
        println!("\n{}", self.render_report());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Cube, Rectangle, RegularHexagon, RegularPentagon};

    #[test]
    fn registry_starts_empty() {
        let registry = ShapeRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn add_accepts_any_shape_kind() {
        let mut registry = ShapeRegistry::new();
        registry.add(RegularHexagon::new(10.0).unwrap());
        registry.add(Cube::new(3.0).unwrap());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn report_preserves_insertion_order() {
        let mut registry = ShapeRegistry::new();
        registry.add(RegularHexagon::new(10.0).unwrap());
        registry.add(RegularPentagon::new(6.0, 4.0).unwrap());
        registry.add(Cube::new(3.0).unwrap());
        registry.add(Rectangle::new(10.0, 5.0).unwrap());

        let report = registry.render_report();
        let hexagon = report.find("[RegularHexagon]").unwrap();
        let pentagon = report.find("[RegularPentagon]").unwrap();
        let cube = report.find("[Cube]").unwrap();
        let rectangle = report.find("[Rectangle]").unwrap();
        assert!(hexagon < pentagon);
        assert!(pentagon < cube);
        assert!(cube < rectangle);
    }

    #[test]
    fn report_draws_flat_shapes_only() {
        let mut registry = ShapeRegistry::new();
        registry.add(Cube::new(3.0).unwrap());
        let solid_only = registry.render_report();
        assert!(!solid_only.contains("Drawing:"));

        registry.add(Rectangle::new(3.0, 2.0).unwrap());
        let with_flat = registry.render_report();
        assert!(with_flat.contains("Drawing:\n***\n***\n"));
    }

    #[test]
    fn shared_registry_is_a_single_instance() {
        let first = ShapeRegistry::shared();
        let second = ShapeRegistry::shared();
        assert!(std::ptr::eq(first, second));

        // Additions through one handle are visible through the other.
        let before = second.lock().unwrap().len();
        first.lock().unwrap().add(Cube::new(1.0).unwrap());
        assert_eq!(second.lock().unwrap().len(), before + 1);
    }
}
