//! # Shape Design Patterns
//!
//! A small geometric-shape system demonstrating trait-based polymorphism,
//! a shared registry, and a fluent builder.
//!
//! ## What's Here
//!
//! 1. **Capability traits** - `Area`, `Planar`, `Solid` layered as
//!    supertraits instead of a class hierarchy
//! 2. **A closed shape enum** - circle, rectangle, regular pentagon,
//!    regular hexagon, cube, with exhaustive dispatch
//! 3. **ShapeRegistry** - ordered collection with one shared
//!    process-wide instance
//! 4. **ShapeBuilder** - consuming builder that defers construction to a
//!    final `build()`
//!
//! ## Running the Demonstration
//!
//! ```bash
//! cargo run --bin shapes_demo
//! ```

pub mod builder;
pub mod error;
pub mod registry;
pub mod shapes;

pub use builder::ShapeBuilder;
pub use error::ShapeError;
pub use registry::ShapeRegistry;
pub use shapes::{
    Area, Circle, Cube, Planar, Rectangle, RegularHexagon, RegularPentagon, Shape, Solid,
};
