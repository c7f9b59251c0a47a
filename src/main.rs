use colored::Colorize;

use shape_design_patterns::{
    Circle, Rectangle, RegularHexagon, Shape, ShapeBuilder, ShapeError, ShapeRegistry,
};

fn run() -> Result<(), ShapeError> {
    println!("{}", "=== Shape System ===".bold());

    let registry = ShapeRegistry::shared();

    // ------------------------------------------------------------------
    // Direct construction with validation
    // ------------------------------------------------------------------
    println!("\n{}", "--- Direct Construction ---".bold());
    let hexagon = RegularHexagon::new(10.0)?;
    registry.lock().unwrap().add(hexagon);

    // ------------------------------------------------------------------
    // Step-by-step construction through the builder
    // ------------------------------------------------------------------
    println!("\n{}", "--- Builder Construction ---".bold());
    let pentagon = ShapeBuilder::new("pentagon").side(6.0).apothem(4.0).build()?;
    registry.lock().unwrap().add(pentagon);

    let cube = ShapeBuilder::new("cube").side(3.0).build()?;
    registry.lock().unwrap().add(cube.clone());

    let rectangle = ShapeBuilder::new("rectangle").width(10.0).height(5.0).build()?;
    registry.lock().unwrap().add(rectangle.clone());

    // ------------------------------------------------------------------
    // A validation failure, caught and reported
    // ------------------------------------------------------------------
    println!("\n{}", "--- Validation ---".bold());
    match Circle::new(-5.0) {
        Ok(_) => println!("unexpected: negative circle accepted"),
        Err(err) => println!("{} {}", "rejected:".yellow(), err),
    }

    // ------------------------------------------------------------------
    // Similarity: same kind and areas within 10%
    // ------------------------------------------------------------------
    println!("\n{}", "--- Similarity ---".bold());
    let almost_rectangle: Shape = Rectangle::new(10.1, 4.9)?.into();
    println!(
        "rectangle ~ rectangle(10.1 x 4.9)? {}",
        if rectangle.is_similar(&almost_rectangle) {
            "YES".green()
        } else {
            "NO".red()
        }
    );
    println!(
        "rectangle ~ cube(3)? {}",
        if rectangle.is_similar(&cube) {
            "YES".green()
        } else {
            "NO".red()
        }
    );

    // ------------------------------------------------------------------
    // Final report, in insertion order
    // ------------------------------------------------------------------
    registry.lock().unwrap().print_report();

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {}", "SYSTEM ERROR:".red().bold(), err);
    }
}
