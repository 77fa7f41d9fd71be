//! Visitor: operations over a fixed set of shapes live in visitor types, so
//! a new operation needs no change to the shapes.

use std::f64::consts::PI;
use std::io::Write;

use crate::error::Result;

pub trait ShapeVisitor {
    fn visit_circle(&mut self, circle: &Circle, out: &mut dyn Write) -> Result<()>;
    fn visit_square(&mut self, square: &Square, out: &mut dyn Write) -> Result<()>;
}

pub trait Shape {
    fn accept(&self, visitor: &mut dyn ShapeVisitor, out: &mut dyn Write) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing Circle")?;
        Ok(())
    }
}

impl Shape for Circle {
    fn accept(&self, visitor: &mut dyn ShapeVisitor, out: &mut dyn Write) -> Result<()> {
        visitor.visit_circle(self, out)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    pub side: f64,
}

impl Square {
    pub fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing Square")?;
        Ok(())
    }
}

impl Shape for Square {
    fn accept(&self, visitor: &mut dyn ShapeVisitor, out: &mut dyn Write) -> Result<()> {
        visitor.visit_square(self, out)
    }
}

pub struct DrawingVisitor;

impl ShapeVisitor for DrawingVisitor {
    fn visit_circle(&mut self, circle: &Circle, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing a Circle")?;
        circle.draw(out)
    }

    fn visit_square(&mut self, square: &Square, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing a Square")?;
        square.draw(out)
    }
}

/// Sums the area of every shape it visits.
#[derive(Debug, Default)]
pub struct AreaVisitor {
    total: f64,
}

impl AreaVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> f64 {
        self.total
    }
}

impl ShapeVisitor for AreaVisitor {
    fn visit_circle(&mut self, circle: &Circle, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Calculating area of Circle")?;
        self.total += PI * circle.radius * circle.radius;
        Ok(())
    }

    fn visit_square(&mut self, square: &Square, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Calculating area of Square")?;
        self.total += square.side * square.side;
        Ok(())
    }
}

#[derive(Default)]
pub struct ShapeContainer {
    shapes: Vec<Box<dyn Shape>>,
}

impl ShapeContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_shape(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }

    pub fn perform_operations(&self, visitor: &mut dyn ShapeVisitor, out: &mut dyn Write) -> Result<()> {
        for shape in &self.shapes {
            shape.accept(visitor, out)?;
        }
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut container = ShapeContainer::new();
    container.add_shape(Box::new(Circle { radius: 2.0 }));
    container.add_shape(Box::new(Square { side: 3.0 }));

    container.perform_operations(&mut DrawingVisitor, out)?;

    let mut area = AreaVisitor::new();
    container.perform_operations(&mut area, out)?;
    writeln!(out, "Total area: {:.2}", area.total())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_area_visitor_accumulates() {
        let mut container = ShapeContainer::new();
        container.add_shape(Box::new(Square { side: 2.0 }));
        container.add_shape(Box::new(Square { side: 1.0 }));
        container.add_shape(Box::new(Circle { radius: 1.0 }));

        let mut area = AreaVisitor::new();
        container
            .perform_operations(&mut area, &mut std::io::sink())
            .unwrap();
        assert!((area.total() - (5.0 + PI)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_container_visits_nothing() {
        let container = ShapeContainer::new();
        let mut area = AreaVisitor::new();
        let text = capture(|out| container.perform_operations(&mut area, out)).unwrap();
        assert!(text.is_empty());
        assert_eq!(area.total(), 0.0);
    }

    #[test]
    fn test_run_transcript() {
        assert_eq!(
            capture(run).unwrap(),
            "Drawing a Circle\n\
             Drawing Circle\n\
             Drawing a Square\n\
             Drawing Square\n\
             Calculating area of Circle\n\
             Calculating area of Square\n\
             Total area: 21.57\n"
        );
    }
}
