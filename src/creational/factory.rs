// Factory Method: the client receives a factory and never names the product.

use std::io::Write;
use std::str::FromStr;

use crate::error::{PatternError, Result};

pub trait Vehicle {
    fn print_vehicle(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct TwoWheeler;
impl Vehicle for TwoWheeler {
    fn print_vehicle(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "I am two wheeler")?;
        Ok(())
    }
}

pub struct FourWheeler;
impl Vehicle for FourWheeler {
    fn print_vehicle(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "I am four wheeler")?;
        Ok(())
    }
}

pub trait VehicleFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle>;
}

pub struct TwoWheelerFactory;
impl VehicleFactory for TwoWheelerFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(TwoWheeler)
    }
}

pub struct FourWheelerFactory;
impl VehicleFactory for FourWheelerFactory {
    fn create_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(FourWheeler)
    }
}

/// Holds whatever the factory produced.
pub struct Client {
    vehicle: Box<dyn Vehicle>,
}

impl Client {
    pub fn new(factory: &dyn VehicleFactory) -> Self {
        Self {
            vehicle: factory.create_vehicle(),
        }
    }

    pub fn vehicle(&self) -> &dyn Vehicle {
        self.vehicle.as_ref()
    }
}

// ============================================================================
// Variant: shape factories picked by name
// ============================================================================

pub trait Shape {
    fn name(&self) -> &'static str;

    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing a {}", self.name())?;
        Ok(())
    }
}

pub struct Circle;
impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }
}

pub struct Square;
impl Shape for Square {
    fn name(&self) -> &'static str {
        "Square"
    }
}

pub trait ShapeFactory {
    fn create_shape(&self) -> Box<dyn Shape>;
}

pub struct CircleFactory;
impl ShapeFactory for CircleFactory {
    fn create_shape(&self) -> Box<dyn Shape> {
        Box::new(Circle)
    }
}

pub struct SquareFactory;
impl ShapeFactory for SquareFactory {
    fn create_shape(&self) -> Box<dyn Shape> {
        Box::new(Square)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
}

impl FromStr for ShapeKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(ShapeKind::Circle),
            "square" => Ok(ShapeKind::Square),
            _ => Err(PatternError::UnknownShape(s.to_string())),
        }
    }
}

/// Chooses the factory from user input, e.g. "circle" or "square".
pub fn factory_for(shape_type: &str) -> Result<Box<dyn ShapeFactory>> {
    let factory: Box<dyn ShapeFactory> = match shape_type.parse::<ShapeKind>()? {
        ShapeKind::Circle => Box::new(CircleFactory),
        ShapeKind::Square => Box::new(SquareFactory),
    };
    Ok(factory)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let two_wheeler_client = Client::new(&TwoWheelerFactory);
    two_wheeler_client.vehicle().print_vehicle(out)?;

    let four_wheeler_client = Client::new(&FourWheelerFactory);
    four_wheeler_client.vehicle().print_vehicle(out)?;

    writeln!(out)?;
    let circle = CircleFactory.create_shape();
    let square = SquareFactory.create_shape();
    circle.draw(out)?;
    square.draw(out)?;

    for input in ["square", "triangle"] {
        match factory_for(input) {
            Ok(factory) => factory.create_shape().draw(out)?,
            Err(err) => writeln!(out, "{err}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_client_uses_factory_product() {
        let client = Client::new(&FourWheelerFactory);
        let text = capture(|out| client.vehicle().print_vehicle(out)).unwrap();
        assert_eq!(text, "I am four wheeler\n");
    }

    #[test]
    fn test_shape_kind_parse() {
        assert_eq!(" Circle ".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
        assert_eq!("SQUARE".parse::<ShapeKind>().unwrap(), ShapeKind::Square);
        assert!(matches!(
            "hexagon".parse::<ShapeKind>(),
            Err(PatternError::UnknownShape(ref s)) if s == "hexagon"
        ));
    }

    #[test]
    fn test_factory_for_builds_requested_shape() {
        assert_eq!(factory_for("circle").unwrap().create_shape().name(), "Circle");
        assert!(factory_for("triangle").is_err());
    }

    #[test]
    fn test_run_transcript() {
        let text = capture(run).unwrap();
        assert_eq!(
            text,
            "I am two wheeler\n\
             I am four wheeler\n\
             \n\
             Drawing a Circle\n\
             Drawing a Square\n\
             Drawing a Square\n\
             Invalid shape type 'triangle' (expected circle or square)\n"
        );
    }
}
