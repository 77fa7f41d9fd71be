// Prototype: shapes copy themselves; clients never call a constructor.

use std::collections::HashMap;
use std::io::Write;

use crate::error::Result;

pub trait Shape {
    /// Make a copy of itself.
    fn clone_box(&self) -> Box<dyn Shape>;
    fn describe(&self) -> String;

    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.describe())?;
        Ok(())
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub color: String,
}

impl Circle {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}

impl Shape for Circle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("Drawing a {} circle.", self.color)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoundShape {
    pub radius: f64,
}

impl Shape for RoundShape {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!("Drawing a circle with radius {}", self.radius)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Shape for Rectangle {
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }

    fn describe(&self) -> String {
        format!(
            "Drawing a rectangle with width {} and height {}",
            self.width, self.height
        )
    }
}

/// Creates new shapes by copying the prototype it was given.
pub struct ShapeClient {
    prototype: Box<dyn Shape>,
}

impl ShapeClient {
    pub fn new(prototype: Box<dyn Shape>) -> Self {
        Self { prototype }
    }

    pub fn create_shape(&self) -> Box<dyn Shape> {
        self.prototype.clone_box()
    }
}

/// Named prototypes, cloned on request.
#[derive(Default)]
pub struct PrototypeRegistry {
    prototypes: HashMap<String, Box<dyn Shape>>,
}

impl PrototypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>, prototype: Box<dyn Shape>) {
        self.prototypes.insert(name.into(), prototype);
    }

    pub fn create(&self, name: &str) -> Option<Box<dyn Shape>> {
        self.prototypes.get(name).map(|p| p.clone_box())
    }

    pub fn len(&self) -> usize {
        self.prototypes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototypes.is_empty()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let client = ShapeClient::new(Box::new(Circle::new("red")));
    let red_circle = client.create_shape();
    red_circle.draw(out)?;

    writeln!(out)?;
    let mut registry = PrototypeRegistry::new();
    registry.register("circle", Box::new(RoundShape { radius: 5.0 }));
    registry.register(
        "rectangle",
        Box::new(Rectangle {
            width: 4.0,
            height: 6.0,
        }),
    );

    for name in ["circle", "rectangle"] {
        if let Some(shape) = registry.create(name) {
            shape.draw(out)?;
        }
    }
    Ok(())
}
