// Bridge: shapes (abstraction) hold a renderer (implementation); either side
// can vary without touching the other.

use std::io::Write;

use crate::error::Result;

pub trait Renderer {
    fn render(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct VectorRenderer;

impl Renderer for VectorRenderer {
    fn render(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Rendering as a vector")?;
        Ok(())
    }
}

pub struct RasterRenderer;

impl Renderer for RasterRenderer {
    fn render(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Rendering as a raster")?;
        Ok(())
    }
}

pub trait Shape {
    fn draw(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct Circle<'r> {
    renderer: &'r dyn Renderer,
}

impl<'r> Circle<'r> {
    pub fn new(renderer: &'r dyn Renderer) -> Self {
        Self { renderer }
    }
}

impl Shape for Circle<'_> {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        write!(out, "Drawing a circle ")?;
        self.renderer.render(out)
    }
}

pub struct Square<'r> {
    renderer: &'r dyn Renderer,
}

impl<'r> Square<'r> {
    pub fn new(renderer: &'r dyn Renderer) -> Self {
        Self { renderer }
    }
}

impl Shape for Square<'_> {
    fn draw(&self, out: &mut dyn Write) -> Result<()> {
        write!(out, "Drawing a square ")?;
        self.renderer.render(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let vector = VectorRenderer;
    let raster = RasterRenderer;

    let circle = Circle::new(&vector);
    let square = Square::new(&raster);

    circle.draw(out)?;
    square.draw(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_same_shape_different_renderers() {
        let raster = RasterRenderer;
        let text = capture(|out| Circle::new(&raster).draw(out)).unwrap();
        assert_eq!(text, "Drawing a circle Rendering as a raster\n");
    }

    #[test]
    fn test_run_transcript() {
        assert_eq!(
            capture(run).unwrap(),
            "Drawing a circle Rendering as a vector\n\
             Drawing a square Rendering as a raster\n"
        );
    }
}
