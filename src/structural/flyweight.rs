//! Flyweight: one shared glyph per character; the position is passed in at
//! draw time instead of being stored.

use std::collections::HashMap;
use std::io::Write;
use std::rc::Rc;

use crate::error::Result;

/// Intrinsic state only.
#[derive(Debug, PartialEq, Eq)]
pub struct Glyph {
    symbol: char,
}

impl Glyph {
    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn draw(&self, position: usize, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Drawing character '{}' at position {}", self.symbol, position)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct CharacterFactory {
    glyphs: HashMap<char, Rc<Glyph>>,
}

impl CharacterFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the shared glyph for `symbol`, creating it on first request.
    pub fn get(&mut self, symbol: char) -> Rc<Glyph> {
        let glyph = self.glyphs.entry(symbol).or_insert_with(|| {
            tracing::debug!(%symbol, "Creating flyweight glyph");
            Rc::new(Glyph { symbol })
        });
        Rc::clone(glyph)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

/// Draws `text` left to right, one glyph lookup per character.
pub fn draw_text(factory: &mut CharacterFactory, text: &str, out: &mut dyn Write) -> Result<()> {
    for (position, symbol) in text.chars().enumerate() {
        factory.get(symbol).draw(position, out)?;
    }
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut factory = CharacterFactory::new();
    draw_text(&mut factory, "ABC", out)?;

    writeln!(out)?;
    draw_text(&mut factory, "ABBA", out)?;
    writeln!(out, "Distinct glyphs: {}", factory.len())?;
    Ok(())
}
