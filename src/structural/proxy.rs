//! Virtual proxy: `ProxyImage` stands in for `RealImage` and defers the
//! expensive load until the first display.

use std::io::Write;

use crate::error::Result;

pub trait Image {
    fn display(&mut self, out: &mut dyn Write) -> Result<()>;
}

pub struct RealImage {
    filename: String,
}

impl RealImage {
    /// Loading is the costly part, so it happens here and only here.
    pub fn load(filename: impl Into<String>, out: &mut dyn Write) -> Result<Self> {
        let filename = filename.into();
        writeln!(out, "Loading image: {filename}")?;
        Ok(Self { filename })
    }
}

impl Image for RealImage {
    fn display(&mut self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Displaying image: {}", self.filename)?;
        Ok(())
    }
}

pub struct ProxyImage {
    filename: String,
    real: Option<RealImage>,
}

impl ProxyImage {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            real: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.is_some()
    }
}

impl Image for ProxyImage {
    fn display(&mut self, out: &mut dyn Write) -> Result<()> {
        let real = match self.real.take() {
            Some(real) => real,
            None => {
                tracing::debug!(filename = %self.filename, "Proxy loading real image");
                RealImage::load(self.filename.clone(), out)?
            }
        };
        let real = self.real.insert(real);
        real.display(out)
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut image: Box<dyn Image> = Box::new(ProxyImage::new("example.jpg"));

    // First display loads from disk; the second reuses the cached image.
    image.display(out)?;
    image.display(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_proxy_is_lazy() {
        let proxy = ProxyImage::new("lazy.png");
        assert!(!proxy.is_loaded());
    }

    #[test]
    fn test_loads_once_across_displays() {
        let mut proxy = ProxyImage::new("photo.png");
        let text = capture(|out| {
            for _ in 0..3 {
                proxy.display(out)?;
            }
            Ok(())
        })
        .unwrap();
        assert!(proxy.is_loaded());
        assert_eq!(text.matches("Loading image: photo.png").count(), 1);
        assert_eq!(text.matches("Displaying image: photo.png").count(), 3);
    }

    #[test]
    fn test_run_transcript() {
        assert_eq!(
            capture(run).unwrap(),
            "Loading image: example.jpg\n\
             Displaying image: example.jpg\n\
             Displaying image: example.jpg\n"
        );
    }
}
