//! Composite: files and directories share one interface, so a directory can
//! hold either and treat them alike.
//!
//! Each nesting level prefixes a child's line with one more `"----> "`.

use std::io::Write;

use crate::error::Result;

const INDENT: &str = "----> ";

pub trait FileSystemComponent {
    fn name(&self) -> &str;
    /// Size in bytes; a directory reports the sum of its children.
    fn size(&self) -> u64;
    fn display(&self, out: &mut dyn Write, depth: usize) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct File {
    name: String,
    size: u64,
}

impl File {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }
}

impl FileSystemComponent for File {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn display(&self, out: &mut dyn Write, depth: usize) -> Result<()> {
        writeln!(
            out,
            "{}File: {} (size: {})",
            INDENT.repeat(depth),
            self.name,
            self.size
        )?;
        Ok(())
    }
}

pub struct Directory {
    name: String,
    components: Vec<Box<dyn FileSystemComponent>>,
}

impl Directory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
        }
    }

    pub fn add_component(&mut self, component: Box<dyn FileSystemComponent>) {
        self.components.push(component);
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl FileSystemComponent for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.components.iter().map(|c| c.size()).sum()
    }

    fn display(&self, out: &mut dyn Write, depth: usize) -> Result<()> {
        writeln!(out, "{}Directory: {}", INDENT.repeat(depth), self.name)?;
        for component in &self.components {
            component.display(out, depth + 1)?;
        }
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let file1 = File::new("document.txt", 1024);
    let file2 = File::new("image.jpg", 2048);

    let mut directory = Directory::new("My Documents");
    directory.add_component(Box::new(file1));
    directory.add_component(Box::new(file2));

    directory.display(out, 0)?;
    writeln!(out, "Total size: {}", directory.size())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_nested_directories_indent_and_sum() {
        let mut photos = Directory::new("Photos");
        photos.add_component(Box::new(File::new("beach.png", 500)));

        let mut root = Directory::new("Home");
        root.add_component(Box::new(File::new("notes.md", 100)));
        root.add_component(Box::new(photos));

        assert_eq!(root.size(), 600);
        assert_eq!(root.len(), 2);

        let text = capture(|out| root.display(out, 0)).unwrap();
        assert_eq!(
            text,
            "Directory: Home\n\
             ----> File: notes.md (size: 100)\n\
             ----> Directory: Photos\n\
             ----> ----> File: beach.png (size: 500)\n"
        );
    }

    #[test]
    fn test_empty_directory_has_zero_size() {
        let dir = Directory::new("empty");
        assert!(dir.is_empty());
        assert_eq!(dir.size(), 0);
        assert_eq!(dir.name(), "empty");
    }

    #[test]
    fn test_run_transcript() {
        assert_eq!(
            capture(run).unwrap(),
            "Directory: My Documents\n\
             ----> File: document.txt (size: 1024)\n\
             ----> File: image.jpg (size: 2048)\n\
             Total size: 3072\n"
        );
    }
}
