// Memento: snapshots of an originator's state, held by a caretaker that
// cannot look inside them.

use std::io::Write;

use crate::error::{PatternError, Result};

#[derive(Debug, Default)]
pub struct Originator {
    state: String,
}

/// Opaque to everyone except `Originator`.
#[derive(Debug, Clone)]
pub struct Memento {
    state: String,
}

impl Originator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn create_memento(&self) -> Memento {
        Memento {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, memento: &Memento) {
        self.state.clone_from(&memento.state);
    }
}

#[derive(Debug, Default)]
pub struct Caretaker {
    mementos: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, memento: Memento) {
        self.mementos.push(memento);
    }

    pub fn get(&self, index: usize) -> Result<&Memento> {
        self.mementos
            .get(index)
            .ok_or(PatternError::MementoOutOfRange {
                index,
                len: self.mementos.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut originator = Originator::new();
    let mut caretaker = Caretaker::new();

    originator.set_state("State 1");
    caretaker.add(originator.create_memento());

    originator.set_state("State 2");
    caretaker.add(originator.create_memento());

    originator.restore(caretaker.get(0)?);
    writeln!(out, "Current state: {}", originator.state())?;

    originator.restore(caretaker.get(1)?);
    writeln!(out, "Current state: {}", originator.state())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_snapshot_is_independent_of_later_changes() {
        let mut originator = Originator::new();
        originator.set_state("draft");
        let snapshot = originator.create_memento();

        originator.set_state("final");
        originator.restore(&snapshot);
        assert_eq!(originator.state(), "draft");
    }

    #[test]
    fn test_out_of_range_index() {
        let mut caretaker = Caretaker::new();
        assert!(caretaker.is_empty());
        caretaker.add(Originator::new().create_memento());

        let err = caretaker.get(3).unwrap_err();
        assert!(matches!(err, PatternError::MementoOutOfRange { index: 3, len: 1 }));
        assert_eq!(
            err.to_string(),
            "Memento index 3 out of range (caretaker holds 1)"
        );
    }

    #[test]
    fn test_run_transcript() {
        assert_eq!(
            capture(run).unwrap(),
            "Current state: State 1\nCurrent state: State 2\n"
        );
    }
}
