//! Singleton via double-checked locking.
//!
//! `DoubleChecked<T>` holds an `RwLock<Option<Arc<T>>>`. Readers take the
//! shared lock and return the instance when it exists. Only on a miss does
//! a caller take the exclusive lock, check again, and construct. The second
//! check is what keeps concurrent first callers from each building one.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::Result;

pub struct DoubleChecked<T> {
    slot: RwLock<Option<Arc<T>>>,
    constructions: AtomicUsize,
}

impl<T> DoubleChecked<T> {
    pub const fn new() -> Self {
        Self {
            slot: RwLock::new(None),
            constructions: AtomicUsize::new(0),
        }
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.slot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get_or_try_init<F>(&self, init: F) -> Result<Arc<T>>
    where
        F: FnOnce() -> Result<T>,
    {
        // First check, shared lock only.
        if let Some(instance) = self.get() {
            return Ok(instance);
        }

        let mut slot = self.slot.write().unwrap_or_else(PoisonError::into_inner);
        // Second check: another thread may have won the race.
        if let Some(instance) = slot.as_ref() {
            return Ok(Arc::clone(instance));
        }

        let instance = Arc::new(init()?);
        self.constructions.fetch_add(1, Ordering::SeqCst);
        *slot = Some(Arc::clone(&instance));
        Ok(instance)
    }

    /// How many times the initializer actually ran.
    pub fn constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl<T> Default for DoubleChecked<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Singleton {
    _private: (),
}

static INSTANCE: DoubleChecked<Singleton> = DoubleChecked::new();

impl Singleton {
    /// The one process-wide instance. The announcement is written only by
    /// the call that constructs it.
    pub fn instance(out: &mut dyn Write) -> Result<Arc<Singleton>> {
        INSTANCE.get_or_try_init(|| {
            tracing::debug!("Constructing the singleton instance");
            writeln!(out, "Instantiating Singleton Class.")?;
            Ok(Singleton { _private: () })
        })
    }

    pub fn display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Display Method called.")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let first = Singleton::instance(out)?;
    first.display(out)?;

    let second = Singleton::instance(out)?;
    second.display(out)?;

    writeln!(out, "Same instance: {}", Arc::ptr_eq(&first, &second))?;
    Ok(())
}
