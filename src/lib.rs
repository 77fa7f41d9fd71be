//! # Design Patterns Catalog
//!
//! Runnable, self-contained illustrations of the classic object-oriented
//! design patterns. Every pattern module exposes a `run` function that
//! writes its demo transcript to any [`std::io::Write`].
//!
//! ## Patterns Covered
//!
//! 1. **Creational**: Abstract Factory, Builder, Factory, Prototype, Singleton
//! 2. **Structural**: Adapter, Bridge, Composite, Decorator, Facade,
//!    Flyweight, Proxy
//! 3. **Behavioral**: Chain of Responsibility, Command, Interpreter,
//!    Mediator, Memento, Observer, State, Strategy, Template, Visitor
//!
//! ## Running Examples
//!
//! ```bash
//! # One pattern, no arguments
//! cargo run --bin decorator
//!
//! # The whole catalog
//! cargo run --bin patterns -- list
//! cargo run --bin patterns -- run chain observer
//! cargo run --bin patterns -- all
//! ```

pub mod behavioral;
pub mod catalog;
pub mod config;
pub mod console;
pub mod creational;
pub mod error;
pub mod logging;
pub mod runner;
pub mod structural;

pub use catalog::{Category, Pattern};
pub use config::RunnerConfig;
pub use error::{PatternError, Result};
pub use runner::Runner;
