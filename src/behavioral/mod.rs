//! Behavioral patterns: how objects communicate and share responsibility.

pub mod chain;
pub mod command;
pub mod interpreter;
pub mod mediator;
pub mod memento;
pub mod observer;
pub mod state;
pub mod strategy;
pub mod template;
pub mod visitor;
