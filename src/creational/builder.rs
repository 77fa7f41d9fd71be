//! Builder: a director drives a builder's steps; the builder hands back the
//! finished product.
//!
//! Each step fills one part of the product. `finish` consumes the builder
//! and refuses to return a product with a skipped part, so "field was set
//! before being read" holds by construction.

use std::fmt;
use std::io::Write;

use crate::error::{PatternError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    pub cpu: String,
    pub ram: String,
    pub storage: String,
}

impl fmt::Display for Computer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Computer Configuration:")?;
        writeln!(f, "CPU: {}", self.cpu)?;
        writeln!(f, "RAM: {}", self.ram)?;
        write!(f, "Storage: {}", self.storage)
    }
}

pub trait ComputerBuilder {
    fn build_cpu(&mut self);
    fn build_ram(&mut self);
    fn build_storage(&mut self);
    fn finish(self: Box<Self>) -> Result<Computer>;
}

#[derive(Default)]
pub struct GamingComputerBuilder {
    cpu: Option<String>,
    ram: Option<String>,
    storage: Option<String>,
}

impl GamingComputerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ComputerBuilder for GamingComputerBuilder {
    fn build_cpu(&mut self) {
        self.cpu = Some("Gaming CPU".to_string());
    }

    fn build_ram(&mut self) {
        self.ram = Some("16GB DDR4".to_string());
    }

    fn build_storage(&mut self) {
        self.storage = Some("1TB SSD".to_string());
    }

    fn finish(self: Box<Self>) -> Result<Computer> {
        Ok(Computer {
            cpu: self.cpu.ok_or(PatternError::MissingPart { part: "cpu" })?,
            ram: self.ram.ok_or(PatternError::MissingPart { part: "ram" })?,
            storage: self
                .storage
                .ok_or(PatternError::MissingPart { part: "storage" })?,
        })
    }
}

pub struct ComputerDirector;

impl ComputerDirector {
    pub fn construct(&self, builder: &mut dyn ComputerBuilder) {
        builder.build_cpu();
        builder.build_ram();
        builder.build_storage();
    }
}

// ============================================================================
// Variant: pizza builders directed by a cook
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pizza {
    pub dough: String,
    pub sauce: String,
    pub topping: String,
}

impl fmt::Display for Pizza {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Pizza with Dough: {}, Sauce: {}, Topping: {}",
            self.dough, self.sauce, self.topping
        )
    }
}

pub trait PizzaBuilder {
    fn build_dough(&mut self);
    fn build_sauce(&mut self);
    fn build_topping(&mut self);
    fn pizza(&self) -> Pizza;
}

#[derive(Default)]
pub struct HawaiianPizzaBuilder {
    pizza: Pizza,
}

impl PizzaBuilder for HawaiianPizzaBuilder {
    fn build_dough(&mut self) {
        self.pizza.dough = "Pan Dough".to_string();
    }

    fn build_sauce(&mut self) {
        self.pizza.sauce = "Hawaiian Sauce".to_string();
    }

    fn build_topping(&mut self) {
        self.pizza.topping = "Ham and Pineapple".to_string();
    }

    fn pizza(&self) -> Pizza {
        self.pizza.clone()
    }
}

#[derive(Default)]
pub struct SpicyPizzaBuilder {
    pizza: Pizza,
}

impl PizzaBuilder for SpicyPizzaBuilder {
    fn build_dough(&mut self) {
        self.pizza.dough = "Thin Dough".to_string();
    }

    fn build_sauce(&mut self) {
        self.pizza.sauce = "Spicy Tomato Sauce".to_string();
    }

    fn build_topping(&mut self) {
        self.pizza.topping = "Pepperoni and Jalapenos".to_string();
    }

    fn pizza(&self) -> Pizza {
        self.pizza.clone()
    }
}

pub struct Cook;

impl Cook {
    pub fn make_pizza(&self, builder: &mut dyn PizzaBuilder) {
        builder.build_dough();
        builder.build_sauce();
        builder.build_topping();
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut gaming_builder = Box::new(GamingComputerBuilder::new());
    let director = ComputerDirector;

    director.construct(gaming_builder.as_mut());
    let gaming_computer = gaming_builder.finish()?;
    writeln!(out, "{gaming_computer}")?;

    writeln!(out)?;
    let cook = Cook;

    let mut hawaiian = HawaiianPizzaBuilder::default();
    cook.make_pizza(&mut hawaiian);
    writeln!(out, "{}", hawaiian.pizza())?;

    let mut spicy = SpicyPizzaBuilder::default();
    cook.make_pizza(&mut spicy);
    writeln!(out, "{}", spicy.pizza())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_director_runs_every_step() {
        let mut builder = Box::new(GamingComputerBuilder::new());
        ComputerDirector.construct(builder.as_mut());
        let computer = builder.finish().unwrap();

        assert_eq!(computer.cpu, "Gaming CPU");
        assert_eq!(computer.ram, "16GB DDR4");
        assert_eq!(computer.storage, "1TB SSD");
    }

    #[test]
    fn test_storage_step_sets_storage_not_cpu() {
        let mut builder = Box::new(GamingComputerBuilder::new());
        builder.build_cpu();
        builder.build_ram();
        builder.build_storage();
        let computer = builder.finish().unwrap();
        assert_eq!(computer.cpu, "Gaming CPU");
        assert_eq!(computer.storage, "1TB SSD");
    }

    #[test]
    fn test_skipped_step_is_an_error() {
        let mut builder = Box::new(GamingComputerBuilder::new());
        builder.build_cpu();
        builder.build_ram();
        let result = builder.finish();
        assert!(matches!(result, Err(PatternError::MissingPart { part: "storage" })));
    }

    #[test]
    fn test_cook_builds_pizzas() {
        let mut spicy = SpicyPizzaBuilder::default();
        Cook.make_pizza(&mut spicy);
        assert_eq!(
            spicy.pizza(),
            Pizza {
                dough: "Thin Dough".to_string(),
                sauce: "Spicy Tomato Sauce".to_string(),
                topping: "Pepperoni and Jalapenos".to_string(),
            }
        );
    }

    #[test]
    fn test_run_transcript() {
        let text = capture(run).unwrap();
        assert_eq!(
            text,
            "Computer Configuration:\n\
             CPU: Gaming CPU\n\
             RAM: 16GB DDR4\n\
             Storage: 1TB SSD\n\
             \n\
             Pizza with Dough: Pan Dough, Sauce: Hawaiian Sauce, Topping: Ham and Pineapple\n\
             Pizza with Dough: Thin Dough, Sauce: Spicy Tomato Sauce, Topping: Pepperoni and Jalapenos\n"
        );
    }
}
