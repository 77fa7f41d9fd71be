// Abstract Factory: one factory per region builds a matching car and specification.

use std::io::Write;

use crate::error::Result;

// ============================================================================
// Products
// ============================================================================

pub trait Car {
    fn model(&self) -> &'static str;

    fn assemble(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Assembling {} car.", self.model())?;
        Ok(())
    }
}

pub trait CarSpecification {
    fn region(&self) -> &'static str;
    fn requirements(&self) -> &'static str;

    fn display(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "{} Car Specification: {}",
            self.region(),
            self.requirements()
        )?;
        Ok(())
    }
}

pub struct Sedan;
impl Car for Sedan {
    fn model(&self) -> &'static str {
        "Sedan"
    }
}

pub struct Hatchback;
impl Car for Hatchback {
    fn model(&self) -> &'static str {
        "Hatchback"
    }
}

pub struct NorthAmericanSpecification;
impl CarSpecification for NorthAmericanSpecification {
    fn region(&self) -> &'static str {
        "North America"
    }

    fn requirements(&self) -> &'static str {
        "Safety features compliant with local regulations."
    }
}

pub struct EuropeanSpecification;
impl CarSpecification for EuropeanSpecification {
    fn region(&self) -> &'static str {
        "Europe"
    }

    fn requirements(&self) -> &'static str {
        "Fuel efficiency and emissions compliant with EU standards."
    }
}

// ============================================================================
// Factories
// ============================================================================

pub trait CarFactory {
    fn create_car(&self) -> Box<dyn Car>;
    fn create_specification(&self) -> Box<dyn CarSpecification>;
}

pub struct NorthAmericaCarFactory;
impl CarFactory for NorthAmericaCarFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Sedan)
    }

    fn create_specification(&self) -> Box<dyn CarSpecification> {
        Box::new(NorthAmericanSpecification)
    }
}

pub struct EuropeCarFactory;
impl CarFactory for EuropeCarFactory {
    fn create_car(&self) -> Box<dyn Car> {
        Box::new(Hatchback)
    }

    fn create_specification(&self) -> Box<dyn CarSpecification> {
        Box::new(EuropeanSpecification)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    NorthAmerica,
    Europe,
}

impl Region {
    pub fn factory(self) -> Box<dyn CarFactory> {
        match self {
            Region::NorthAmerica => Box::new(NorthAmericaCarFactory),
            Region::Europe => Box::new(EuropeCarFactory),
        }
    }
}

/// Client code only ever talks to the factory trait.
pub fn produce(factory: &dyn CarFactory, out: &mut dyn Write) -> Result<()> {
    let car = factory.create_car();
    let specification = factory.create_specification();
    car.assemble(out)?;
    specification.display(out)
}

// ============================================================================
// Variant: pizza families per city style
// ============================================================================

pub trait Pizza {
    fn label(&self) -> String;

    fn bake(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Baking {}.", self.label())?;
        Ok(())
    }

    fn cut(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Cutting {}.", self.label())?;
        Ok(())
    }

    fn pack(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Boxing {}.", self.label())?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PizzaStyle {
    NewYork,
    Chicago,
}

impl PizzaStyle {
    fn as_str(self) -> &'static str {
        match self {
            PizzaStyle::NewYork => "New York",
            PizzaStyle::Chicago => "Chicago",
        }
    }
}

pub struct CheesePizza {
    style: PizzaStyle,
}

impl Pizza for CheesePizza {
    fn label(&self) -> String {
        format!("{}-style cheese pizza", self.style.as_str())
    }
}

pub struct PepperoniPizza {
    style: PizzaStyle,
}

impl Pizza for PepperoniPizza {
    fn label(&self) -> String {
        format!("{}-style pepperoni pizza", self.style.as_str())
    }
}

pub trait PizzaFactory {
    fn create_cheese_pizza(&self) -> Box<dyn Pizza>;
    fn create_pepperoni_pizza(&self) -> Box<dyn Pizza>;
}

pub struct NewYorkPizzaFactory;
impl PizzaFactory for NewYorkPizzaFactory {
    fn create_cheese_pizza(&self) -> Box<dyn Pizza> {
        Box::new(CheesePizza {
            style: PizzaStyle::NewYork,
        })
    }

    fn create_pepperoni_pizza(&self) -> Box<dyn Pizza> {
        Box::new(PepperoniPizza {
            style: PizzaStyle::NewYork,
        })
    }
}

pub struct ChicagoPizzaFactory;
impl PizzaFactory for ChicagoPizzaFactory {
    fn create_cheese_pizza(&self) -> Box<dyn Pizza> {
        Box::new(CheesePizza {
            style: PizzaStyle::Chicago,
        })
    }

    fn create_pepperoni_pizza(&self) -> Box<dyn Pizza> {
        Box::new(PepperoniPizza {
            style: PizzaStyle::Chicago,
        })
    }
}

pub fn prepare(pizza: &dyn Pizza, out: &mut dyn Write) -> Result<()> {
    pizza.bake(out)?;
    pizza.cut(out)?;
    pizza.pack(out)
}

fn pizza_example(out: &mut dyn Write) -> Result<()> {
    let factories: [Box<dyn PizzaFactory>; 2] =
        [Box::new(NewYorkPizzaFactory), Box::new(ChicagoPizzaFactory)];

    for factory in &factories {
        prepare(factory.create_cheese_pizza().as_ref(), out)?;
        prepare(factory.create_pepperoni_pizza().as_ref(), out)?;
    }
    Ok(())
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    // Creating cars for North America, then for Europe
    produce(Region::NorthAmerica.factory().as_ref(), out)?;
    produce(Region::Europe.factory().as_ref(), out)?;

    writeln!(out)?;
    pizza_example(out)
}
