//! Decorator: wrappers add to a component's description and cost while
//! exposing the same trait, so they stack in any order and depth.
//!
//! Prices are integers (cents or rupees) so totals never drift.

use std::fmt;
use std::io::Write;
use std::rc::Rc;

use crate::error::Result;

/// A dollar amount stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(pub u32);

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl std::ops::Add for Cents {
    type Output = Cents;

    fn add(self, rhs: Cents) -> Cents {
        Cents(self.0 + rhs.0)
    }
}

// ============================================================================
// Coffee
// ============================================================================

pub trait Coffee {
    fn description(&self) -> String;
    fn cost(&self) -> Cents;
}

pub struct PlainCoffee;

impl Coffee for PlainCoffee {
    fn description(&self) -> String {
        "Coffee".to_string()
    }

    fn cost(&self) -> Cents {
        Cents(200)
    }
}

pub struct MilkDecorator {
    inner: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        Self { inner }
    }
}

impl Coffee for MilkDecorator {
    fn description(&self) -> String {
        format!("{}, Milk", self.inner.description())
    }

    fn cost(&self) -> Cents {
        self.inner.cost() + Cents(50)
    }
}

pub struct SugarDecorator {
    inner: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub fn new(inner: Box<dyn Coffee>) -> Self {
        Self { inner }
    }
}

impl Coffee for SugarDecorator {
    fn description(&self) -> String {
        format!("{}, Sugar", self.inner.description())
    }

    fn cost(&self) -> Cents {
        self.inner.cost() + Cents(20)
    }
}

fn print_coffee(coffee: &dyn Coffee, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Description: {}", coffee.description())?;
    writeln!(out, "Cost: {}", coffee.cost())?;
    Ok(())
}

// ============================================================================
// Variant: ice cream toppings
// ============================================================================

pub trait IceCream {
    fn description(&self) -> String;
    /// Price in rupees.
    fn cost(&self) -> u32;
}

pub struct VanillaIceCream;

impl IceCream for VanillaIceCream {
    fn description(&self) -> String {
        "Vanilla Ice Cream".to_string()
    }

    fn cost(&self) -> u32 {
        160
    }
}

/// One topping layered over any ice cream.
pub struct Topping {
    inner: Box<dyn IceCream>,
    name: &'static str,
    price: u32,
}

impl Topping {
    pub fn chocolate(inner: Box<dyn IceCream>) -> Self {
        Self {
            inner,
            name: "Chocolate",
            price: 100,
        }
    }

    pub fn caramel(inner: Box<dyn IceCream>) -> Self {
        Self {
            inner,
            name: "Caramel",
            price: 150,
        }
    }
}

impl IceCream for Topping {
    fn description(&self) -> String {
        format!("{} with {}", self.inner.description(), self.name)
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + self.price
    }
}

fn ice_cream_example(out: &mut dyn Write) -> Result<()> {
    let vanilla: Box<dyn IceCream> = Box::new(VanillaIceCream);
    writeln!(out, "Order: {}, Cost: Rs.{}", vanilla.description(), vanilla.cost())?;

    let chocolate: Box<dyn IceCream> = Box::new(Topping::chocolate(vanilla));
    writeln!(out, "Order: {}, Cost: Rs.{}", chocolate.description(), chocolate.cost())?;

    let caramel = Topping::caramel(chocolate);
    writeln!(out, "Order: {}, Cost: Rs.{}", caramel.description(), caramel.cost())?;
    Ok(())
}

// ============================================================================
// Variant: cakes sharing one base
// ============================================================================

pub trait Cake {
    fn description(&self) -> String;
    fn cost(&self) -> u32;
}

pub struct PlainCake;

impl Cake for PlainCake {
    fn description(&self) -> String {
        "Plain Cake".to_string()
    }

    fn cost(&self) -> u32 {
        300
    }
}

pub struct ChocolateCake {
    inner: Rc<dyn Cake>,
}

impl ChocolateCake {
    pub fn new(inner: Rc<dyn Cake>) -> Self {
        Self { inner }
    }
}

impl Cake for ChocolateCake {
    fn description(&self) -> String {
        format!("{} with Chocolate", self.inner.description())
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + 200
    }
}

pub struct FruitCake {
    inner: Rc<dyn Cake>,
}

impl FruitCake {
    pub fn new(inner: Rc<dyn Cake>) -> Self {
        Self { inner }
    }
}

impl Cake for FruitCake {
    fn description(&self) -> String {
        format!("{} with Fruits", self.inner.description())
    }

    fn cost(&self) -> u32 {
        self.inner.cost() + 150
    }
}

fn print_cake(label: &str, cake: &dyn Cake, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{label}: {}", cake.description())?;
    writeln!(out, "Cost: Rs.{}", cake.cost())?;
    Ok(())
}

fn cake_example(out: &mut dyn Write) -> Result<()> {
    // One plain base shared by every wrapper below.
    let plain: Rc<dyn Cake> = Rc::new(PlainCake);
    print_cake("Plain Cake", plain.as_ref(), out)?;

    let chocolate: Rc<dyn Cake> = Rc::new(ChocolateCake::new(Rc::clone(&plain)));
    writeln!(out)?;
    print_cake("Chocolate Cake", chocolate.as_ref(), out)?;

    writeln!(out)?;
    print_cake("Fruit Cake", &FruitCake::new(chocolate), out)?;

    writeln!(out)?;
    print_cake("Fruit Cake", &FruitCake::new(plain), out)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let coffee = PlainCoffee;
    print_coffee(&coffee, out)?;

    writeln!(out)?;
    let milk_coffee = MilkDecorator::new(Box::new(PlainCoffee));
    print_coffee(&milk_coffee, out)?;

    writeln!(out)?;
    let sugar_milk_coffee = SugarDecorator::new(Box::new(MilkDecorator::new(Box::new(PlainCoffee))));
    print_coffee(&sugar_milk_coffee, out)?;

    writeln!(out)?;
    ice_cream_example(out)?;

    writeln!(out)?;
    cake_example(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_cents_display() {
        assert_eq!(Cents(200).to_string(), "$2.00");
        assert_eq!(Cents(270).to_string(), "$2.70");
        assert_eq!(Cents(5).to_string(), "$0.05");
    }

    #[test]
    fn test_milk_adds_to_plain() {
        let coffee = MilkDecorator::new(Box::new(PlainCoffee));
        assert_eq!(coffee.description(), "Coffee, Milk");
        assert_eq!(coffee.cost(), Cents(250));
    }

    #[test]
    fn test_decorators_stack_in_any_order() {
        let a = SugarDecorator::new(Box::new(MilkDecorator::new(Box::new(PlainCoffee))));
        let b = MilkDecorator::new(Box::new(SugarDecorator::new(Box::new(PlainCoffee))));
        assert_eq!(a.cost(), b.cost());
        assert_eq!(b.description(), "Coffee, Sugar, Milk");

        let double_milk = MilkDecorator::new(Box::new(MilkDecorator::new(Box::new(PlainCoffee))));
        assert_eq!(double_milk.cost(), Cents(300));
    }

    #[test]
    fn test_toppings_accumulate() {
        let order = Topping::caramel(Box::new(Topping::chocolate(Box::new(VanillaIceCream))));
        assert_eq!(order.description(), "Vanilla Ice Cream with Chocolate with Caramel");
        assert_eq!(order.cost(), 410);
    }

    #[test]
    fn test_shared_cake_base() {
        let plain: Rc<dyn Cake> = Rc::new(PlainCake);
        let fruit = FruitCake::new(Rc::clone(&plain));
        let chocolate = ChocolateCake::new(Rc::clone(&plain));
        assert_eq!(fruit.cost(), 450);
        assert_eq!(chocolate.cost(), 500);
        assert_eq!(Rc::strong_count(&plain), 3);
    }

    #[test]
    fn test_run_transcript() {
        let text = capture(run).unwrap();
        let expected = "\
Description: Coffee
Cost: $2.00

Description: Coffee, Milk
Cost: $2.50

Description: Coffee, Milk, Sugar
Cost: $2.70

Order: Vanilla Ice Cream, Cost: Rs.160
Order: Vanilla Ice Cream with Chocolate, Cost: Rs.260
Order: Vanilla Ice Cream with Chocolate with Caramel, Cost: Rs.410

Plain Cake: Plain Cake
Cost: Rs.300

Chocolate Cake: Plain Cake with Chocolate
Cost: Rs.500

Fruit Cake: Plain Cake with Chocolate with Fruits
Cost: Rs.650

Fruit Cake: Plain Cake with Fruits
Cost: Rs.450
";
        assert_eq!(text, expected);
    }
}
