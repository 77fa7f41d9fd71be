//! Template Method: a fixed sequence of steps, some supplied by each
//! implementor and some shared.
//!
//! The orchestration lives in free functions rather than trait methods so
//! implementors cannot override the sequence itself.

use std::io::Write;

use crate::error::Result;

pub trait BeverageMaker {
    fn brew(&self, out: &mut dyn Write) -> Result<()>;
    fn add_condiments(&self, out: &mut dyn Write) -> Result<()>;

    fn boil_water(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Boiling water")?;
        Ok(())
    }

    fn pour_in_cup(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Pouring into cup")?;
        Ok(())
    }
}

pub fn make_beverage(maker: &dyn BeverageMaker, out: &mut dyn Write) -> Result<()> {
    maker.boil_water(out)?;
    maker.brew(out)?;
    maker.pour_in_cup(out)?;
    maker.add_condiments(out)
}

pub struct TeaMaker;

impl BeverageMaker for TeaMaker {
    fn brew(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Steeping the tea")?;
        Ok(())
    }

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding lemon")?;
        Ok(())
    }
}

pub struct CoffeeMaker;

impl BeverageMaker for CoffeeMaker {
    fn brew(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Dripping coffee through filter")?;
        Ok(())
    }

    fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding sugar and milk")?;
        Ok(())
    }
}

// ============================================================================
// Variant: vehicle assembly line
// ============================================================================

pub trait VehicleTemplate {
    fn assemble_body(&self, out: &mut dyn Write) -> Result<()>;
    fn install_engine(&self, out: &mut dyn Write) -> Result<()>;
    fn add_wheels(&self, out: &mut dyn Write) -> Result<()>;
}

pub fn build_vehicle(vehicle: &dyn VehicleTemplate, out: &mut dyn Write) -> Result<()> {
    vehicle.assemble_body(out)?;
    vehicle.install_engine(out)?;
    vehicle.add_wheels(out)?;
    writeln!(out, "Vehicle is ready!")?;
    Ok(())
}

pub struct Car;

impl VehicleTemplate for Car {
    fn assemble_body(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Assembling car body.")?;
        Ok(())
    }

    fn install_engine(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Installing car engine.")?;
        Ok(())
    }

    fn add_wheels(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding 4 wheels to the car.")?;
        Ok(())
    }
}

pub struct Motorcycle;

impl VehicleTemplate for Motorcycle {
    fn assemble_body(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Assembling motorcycle frame.")?;
        Ok(())
    }

    fn install_engine(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Installing motorcycle engine.")?;
        Ok(())
    }

    fn add_wheels(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Adding 2 wheels to the motorcycle.")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Making tea:")?;
    make_beverage(&TeaMaker, out)?;

    writeln!(out, "\nMaking coffee:")?;
    make_beverage(&CoffeeMaker, out)?;

    writeln!(out, "\nBuilding a Car:")?;
    build_vehicle(&Car, out)?;

    writeln!(out, "\nBuilding a Motorcycle:")?;
    build_vehicle(&Motorcycle, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    struct LoudKettle;

    impl BeverageMaker for LoudKettle {
        fn brew(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "brew")?;
            Ok(())
        }

        fn add_condiments(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "condiments")?;
            Ok(())
        }

        fn boil_water(&self, out: &mut dyn Write) -> Result<()> {
            writeln!(out, "WHISTLE")?;
            Ok(())
        }
    }

    #[test]
    fn test_overridden_hook_keeps_step_order() {
        let text = capture(|out| make_beverage(&LoudKettle, out)).unwrap();
        assert_eq!(text, "WHISTLE\nbrew\nPouring into cup\ncondiments\n");
    }

    #[test]
    fn test_run_transcript() {
        let expected = "\
Making tea:
Boiling water
Steeping the tea
Pouring into cup
Adding lemon

Making coffee:
Boiling water
Dripping coffee through filter
Pouring into cup
Adding sugar and milk

Building a Car:
Assembling car body.
Installing car engine.
Adding 4 wheels to the car.
Vehicle is ready!

Building a Motorcycle:
Assembling motorcycle frame.
Installing motorcycle engine.
Adding 2 wheels to the motorcycle.
Vehicle is ready!
";
        assert_eq!(capture(run).unwrap(), expected);
    }
}
