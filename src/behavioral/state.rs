// State: the context forwards requests to its current state object, and
// swapping that object changes the behavior.

use std::fmt;
use std::io::Write;

use crate::error::Result;

pub trait VendingMachineState {
    fn name(&self) -> &'static str;
    fn handle_request(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct ReadyState;

impl VendingMachineState for ReadyState {
    fn name(&self) -> &'static str {
        "ready"
    }

    fn handle_request(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Ready state: Please select a product.")?;
        Ok(())
    }
}

pub struct ProductSelectedState;

impl VendingMachineState for ProductSelectedState {
    fn name(&self) -> &'static str {
        "product selected"
    }

    fn handle_request(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Product selected state: Processing payment.")?;
        Ok(())
    }
}

pub struct PaymentPendingState;

impl VendingMachineState for PaymentPendingState {
    fn name(&self) -> &'static str {
        "payment pending"
    }

    fn handle_request(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Payment pending state: Dispensing product.")?;
        Ok(())
    }
}

pub struct OutOfStockState;

impl VendingMachineState for OutOfStockState {
    fn name(&self) -> &'static str {
        "out of stock"
    }

    fn handle_request(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "Out of stock state: Product unavailable. Please select another product."
        )?;
        Ok(())
    }
}

/// Starts in `ReadyState`.
pub struct VendingMachineContext {
    state: Box<dyn VendingMachineState>,
}

impl VendingMachineContext {
    pub fn new() -> Self {
        Self {
            state: Box::new(ReadyState),
        }
    }

    pub fn set_state(&mut self, state: Box<dyn VendingMachineState>) {
        tracing::debug!(from = self.state.name(), to = state.name(), "Vending machine state change");
        self.state = state;
    }

    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    pub fn request(&self, out: &mut dyn Write) -> Result<()> {
        self.state.handle_request(out)
    }
}

impl Default for VendingMachineContext {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Variant: traffic light
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightColor {
    Red,
    Yellow,
    Green,
}

impl fmt::Display for LightColor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            LightColor::Red => "Red",
            LightColor::Yellow => "Yellow",
            LightColor::Green => "Green",
        })
    }
}

/// One lit color. Each state knows which state follows it,
/// Red -> Green -> Yellow -> Red.
pub trait TrafficLightState {
    fn color(&self) -> LightColor;
    fn next(&self) -> Box<dyn TrafficLightState>;

    fn handle(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Traffic Light is {}", self.color())?;
        Ok(())
    }
}

pub struct RedState;

impl TrafficLightState for RedState {
    fn color(&self) -> LightColor {
        LightColor::Red
    }

    fn next(&self) -> Box<dyn TrafficLightState> {
        Box::new(GreenState)
    }
}

pub struct GreenState;

impl TrafficLightState for GreenState {
    fn color(&self) -> LightColor {
        LightColor::Green
    }

    fn next(&self) -> Box<dyn TrafficLightState> {
        Box::new(YellowState)
    }
}

pub struct YellowState;

impl TrafficLightState for YellowState {
    fn color(&self) -> LightColor {
        LightColor::Yellow
    }

    fn next(&self) -> Box<dyn TrafficLightState> {
        Box::new(RedState)
    }
}

pub struct TrafficLight {
    state: Box<dyn TrafficLightState>,
}

impl TrafficLight {
    pub fn new() -> Self {
        Self {
            state: Box::new(RedState),
        }
    }

    pub fn set_state(&mut self, state: Box<dyn TrafficLightState>) {
        tracing::debug!(
            from = %self.state.color(),
            to = %state.color(),
            "Traffic light state change"
        );
        self.state = state;
    }

    pub fn color(&self) -> LightColor {
        self.state.color()
    }

    pub fn change(&self, out: &mut dyn Write) -> Result<()> {
        self.state.handle(out)
    }

    /// Moves to the state that follows the current one and reports it.
    pub fn advance(&mut self, out: &mut dyn Write) -> Result<()> {
        self.set_state(self.state.next());
        self.change(out)
    }
}

impl Default for TrafficLight {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut vending_machine = VendingMachineContext::new();
    let states: Vec<Box<dyn VendingMachineState>> = vec![
        Box::new(ReadyState),
        Box::new(ProductSelectedState),
        Box::new(PaymentPendingState),
        Box::new(OutOfStockState),
    ];
    for state in states {
        vending_machine.set_state(state);
        vending_machine.request(out)?;
    }

    writeln!(out)?;
    let mut light = TrafficLight::new();
    light.change(out)?;
    light.set_state(Box::new(GreenState));
    light.change(out)?;
    light.advance(out)?;
    light.advance(out)
}
