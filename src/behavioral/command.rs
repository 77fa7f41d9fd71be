//! Command: requests become objects that a remote control stores and fires.
//!
//! Commands share their receiver (`Rc<RefCell<_>>`), so several commands can
//! drive the same TV and the TV's state is visible after they run.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::error::{PatternError, Result};

pub trait Device {
    fn turn_on(&mut self, out: &mut dyn Write) -> Result<()>;
    fn turn_off(&mut self, out: &mut dyn Write) -> Result<()>;
    fn is_on(&self) -> bool;
}

#[derive(Debug, Default)]
pub struct Tv {
    on: bool,
    channel: u32,
}

impl Tv {
    pub fn change_channel(&mut self, out: &mut dyn Write) -> Result<()> {
        self.channel += 1;
        writeln!(out, "Channel changed")?;
        Ok(())
    }

    pub fn channel(&self) -> u32 {
        self.channel
    }
}

impl Device for Tv {
    fn turn_on(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = true;
        writeln!(out, "TV is now on")?;
        Ok(())
    }

    fn turn_off(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = false;
        writeln!(out, "TV is now off")?;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Debug, Default)]
pub struct Stereo {
    on: bool,
    volume: u32,
}

impl Stereo {
    pub fn adjust_volume(&mut self, out: &mut dyn Write) -> Result<()> {
        self.volume += 1;
        writeln!(out, "Volume adjusted")?;
        Ok(())
    }

    pub fn volume(&self) -> u32 {
        self.volume
    }
}

impl Device for Stereo {
    fn turn_on(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = true;
        writeln!(out, "Stereo is now on")?;
        Ok(())
    }

    fn turn_off(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = false;
        writeln!(out, "Stereo is now off")?;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

pub trait Command {
    fn execute(&self, out: &mut dyn Write) -> Result<()>;
}

pub struct TurnOnCommand {
    device: Rc<RefCell<dyn Device>>,
}

impl TurnOnCommand {
    pub fn new(device: Rc<RefCell<dyn Device>>) -> Self {
        Self { device }
    }
}

impl Command for TurnOnCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.device.borrow_mut().turn_on(out)
    }
}

pub struct TurnOffCommand {
    device: Rc<RefCell<dyn Device>>,
}

impl TurnOffCommand {
    pub fn new(device: Rc<RefCell<dyn Device>>) -> Self {
        Self { device }
    }
}

impl Command for TurnOffCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.device.borrow_mut().turn_off(out)
    }
}

pub struct ChangeChannelCommand {
    tv: Rc<RefCell<Tv>>,
}

impl ChangeChannelCommand {
    pub fn new(tv: Rc<RefCell<Tv>>) -> Self {
        Self { tv }
    }
}

impl Command for ChangeChannelCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.tv.borrow_mut().change_channel(out)
    }
}

pub struct AdjustVolumeCommand {
    stereo: Rc<RefCell<Stereo>>,
}

impl AdjustVolumeCommand {
    pub fn new(stereo: Rc<RefCell<Stereo>>) -> Self {
        Self { stereo }
    }
}

impl Command for AdjustVolumeCommand {
    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        self.stereo.borrow_mut().adjust_volume(out)
    }
}

/// Invoker with a single button.
#[derive(Default)]
pub struct RemoteControl {
    command: Option<Box<dyn Command>>,
}

impl RemoteControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_command(&mut self, command: Box<dyn Command>) {
        self.command = Some(command);
    }

    pub fn press_button(&self, out: &mut dyn Write) -> Result<()> {
        match &self.command {
            Some(command) => command.execute(out),
            None => Err(PatternError::NoCommand),
        }
    }
}

// ============================================================================
// Variant: numbered slots on one remote
// ============================================================================

#[derive(Debug)]
pub struct ElectronicDevice {
    name: String,
    on: bool,
}

impl ElectronicDevice {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on: false,
        }
    }
}

impl Device for ElectronicDevice {
    fn turn_on(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = true;
        writeln!(out, "{} :: is ON now", self.name)?;
        Ok(())
    }

    fn turn_off(&mut self, out: &mut dyn Write) -> Result<()> {
        self.on = false;
        writeln!(out, "{} :: is OFF now", self.name)?;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[derive(Default)]
pub struct SlotRemote {
    slots: Vec<Box<dyn Command>>,
}

impl SlotRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a command and returns its slot number.
    pub fn add_command(&mut self, command: Box<dyn Command>) -> usize {
        self.slots.push(command);
        self.slots.len() - 1
    }

    /// Fires the command in `slot`. An empty slot does nothing.
    pub fn press_button(&self, slot: usize, out: &mut dyn Write) -> Result<()> {
        match self.slots.get(slot) {
            Some(command) => command.execute(out),
            None => {
                tracing::warn!(slot, slots = self.slots.len(), "No command in slot");
                Ok(())
            }
        }
    }
}

fn slot_example(out: &mut dyn Write) -> Result<()> {
    let tv: Rc<RefCell<dyn Device>> = Rc::new(RefCell::new(ElectronicDevice::new("TV")));
    let lights: Rc<RefCell<dyn Device>> = Rc::new(RefCell::new(ElectronicDevice::new("Lights")));

    let mut remote = SlotRemote::new();
    let tv_on = remote.add_command(Box::new(TurnOnCommand::new(Rc::clone(&tv))));
    let tv_off = remote.add_command(Box::new(TurnOffCommand::new(Rc::clone(&tv))));
    let lights_on = remote.add_command(Box::new(TurnOnCommand::new(Rc::clone(&lights))));
    let lights_off = remote.add_command(Box::new(TurnOffCommand::new(lights)));

    remote.press_button(tv_on, out)?;
    remote.press_button(lights_off, out)?;
    remote.press_button(tv_off, out)?;
    remote.press_button(lights_on, out)
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let tv = Rc::new(RefCell::new(Tv::default()));
    let stereo = Rc::new(RefCell::new(Stereo::default()));

    let mut remote = RemoteControl::new();

    remote.set_command(Box::new(TurnOnCommand::new(tv.clone())));
    remote.press_button(out)?;

    remote.set_command(Box::new(AdjustVolumeCommand::new(Rc::clone(&stereo))));
    remote.press_button(out)?;

    remote.set_command(Box::new(ChangeChannelCommand::new(Rc::clone(&tv))));
    remote.press_button(out)?;

    remote.set_command(Box::new(TurnOffCommand::new(tv)));
    remote.press_button(out)?;

    writeln!(out)?;
    slot_example(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_empty_remote_reports_no_command() {
        let remote = RemoteControl::new();
        let result = remote.press_button(&mut std::io::sink());
        assert!(matches!(result, Err(PatternError::NoCommand)));
    }

    #[test]
    fn test_commands_mutate_shared_receiver() {
        let tv = Rc::new(RefCell::new(Tv::default()));
        let mut remote = RemoteControl::new();

        remote.set_command(Box::new(TurnOnCommand::new(tv.clone())));
        remote.press_button(&mut std::io::sink()).unwrap();
        assert!(tv.borrow().is_on());

        remote.set_command(Box::new(ChangeChannelCommand::new(Rc::clone(&tv))));
        remote.press_button(&mut std::io::sink()).unwrap();
        remote.press_button(&mut std::io::sink()).unwrap();
        assert_eq!(tv.borrow().channel(), 2);
    }

    #[test]
    fn test_stereo_volume() {
        let stereo = Rc::new(RefCell::new(Stereo::default()));
        let command = AdjustVolumeCommand::new(Rc::clone(&stereo));
        let text = capture(|out| command.execute(out)).unwrap();
        assert_eq!(text, "Volume adjusted\n");
        assert_eq!(stereo.borrow().volume(), 1);
    }

    #[test]
    fn test_slot_out_of_range_is_ignored() {
        let mut remote = SlotRemote::new();
        let lamp: Rc<RefCell<dyn Device>> = Rc::new(RefCell::new(ElectronicDevice::new("Lamp")));
        assert_eq!(remote.add_command(Box::new(TurnOnCommand::new(lamp))), 0);

        let text = capture(|out| remote.press_button(7, out)).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_run_transcript() {
        assert_eq!(
            capture(run).unwrap(),
            "TV is now on\n\
             Volume adjusted\n\
             Channel changed\n\
             TV is now off\n\
             \n\
             TV :: is ON now\n\
             Lights :: is OFF now\n\
             TV :: is OFF now\n\
             Lights :: is ON now\n"
        );
    }
}
