// Mediator: airplanes never talk to each other, only to the control tower.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clearance {
    Takeoff,
    Landing,
}

pub trait Airplane {
    fn callsign(&self) -> &str;
    fn notify(&self, message: &str, out: &mut dyn Write) -> Result<()>;
}

pub trait AirTrafficControlTower {
    fn request_takeoff(&self, airplane: &dyn Airplane, out: &mut dyn Write) -> Result<()>;
    fn request_landing(&self, airplane: &dyn Airplane, out: &mut dyn Write) -> Result<()>;
}

/// Tower that grants every request and records who asked for what.
#[derive(Default)]
pub struct AirportControlTower {
    traffic: RefCell<Vec<(String, Clearance)>>,
}

impl AirportControlTower {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn traffic_log(&self) -> Vec<(String, Clearance)> {
        self.traffic.borrow().clone()
    }

    fn record(&self, airplane: &dyn Airplane, clearance: Clearance) {
        tracing::debug!(callsign = airplane.callsign(), ?clearance, "Tower handling request");
        self.traffic
            .borrow_mut()
            .push((airplane.callsign().to_string(), clearance));
    }
}

impl AirTrafficControlTower for AirportControlTower {
    fn request_takeoff(&self, airplane: &dyn Airplane, out: &mut dyn Write) -> Result<()> {
        self.record(airplane, Clearance::Takeoff);
        airplane.notify("Requesting takeoff clearance.", out)
    }

    fn request_landing(&self, airplane: &dyn Airplane, out: &mut dyn Write) -> Result<()> {
        self.record(airplane, Clearance::Landing);
        airplane.notify("Requesting landing clearance.", out)
    }
}

pub struct CommercialAirplane {
    callsign: String,
    tower: Rc<dyn AirTrafficControlTower>,
}

impl CommercialAirplane {
    pub fn new(callsign: impl Into<String>, tower: Rc<dyn AirTrafficControlTower>) -> Self {
        Self {
            callsign: callsign.into(),
            tower,
        }
    }

    pub fn request_takeoff(&self, out: &mut dyn Write) -> Result<()> {
        self.tower.request_takeoff(self, out)
    }

    pub fn request_landing(&self, out: &mut dyn Write) -> Result<()> {
        self.tower.request_landing(self, out)
    }
}

impl Airplane for CommercialAirplane {
    fn callsign(&self) -> &str {
        &self.callsign
    }

    fn notify(&self, message: &str, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Commercial Airplane: {message}")?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let tower = Rc::new(AirportControlTower::new());

    let airplane1 = CommercialAirplane::new("AC101", tower.clone());
    let airplane2 = CommercialAirplane::new("BA202", tower.clone());

    airplane1.request_takeoff(out)?;
    airplane2.request_landing(out)?;

    for (callsign, clearance) in tower.traffic_log() {
        writeln!(out, "Tower log: {callsign} {clearance:?}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_tower_logs_requests_in_order() {
        let tower = Rc::new(AirportControlTower::new());
        let plane = CommercialAirplane::new("LH7", tower.clone());

        plane.request_landing(&mut std::io::sink()).unwrap();
        plane.request_takeoff(&mut std::io::sink()).unwrap();

        assert_eq!(
            tower.traffic_log(),
            vec![
                ("LH7".to_string(), Clearance::Landing),
                ("LH7".to_string(), Clearance::Takeoff),
            ]
        );
    }

    #[test]
    fn test_run_transcript() {
        assert_eq!(
            capture(run).unwrap(),
            "Commercial Airplane: Requesting takeoff clearance.\n\
             Commercial Airplane: Requesting landing clearance.\n\
             Tower log: AC101 Takeoff\n\
             Tower log: BA202 Landing\n"
        );
    }
}
