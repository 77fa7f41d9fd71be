//! Observer: a subject keeps a list of observers and pushes every change to
//! all of them, in registration order.

use std::fmt;
use std::io::Write;
use std::rc::Rc;

use crate::error::Result;

pub trait Observer<E> {
    fn update(&self, event: &E, out: &mut dyn Write) -> Result<()>;
}

/// Observer list shared by both stations.
pub struct Subject<E> {
    observers: Vec<Rc<dyn Observer<E>>>,
}

impl<E> Default for Subject<E> {
    fn default() -> Self {
        Self {
            observers: Vec::new(),
        }
    }
}

impl<E> Subject<E> {
    pub fn attach(&mut self, observer: Rc<dyn Observer<E>>) {
        self.observers.push(observer);
    }

    /// Detaches by identity. Returns whether the observer was registered.
    pub fn detach(&mut self, observer: &Rc<dyn Observer<E>>) -> bool {
        let target = Rc::as_ptr(observer) as *const ();
        let before = self.observers.len();
        self.observers
            .retain(|o| Rc::as_ptr(o) as *const () != target);
        self.observers.len() != before
    }

    pub fn notify(&self, event: &E, out: &mut dyn Write) -> Result<()> {
        tracing::debug!(observers = self.observers.len(), "Notifying observers");
        for observer in &self.observers {
            observer.update(event, out)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

// ============================================================================
// Weather descriptions
// ============================================================================

#[derive(Default)]
pub struct WeatherStation {
    weather: String,
    subject: Subject<String>,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_observer(&mut self, observer: Rc<dyn Observer<String>>) {
        self.subject.attach(observer);
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn Observer<String>>) -> bool {
        self.subject.detach(observer)
    }

    pub fn set_weather(&mut self, weather: impl Into<String>, out: &mut dyn Write) -> Result<()> {
        self.weather = weather.into();
        self.subject.notify(&self.weather, out)
    }

    pub fn weather(&self) -> &str {
        &self.weather
    }
}

pub struct PhoneDisplay;

impl Observer<String> for PhoneDisplay {
    fn update(&self, weather: &String, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Phone Display: Weather updated - {weather}")?;
        Ok(())
    }
}

pub struct TvDisplay;

impl Observer<String> for TvDisplay {
    fn update(&self, weather: &String, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "TV Display: Weather updated - {weather}")?;
        Ok(())
    }
}

// ============================================================================
// Variant: numeric measurements
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Measurements {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl fmt::Display for Measurements {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Temperature = {}°C, Humidity = {}%, Pressure = {} hPa",
            self.temperature, self.humidity, self.pressure
        )
    }
}

#[derive(Default)]
pub struct MeasurementStation {
    latest: Measurements,
    subject: Subject<Measurements>,
}

impl MeasurementStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_observer(&mut self, observer: Rc<dyn Observer<Measurements>>) {
        self.subject.attach(observer);
    }

    pub fn remove_observer(&mut self, observer: &Rc<dyn Observer<Measurements>>) -> bool {
        self.subject.detach(observer)
    }

    pub fn set_measurements(&mut self, measurements: Measurements, out: &mut dyn Write) -> Result<()> {
        self.latest = measurements;
        self.subject.notify(&self.latest, out)
    }
}

pub struct Display {
    name: String,
}

impl Display {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Observer<Measurements> for Display {
    fn update(&self, measurements: &Measurements, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{} :: Display: {}", self.name, measurements)?;
        Ok(())
    }
}

pub fn run(out: &mut dyn Write) -> Result<()> {
    let mut station = WeatherStation::new();
    let phone: Rc<dyn Observer<String>> = Rc::new(PhoneDisplay);
    let tv: Rc<dyn Observer<String>> = Rc::new(TvDisplay);

    station.add_observer(Rc::clone(&phone));
    station.add_observer(tv);
    station.set_weather("Sunny", out)?;

    station.remove_observer(&phone);
    station.set_weather("Rainy", out)?;

    writeln!(out)?;
    let mut measurements = MeasurementStation::new();
    measurements.register_observer(Rc::new(Display::new("Display 1")));
    measurements.register_observer(Rc::new(Display::new("Display 2")));

    measurements.set_measurements(
        Measurements {
            temperature: 25.5,
            humidity: 60.0,
            pressure: 1013.2,
        },
        out,
    )?;
    measurements.set_measurements(
        Measurements {
            temperature: 24.8,
            humidity: 58.0,
            pressure: 1014.5,
        },
        out,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::capture;

    #[test]
    fn test_remove_observer_by_identity() {
        let mut station = WeatherStation::new();
        let first: Rc<dyn Observer<String>> = Rc::new(PhoneDisplay);
        let second: Rc<dyn Observer<String>> = Rc::new(PhoneDisplay);
        station.add_observer(Rc::clone(&first));
        station.add_observer(Rc::clone(&second));

        assert!(station.remove_observer(&first));
        assert!(!station.remove_observer(&first));

        let text = capture(|out| station.set_weather("Fog", out)).unwrap();
        assert_eq!(text, "Phone Display: Weather updated - Fog\n");
        assert_eq!(station.weather(), "Fog");
    }

    #[test]
    fn test_no_observers_is_silent() {
        let mut station = MeasurementStation::new();
        let text = capture(|out| station.set_measurements(Measurements::default(), out)).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_measurement_formatting() {
        let m = Measurements {
            temperature: 25.5,
            humidity: 60.0,
            pressure: 1013.2,
        };
        assert_eq!(
            m.to_string(),
            "Temperature = 25.5°C, Humidity = 60%, Pressure = 1013.2 hPa"
        );
    }

    #[test]
    fn test_run_transcript() {
        assert_eq!(
            capture(run).unwrap(),
            "Phone Display: Weather updated - Sunny\n\
             TV Display: Weather updated - Sunny\n\
             TV Display: Weather updated - Rainy\n\
             \n\
             Display 1 :: Display: Temperature = 25.5°C, Humidity = 60%, Pressure = 1013.2 hPa\n\
             Display 2 :: Display: Temperature = 25.5°C, Humidity = 60%, Pressure = 1013.2 hPa\n\
             Display 1 :: Display: Temperature = 24.8°C, Humidity = 58%, Pressure = 1014.5 hPa\n\
             Display 2 :: Display: Temperature = 24.8°C, Humidity = 58%, Pressure = 1014.5 hPa\n"
        );
    }
}
