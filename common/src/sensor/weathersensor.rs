use std::ops::Range;

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

/// The measurement kinds a simulated station knows about.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SensorKind {
    Temperature,
    Humidity,
    Pressure,
}

impl SensorKind {
    pub const ALL: [SensorKind; 3] = [
        SensorKind::Temperature,
        SensorKind::Humidity,
        SensorKind::Pressure,
    ];

    /// Half-open sampling range for simulated readings of this kind.
    pub fn range(self) -> Range<f32> {
        match self {
            SensorKind::Temperature => 10.0..40.0,
            SensorKind::Humidity => 20.0..100.0,
            SensorKind::Pressure => 990.0..1000.0,
        }
    }
}

/// Formats one reading the way the console output shows it.
///
/// Temperature and pressure use one decimal place, humidity is shown as a
/// whole number.
pub fn format_reading(kind: SensorKind, value: f32) -> String {
    match kind {
        SensorKind::Temperature => {
            format!("Temperature Sensor: Measured temperature = {value:.1}°C")
        }
        SensorKind::Humidity => {
            format!("Humidity Sensor: Measured humidity = {value:.0}%")
        }
        SensorKind::Pressure => {
            format!("Pressure Sensor: Measured pressure = {value:.1} hPa")
        }
    }
}

/// A stateless producer of one simulated reading.
///
/// The random source is passed in by the caller, so tests can substitute a
/// seeded generator.
pub trait WeatherSensor {
    fn kind(&self) -> SensorKind;

    /// Draws one value from the kind-specific range.
    fn sample(&self, rng: &mut dyn RngCore) -> f32 {
        rng.gen_range(self.kind().range())
    }

    /// Samples one value and reports it on standard output.
    fn measure(&self, rng: &mut dyn RngCore) -> f32 {
        let value = self.sample(rng);
        println!("{}", format_reading(self.kind(), value));
        value
    }
}

pub type WeatherSensorPointer = Box<dyn WeatherSensor>;

/// Builds sensors of one fixed kind.
///
/// The factory indirection lets calling code ask for "a sensor of this kind"
/// without naming the concrete type, so new kinds can be added without
/// touching the callers.
pub trait WeatherSensorFactory {
    fn create_sensor(&self) -> WeatherSensorPointer;
}

#[cfg(test)]
mod tests {
    use super::{format_reading, SensorKind};

    #[test]
    fn reading_lines_use_the_documented_precision() {
        assert_eq!(
            format_reading(SensorKind::Temperature, 25.04),
            "Temperature Sensor: Measured temperature = 25.0°C"
        );
        assert_eq!(
            format_reading(SensorKind::Humidity, 60.4),
            "Humidity Sensor: Measured humidity = 60%"
        );
        assert_eq!(
            format_reading(SensorKind::Pressure, 1010.04),
            "Pressure Sensor: Measured pressure = 1010.0 hPa"
        );
    }
}
