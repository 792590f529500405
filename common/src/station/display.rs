use crate::station::weatherstation::WeatherObserver;

/// A console display: renders every snapshot it receives to standard output.
///
/// The display is constructed and registered by the composing caller, so it
/// is subscribed before the first notification without registering itself
/// during construction.
#[derive(Default)]
pub struct Display;

impl Display {
    pub fn new() -> Self {
        Self
    }

    /// Formats a snapshot the way the console display shows it.
    ///
    /// Temperature and pressure use one decimal place, humidity is shown as
    /// a whole number.
    pub fn format(temperature: f32, humidity: f32, pressure: f32) -> String {
        format!(
            "Temperature Display: Current temperature = {temperature:.1}°C\n\
             Humidity Display: Current humidity = {humidity:.0}%\n\
             Pressure Display: Current pressure = {pressure:.1} hPa"
        )
    }
}

impl WeatherObserver for Display {
    fn update(&self, temperature: f32, humidity: f32, pressure: f32) {
        println!("{}", Self::format(temperature, humidity, pressure));
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::Display;
    use crate::station::WeatherStation;

    #[test]
    fn formats_with_the_precision_of_each_quantity() {
        let text = Display::format(25.0, 60.0, 1010.0);

        assert_eq!(
            text,
            "Temperature Display: Current temperature = 25.0°C\n\
             Humidity Display: Current humidity = 60%\n\
             Pressure Display: Current pressure = 1010.0 hPa"
        );
    }

    #[test]
    fn registered_display_survives_an_update_pass() {
        let mut station = WeatherStation::new();
        let display = Rc::new(Display::new());
        station.register_observer(display);

        station.set_measurements(25.0, 60.0, 1010.0);

        assert_eq!(station.measurements().pressure, 1010.0);
    }
}
