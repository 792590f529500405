use std::rc::Rc;

use weather_station_common::sensor::{factory_for, SensorKind};
use weather_station_common::station::{Display, DummyConditions, WeatherStation};

/// Our App struct that holds the weather station.
///
/// The App struct is responsible for initializing the station and the console
/// display, and for running one round of the simulation: broadcasting the
/// canned conditions to the display, then taking one reading from a sensor of
/// each kind.
struct App {
    station: WeatherStation,
}

impl App {
    /// Create a new App struct.
    ///
    /// The display is registered before the first notification, so it
    /// receives every update the station ever broadcasts.
    fn new() -> anyhow::Result<Self> {
        let mut station = WeatherStation::new();

        let display = Rc::new(Display::new());
        station.register_observer(display);

        Ok(Self { station })
    }

    /// Run one round of the simulation.
    fn run(&mut self) -> anyhow::Result<()> {
        log::info!(
            "simulated weather round at {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        // Broadcast the canned conditions to every registered display.
        let conditions = DummyConditions::load()?;
        let measurements = conditions.measurements();
        self.station.set_measurements(
            measurements.temperature,
            measurements.humidity,
            measurements.pressure,
        );

        // Take one reading from a factory-built sensor of each kind.
        let mut rng = rand::thread_rng();
        for kind in SensorKind::ALL {
            let sensor = factory_for(kind).create_sensor();
            sensor.measure(&mut rng);
        }

        Ok(())
    }
}

/// A minimal main function that initializes the App and runs it.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new()?;

    app.run()
}
