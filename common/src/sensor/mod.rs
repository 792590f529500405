mod weathersensor;
mod simulated;

pub use weathersensor::format_reading;
pub use weathersensor::SensorKind;
pub use weathersensor::WeatherSensor;
pub use weathersensor::WeatherSensorFactory;
pub use weathersensor::WeatherSensorPointer;

pub use simulated::factory_for;
pub use simulated::{HumiditySensor, HumiditySensorFactory};
pub use simulated::{PressureSensor, PressureSensorFactory};
pub use simulated::{TemperatureSensor, TemperatureSensorFactory};
