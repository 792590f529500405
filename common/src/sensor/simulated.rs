use crate::sensor::weathersensor::{
    SensorKind, WeatherSensor, WeatherSensorFactory, WeatherSensorPointer,
};

pub struct TemperatureSensor;

impl WeatherSensor for TemperatureSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }
}

pub struct HumiditySensor;

impl WeatherSensor for HumiditySensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Humidity
    }
}

pub struct PressureSensor;

impl WeatherSensor for PressureSensor {
    fn kind(&self) -> SensorKind {
        SensorKind::Pressure
    }
}

pub struct TemperatureSensorFactory;

impl WeatherSensorFactory for TemperatureSensorFactory {
    fn create_sensor(&self) -> WeatherSensorPointer {
        Box::new(TemperatureSensor)
    }
}

pub struct HumiditySensorFactory;

impl WeatherSensorFactory for HumiditySensorFactory {
    fn create_sensor(&self) -> WeatherSensorPointer {
        Box::new(HumiditySensor)
    }
}

pub struct PressureSensorFactory;

impl WeatherSensorFactory for PressureSensorFactory {
    fn create_sensor(&self) -> WeatherSensorPointer {
        Box::new(PressureSensor)
    }
}

/// The factory for a given measurement kind.
pub fn factory_for(kind: SensorKind) -> Box<dyn WeatherSensorFactory> {
    match kind {
        SensorKind::Temperature => Box::new(TemperatureSensorFactory),
        SensorKind::Humidity => Box::new(HumiditySensorFactory),
        SensorKind::Pressure => Box::new(PressureSensorFactory),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::factory_for;
    use crate::sensor::SensorKind;

    #[test]
    fn samples_stay_within_the_kind_specific_range() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for kind in SensorKind::ALL {
            let sensor = factory_for(kind).create_sensor();
            let range = kind.range();

            for _ in 0..10_000 {
                let value = sensor.sample(&mut rng);
                assert!(
                    range.contains(&value),
                    "{value} outside {range:?} for {kind:?}"
                );
            }
        }
    }

    #[test]
    fn factories_build_sensors_of_their_own_kind() {
        for kind in SensorKind::ALL {
            let sensor = factory_for(kind).create_sensor();
            assert_eq!(sensor.kind(), kind);
        }
    }
}
