use serde::Deserialize;

use crate::station::weatherstation::Measurements;

/// Canned weather conditions for driving the station without real sensors.
#[derive(Deserialize, Default)]
pub struct DummyConditions {
    measurements: Measurements,
}

impl DummyConditions {
    pub fn load() -> Result<Self, serde_json::Error> {
        let json_data = std::include_str!("./dummyconditions.json");

        serde_json::from_str::<Self>(json_data)
    }

    pub fn measurements(&self) -> Measurements {
        self.measurements
    }
}

#[test]
fn test_dummy_conditions() {
    let conditions = DummyConditions::load().unwrap();
    let measurements = conditions.measurements();

    assert_eq!(measurements.temperature, 25.0);
    assert_eq!(measurements.humidity, 60.0);
    assert_eq!(measurements.pressure, 1010.0);
}
