mod weatherstation;
mod display;
mod dummyconditions;

pub use weatherstation::Measurements;
pub use weatherstation::WeatherObserver;
pub use weatherstation::WeatherObserverPointer;
pub use weatherstation::WeatherStation;

pub use display::Display;

pub use dummyconditions::DummyConditions;
