use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// One snapshot of the measured weather conditions.
///
/// The station owns exactly one snapshot; every call to
/// [`WeatherStation::set_measurements`] overwrites it in place. No history is
/// kept.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurements {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

/// An observer that wants to be notified whenever the station receives a new
/// set of measurements.
pub trait WeatherObserver {
    fn update(&self, temperature: f32, humidity: f32, pressure: f32);
}

pub type WeatherObserverPointer = Rc<dyn WeatherObserver>;

/// The subject of the station: holds the current snapshot and broadcasts
/// every change to the registered observers, in registration order.
#[derive(Default)]
pub struct WeatherStation {
    observers: Vec<WeatherObserverPointer>,
    measurements: Measurements,
}

impl WeatherStation {
    /// Creates a station with an empty observer list and a zero-valued
    /// snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `observer` to the notification list.
    ///
    /// There is no duplicate check; registering the same observer twice means
    /// it is notified twice per update.
    pub fn register_observer(&mut self, observer: WeatherObserverPointer) {
        self.observers.push(observer);
    }

    /// Removes the first registration of `observer`, matched by identity.
    ///
    /// Removing an observer that is not registered is a no-op.
    pub fn remove_observer(&mut self, observer: &WeatherObserverPointer) {
        if let Some(index) = self
            .observers
            .iter()
            .position(|registered| Rc::ptr_eq(registered, observer))
        {
            self.observers.remove(index);
        }
    }

    /// Invokes every registered observer with the current snapshot, in
    /// registration order.
    ///
    /// The pass is synchronous and blocks until the last observer returns.
    /// Observers cannot report failure through the API; a panicking observer
    /// unwinds through this call and aborts the remaining notifications.
    pub fn notify_observers(&self) {
        for observer in &self.observers {
            observer.update(
                self.measurements.temperature,
                self.measurements.humidity,
                self.measurements.pressure,
            );
        }
    }

    /// Overwrites the snapshot, then unconditionally notifies all observers.
    ///
    /// Values are stored as-is; the station performs no range validation.
    pub fn set_measurements(&mut self, temperature: f32, humidity: f32, pressure: f32) {
        self.measurements = Measurements {
            temperature,
            humidity,
            pressure,
        };

        log::debug!("measurements changed: {:?}", self.measurements);

        self.notify_observers();
    }

    /// The most recently set snapshot.
    pub fn measurements(&self) -> Measurements {
        self.measurements
    }
}
