//! Rollercoaster admission: who may ride, and who gets a photo.

mod person;
pub mod photos;
pub mod validators;

pub use person::{Person, RidePhoto};
pub use photos::{photos_for_riders, ride_and_get_photo, take_photo};
pub use validators::{metres, MessageStyle, RideValidator};
