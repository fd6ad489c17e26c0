//! Souvenir photos for riders who made it onto the ride.

use dojo_control::{on_failure_do, ResultExt, ResultIterExt};

use crate::rollercoasters::{Person, RidePhoto, RideValidator};

/// Photograph a rider.
///
/// # Errors
///
/// Returns `"<name> could not be photographed"` for anyone without a
/// reflection.
pub fn take_photo(person: Person) -> Result<RidePhoto, Vec<String>> {
    Ok::<_, Vec<String>>(person)
        .ensure(Person::casts_reflection, |person| {
            vec![format!("{} could not be photographed", person.name())]
        })
        .map(RidePhoto::new)
}

/// Admit a rider through `validator`, then photograph them.
pub fn ride_and_get_photo(
    validator: &RideValidator,
) -> impl Fn(Person) -> Result<RidePhoto, Vec<String>> + '_ {
    move |person| {
        validator
            .apply(person)
            .and_then(take_photo)
            .on_success_do(|photo| tracing::info!(rider = photo.person().name(), "photo taken"))
    }
}

/// Run everyone through the ride, handing each rejection to `rejector`.
///
/// Photos come back in queue order.
pub fn photos_for_riders<I, R>(people: I, validator: &RideValidator, rejector: R) -> Vec<RidePhoto>
where
    I: IntoIterator<Item = Person>,
    R: FnMut(&Vec<String>),
{
    people
        .into_iter()
        .map(ride_and_get_photo(validator))
        .inspect(on_failure_do(rejector))
        .successes()
        .collect()
}
