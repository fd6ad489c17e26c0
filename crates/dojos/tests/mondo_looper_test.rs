//! Admission and photo tests for the Mondo Looper.
//!
//! Rejections are captured by a recording rejector and compared as a whole,
//! so any unexpected rejection fails the test.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![forbid(clippy::panic)]

use control_dojos::famous_people::{
    brad_pitt, chucky, doc, donald_trump, dracula, dwarfs, freddie_krueger, frankenstein, grumpy,
    happy, jason_voorhees, monsters, shaquille_oneal, sneezy, warwick_davis, wolfman,
};
use control_dojos::rollercoasters::photos_for_riders;
use control_dojos::{MessageStyle, Person, RidePhoto, RideValidator};

// ==========================================================================
// TEST HELPERS
// ==========================================================================

/// Records every rejection it is handed.
#[derive(Debug, Default)]
struct RecordingRejector {
    rejections: Vec<Vec<String>>,
}

impl RecordingRejector {
    fn accept(&mut self, reasons: &[String]) {
        self.rejections.push(reasons.to_vec());
    }

    fn sorted(mut self) -> Vec<Vec<String>> {
        self.rejections.sort();
        self.rejections
    }
}

fn failure(message: &str) -> Result<Person, Vec<String>> {
    Err(vec![message.to_string()])
}

fn photos_for(people: Vec<Person>) -> Vec<RidePhoto> {
    people.into_iter().map(RidePhoto::new).collect()
}

fn rejection(message: &str) -> Vec<String> {
    vec![message.to_string()]
}

// ==========================================================================
// ADMISSION
// ==========================================================================

#[test]
fn accept_normal_sized_riders() {
    let rider = brad_pitt();
    assert_eq!(RideValidator::mondo_looper().apply(rider.clone()), Ok(rider));
}

#[test]
fn reject_riders_under_1m20_tall() {
    assert_eq!(
        RideValidator::mondo_looper().apply(warwick_davis()),
        failure("You must be 1m20 tall to ride")
    );
}

#[test]
fn reject_riders_over_2m10_tall() {
    assert_eq!(
        RideValidator::mondo_looper().apply(shaquille_oneal()),
        failure("You must be under 2m10 tall to ride")
    );
}

#[test]
fn reject_donald_trump_because_of_the_ban() {
    assert_eq!(
        RideValidator::mondo_looper().apply(donald_trump()),
        failure("SEE YOU IN COURT, THE SECURITY OF OUR ROLLERCOASTER IS AT STAKE")
    );
}

#[test]
fn riders_hear_about_every_broken_rule() {
    let tiny_trump = Person::new("Donald Trump", 100);
    assert_eq!(
        RideValidator::mondo_looper().apply(tiny_trump),
        Err(vec![
            "You must be 1m20 tall to ride".to_string(),
            "SEE YOU IN COURT, THE SECURITY OF OUR ROLLERCOASTER IS AT STAKE".to_string(),
        ])
    );
}

#[test]
fn named_messages_say_who_was_rejected() {
    let validator = RideValidator::mondo_looper().with_style(MessageStyle::Named);
    assert_eq!(
        validator.apply(warwick_davis()),
        failure("Warwick Davis must be 1m20 tall to ride")
    );
    assert_eq!(
        validator.apply(shaquille_oneal()),
        failure("Shaquille O'Neal must be under 2m10 tall to ride")
    );
}

// ==========================================================================
// PHOTOS
// ==========================================================================

#[test]
fn only_takes_photos_of_people_allowed_on_ride() {
    let validator = RideValidator::mondo_looper().with_style(MessageStyle::Named);
    let mut rejector = RecordingRejector::default();

    let ride_photos = photos_for_riders(dwarfs(), &validator, |reasons| rejector.accept(reasons));

    assert_eq!(ride_photos, photos_for(vec![happy(), grumpy(), sneezy(), doc()]));
    assert_eq!(
        rejector.sorted(),
        vec![
            rejection("Bashful must be 1m20 tall to ride"),
            rejection("Dopey must be 1m20 tall to ride"),
            rejection("Sleepy must be 1m20 tall to ride"),
        ]
    );
}

#[test]
fn only_takes_photos_of_people_allowed_on_ride_who_can_be_photographed() {
    let validator = RideValidator::mondo_looper().with_style(MessageStyle::Named);
    let mut rejector = RecordingRejector::default();

    let ride_photos = photos_for_riders(monsters(), &validator, |reasons| rejector.accept(reasons));

    assert_eq!(
        ride_photos,
        photos_for(vec![wolfman(), freddie_krueger(), jason_voorhees()])
    );
    assert_eq!(
        rejector.sorted(),
        vec![
            rejection("Chucky must be 1m20 tall to ride"),
            rejection("Dracula could not be photographed"),
            rejection("The Monster must be under 2m10 tall to ride"),
        ]
    );
}

#[test]
fn rejector_is_never_called_when_everyone_rides() {
    let validator = RideValidator::mondo_looper();
    let mut calls = 0_usize;

    let ride_photos = photos_for_riders(vec![brad_pitt(), doc()], &validator, |_| {
        calls = calls.saturating_add(1);
    });

    assert_eq!(ride_photos.len(), 2);
    assert_eq!(calls, 0);
}

#[test]
fn monsters_are_who_they_say() {
    assert_eq!(frankenstein().name(), "The Monster");
    assert!(!dracula().casts_reflection());
    assert!(chucky().height_cm() < 120);
}
