//! Sample riders.
//!
//! Heights are in centimetres. Against the Mondo Looper rules Happy, Grumpy,
//! Sneezy and Doc ride while Sleepy, Dopey and Bashful are too short; of the
//! monsters Chucky is too short, The Monster too tall and Dracula shows up on
//! no photo.

use crate::rollercoasters::Person;

/// Normal-sized rider.
#[must_use]
pub fn brad_pitt() -> Person {
    Person::new("Brad Pitt", 185)
}

/// Below the minimum height.
#[must_use]
pub fn warwick_davis() -> Person {
    Person::new("Warwick Davis", 116)
}

/// Above the maximum height.
#[must_use]
pub fn shaquille_oneal() -> Person {
    Person::new("Shaquille O'Neal", 224)
}

/// Banned whatever his height.
#[must_use]
pub fn donald_trump() -> Person {
    Person::new("Donald Trump", 182)
}

#[must_use]
pub fn happy() -> Person {
    Person::new("Happy", 126)
}

#[must_use]
pub fn sleepy() -> Person {
    Person::new("Sleepy", 117)
}

#[must_use]
pub fn grumpy() -> Person {
    Person::new("Grumpy", 121)
}

#[must_use]
pub fn sneezy() -> Person {
    Person::new("Sneezy", 124)
}

#[must_use]
pub fn dopey() -> Person {
    Person::new("Dopey", 104)
}

#[must_use]
pub fn bashful() -> Person {
    Person::new("Bashful", 112)
}

#[must_use]
pub fn doc() -> Person {
    Person::new("Doc", 130)
}

/// Tall enough, but casts no reflection.
#[must_use]
pub fn dracula() -> Person {
    Person::new("Dracula", 188).without_reflection()
}

/// The Monster, above the maximum height.
#[must_use]
pub fn frankenstein() -> Person {
    Person::new("The Monster", 240)
}

#[must_use]
pub fn wolfman() -> Person {
    Person::new("Wolfman", 183)
}

/// Well below the minimum height.
#[must_use]
pub fn chucky() -> Person {
    Person::new("Chucky", 76)
}

#[must_use]
pub fn freddie_krueger() -> Person {
    Person::new("Freddie Krueger", 175)
}

#[must_use]
pub fn jason_voorhees() -> Person {
    Person::new("Jason Voorhees", 196)
}

/// The seven dwarfs in queue order.
#[must_use]
pub fn dwarfs() -> Vec<Person> {
    vec![happy(), sleepy(), grumpy(), sneezy(), dopey(), bashful(), doc()]
}

/// Movie monsters in queue order.
#[must_use]
pub fn monsters() -> Vec<Person> {
    vec![
        dracula(),
        frankenstein(),
        wolfman(),
        chucky(),
        freddie_krueger(),
        jason_voorhees(),
    ]
}
