use serde::Serialize;

/// Someone queueing for a ride.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Person {
    name: String,
    height_cm: u32,
    casts_reflection: bool,
}

impl Person {
    #[must_use]
    pub fn new(name: impl Into<String>, height_cm: u32) -> Self {
        Self {
            name: name.into(),
            height_cm,
            casts_reflection: true,
        }
    }

    /// Mark this person as invisible to cameras.
    #[must_use]
    pub const fn without_reflection(mut self) -> Self {
        self.casts_reflection = false;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn height_cm(&self) -> u32 {
        self.height_cm
    }

    #[must_use]
    pub const fn casts_reflection(&self) -> bool {
        self.casts_reflection
    }
}

/// Souvenir photo of one rider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RidePhoto {
    person: Person,
}

impl RidePhoto {
    #[must_use]
    pub const fn new(person: Person) -> Self {
        Self { person }
    }

    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }
}
