//! The nine grahas and their engine bodies.

use jyoti_core::Body;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Graha {
    Surya,
    Chandra,
    Mangal,
    Buddh,
    Guru,
    Shukra,
    Shani,
    Rahu,
    Ketu,
}

/// Traditional order, Sun first.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

impl Graha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    pub const fn body(self) -> Body {
        match self {
            Self::Surya => Body::Sun,
            Self::Chandra => Body::Moon,
            Self::Mangal => Body::Mars,
            Self::Buddh => Body::Mercury,
            Self::Guru => Body::Jupiter,
            Self::Shukra => Body::Venus,
            Self::Shani => Body::Saturn,
            Self::Rahu => Body::Rahu,
            Self::Ketu => Body::Ketu,
        }
    }

    /// `None` for Uranus, Neptune and Pluto.
    pub const fn from_body(body: Body) -> Option<Self> {
        match body {
            Body::Sun => Some(Self::Surya),
            Body::Moon => Some(Self::Chandra),
            Body::Mars => Some(Self::Mangal),
            Body::Mercury => Some(Self::Buddh),
            Body::Jupiter => Some(Self::Guru),
            Body::Venus => Some(Self::Shukra),
            Body::Saturn => Some(Self::Shani),
            Body::Rahu => Some(Self::Rahu),
            Body::Ketu => Some(Self::Ketu),
            Body::Uranus | Body::Neptune | Body::Pluto => None,
        }
    }

    pub const fn all() -> &'static [Graha; 9] {
        &ALL_GRAHAS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_mapping_roundtrips() {
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_body(g.body()), Some(g));
        }
        assert_eq!(Graha::from_body(Body::Uranus), None);
        assert_eq!(Graha::Buddh.body().name(), "Mercury");
    }
}
