//! Bodies handled by the engine and their constant tables.

use serde::Serialize;

/// A point whose ecliptic longitude the engine can compute.
///
/// Codes follow the common planetary-ephemeris numbering (Sun 0 .. Pluto 9,
/// mean node 10), with Ketu given the next free code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    /// Mean ascending lunar node.
    Rahu,
    /// Mean descending lunar node, always Rahu + 180 deg.
    Ketu,
}

/// All bodies in code order.
pub const ALL_BODIES: [Body; 12] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    pub const fn code(self) -> i32 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::Rahu => 10,
            Self::Ketu => 11,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        if code < 0 || code >= ALL_BODIES.len() as i32 {
            return None;
        }
        Some(ALL_BODIES[code as usize])
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// NAIF code of the body in an SPK kernel. Nodes are computed points.
    pub const fn naif_code(self) -> Option<i32> {
        match self {
            Self::Sun => Some(10),
            Self::Moon => Some(301),
            Self::Mercury => Some(199),
            Self::Venus => Some(299),
            Self::Mars => Some(499),
            Self::Jupiter => Some(599),
            Self::Saturn => Some(699),
            Self::Uranus => Some(799),
            Self::Neptune => Some(899),
            Self::Pluto => Some(999),
            Self::Rahu | Self::Ketu => None,
        }
    }

    /// Orbit lies inside Earth's.
    pub const fn is_inferior(self) -> bool {
        matches!(self, Self::Mercury | Self::Venus)
    }

    /// Heliocentric orbiter handled by the orbital-element pipeline.
    pub const fn is_planet(self) -> bool {
        matches!(
            self,
            Self::Mercury
                | Self::Venus
                | Self::Mars
                | Self::Jupiter
                | Self::Saturn
                | Self::Uranus
                | Self::Neptune
                | Self::Pluto
        )
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    pub const fn all() -> &'static [Body] {
        &ALL_BODIES
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Body {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or("unknown body name")
    }
}
