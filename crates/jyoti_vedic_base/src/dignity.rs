//! Exaltation (uchcha) and debilitation (neecha) signs.

use jyoti_core::Body;

/// 1-based exaltation sign. Outer planets have none.
pub const fn exaltation_sign(body: Body) -> Option<u8> {
    match body {
        Body::Sun => Some(1),
        Body::Moon => Some(2),
        Body::Mars => Some(10),
        Body::Mercury => Some(6),
        Body::Jupiter => Some(4),
        Body::Venus => Some(12),
        Body::Saturn => Some(7),
        Body::Rahu => Some(2),
        Body::Ketu => Some(8),
        Body::Uranus | Body::Neptune | Body::Pluto => None,
    }
}

/// Sign opposite the exaltation sign.
pub const fn debilitation_sign(body: Body) -> Option<u8> {
    match exaltation_sign(body) {
        Some(s) => Some((s + 5) % 12 + 1),
        None => None,
    }
}

pub fn is_exalted(body: Body, sign_index: u8) -> bool {
    exaltation_sign(body) == Some(sign_index)
}

pub fn is_debilitated(body: Body, sign_index: u8) -> bool {
    debilitation_sign(body) == Some(sign_index)
}
