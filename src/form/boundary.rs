//! Boundary token generation.

use fastrand::Rng;

/// Generates a fresh boundary token for one body instance.
///
/// Four 64-bit draws rendered as fixed-width hex and joined with dashes:
/// 67 characters, inside the 70-character boundary limit of RFC 2046.
pub(crate) fn random_boundary() -> String {
    let mut rng = Rng::new();
    let groups: [String; 4] = std::array::from_fn(|_| format!("{:016x}", rng.u64(..)));
    groups.join("-")
}
