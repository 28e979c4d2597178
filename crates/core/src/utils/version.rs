//! App version comparison helpers.
//!
//! The update endpoints publish versions as equal-format strings (e.g.
//! "3.1.0"), and the comparison below is a positional character-code scan,
//! not semantic versioning: "10.0.0" vs "9.0.0" compares '1' against '9' at
//! the first position and loses. Only the fixed-width shape the server emits
//! is supported; do not swap this for a semver parse without confirming the
//! server contract, since that silently changes which users see update
//! prompts.

/// Returns true unless some character in `a` is strictly less than the
/// corresponding character in `b` at the first differing position.
///
/// Equal strings compare greater-or-equal, so this doubles as `a >= b` for
/// equal-format version strings.
pub fn is_version_greater_than(a: &str, b: &str) -> bool {
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca == cb {
            continue;
        }
        return ca as u32 >= cb as u32;
    }

    true
}

/// Picks the greatest version from `versions` under the same positional
/// comparison. Returns None when the slice is empty.
pub fn max_supported_version(versions: &[String]) -> Option<&str> {
    let mut best: Option<&str> = None;

    for version in versions {
        match best {
            Some(current) if is_version_greater_than(current, version) => {}
            _ => best = Some(version),
        }
    }

    best
}
