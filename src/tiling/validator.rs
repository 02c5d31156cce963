//! Legality checks for candidate tilings

use crate::tiling::marker::{Marker, Tiling, count_domino_heads};

/// Check that every domino head is directly followed by its tail and every
/// tail directly preceded by its head
///
/// When `expected_dominoes` is given, the domino count is compared first and a
/// mismatch rejects the sequence before any positional check. The empty
/// sequence is valid.
pub fn is_valid(markers: &[Marker], expected_dominoes: Option<usize>) -> bool {
    if expected_dominoes.is_some_and(|expected| count_domino_heads(markers) != expected) {
        return false;
    }

    markers
        .iter()
        .enumerate()
        .all(|(position, marker)| match marker {
            Marker::Unit => true,
            Marker::DominoHead => markers.get(position + 1) == Some(&Marker::DominoTail),
            Marker::DominoTail => {
                position
                    .checked_sub(1)
                    .and_then(|previous| markers.get(previous))
                    == Some(&Marker::DominoHead)
            }
        })
}

/// [`is_valid`] for an owned tiling
pub fn is_valid_tiling(tiling: &Tiling, expected_dominoes: Option<usize>) -> bool {
    is_valid(tiling.markers(), expected_dominoes)
}

/// [`is_valid`] over raw symbol codes
///
/// Any symbol outside `1`, `2`, `3` makes the sequence invalid.
pub fn is_valid_symbols(symbols: &[u8], expected_dominoes: Option<usize>) -> bool {
    Tiling::from_symbols(symbols).is_some_and(|tiling| is_valid_tiling(&tiling, expected_dominoes))
}
