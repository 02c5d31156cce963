//! Marker alphabet and the tiling value type

use std::fmt;

/// One column of a 1xN strip
///
/// A domino spans two columns and is written as a head immediately
/// followed by a tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    /// Column covered by a length-1 tile
    Unit,
    /// Left column of a length-2 tile
    DominoHead,
    /// Right column of a length-2 tile
    DominoTail,
}

impl Marker {
    /// Every marker, in enumeration order
    pub const ALPHABET: [Self; 3] = [Self::Unit, Self::DominoHead, Self::DominoTail];

    /// Decode a raw symbol code (1 = unit, 2 = domino head, 3 = domino tail)
    pub const fn from_symbol(symbol: u8) -> Option<Self> {
        match symbol {
            1 => Some(Self::Unit),
            2 => Some(Self::DominoHead),
            3 => Some(Self::DominoTail),
            _ => None,
        }
    }

    /// Raw symbol code of this marker
    pub const fn symbol(self) -> u8 {
        match self {
            Self::Unit => 1,
            Self::DominoHead => 2,
            Self::DominoTail => 3,
        }
    }

    const fn glyph(self) -> char {
        match self {
            Self::Unit => 'U',
            Self::DominoHead => '[',
            Self::DominoTail => ']',
        }
    }
}

/// Ordered sequence of markers covering a strip
///
/// Carries no identity beyond its contents; validity is decided by
/// [`crate::tiling::validator`], not enforced on construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tiling {
    markers: Vec<Marker>,
}

impl Tiling {
    /// Wrap a marker sequence
    pub const fn new(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    /// Decode raw symbol codes, failing on the first unknown symbol
    pub fn from_symbols(symbols: &[u8]) -> Option<Self> {
        symbols
            .iter()
            .map(|&symbol| Marker::from_symbol(symbol))
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    /// Raw symbol codes of the sequence
    pub fn symbols(&self) -> Vec<u8> {
        self.markers.iter().map(|marker| marker.symbol()).collect()
    }

    /// Markers in column order
    pub const fn markers(&self) -> &[Marker] {
        self.markers.as_slice()
    }

    /// Number of columns covered
    pub const fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the tiling covers no columns
    pub const fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Number of dominoes, counted by their heads
    pub fn domino_count(&self) -> usize {
        count_domino_heads(&self.markers)
    }
}

impl From<Vec<Marker>> for Tiling {
    fn from(markers: Vec<Marker>) -> Self {
        Self::new(markers)
    }
}

impl fmt::Display for Tiling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.markers
            .iter()
            .try_for_each(|marker| write!(f, "{}", marker.glyph()))
    }
}

/// Count domino heads in a marker slice
pub fn count_domino_heads(markers: &[Marker]) -> usize {
    markers
        .iter()
        .filter(|&&marker| marker == Marker::DominoHead)
        .count()
}
