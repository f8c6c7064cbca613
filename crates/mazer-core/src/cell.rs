//! The [`CellKind`] tag carried by every grid position.

/// What occupies a grid position.
///
/// `Visited` and `FinalPath` are transient markings written by a search run
/// and cleared by [`Grid::clear_transient`](crate::Grid::clear_transient).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Wall,
    Open,
    Start,
    Goal,
    Visited,
    FinalPath,
}

impl CellKind {
    /// Whether this marking only exists during or after a search run.
    #[inline]
    pub const fn is_transient(self) -> bool {
        matches!(self, Self::Visited | Self::FinalPath)
    }

    /// Whether this is the Start or Goal tag.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Self::Start | Self::Goal)
    }

    /// ASCII glyph used by [`Grid::from_ascii`](crate::Grid::from_ascii) and
    /// the grid's `Display` impl.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Start => 'S',
            Self::Goal => 'E',
            Self::Visited => '*',
            Self::FinalPath => 'P',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Self::Wall),
            '.' => Some(Self::Open),
            'S' => Some(Self::Start),
            'E' => Some(Self::Goal),
            '*' => Some(Self::Visited),
            'P' => Some(Self::FinalPath),
            _ => None,
        }
    }
}
