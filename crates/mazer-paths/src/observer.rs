use mazer_core::{CellKind, Coord};

/// Receives the cell markings a search run produces, in order.
///
/// A search emits `(coord, CellKind::Visited)` when a cell is first
/// discovered and `(coord, CellKind::FinalPath)` for each cell of the
/// reconstructed route. Start and goal cells never produce events.
/// Observers only watch: the run's control flow and results are the same
/// whether or not one is attached.
pub trait SearchObserver {
    fn on_mark(&mut self, p: Coord, kind: CellKind);
}

/// An observer that ignores every event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    #[inline(always)]
    fn on_mark(&mut self, _p: Coord, _kind: CellKind) {}
}

impl<F> SearchObserver for F
where
    F: FnMut(Coord, CellKind),
{
    #[inline]
    fn on_mark(&mut self, p: Coord, kind: CellKind) {
        self(p, kind)
    }
}
