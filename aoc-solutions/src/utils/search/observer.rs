/// Progress notification emitted by a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent<'a, N> {
    /// `node` was removed from the frontier and is about to be expanded.
    Expand { node: &'a N },
    /// `node` was reached from `from` and placed on the frontier.
    Discover { node: &'a N, from: &'a N },
}

/// Receiver of [`SearchEvent`]s.
///
/// Any `FnMut(SearchEvent<'_, N>)` closure is an observer.
pub trait SearchObserver<N> {
    fn observe(&mut self, event: SearchEvent<'_, N>);
}

impl<N, F> SearchObserver<N> for F
where
    F: FnMut(SearchEvent<'_, N>),
{
    #[inline]
    fn observe(&mut self, event: SearchEvent<'_, N>) {
        self(event)
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<N> SearchObserver<N> for NoopObserver {
    #[inline]
    fn observe(&mut self, _event: SearchEvent<'_, N>) {}
}
