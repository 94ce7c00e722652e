/// Receives solver events and decides how the iteration should proceed.
///
/// Observers let callers watch a run as it happens, log it, or end it early
/// without changing the solver's API. This is also the only way to cancel a
/// long run: the solvers themselves never suspend.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and `()` is a no-op observer.
/// A pair `(first, second)` shows every event to both; when both request an
/// action, the first one's wins. `None` in place of an observer never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

impl<E, A, O1, O2> Observer<E, A> for (O1, O2)
where
    O1: Observer<E, A>,
    O2: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let first = self.0.observe(event);
        let second = self.1.observe(event);
        first.or(second)
    }
}

impl<E, A, O> Observer<E, A> for Option<O>
where
    O: Observer<E, A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.as_mut().and_then(|observer| observer.observe(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<O: Observer<usize, &'static str>>(mut observer: O, events: &[usize]) -> Option<usize> {
        events
            .iter()
            .position(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_never_acts() {
        assert_eq!(drive((), &[1, 2, 3]), None);
    }

    #[test]
    fn closure_can_act() {
        let stop_at_two = |event: &usize| (*event == 2).then_some("stop");
        assert_eq!(drive(stop_at_two, &[1, 2, 3]), Some(1));
    }

    #[test]
    fn pair_sees_every_event() {
        let mut seen = Vec::new();
        let record = |event: &usize| {
            seen.push(*event);
            None::<&'static str>
        };
        let stop_at_three = |event: &usize| (*event == 3).then_some("stop");

        assert_eq!(drive((record, stop_at_three), &[1, 2, 3, 4]), Some(2));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn optional_observer() {
        let stop_at_two = |event: &usize| (*event == 2).then_some("stop");
        assert_eq!(drive(Some(stop_at_two), &[1, 2, 3]), Some(1));
        assert_eq!(drive(None::<()>, &[1, 2, 3]), None);
    }

    #[test]
    fn pair_prefers_first_action() {
        let mut pair = (|_: &usize| Some("first"), |_: &usize| Some("second"));
        assert_eq!(pair.observe(&0), Some("first"));
    }
}
