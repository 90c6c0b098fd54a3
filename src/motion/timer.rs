/// Identifies one arming of a [`TimerSlot`]. Ids are never reused by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

struct Pending<H> {
    id: TimerId,
    // Held only so that dropping it cancels the underlying timer.
    _handle: H,
}

/// A slot that holds at most one pending timer.
///
/// `H` is whatever keeps the real timer alive. In the browser that is a
/// `gloo_timers::callback::Timeout`, which cancels itself on drop, so
/// re-arming or cancelling the slot cancels the previous timer. When a timer
/// does fire it reports its id back through [`TimerSlot::fire`]; ids from
/// superseded armings are ignored.
pub struct TimerSlot<H> {
    pending: Option<Pending<H>>,
    next_id: u64,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> TimerSlot<H> {
    pub fn new() -> Self {
        Self {
            pending: None,
            next_id: 0,
        }
    }

    /// Arms the slot, replacing whatever was pending.
    ///
    /// `schedule` receives the new id and must return the handle that keeps
    /// the timer alive. The old handle is dropped before `schedule` runs.
    pub fn arm(&mut self, schedule: impl FnOnce(TimerId) -> H) -> TimerId {
        self.pending = None;
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let handle = schedule(id);
        self.pending = Some(Pending { id, _handle: handle });
        id
    }

    /// Drops the pending timer, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Claims a fired timer. Returns `true` only when `id` is the one
    /// currently pending, in which case the slot becomes empty.
    pub fn fire(&mut self, id: TimerId) -> bool {
        match &self.pending {
            Some(pending) if pending.id == id => {
                self.pending = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}
