/// Latest-wins guard for overlapping search requests.
///
/// Every keystroke re-submits the search, and nothing cancels the
/// requests already in flight, so a slow early response can land after a
/// newer one. Each outgoing request takes a counter from `issue()`; a
/// response may only be applied when `try_apply()` accepts its counter.
#[derive(Debug, Default)]
pub struct SearchSequence {
    issued: u64,
    applied: Option<u64>,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag the next outgoing request. Counters are strictly increasing.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Decide whether a response tagged `seq` may be applied.
    ///
    /// Rejects counters that were never issued and counters at or below
    /// the last applied one, so out-of-order completions are discarded
    /// instead of overwriting newer results.
    pub fn try_apply(&mut self, seq: u64) -> bool {
        if seq == 0 || seq > self.issued {
            return false;
        }
        if self.applied.is_some_and(|applied| seq <= applied) {
            return false;
        }
        self.applied = Some(seq);
        true
    }

    /// Counter of the most recently applied response, if any.
    pub fn last_applied(&self) -> Option<u64> {
        self.applied
    }
}
