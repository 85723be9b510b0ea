//! Placeholder naming sessions.

use std::cell::Cell;

/// Issues placeholder names for bound parameters.
///
/// Names run `v1`, `v2`, ... and never repeat for the life of the
/// session. Compiling several statements against one session keeps
/// their parameter names disjoint, so the resulting fragments can be
/// spliced into a single round trip without collisions.
///
/// The counter lives in a [`Cell`], so a session stays on one thread;
/// give each thread its own.
#[derive(Debug, Default)]
pub struct ParamSession {
    counter: Cell<u64>,
}

impl ParamSession {
    /// Creates a session whose first issued name is `v1`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: Cell::new(0),
        }
    }

    /// Creates a session whose next issued name is `v{n + 1}`.
    #[must_use]
    pub const fn starting_at(n: u64) -> Self {
        Self {
            counter: Cell::new(n),
        }
    }

    /// Issues the next name.
    pub fn next(&self) -> String {
        let n = self.counter.get() + 1;
        self.counter.set(n);
        format!("v{n}")
    }

    /// The most recently issued name, `v0` when none has been issued.
    #[must_use]
    pub fn current(&self) -> String {
        format!("v{}", self.counter.get())
    }

    /// How many names this session has issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.counter.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_monotonic() {
        let session = ParamSession::new();
        assert_eq!(session.next(), "v1");
        assert_eq!(session.next(), "v2");
        assert_eq!(session.next(), "v3");
        assert_eq!(session.current(), "v3");
        assert_eq!(session.issued(), 3);
    }

    #[test]
    fn test_starting_at_offsets_names() {
        let session = ParamSession::starting_at(41);
        assert_eq!(session.next(), "v42");
        assert_eq!(session.issued(), 42);
    }

    #[test]
    fn test_fresh_session_current_is_v0() {
        let session = ParamSession::new();
        assert_eq!(session.current(), "v0");
        assert_eq!(session.issued(), 0);
    }
}
