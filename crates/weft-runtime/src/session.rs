//! Sessions and script runs.
//!
//! A [`Session`] corresponds to one connected app instance and hands out a
//! fresh [`ScriptRun`] for every execution of the user's script. Each run
//! owns its own [`RunContext`]; state never leaks between runs.

use uuid::Uuid;

use weft_core::logging::run_span;

use crate::container::{Container, RootContainer};
use crate::context::RunContext;

/// One connected app instance.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    runs: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a new session with a random id.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            runs: 0,
        }
    }

    /// The session's stable identifier.
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// The number of runs started so far.
    pub const fn runs(&self) -> u64 {
        self.runs
    }

    /// Starts a new script run with a fresh context and root containers.
    pub fn begin_run(&mut self) -> ScriptRun {
        self.runs += 1;
        let span = run_span(&self.id.to_string(), self.runs);
        tracing::debug!(parent: &span, "run context created");
        ScriptRun {
            run: self.runs,
            span,
            context: RunContext::new(),
            main: Container::new_root(RootContainer::Main),
            side: Container::new_root(RootContainer::Side),
        }
    }
}

/// One execution of the user's script.
///
/// The host enters [`span`](ScriptRun::span) for the duration of the run so
/// that log output carries the session and run identifiers, drives the
/// script against `main`/`side` with `context`, then drains the context's
/// delta queue and drops the run.
#[derive(Debug)]
pub struct ScriptRun {
    /// 1-based run number within the session.
    pub run: u64,
    /// Tracing span covering the run.
    pub span: tracing::Span,
    /// The run's state; discarded when the run ends.
    pub context: RunContext,
    /// The main flow's root container.
    pub main: Container,
    /// The side panel's root container.
    pub side: Container,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_have_distinct_ids() {
        assert_ne!(Session::new().id(), Session::new().id());
    }

    #[test]
    fn test_begin_run_counts_runs() {
        let mut session = Session::new();
        assert_eq!(session.runs(), 0);
        let first = session.begin_run();
        let second = session.begin_run();
        assert_eq!(first.run, 1);
        assert_eq!(second.run, 2);
        assert_eq!(session.runs(), 2);
    }

    #[test]
    fn test_runs_start_with_fresh_state() {
        let mut session = Session::new();
        let mut run = session.begin_run();
        assert!(run.context.register_form_id("button-abc"));

        // The same form id registers cleanly on the next run.
        let mut rerun = session.begin_run();
        assert!(rerun.context.register_form_id("button-abc"));
        assert!(rerun.context.deltas().is_empty());
    }

    #[test]
    fn test_run_roots() {
        let mut session = Session::new();
        let run = session.begin_run();
        assert!(run.main.is_main_root());
        assert_eq!(run.side.root(), RootContainer::Side);
        assert!(run.main.form_data().is_none());
        assert!(run.side.form_data().is_none());
    }
}
