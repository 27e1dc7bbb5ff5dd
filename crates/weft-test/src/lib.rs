//! # weft-test
//!
//! Test harness for the weft framework. [`TestRun`] stands in for a host:
//! it owns a session and the current script run, and exposes the run's
//! delta queue for assertions. Call [`rerun`](TestRun::rerun) to simulate
//! the script being executed again in the same session.

use weft_proto::{Delta, Element};
use weft_runtime::{Container, RunContext, ScriptRun, Session};

/// A scripted run under test.
pub struct TestRun {
    session: Session,
    run: ScriptRun,
}

impl Default for TestRun {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRun {
    /// Starts a fresh session with one run in flight.
    pub fn new() -> Self {
        let mut session = Session::new();
        let run = session.begin_run();
        Self { session, run }
    }

    /// The main flow's root container.
    pub fn main(&self) -> Container {
        self.run.main.clone()
    }

    /// The side panel's root container.
    pub fn side(&self) -> Container {
        self.run.side.clone()
    }

    /// The current run's context.
    pub fn ctx(&mut self) -> &mut RunContext {
        &mut self.run.context
    }

    /// A shared borrow of the current run's context.
    pub fn context(&self) -> &RunContext {
        &self.run.context
    }

    /// Discards the current run and starts the session's next one.
    pub fn rerun(&mut self) {
        self.run = self.session.begin_run();
    }

    /// All deltas the current run has enqueued, in order.
    pub fn deltas(&self) -> &[Delta] {
        self.run.context.deltas()
    }

    /// The most recently enqueued delta.
    ///
    /// Panics if the queue is empty.
    pub fn last_delta(&self) -> &Delta {
        self.run
            .context
            .last_delta()
            .expect("delta queue is empty")
    }

    /// The most recently enqueued element payload.
    ///
    /// Panics if the queue is empty or the last delta is not an element.
    pub fn last_element(&self) -> &Element {
        self.last_delta()
            .element()
            .expect("last delta is not an element")
    }

    /// The `form_id` marshalled by the most recent element.
    pub fn last_form_id(&self) -> &str {
        self.last_element().form_id()
    }
}
