/// Points in a frame at which the host runs scheduled jobs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RenderStage {
    /// Before items copy their state to their renderers.
    BeforeSynchronizing,
    /// After synchronization, before any drawing.
    BeforeRendering,
    /// After the frame has been recorded.
    AfterRendering,
}

type Job = Box<dyn FnOnce()>;

/// Deferred work tied to a render stage.
///
/// Jobs run once, in the order they were scheduled, the next time the host
/// reaches their stage.
#[derive(Default)]
pub struct RenderJobs {
    pending: Vec<(RenderStage, Job)>,
}

impl RenderJobs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&mut self, stage: RenderStage, job: F)
    where
        F: FnOnce() + 'static,
    {
        self.pending.push((stage, Box::new(job)));
    }

    /// Runs and removes every job scheduled for `stage`. Returns how many ran.
    pub fn run(&mut self, stage: RenderStage) -> usize {
        if self.pending.is_empty() {
            return 0;
        }

        let (due, rest): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|(s, _)| *s == stage);
        self.pending = rest;

        let count = due.len();
        for (_, job) in due {
            job();
        }
        count
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl std::fmt::Debug for RenderJobs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderJobs")
            .field("pending", &self.pending.iter().map(|(s, _)| *s).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn runs_only_matching_stage_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut jobs = RenderJobs::new();

        for (stage, tag) in [
            (RenderStage::BeforeSynchronizing, "a"),
            (RenderStage::AfterRendering, "b"),
            (RenderStage::BeforeSynchronizing, "c"),
        ] {
            let log = Rc::clone(&log);
            jobs.schedule(stage, move || log.borrow_mut().push(tag));
        }

        assert_eq!(jobs.run(RenderStage::BeforeRendering), 0);
        assert_eq!(jobs.len(), 3);

        assert_eq!(jobs.run(RenderStage::BeforeSynchronizing), 2);
        assert_eq!(*log.borrow(), vec!["a", "c"]);
        assert_eq!(jobs.len(), 1);

        assert_eq!(jobs.run(RenderStage::AfterRendering), 1);
        assert_eq!(*log.borrow(), vec!["a", "c", "b"]);
        assert!(jobs.is_empty());
    }

    #[test]
    fn jobs_run_once() {
        let hits = Rc::new(RefCell::new(0));
        let mut jobs = RenderJobs::new();
        let h = Rc::clone(&hits);
        jobs.schedule(RenderStage::BeforeRendering, move || *h.borrow_mut() += 1);

        jobs.run(RenderStage::BeforeRendering);
        jobs.run(RenderStage::BeforeRendering);
        assert_eq!(*hits.borrow(), 1);
    }
}
