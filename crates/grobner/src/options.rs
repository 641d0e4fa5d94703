use std::sync::Arc;

/// Which engine drives the main Buchberger loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Sequential,
    Parallel,
}

impl Default for Backend {
    fn default() -> Self {
        Backend::Sequential
    }
}

/// `progress_callback(loops, basis_size, queue_size)`, invoked alongside the
/// throttled log line (roughly every 1,000 loop iterations).
pub type ProgressCallback = Arc<dyn Fn(usize, usize, usize) + Send + Sync>;

/// Options recognised by `groebner_basis`/`groebner_transformation`.
#[derive(Clone, Default)]
pub struct GrobnerOptions {
    /// Cap on the lcm-degree of pairs the engine will consider; pairs above
    /// this threshold are left unexpanded in the queue.
    pub max_degree: Option<u32>,
    /// Whether to build and return the provenance matrix.
    pub with_transformation: bool,
    pub backend: Backend,
    /// Worker count for `Backend::Parallel`; ignored otherwise.
    pub threads: usize,
    pub progress_callback: Option<ProgressCallback>,
    /// Cooperative cancellation; checked at the top of every loop iteration
    /// and after every lock acquisition in the parallel engine.
    pub cancel: Option<Arc<std::sync::atomic::AtomicBool>>,
}

impl std::fmt::Debug for GrobnerOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GrobnerOptions")
            .field("max_degree", &self.max_degree)
            .field("with_transformation", &self.with_transformation)
            .field("backend", &self.backend)
            .field("threads", &self.threads)
            .field("progress_callback", &self.progress_callback.is_some())
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}

impl GrobnerOptions {
    pub fn threads_or_default(&self) -> usize {
        if self.threads == 0 {
            1
        } else {
            self.threads
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|c| c.load(std::sync::atomic::Ordering::Relaxed))
            .unwrap_or(false)
    }
}
