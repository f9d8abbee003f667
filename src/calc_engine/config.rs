/// Slots reserved up front for each of the two stacks.
pub const DEFAULT_STACK_CAPACITY: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Slots reserved for each stack before any input is read.
    pub initial_capacity: usize,
    /// Hard limit on stack depth; `None` lets the stacks grow.
    pub max_depth: Option<usize>,
    /// Record every applied fold in the evaluation trace.
    pub trace: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            initial_capacity: DEFAULT_STACK_CAPACITY,
            max_depth: None,
            trace: false,
        }
    }
}

impl EngineConfig {
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// The reservation never exceeds the depth limit.
    pub(crate) fn reserved_slots(&self) -> usize {
        match self.max_depth {
            Some(depth) => self.initial_capacity.min(depth),
            None => self.initial_capacity,
        }
    }
}
