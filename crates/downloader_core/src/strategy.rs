use std::fmt;

/// Execution mode used to download a url list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// One blocking fetch after another on the calling thread.
    Sequential,
    /// One fetch at a time, each handed to a worker thread and awaited.
    SequentialOffThread,
    /// Every fetch dispatched at once and joined as a batch.
    Concurrent,
}

impl Strategy {
    /// Menu order.
    pub const ALL: [Strategy; 3] = [
        Strategy::Sequential,
        Strategy::SequentialOffThread,
        Strategy::Concurrent,
    ];

    pub fn from_selection(selection: u32) -> Option<Self> {
        match selection {
            1 => Some(Strategy::Sequential),
            2 => Some(Strategy::SequentialOffThread),
            3 => Some(Strategy::Concurrent),
            _ => None,
        }
    }

    pub fn selection(self) -> u32 {
        match self {
            Strategy::Sequential => 1,
            Strategy::SequentialOffThread => 2,
            Strategy::Concurrent => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Strategy::Sequential => "Normal",
            Strategy::SequentialOffThread => "Async",
            Strategy::Concurrent => "ParallelAsync",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
