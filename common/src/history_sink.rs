//! Where the filter model publishes its URL after each change.

pub trait HistorySink {
    /// Push `path?query` onto the navigation stack.
    fn push(&mut self, path: &str, query: &str);
}

/// Keeps pushed URLs in memory. Used off the browser and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHistory {
    pub entries: Vec<String>,
}

impl MemoryHistory {
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }
}

impl HistorySink for MemoryHistory {
    fn push(&mut self, path: &str, query: &str) {
        self.entries.push(format!("{path}?{query}"));
    }
}
