/// In-memory browser history: an ordered list of entries and a cursor.
///
/// Mirrors the two write operations a browser offers. `push` drops any forward
/// entries and appends, `replace` overwrites the current entry so the old
/// location can no longer be reached with `back`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).map(String::as_str)
    }

    pub fn push(&mut self, location: impl Into<String>) {
        if self.entries.is_empty() {
            self.entries.push(location.into());
            return;
        }

        self.entries.truncate(self.cursor + 1);
        self.entries.push(location.into());
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrites the current entry, or creates the first one.
    pub fn replace(&mut self, location: impl Into<String>) {
        match self.entries.get_mut(self.cursor) {
            Some(entry) => *entry = location.into(),
            None => self.entries.push(location.into()),
        }
    }

    /// Moves one entry back. Returns the new location, or `None` at the start.
    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }

        self.cursor -= 1;
        self.current()
    }

    /// Moves one entry forward. Returns the new location, or `None` at the end.
    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }

        self.cursor += 1;
        self.current()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
