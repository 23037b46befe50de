//! Records and the immutable record store.

/// Stable identity of a record: its position in the original store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(usize);

impl RecordId {
    /// Id of the record at `index` in the original store.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position in the original store.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered, immutable sequence of text records.
///
/// Built once at startup and never mutated afterwards. Every other
/// structure refers to records by [`RecordId`] rather than copying text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<String>,
}

impl RecordStore {
    /// Store holding `records` in the given order.
    pub fn new(records: Vec<String>) -> Self {
        Self { records }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Text of the record with the given id, if it exists.
    pub fn get(&self, id: RecordId) -> Option<&str> {
        self.records.get(id.index()).map(String::as_str)
    }

    /// Iterate over `(id, text)` pairs in store order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &str)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, text)| (RecordId::new(i), text.as_str()))
    }
}

impl FromIterator<String> for RecordStore {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
