/// A contiguous range of one entity's list: `[from_index, from_index + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubList {
    pub entity_index: usize,
    pub from_index: usize,
    pub length: usize,
}

impl SubList {
    pub fn new(entity_index: usize, from_index: usize, length: usize) -> Self {
        Self {
            entity_index,
            from_index,
            length,
        }
    }

    /// Exclusive end of the range.
    pub fn to_index(&self) -> usize {
        self.from_index + self.length
    }
}
