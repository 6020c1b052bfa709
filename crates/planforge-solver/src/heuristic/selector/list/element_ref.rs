/// An insertion point in one entity's list.
///
/// `index` is the position the inserted element will take; 0 makes it the
/// new head, `list_len` appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub entity_index: usize,
    pub index: usize,
}

impl ElementRef {
    pub fn new(entity_index: usize, index: usize) -> Self {
        Self {
            entity_index,
            index,
        }
    }

    /// The head of an entity's list.
    pub fn head(entity_index: usize) -> Self {
        Self::new(entity_index, 0)
    }

    pub fn is_head(&self) -> bool {
        self.index == 0
    }
}
