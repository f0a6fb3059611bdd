//! Item Selection
//!
//! Toggle-membership set of item category ids.

/// Selected item categories, kept in first-selection order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectedItems(Vec<u32>);

impl SelectedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, add it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.0.iter().position(|&selected| selected == id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.0.clone()
    }
}
