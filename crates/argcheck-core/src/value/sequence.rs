//! The sequence capability.

use super::Value;

/// Capabilities a value must offer to count as sequence-shaped.
///
/// Indexed access, length, membership, forward and reverse iteration,
/// element counting and first-index lookup. Implemented by the list
/// representation only; see [`Value::as_sequence`].
pub trait SequenceLike {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, index: usize) -> Option<&Value>;

    fn contains(&self, value: &Value) -> bool;

    fn iter(&self) -> Box<dyn DoubleEndedIterator<Item = &Value> + '_>;

    fn iter_rev(&self) -> Box<dyn Iterator<Item = &Value> + '_> {
        Box::new(self.iter().rev())
    }

    fn count(&self, value: &Value) -> usize {
        self.iter().filter(|item| *item == value).count()
    }

    fn index_of(&self, value: &Value) -> Option<usize> {
        self.iter().position(|item| item == value)
    }
}

impl SequenceLike for Vec<Value> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&Value> {
        self.as_slice().get(index)
    }

    fn contains(&self, value: &Value) -> bool {
        self.as_slice().contains(value)
    }

    fn iter(&self) -> Box<dyn DoubleEndedIterator<Item = &Value> + '_> {
        Box::new(self.as_slice().iter())
    }
}
