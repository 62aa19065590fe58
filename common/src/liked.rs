use std::collections::BTreeSet;

use crate::data::CabinId;

/// Cabins the visitor has hearted during this session. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LikedSet(BTreeSet<CabinId>);

impl LikedSet {
    pub fn new() -> Self {
        LikedSet::default()
    }

    // returns whether the cabin is liked afterwards
    pub fn toggle(&mut self, id: CabinId) -> bool {
        if self.0.remove(&id) {
            false
        } else {
            self.0.insert(id);
            true
        }
    }

    pub fn contains(&self, id: CabinId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = CabinId> + '_ {
        self.0.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liking_twice_removes() {
        let mut liked = LikedSet::new();

        assert!(liked.toggle(5));
        assert_eq!(liked.iter().collect::<Vec<_>>(), vec![5]);

        assert!(!liked.toggle(5));
        assert!(liked.is_empty());
    }

    #[test]
    fn ids_are_independent() {
        let mut liked = LikedSet::new();
        liked.toggle(1);
        liked.toggle(3);
        liked.toggle(1);

        assert!(!liked.contains(1));
        assert!(liked.contains(3));
        assert_eq!(liked.len(), 1);
    }
}
