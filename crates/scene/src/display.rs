//! Ordered containers of renderable objects.

use protocol::{GameObjectId, ObjectPosition};

#[derive(Clone, Debug)]
struct Entry {
    id: GameObjectId,
    sorting_key: u32,
    sorting_subkey: u32,
}

/// An ordered container of renderables: a hand, a deck, one row of an arena
/// room, an item slot column, the staging area, or the raid lineup.
///
/// Children are kept sorted ascending by `(sorting_key, sorting_subkey)`;
/// ties keep insertion order.
#[derive(Clone, Debug, Default)]
pub struct ObjectDisplay {
    entries: Vec<Entry>,
}

impl ObjectDisplay {
    /// Inserts `id` at the position dictated by its sorting keys. An object
    /// already present is repositioned rather than duplicated.
    pub fn insert(&mut self, id: GameObjectId, position: &ObjectPosition) {
        self.remove(id);
        let key = (position.sorting_key, position.sorting_subkey);
        let index = self
            .entries
            .iter()
            .position(|entry| (entry.sorting_key, entry.sorting_subkey) > key)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            index,
            Entry {
                id,
                sorting_key: position.sorting_key,
                sorting_subkey: position.sorting_subkey,
            },
        );
    }

    /// Removes `id`, returning whether it was present.
    pub fn remove(&mut self, id: GameObjectId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    pub fn contains(&self, id: GameObjectId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Children in display order.
    pub fn ids(&self) -> Vec<GameObjectId> {
        self.entries.iter().map(|entry| entry.id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use protocol::{CardId, Position};

    use super::*;

    fn card(value: u32) -> GameObjectId {
        GameObjectId::Card(CardId::new(value))
    }

    fn at_key(key: u32) -> ObjectPosition {
        ObjectPosition::with_sorting_key(Position::Staging, key)
    }

    #[test]
    fn children_stay_sorted_by_key() {
        let mut display = ObjectDisplay::default();
        display.insert(card(1), &at_key(5));
        display.insert(card(2), &at_key(1));
        display.insert(card(3), &at_key(3));
        assert_eq!(display.ids(), vec![card(2), card(3), card(1)]);
    }

    #[test]
    fn reinsert_repositions_without_duplicating() {
        let mut display = ObjectDisplay::default();
        display.insert(card(1), &at_key(1));
        display.insert(card(2), &at_key(2));
        display.insert(card(1), &at_key(9));
        assert_eq!(display.len(), 2);
        assert_eq!(display.ids(), vec![card(2), card(1)]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut display = ObjectDisplay::default();
        display.insert(card(1), &at_key(4));
        display.insert(card(2), &at_key(4));
        display.insert(card(3), &at_key(4));
        assert_eq!(display.ids(), vec![card(1), card(2), card(3)]);
    }
}
