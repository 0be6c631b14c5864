//! The record store: the full collection as fetched, in fetch order.

use std::collections::BTreeSet;

use roster_model::{ModelError, Record, RecordId, ensure_unique_ids};

/// Full, unfiltered record collection.
///
/// Insertion order is fetch order. Ids are unique at all times: the only
/// way to populate the store is [`RecordStore::from_records`], which checks
/// them, and records are never created locally afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl RecordStore {
    /// Build a store from fetched records.
    pub fn from_records(records: Vec<Record>) -> Result<Self, ModelError> {
        ensure_unique_ids(&records)?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(|r| r.id)
    }

    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Replace a record in place, keeping its position.
    ///
    /// The replacement must carry the same id; returns `false` when no
    /// record with that id exists.
    pub fn replace(&mut self, record: Record) -> bool {
        match self.position(record.id) {
            Some(index) => {
                self.records[index] = record;
                true
            }
            None => false,
        }
    }

    /// Remove one record. Absent ids are a no-op.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        self.position(id).map(|index| self.records.remove(index))
    }

    /// Remove every record whose id is in `ids`, returning how many went.
    pub fn remove_all(&mut self, ids: &BTreeSet<RecordId>) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(&r.id));
        before - self.records.len()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(ids: &[u64]) -> RecordStore {
        let records = ids
            .iter()
            .map(|&id| Record::new(RecordId::new(id), "n", "e", "r"))
            .collect();
        RecordStore::from_records(records).unwrap()
    }

    #[test]
    fn rejects_duplicate_ids() {
        let records = vec![
            Record::new(RecordId::new(1), "a", "a", "a"),
            Record::new(RecordId::new(1), "b", "b", "b"),
        ];
        assert_eq!(
            RecordStore::from_records(records),
            Err(ModelError::DuplicateId(RecordId::new(1)))
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let mut s = store(&[1, 2, 3]);
        assert!(s.remove(RecordId::new(2)).is_some());
        assert!(s.remove(RecordId::new(2)).is_none());
        assert_eq!(s.ids().collect::<Vec<_>>(), vec![RecordId::new(1), RecordId::new(3)]);
    }

    #[test]
    fn remove_all_preserves_order_of_survivors() {
        let mut s = store(&[5, 4, 3, 2, 1]);
        let gone = BTreeSet::from([RecordId::new(4), RecordId::new(2), RecordId::new(9)]);
        assert_eq!(s.remove_all(&gone), 2);
        assert_eq!(
            s.ids().map(RecordId::get).collect::<Vec<_>>(),
            vec![5, 3, 1]
        );
    }

    #[test]
    fn replace_keeps_position() {
        let mut s = store(&[1, 2, 3]);
        assert!(s.replace(Record::new(RecordId::new(2), "Zed", "z@x.io", "admin")));
        assert_eq!(s.as_slice()[1].name, "Zed");
        assert!(!s.replace(Record::new(RecordId::new(8), "x", "x", "x")));
    }
}
