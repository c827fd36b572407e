use tracing::debug;

use crate::model::{FieldUpdate, Record, RecordId};

/// Ordered list of records. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            records: vec![Self::create()],
        }
    }

    /// A detached record with a fresh id and default fields.
    pub fn create() -> Record {
        Record::blank()
    }

    pub fn add(&mut self) -> RecordId {
        let record = Self::create();
        let id = record.id.clone();
        self.records.push(record);
        debug!(record_id = %id, count = self.records.len(), "record added");
        id
    }

    /// Returns `false` when no record carries `id`; the store is left as is.
    pub fn update(&mut self, id: &RecordId, update: FieldUpdate) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| &r.id == id) else {
            debug!(record_id = %id, field = update.field_name(), "update for unknown record ignored");
            return false;
        };
        debug!(record_id = %id, field = update.field_name(), "record updated");
        record.apply(update);
        true
    }

    /// Removing the last record swaps in a fresh blank one.
    pub fn remove(&mut self, id: &RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        if self.records.len() == before {
            debug!(record_id = %id, "remove for unknown record ignored");
            return false;
        }
        if self.records.is_empty() {
            self.records.push(Self::create());
            debug!(record_id = %id, "last record removed, replaced with blank");
        } else {
            debug!(record_id = %id, count = self.records.len(), "record removed");
        }
        true
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first_id(&self) -> &RecordId {
        &self.records[0].id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MAX_IMAGE_HEIGHT, MIN_IMAGE_HEIGHT};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn new_store_holds_one_blank_record() {
        let store = RecordStore::new();
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        assert_eq!(store.as_slice()[0].amount, "");
    }

    #[test]
    fn add_appends_and_preserves_order() {
        let mut store = RecordStore::new();
        let first = store.first_id().clone();
        let second = store.add();
        let third = store.add();
        let ids: Vec<_> = store.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![first, second, third]);
    }

    #[test]
    fn update_changes_only_the_matching_record() {
        let mut store = RecordStore::new();
        let first = store.first_id().clone();
        let second = store.add();
        let untouched = store.get(&second).cloned().unwrap();

        assert!(store.update(&first, FieldUpdate::DriverName("王大明".into())));
        assert_eq!(store.get(&first).unwrap().driver_name, "王大明");
        assert_eq!(store.get(&second).unwrap(), &untouched);
    }

    #[test]
    fn update_unknown_id_is_noop() {
        let mut store = RecordStore::new();
        let snapshot = store.clone();
        assert!(!store.update(&RecordId::new("missing"), FieldUpdate::Amount("10".into())));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut store = RecordStore::new();
        store.add();
        let snapshot = store.clone();
        assert!(!store.remove(&RecordId::new("missing")));
        assert_eq!(store, snapshot);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let mut store = RecordStore::new();
        let a = store.first_id().clone();
        let b = store.add();
        let c = store.add();
        assert!(store.remove(&b));
        let ids: Vec<_> = store.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn removing_sole_record_yields_fresh_blank() {
        let mut store = RecordStore::new();
        let only = store.first_id().clone();
        store.update(&only, FieldUpdate::Amount("500".into()));
        store.update(&only, FieldUpdate::ImageHeight(300));

        assert!(store.remove(&only));
        assert_eq!(store.len(), 1);
        let fresh = &store.as_slice()[0];
        assert_ne!(fresh.id, only);
        let mut expected = Record::blank();
        expected.id = fresh.id.clone();
        assert_eq!(fresh, &expected);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add,
        Remove(usize),
        RemoveUnknown,
        Height(usize, i64),
        Amount(usize, String),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Add),
            (0usize..8).prop_map(Op::Remove),
            Just(Op::RemoveUnknown),
            (0usize..8, any::<i64>()).prop_map(|(i, h)| Op::Height(i, h)),
            (0usize..8, "[0-9a-z ]{0,6}").prop_map(|(i, s)| Op::Amount(i, s)),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_operation_sequence(ops in prop::collection::vec(op_strategy(), 0..64)) {
            let mut store = RecordStore::new();
            for op in ops {
                let pick = |i: usize, store: &RecordStore| store.as_slice()[i % store.len()].id.clone();
                match op {
                    Op::Add => { store.add(); }
                    Op::Remove(i) => { let id = pick(i, &store); store.remove(&id); }
                    Op::RemoveUnknown => { store.remove(&RecordId::new("unknown")); }
                    Op::Height(i, h) => { let id = pick(i, &store); store.update(&id, FieldUpdate::ImageHeight(h)); }
                    Op::Amount(i, s) => { let id = pick(i, &store); store.update(&id, FieldUpdate::Amount(s)); }
                }

                prop_assert!(store.len() >= 1);
                let ids: HashSet<_> = store.iter().map(|r| r.id.clone()).collect();
                prop_assert_eq!(ids.len(), store.len());
                for record in store.iter() {
                    let h = record.image_height.get();
                    prop_assert!((MIN_IMAGE_HEIGHT..=MAX_IMAGE_HEIGHT).contains(&h));
                }
            }
        }
    }
}
