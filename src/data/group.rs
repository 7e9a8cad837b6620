use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::model::StateRecord;

/// How records are keyed into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKeys {
    /// Case-folded key; the first casing seen is kept for display.
    #[default]
    Canonical,
    /// Key is the region string exactly as it appeared. "Ohio" and "OHIO"
    /// end up in two groups.
    Exact,
}

impl RegionKeys {
    fn key(self, region: &str) -> String {
        match self {
            RegionKeys::Canonical => region.to_lowercase(),
            RegionKeys::Exact => region.to_string(),
        }
    }
}

/// All records seen for one region, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionGroup {
    pub display_name: String,
    pub records: Vec<StateRecord>,
}

/// Region → records, built fresh for every run.
///
/// Groups live in a `Vec` in first-seen order; the map only points into it,
/// so iteration order is deterministic.
#[derive(Debug, Clone, Default)]
pub struct GroupingIndex {
    keys: RegionKeys,
    slots: HashMap<String, usize>,
    groups: Vec<RegionGroup>,
}

impl GroupingIndex {
    pub fn new(keys: RegionKeys) -> Self {
        Self {
            keys,
            slots: HashMap::new(),
            groups: Vec::new(),
        }
    }

    /// Append a record to its region's group, creating the group on first sight.
    /// Duplicate `(region, date)` pairs are all retained.
    pub fn insert(&mut self, record: StateRecord) {
        let key = self.keys.key(&record.region);
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                self.groups.push(RegionGroup {
                    display_name: record.region.clone(),
                    records: Vec::new(),
                });
                let slot = self.groups.len() - 1;
                self.slots.insert(key, slot);
                slot
            }
        };
        self.groups[slot].records.push(record);
    }

    /// Consume a lazy sequence of parsed records, stopping at the first error.
    pub fn try_extend<I, E>(&mut self, records: I) -> Result<(), E>
    where
        I: IntoIterator<Item = Result<StateRecord, E>>,
    {
        for record in records {
            self.insert(record?);
        }
        Ok(())
    }

    pub fn groups(&self) -> &[RegionGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<RegionGroup> {
        self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across all groups.
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn rec(region: &str, day: u32, cases: i64) -> StateRecord {
        StateRecord {
            date: NaiveDate::from_ymd_opt(2020, 3, day).unwrap(),
            region: region.to_string(),
            total_cases: cases,
            deaths: 0,
        }
    }

    #[test]
    fn groups_in_first_seen_order() {
        let mut index = GroupingIndex::new(RegionKeys::Canonical);
        index.insert(rec("Ohio", 7, 1));
        index.insert(rec("Utah", 7, 2));
        index.insert(rec("Ohio", 8, 3));

        let names: Vec<&str> = index.groups().iter().map(|g| g.display_name.as_str()).collect();
        assert_eq!(names, vec!["Ohio", "Utah"]);
        assert_eq!(index.groups()[0].records.len(), 2);
        assert_eq!(index.record_count(), 3);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut index = GroupingIndex::new(RegionKeys::Canonical);
        index.insert(rec("Ohio", 7, 1));
        index.insert(rec("Ohio", 7, 1));
        assert_eq!(index.groups()[0].records.len(), 2);
    }

    #[test]
    fn canonical_keys_merge_casings() {
        let mut index = GroupingIndex::new(RegionKeys::Canonical);
        index.insert(rec("Ohio", 7, 1));
        index.insert(rec("OHIO", 8, 2));
        assert_eq!(index.len(), 1);
        assert_eq!(index.groups()[0].display_name, "Ohio");
    }

    #[test]
    fn exact_keys_split_casings() {
        let mut index = GroupingIndex::new(RegionKeys::Exact);
        index.insert(rec("Ohio", 7, 1));
        index.insert(rec("OHIO", 8, 2));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn try_extend_stops_at_first_error() {
        let mut index = GroupingIndex::new(RegionKeys::Canonical);
        let input: Vec<Result<StateRecord, &str>> =
            vec![Ok(rec("Ohio", 7, 1)), Err("bad"), Ok(rec("Ohio", 8, 2))];
        assert_eq!(index.try_extend(input), Err("bad"));
        assert_eq!(index.record_count(), 1);
    }
}
