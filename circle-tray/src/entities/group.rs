use std::cmp::Reverse;

use indexmap::IndexMap;
use itertools::Itertools;
use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::entities::{Disc, DiscRecord, Side};

/// A set of discs sharing a group key, packed and drawn together on one side of the tray.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    key: String,
    side: Side,
    discs: Vec<Disc>,
}

impl Group {
    pub fn new(key: impl Into<String>, side: Side) -> Self {
        Self {
            key: key.into(),
            side,
            discs: vec![],
        }
    }

    /// Creates a group from the given discs, kept in the given (input) order.
    pub fn with_discs(key: impl Into<String>, side: Side, discs: Vec<Disc>) -> Self {
        Self {
            key: key.into(),
            side,
            discs,
        }
    }

    pub fn push(&mut self, disc: Disc) {
        self.discs.push(disc);
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Discs in input order
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn len(&self) -> usize {
        self.discs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Diameter of the largest disc, 0.0 for an empty group.
    pub fn largest_diameter(&self) -> f32 {
        self.discs
            .iter()
            .map(|d| d.diameter)
            .fold(0.0, f32::max)
    }

    /// Discs in descending diameter order. The sort is stable: equal diameters keep their input order.
    pub fn sorted_discs(&self) -> Vec<&Disc> {
        self.discs
            .iter()
            .sorted_by_key(|d| Reverse(OrderedFloat(d.diameter)))
            .collect()
    }
}

/// Partitions the parsed records into groups keyed by their group key.
///
/// Groups are returned in order of first occurrence of their key.
/// Every record is assigned its 1-based original index in the order it is supplied.
/// A group takes the side of its first record.
pub fn group_records(records: impl IntoIterator<Item = DiscRecord>) -> Vec<Group> {
    let mut groups: IndexMap<String, Group> = IndexMap::new();

    for (i, record) in records.into_iter().enumerate() {
        let DiscRecord {
            group_key,
            diameter,
            side,
        } = record;
        let disc = Disc::new(diameter, i + 1);
        let group = groups
            .entry(group_key)
            .or_insert_with_key(|key| Group::new(key.clone(), side));
        if group.side != side {
            warn!(
                "[GROUP] circle #{} declares side {} but group {:?} is on the {} side, keeping {}",
                disc.original_index, side, group.key, group.side, group.side
            );
        }
        group.push(disc);
    }

    debug!(
        "[GROUP] {} records partitioned into {} groups",
        groups.values().map(Group::len).sum::<usize>(),
        groups.len()
    );

    groups.into_values().collect()
}

/// Groups in descending order of their largest disc. Ties keep their relative order.
pub fn sorted_by_largest(groups: &[Group]) -> Vec<&Group> {
    groups
        .iter()
        .sorted_by_key(|g| Reverse(OrderedFloat(g.largest_diameter())))
        .collect()
}
