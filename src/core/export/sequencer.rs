//! Per-group sequence numbering
//!
//! Exportables are grouped by enclosing section and variant. Each group gets
//! its own 1-based, contiguous counter. Counters live for one export preview
//! only.

use crate::domain::{NodeId, Variant};
use std::collections::HashMap;

/// Section component of a [`GroupKey`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SectionKey {
    /// Exportables inside the section with this id
    Section(NodeId),
    /// Exportables without an enclosing section
    Unsectioned,
}

impl SectionKey {
    /// Builds a key from an optional section id
    pub fn from_section(section_id: Option<&NodeId>) -> Self {
        match section_id {
            Some(id) => SectionKey::Section(id.clone()),
            None => SectionKey::Unsectioned,
        }
    }
}

/// Grouping key scoping sequence numbers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    pub section: SectionKey,
    pub variant: Variant,
}

impl GroupKey {
    /// Creates a new group key
    pub fn new(section: SectionKey, variant: Variant) -> Self {
        Self { section, variant }
    }
}

/// Hands out sequence numbers per [`GroupKey`]
#[derive(Debug, Default)]
pub struct Sequencer {
    counters: HashMap<GroupKey, u32>,
}

impl Sequencer {
    /// Creates a sequencer with every counter at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter of `key` and returns the new value
    ///
    /// The first call for a key returns 1.
    pub fn next_index(&mut self, key: GroupKey) -> u32 {
        let counter = self.counters.entry(key).or_insert(0);
        *counter += 1;
        *counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str) -> SectionKey {
        SectionKey::Section(NodeId::new(id).unwrap())
    }

    #[test]
    fn test_indices_start_at_one_and_increase() {
        let mut sequencer = Sequencer::new();
        let key = GroupKey::new(section("s1"), Variant::Story);
        assert_eq!(sequencer.next_index(key.clone()), 1);
        assert_eq!(sequencer.next_index(key.clone()), 2);
        assert_eq!(sequencer.next_index(key), 3);
    }

    #[test]
    fn test_interleaved_groups_count_independently() {
        let mut sequencer = Sequencer::new();
        let story = GroupKey::new(section("s1"), Variant::Story);
        let feed = GroupKey::new(section("s1"), Variant::Feed);

        assert_eq!(sequencer.next_index(story.clone()), 1);
        assert_eq!(sequencer.next_index(feed.clone()), 1);
        assert_eq!(sequencer.next_index(story), 2);
        assert_eq!(sequencer.next_index(feed), 2);
    }

    #[test]
    fn test_sections_count_independently() {
        let mut sequencer = Sequencer::new();
        assert_eq!(
            sequencer.next_index(GroupKey::new(section("s1"), Variant::Feed)),
            1
        );
        assert_eq!(
            sequencer.next_index(GroupKey::new(section("s2"), Variant::Feed)),
            1
        );
        assert_eq!(
            sequencer.next_index(GroupKey::new(SectionKey::Unsectioned, Variant::Feed)),
            1
        );
        assert_eq!(
            sequencer.next_index(GroupKey::new(SectionKey::Unsectioned, Variant::Feed)),
            2
        );
    }

    #[test]
    fn test_section_key_from_option() {
        let id = NodeId::new("s9").unwrap();
        assert_eq!(SectionKey::from_section(Some(&id)), section("s9"));
        assert_eq!(SectionKey::from_section(None), SectionKey::Unsectioned);
    }
}
