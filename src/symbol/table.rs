// Mon Aug 24 2026 - Alex

use crate::symbol::SymbolGroup;
use ahash::AHashMap;
use indexmap::IndexMap;

/// Offset-keyed and name-keyed views over one architecture's symbol groups.
///
/// The arena vector is the single source of truth; both indices hold arena
/// positions. Arena order equals first-seen order, so iterating `groups()`
/// walks the table in sequence-index order.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    groups: Vec<SymbolGroup>,
    by_offset: IndexMap<u64, usize>,
    by_name: AHashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            groups: Vec::new(),
            by_offset: IndexMap::new(),
            by_name: AHashMap::new(),
        }
    }

    /// Appends `name` as an alias of the group at `offset`, creating the
    /// group with the next 1-based sequence index when the offset is new.
    /// The name is always registered in the name index, aliases included.
    pub fn insert_symbol(&mut self, offset: u64, name: &str) -> usize {
        let index = match self.by_offset.get(&offset) {
            Some(&index) => {
                self.groups[index].names.push(name.to_string());
                index
            }
            None => {
                let index = self.groups.len();
                let sequence_index = self.by_offset.len() + 1;
                self.groups
                    .push(SymbolGroup::new(sequence_index, offset, name.to_string()));
                self.by_offset.insert(offset, index);
                index
            }
        };
        self.by_name.insert(name.to_string(), index);
        index
    }

    pub fn index_by_offset(&self, offset: u64) -> Option<usize> {
        self.by_offset.get(&offset).copied()
    }

    pub fn index_by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn group_by_offset(&self, offset: u64) -> Option<&SymbolGroup> {
        self.index_by_offset(offset).map(|index| &self.groups[index])
    }

    pub fn group_by_name(&self, name: &str) -> Option<&SymbolGroup> {
        self.index_by_name(name).map(|index| &self.groups[index])
    }

    pub fn group(&self, index: usize) -> &SymbolGroup {
        &self.groups[index]
    }

    pub fn group_mut(&mut self, index: usize) -> &mut SymbolGroup {
        &mut self.groups[index]
    }

    /// First write wins; later rows for the same offset leave the owner as is.
    pub fn set_owner(&mut self, index: usize, owner: &str) {
        let group = &mut self.groups[index];
        if group.owner_name.is_none() {
            group.owner_name = Some(owner.to_string());
        }
    }

    /// Groups in first-seen (sequence index) order.
    pub fn groups(&self) -> &[SymbolGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of distinct names across all groups, aliases included.
    pub fn name_count(&self) -> usize {
        self.by_name.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_symbol_groups_aliases_by_offset() {
        let mut table = SymbolTable::new();
        table.insert_symbol(0x6d2, "_SetupColorMatchingA@4");
        table.insert_symbol(0x6d2, "__imp__SetupColorMatchingA@4");

        assert_eq!(table.len(), 1);
        let group = table.group_by_offset(0x6d2).unwrap();
        assert_eq!(
            group.names,
            vec!["_SetupColorMatchingA@4", "__imp__SetupColorMatchingA@4"]
        );
        assert_eq!(table.name_count(), 2);
    }

    #[test]
    fn test_sequence_indices_are_dense_and_first_seen() {
        let mut table = SymbolTable::new();
        table.insert_symbol(0x22e, "__IMPORT_DESCRIPTOR_ICMUI");
        table.insert_symbol(0x450, "__NULL_IMPORT_DESCRIPTOR");
        table.insert_symbol(0x22e, "alias_of_first");
        table.insert_symbol(0x584, "ICMUI_NULL_THUNK_DATA");

        let indices: Vec<usize> = table.groups().iter().map(|g| g.sequence_index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
        assert_eq!(table.group_by_offset(0x584).unwrap().sequence_index, 3);
    }

    #[test]
    fn test_by_name_reaches_same_group_as_by_offset() {
        let mut table = SymbolTable::new();
        table.insert_symbol(0x744, "_SetupColorMatchingW@4");
        table.insert_symbol(0x744, "__imp__SetupColorMatchingW@4");

        let via_name = table.group_by_name("__imp__SetupColorMatchingW@4").unwrap();
        let via_offset = table.group_by_offset(via_name.offset).unwrap();
        assert_eq!(via_name, via_offset);
    }

    #[test]
    fn test_set_owner_first_write_wins() {
        let mut table = SymbolTable::new();
        let index = table.insert_symbol(0x6d2, "_SetupColorMatchingA@4");
        table.set_owner(index, "ICMUI.DLL");
        table.set_owner(index, "OTHER.DLL");
        assert_eq!(table.group(index).owner_name.as_deref(), Some("ICMUI.DLL"));
    }
}
