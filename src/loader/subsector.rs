use std::collections::HashMap;

use crate::reader::CellValue;

/// Assigns insertion-order ids to distinct subsector names for the duration
/// of one run. All rows with a missing or blank name collapse into a single
/// unnamed bucket.
#[derive(Debug, Default)]
pub struct SubsectorIndex {
    ids: HashMap<Option<String>, i64>,
}

/// Outcome of resolving one subsector name
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved {
    /// First occurrence; the caller must insert the new Subsector row
    New(i64),
    Existing(i64),
}

impl Resolved {
    pub fn id(&self) -> i64 {
        match self {
            Resolved::New(id) | Resolved::Existing(id) => *id,
        }
    }
}

impl SubsectorIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, name: Option<&str>) -> Resolved {
        let key = name.map(str::to_string);
        if let Some(&id) = self.ids.get(&key) {
            return Resolved::Existing(id);
        }
        let id = self.ids.len() as i64;
        self.ids.insert(key, id);
        Resolved::New(id)
    }

    /// Count of distinct subsectors seen so far
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Extract the subsector name from a raw cell. Blank cells yield None, which
/// keys the shared unnamed bucket.
pub fn subsector_name(cell: &CellValue) -> Option<String> {
    if cell.is_blank() {
        None
    } else {
        Some(cell.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_name_resolves_to_same_id() {
        let mut index = SubsectorIndex::new();
        assert_eq!(index.resolve(Some("Food")), Resolved::New(0));
        assert_eq!(index.resolve(Some("Beverage")), Resolved::New(1));
        assert_eq!(index.resolve(Some("Food")), Resolved::Existing(0));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_missing_names_share_one_bucket() {
        let mut index = SubsectorIndex::new();
        assert_eq!(index.resolve(None), Resolved::New(0));
        assert_eq!(index.resolve(Some("Food")), Resolved::New(1));
        assert_eq!(index.resolve(None), Resolved::Existing(0));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_ids_are_sequential_from_zero() {
        let mut index = SubsectorIndex::new();
        for (i, name) in ["a", "b", "c"].iter().enumerate() {
            assert_eq!(index.resolve(Some(name)).id(), i as i64);
        }
    }

    #[test]
    fn test_subsector_name_blank_cases() {
        assert_eq!(subsector_name(&CellValue::Empty), None);
        assert_eq!(subsector_name(&CellValue::Text("  ".to_string())), None);
        assert_eq!(
            subsector_name(&CellValue::Text("Food".to_string())),
            Some("Food".to_string())
        );
        // numeric subsector codes keep their display form
        assert_eq!(
            subsector_name(&CellValue::Integer(12)),
            Some("12".to_string())
        );
    }
}
