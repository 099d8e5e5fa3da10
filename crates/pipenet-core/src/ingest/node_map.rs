//! Label to dense-id mapping owned by a single load

use std::collections::HashMap;

use crate::graph::NodeId;

/// Bidirectional map between node labels and dense ids
///
/// Ids are handed out in first-seen order starting at 0.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeMap {
    ids: HashMap<String, NodeId>,
    labels: Vec<String>,
}

impl NodeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `label`, allocating the next id on first sight
    pub fn get_or_insert(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.ids.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    pub fn id(&self, label: &str) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }

    /// Label for `id`, or `?` when unknown
    pub fn label_or_unknown(&self, id: NodeId) -> &str {
        self.label(id).unwrap_or("?")
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in id order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut map = NodeMap::new();
        assert!(map.is_empty());
        assert_eq!(map.get_or_insert("Reservoir"), 0);
        assert_eq!(map.get_or_insert("Pump"), 1);
        assert_eq!(map.get_or_insert("Reservoir"), 0);
        assert_eq!(map.get_or_insert("Tank"), 2);
        assert_eq!(map.len(), 3);
        assert_eq!(map.labels(), &["Reservoir", "Pump", "Tank"]);
    }

    #[test]
    fn test_lookups() {
        let mut map = NodeMap::new();
        map.get_or_insert("A");
        map.get_or_insert("B");
        assert_eq!(map.id("B"), Some(1));
        assert_eq!(map.id("C"), None);
        assert_eq!(map.label(0), Some("A"));
        assert_eq!(map.label(5), None);
        assert_eq!(map.label_or_unknown(5), "?");
    }

    #[test]
    fn test_maps_are_independent() {
        let mut first = NodeMap::new();
        first.get_or_insert("X");
        let mut second = NodeMap::new();
        assert_eq!(second.get_or_insert("Y"), 0);
        assert_eq!(first.id("Y"), None);
    }
}
