//! Property tree resources loaded from JSON documents

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use strata_core::Property;

use crate::error::Result;
use crate::json::try_parse_json_reader;

/// An immutable tree loaded once and shared by its users
#[derive(Debug, Clone)]
pub struct PropertyTreeResource {
    tree: Arc<Property>,
}

impl PropertyTreeResource {
    /// Resource type name
    pub const RESOURCE_TYPE: &'static str = "property_tree";

    /// Wrap an already built tree
    pub fn new(tree: Property) -> Self {
        Self { tree: Arc::new(tree) }
    }

    /// Owned copy of the tree
    pub fn get(&self) -> Property {
        (*self.tree).clone()
    }

    /// Shared handle to the tree
    pub fn shared(&self) -> Arc<Property> {
        Arc::clone(&self.tree)
    }
}

/// Load a tree from a JSON document
pub fn load_property_tree<R: Read>(reader: R) -> Result<PropertyTreeResource> {
    let tree = try_parse_json_reader(reader)?;
    log::debug!(
        "Loaded {} of kind {}",
        PropertyTreeResource::RESOURCE_TYPE,
        tree.get_type().name()
    );
    Ok(PropertyTreeResource::new(tree))
}

/// Load a tree from the JSON file at `path`
pub fn load_property_tree_file(path: impl AsRef<Path>) -> Result<PropertyTreeResource> {
    let file = File::open(path.as_ref())?;
    load_property_tree(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchError;

    #[test]
    fn test_load_from_reader() {
        let resource = load_property_tree(r#"{"level":{"name":"intro"}}"#.as_bytes()).unwrap();
        let tree = resource.get();
        assert_eq!(tree.get("level").unwrap().get("name").unwrap(), &Property::from("intro"));
    }

    #[test]
    fn test_get_returns_copy() {
        let resource = load_property_tree(r#"{"a":1}"#.as_bytes()).unwrap();
        let mut copy = resource.get();
        copy.set("a", 2.0).unwrap();
        assert_eq!(resource.shared().get("a").unwrap(), &Property::from(1.0));
    }

    #[test]
    fn test_malformed_document_fails() {
        let err = load_property_tree("{".as_bytes()).unwrap_err();
        assert!(matches!(err, PatchError::Json(_)));
    }

    #[test]
    fn test_missing_file_fails() {
        let err = load_property_tree_file("/nonexistent/strata/tree.json").unwrap_err();
        assert!(matches!(err, PatchError::Io(_)));
    }
}
