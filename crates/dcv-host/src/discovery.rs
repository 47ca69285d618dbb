//! Static injectable type discovery
//!
//! A fixed, ordered population of component types. The in-process
//! counterpart of assembly scanning: the set is decided when the world
//! is assembled and stays stable for the whole run.

use dcv_domain::{ComponentType, Result, TypeDiscovery};

/// Type discovery over a fixed list
#[derive(Debug, Default)]
pub struct StaticTypeDiscovery {
    types: Vec<ComponentType>,
}

impl StaticTypeDiscovery {
    /// Create discovery over the given types, preserving order
    pub fn new(types: Vec<ComponentType>) -> Self {
        Self { types }
    }

    /// Add one more discoverable type
    pub fn with_type(mut self, ty: ComponentType) -> Self {
        self.types.push(ty);
        self
    }
}

impl TypeDiscovery for StaticTypeDiscovery {
    fn injectable_types(&self) -> Result<Vec<ComponentType>> {
        Ok(self.types.clone())
    }
}
