//! Domain layer for DCV (Dependency Configuration Verifier)
//!
//! Defines the injectable component model, the value objects shared by
//! every layer, and the port traits through which the verifier talks to
//! its host environment (type discovery, profile option catalog,
//! injector contexts, and the live object graph).
//!
//! ## Architecture
//!
//! Ports follow the Dependency Inversion Principle:
//! - High-level modules (this crate and `dcv-verify`) define interfaces
//! - Low-level modules (`dcv-host`, embedding applications) implement them
//!
//! Everything here is synchronous and single-threaded: a verification
//! run is a deterministic, cooperative pass with no suspension points,
//! so shared graph objects use `Rc<RefCell<_>>` rather than `Arc`.

pub mod error;
pub mod graph;
pub mod injectable;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use graph::{Node, NodeId, NodeInfo, SharedComponent, SharedNode};
pub use injectable::{ComponentType, FieldDescriptor, Injectable, SelectorTag};
pub use ports::{
    ContextFactory, FactoryHook, GraphHost, InjectorContext, ProfileOptionCatalog, TypeDiscovery,
};
pub use value_objects::{BindingKey, Combination, FieldId, OptionId, StoreKind, SubHierarchyRef};
