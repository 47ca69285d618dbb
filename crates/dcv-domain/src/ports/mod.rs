//! Host Port Interfaces
//!
//! Boundary contracts between the verifier and its host environment.
//! The verifier proves *that* resolution succeeds; these ports own
//! *how*: how types are discovered, how option catalogs are queried,
//! how injector contexts resolve bindings, and how the live graph is
//! manipulated.
//!
//! ## Organization
//!
//! - [`discovery`] - injectable type discovery
//! - [`catalog`] - profile option lookup
//! - [`injector`] - verification contexts and factory interception
//! - [`graph_host`] - live graph access and materialization

/// Profile option lookup port
pub mod catalog;
/// Injectable type discovery port
pub mod discovery;
/// Live graph access port
pub mod graph_host;
/// Injector context ports
pub mod injector;

pub use catalog::ProfileOptionCatalog;
pub use discovery::TypeDiscovery;
pub use graph_host::GraphHost;
pub use injector::{ContextFactory, FactoryHook, InjectorContext};
