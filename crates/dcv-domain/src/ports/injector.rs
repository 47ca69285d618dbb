//! Injector Context Ports
//!
//! A verification attempt runs against a brand-new, isolated injector
//! context: contexts from different attempts must not share mutable
//! resolution state, so a failure in one combination can never leak
//! into another.
//!
//! Contexts are created in verification mode - strict or live-only
//! behaviors that would otherwise require a running host are disabled.

use crate::error::Result;
use crate::graph::NodeInfo;
use crate::injectable::Injectable;
use crate::value_objects::{BindingKey, SubHierarchyRef};
use std::cell::RefCell;
use std::rc::Rc;

/// Callback invoked when injection requests a sub-hierarchy factory
///
/// Installed by the hierarchical verifier to intercept and record
/// factory resolution requests instead of letting the host instantiate
/// sub-hierarchies eagerly.
pub type FactoryHook = Rc<RefCell<dyn FnMut(&SubHierarchyRef)>>;

/// Creates fresh, isolated verification contexts
pub trait ContextFactory {
    /// Construct a brand-new injector context in verification mode
    ///
    /// A failure here is a host-collaborator failure and aborts the
    /// run.
    fn new_verification_context(&self) -> Result<Box<dyn InjectorContext>>;
}

/// One isolated injector context, consumed by a single attempt
pub trait InjectorContext {
    /// Tell the context which node is "current" for contextual resolution
    fn set_current_node(&mut self, node: &NodeInfo);

    /// Replace the factory-resolution capability with an interception hook
    ///
    /// After this call, sub-hierarchy factory requests are recorded
    /// through the hook in addition to being validated.
    fn override_factory_resolution(&mut self, hook: FactoryHook);

    /// Resolve one binding, or fail with the underlying resolution error
    fn resolve(&mut self, binding: &BindingKey) -> Result<()>;

    /// Resolve a factory for the referenced sub-hierarchy
    fn resolve_factory(&mut self, reference: &SubHierarchyRef) -> Result<()>;

    /// Invoke the instance's injection entry point exactly once
    ///
    /// The error returned on failure is the underlying resolution
    /// error, never a wrapper around it.
    fn invoke_injection(&mut self, instance: &mut dyn Injectable) -> Result<()>;
}
