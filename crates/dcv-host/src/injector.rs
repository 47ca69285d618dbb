//! In-memory verification kernel
//!
//! A binding-set backed injector context. It models three resolution
//! scopes:
//!
//! - global bindings, resolvable from any context;
//! - live bindings, which would need a running host at production time
//!   but resolve trivially in verification mode (the verification flag
//!   is what disables the strict live-only behavior);
//! - node-scoped bindings, resolvable only when the owning node is the
//!   context's current node.
//!
//! Every context is brand-new and independent: nothing mutable is
//! shared between contexts, so one failed attempt cannot contaminate
//! the next.

use dcv_domain::{
    BindingKey, ContextFactory, Error, FactoryHook, Injectable, InjectorContext, NodeInfo, Result,
    SubHierarchyRef,
};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use tracing::trace;

/// Immutable resolution state shared by every context of one world
///
/// Built once, then only read while verification runs.
#[derive(Debug, Default)]
pub struct HostWorld {
    bindings: HashSet<BindingKey>,
    live_bindings: HashSet<BindingKey>,
    node_bindings: HashMap<String, HashSet<BindingKey>>,
    factories: HashSet<SubHierarchyRef>,
}

impl HostWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a globally resolvable binding
    pub fn with_binding(mut self, binding: impl Into<BindingKey>) -> Self {
        self.bindings.insert(binding.into());
        self
    }

    /// Register a binding that requires a running host outside verification
    pub fn with_live_binding(mut self, binding: impl Into<BindingKey>) -> Self {
        self.live_bindings.insert(binding.into());
        self
    }

    /// Register a binding resolvable only in the named node's context
    pub fn with_node_binding(
        mut self,
        node: impl Into<String>,
        binding: impl Into<BindingKey>,
    ) -> Self {
        self.node_bindings
            .entry(node.into())
            .or_default()
            .insert(binding.into());
        self
    }

    /// Register a factory-producible sub-hierarchy
    pub fn with_factory(mut self, reference: impl Into<SubHierarchyRef>) -> Self {
        self.factories.insert(reference.into());
        self
    }

    fn has_factory(&self, reference: &SubHierarchyRef) -> bool {
        self.factories.contains(reference)
    }
}

/// Factory handing out fresh in-memory verification contexts
pub struct InMemoryContextFactory {
    world: Rc<HostWorld>,
}

impl InMemoryContextFactory {
    /// Create a factory over a shared world
    pub fn new(world: Rc<HostWorld>) -> Self {
        Self { world }
    }

    /// Create a factory owning a freshly built world
    pub fn from_world(world: HostWorld) -> Self {
        Self::new(Rc::new(world))
    }
}

impl ContextFactory for InMemoryContextFactory {
    fn new_verification_context(&self) -> Result<Box<dyn InjectorContext>> {
        Ok(Box::new(InMemoryInjector::new(Rc::clone(&self.world))))
    }
}

/// One isolated in-memory injector context
pub struct InMemoryInjector {
    world: Rc<HostWorld>,
    verification: bool,
    current_node: Option<NodeInfo>,
    factory_hook: Option<FactoryHook>,
}

impl InMemoryInjector {
    /// Create a context in verification mode over the shared world
    pub fn new(world: Rc<HostWorld>) -> Self {
        Self {
            world,
            verification: true,
            current_node: None,
            factory_hook: None,
        }
    }
}

impl InjectorContext for InMemoryInjector {
    fn set_current_node(&mut self, node: &NodeInfo) {
        trace!(node = %node.name, "context bound to node");
        self.current_node = Some(node.clone());
    }

    fn override_factory_resolution(&mut self, hook: FactoryHook) {
        self.factory_hook = Some(hook);
    }

    fn resolve(&mut self, binding: &BindingKey) -> Result<()> {
        if self.world.bindings.contains(binding) {
            return Ok(());
        }
        if self.verification && self.world.live_bindings.contains(binding) {
            return Ok(());
        }
        if let Some(node) = &self.current_node {
            let node_has = self
                .world
                .node_bindings
                .get(&node.name)
                .is_some_and(|set| set.contains(binding));
            if node_has {
                return Ok(());
            }
        }
        Err(Error::resolution(format!(
            "no binding registered for '{binding}'"
        )))
    }

    fn resolve_factory(&mut self, reference: &SubHierarchyRef) -> Result<()> {
        if !self.world.has_factory(reference) {
            return Err(Error::resolution(format!(
                "no factory can produce sub-hierarchy '{reference}'"
            )));
        }
        if let Some(hook) = &self.factory_hook {
            let mut hook = hook.borrow_mut();
            (&mut *hook)(reference);
        }
        Ok(())
    }

    fn invoke_injection(&mut self, instance: &mut dyn Injectable) -> Result<()> {
        instance.inject(self)
    }
}
