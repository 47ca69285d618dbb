//! In-memory injector integration tests
//!
//! Resolution scopes, factory interception, and the independence of
//! contexts handed out by one factory.

use dcv_domain::{
    BindingKey, ContextFactory, FactoryHook, NodeId, NodeInfo, SubHierarchyRef,
};
use dcv_host::{HostWorld, InMemoryContextFactory};
use std::cell::RefCell;
use std::rc::Rc;

fn node_info(name: &str) -> NodeInfo {
    NodeInfo {
        id: NodeId::new(0),
        name: name.to_string(),
    }
}

#[test]
fn test_global_binding_resolves_everywhere() {
    let factory = InMemoryContextFactory::from_world(HostWorld::new().with_binding("db"));
    let mut ctx = factory.new_verification_context().unwrap();

    assert!(ctx.resolve(&BindingKey::new("db")).is_ok());
    assert!(ctx.resolve(&BindingKey::new("missing")).is_err());
}

#[test]
fn test_live_binding_resolves_in_verification_mode() {
    let factory = InMemoryContextFactory::from_world(HostWorld::new().with_live_binding("net"));
    let mut ctx = factory.new_verification_context().unwrap();

    assert!(ctx.resolve(&BindingKey::new("net")).is_ok());
}

#[test]
fn test_node_binding_needs_the_owning_node_as_context() {
    let factory = InMemoryContextFactory::from_world(
        HostWorld::new().with_node_binding("root", "local_cache"),
    );
    let binding = BindingKey::new("local_cache");

    let mut bare = factory.new_verification_context().unwrap();
    assert!(bare.resolve(&binding).is_err());

    let mut scoped = factory.new_verification_context().unwrap();
    scoped.set_current_node(&node_info("root"));
    assert!(scoped.resolve(&binding).is_ok());

    let mut other = factory.new_verification_context().unwrap();
    other.set_current_node(&node_info("world"));
    assert!(other.resolve(&binding).is_err());
}

#[test]
fn test_contexts_do_not_share_ambient_state() {
    let factory = InMemoryContextFactory::from_world(
        HostWorld::new().with_node_binding("root", "local_cache"),
    );
    let binding = BindingKey::new("local_cache");

    let mut first = factory.new_verification_context().unwrap();
    first.set_current_node(&node_info("root"));
    assert!(first.resolve(&binding).is_ok());

    // The node set on the first context is invisible to the second.
    let mut second = factory.new_verification_context().unwrap();
    assert!(second.resolve(&binding).is_err());
}

#[test]
fn test_factory_hook_observes_resolved_references() {
    let factory = InMemoryContextFactory::from_world(HostWorld::new().with_factory("hud"));
    let mut ctx = factory.new_verification_context().unwrap();

    let seen: Rc<RefCell<Vec<SubHierarchyRef>>> = Rc::new(RefCell::new(Vec::new()));
    let hook: FactoryHook = {
        let seen = Rc::clone(&seen);
        Rc::new(RefCell::new(move |reference: &SubHierarchyRef| {
            seen.borrow_mut().push(reference.clone());
        }))
    };
    ctx.override_factory_resolution(hook);

    ctx.resolve_factory(&SubHierarchyRef::new("hud")).unwrap();
    assert_eq!(seen.borrow().as_slice(), &[SubHierarchyRef::new("hud")]);
}

#[test]
fn test_unknown_factory_fails_without_invoking_the_hook() {
    let factory = InMemoryContextFactory::from_world(HostWorld::new());
    let mut ctx = factory.new_verification_context().unwrap();

    let seen: Rc<RefCell<Vec<SubHierarchyRef>>> = Rc::new(RefCell::new(Vec::new()));
    let hook: FactoryHook = {
        let seen = Rc::clone(&seen);
        Rc::new(RefCell::new(move |reference: &SubHierarchyRef| {
            seen.borrow_mut().push(reference.clone());
        }))
    };
    ctx.override_factory_resolution(hook);

    assert!(ctx.resolve_factory(&SubHierarchyRef::new("hud")).is_err());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_known_factory_resolves_without_a_hook() {
    let factory = InMemoryContextFactory::from_world(HostWorld::new().with_factory("hud"));
    let mut ctx = factory.new_verification_context().unwrap();

    assert!(ctx.resolve_factory(&SubHierarchyRef::new("hud")).is_ok());
}
