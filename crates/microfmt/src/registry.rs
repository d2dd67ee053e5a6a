//! The process-wide registry of named shared contexts.
//!
//! The registry is a single lazily constructed map behind one lock, so there
//! is no static-initialization-order question: the first access builds it.
//! Contexts are created on first request and handed out as [`Arc`] clones;
//! removing a name only makes the context undiscoverable — handles already
//! held keep working until the last one drops.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use crate::context::SharedContext;

static CONTEXTS: Lazy<Mutex<HashMap<String, Arc<SharedContext>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Gets or creates the named shared context.
///
/// Every call with the same name returns a handle to the same underlying
/// context, whatever the calling thread.
///
/// # Example
///
/// ```rust
/// use microfmt::{shared_context, Context};
///
/// let ctx = shared_context("app");
/// ctx.set_var("user", "Adam");
///
/// let again = shared_context("app");
/// assert_eq!(again.format("User: {user}", &[]), "User: Adam");
/// # microfmt::remove_context("app");
/// ```
pub fn shared_context(name: &str) -> Arc<SharedContext> {
    let mut contexts = CONTEXTS.lock().unwrap();
    contexts
        .entry(name.to_string())
        .or_insert_with(|| Arc::new(SharedContext::new()))
        .clone()
}

/// Removes the named context from the registry.
///
/// Handles returned earlier stay valid; the name simply resolves to a fresh
/// context on the next [`shared_context`] call.
pub fn remove_context(name: &str) {
    CONTEXTS.lock().unwrap().remove(name);
}

/// Removes every named context from the registry.
pub fn clear_contexts() {
    CONTEXTS.lock().unwrap().clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_same_name_same_context() {
        let a = shared_context("registry_identity");
        let b = shared_context("registry_identity");
        assert!(Arc::ptr_eq(&a, &b));
        remove_context("registry_identity");
    }

    #[test]
    #[serial]
    fn test_different_names_are_independent() {
        let a = shared_context("registry_a");
        let b = shared_context("registry_b");
        assert!(!Arc::ptr_eq(&a, &b));

        a.set_var("shared_var", "shared_value");
        assert!(a.has_var("shared_var"));
        assert!(!b.has_var("shared_var"));

        remove_context("registry_a");
        remove_context("registry_b");
    }

    #[test]
    #[serial]
    fn test_remove_breaks_discovery_not_handles() {
        let original = shared_context("registry_remove");
        original.set_var("kept", "yes");
        remove_context("registry_remove");

        // The old handle still works.
        assert!(original.has_var("kept"));

        // The name now resolves to a fresh context.
        let fresh = shared_context("registry_remove");
        assert!(!Arc::ptr_eq(&original, &fresh));
        assert!(!fresh.has_var("kept"));
        remove_context("registry_remove");
    }

    #[test]
    #[serial]
    fn test_clear_contexts() {
        let before = shared_context("registry_clear");
        clear_contexts();
        let after = shared_context("registry_clear");
        assert!(!Arc::ptr_eq(&before, &after));
        remove_context("registry_clear");
    }
}
