//! Call-chain context values
//!
//! A [`Context`] is an immutable chain of typed values. Deriving a context with
//! [`Context::with_value`] never changes the parent, so a context can be handed
//! down a call chain and extended at each step.
//!
//! Each key is its own zero-sized token type implementing [`ContextKey`], so
//! two modules can never collide on a key by accident.
//!
//! ```
//! use rust_logr_bridge::{Context, ContextKey};
//!
//! struct RequestId;
//! impl ContextKey for RequestId {
//!     type Value = u64;
//! }
//!
//! let root = Context::background();
//! let ctx = root.with_value::<RequestId>(42);
//!
//! assert_eq!(ctx.value::<RequestId>(), Some(&42));
//! assert_eq!(root.value::<RequestId>(), None);
//! ```

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Token type identifying one context value.
pub trait ContextKey: 'static {
    type Value: Clone + Send + Sync + 'static;
}

struct Node {
    key: TypeId,
    value: Box<dyn Any + Send + Sync>,
    parent: Option<Arc<Node>>,
}

impl Drop for Node {
    // Unlink iteratively; the default drop recurses once per node.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.parent.take(),
                Err(_) => break,
            }
        }
    }
}

/// Immutable, cheaply cloned set of typed values.
#[derive(Clone, Default)]
pub struct Context {
    head: Option<Arc<Node>>,
}

impl Context {
    /// Empty root context.
    pub fn background() -> Self {
        Self { head: None }
    }

    /// Derive a context carrying `value` under `K`. An existing binding for
    /// `K` is shadowed, not replaced.
    #[must_use]
    pub fn with_value<K: ContextKey>(&self, value: K::Value) -> Self {
        Self {
            head: Some(Arc::new(Node {
                key: TypeId::of::<K>(),
                value: Box::new(value),
                parent: self.head.clone(),
            })),
        }
    }

    /// Innermost value bound under `K`.
    pub fn value<K: ContextKey>(&self) -> Option<&K::Value> {
        let key = TypeId::of::<K>();
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            if current.key == key {
                return current.value.downcast_ref::<K::Value>();
            }
            node = current.parent.as_deref();
        }
        None
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut depth = 0usize;
        let mut node = self.head.as_deref();
        while let Some(current) = node {
            depth += 1;
            node = current.parent.as_deref();
        }
        f.debug_struct("Context").field("values", &depth).finish()
    }
}
