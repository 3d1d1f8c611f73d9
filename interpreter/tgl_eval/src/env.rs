//! Run-local namespace.

use rustc_hash::FxHashMap;
use tgl_ir::Value;

use crate::errors::{expression_error, index_out_of_range, undefined_list, undefined_variable, EvalResult};

/// The single flat namespace of one script run.
///
/// Created fresh per invocation and mutated by assignment, list-assignment
/// and loop-induction statements. Nested blocks do not introduce scopes: all
/// blocks share this one mapping, which is the dialect's intended semantics,
/// not an implementation shortcut.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Bind (or rebind) a name. Variables and lists share one namespace.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Raw lookup, for callers that treat absence as a non-error (the
    /// counted loop's guard reads its check variable this way).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Resolve a `[name]` variable reference.
    pub fn lookup(&self, name: &str) -> EvalResult<Value> {
        self.bindings
            .get(name)
            .cloned()
            .ok_or_else(|| undefined_variable(name))
    }

    /// Resolve a `/name/<index>` list-index reference.
    ///
    /// Out-of-range access is an explicit error rather than an implicit
    /// null, so scripts fail at the offending access.
    pub fn list_item(&self, name: &str, index: usize) -> EvalResult<Value> {
        let Some(value) = self.bindings.get(name) else {
            return Err(undefined_list(name));
        };
        let Value::List(items) = value else {
            return Err(expression_error(format!(
                "/{name}/ is not a list (found {})",
                value.type_name()
            )));
        };
        items
            .get(index)
            .cloned()
            .ok_or_else(|| index_out_of_range(name, index, items.len()))
    }
}
