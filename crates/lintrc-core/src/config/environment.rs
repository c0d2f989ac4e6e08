//! Named sets of pre-declared globals
//!
//! Environments describe what a runtime provides (`browser`, `node`, ...).
//! They are never ambient: a registry is built explicitly and handed to the
//! loader, which expands the environments a fragment names into plain globals.

use indexmap::IndexMap;

use super::global_mode::GlobalMode::{self, ReadOnly, Writable};

const BUILTIN: &[(&str, GlobalMode)] = &[
    ("Array", ReadOnly),
    ("ArrayBuffer", ReadOnly),
    ("BigInt", ReadOnly),
    ("Boolean", ReadOnly),
    ("DataView", ReadOnly),
    ("Date", ReadOnly),
    ("Error", ReadOnly),
    ("JSON", ReadOnly),
    ("Map", ReadOnly),
    ("Math", ReadOnly),
    ("Number", ReadOnly),
    ("Object", ReadOnly),
    ("Promise", ReadOnly),
    ("Proxy", ReadOnly),
    ("Reflect", ReadOnly),
    ("RegExp", ReadOnly),
    ("Set", ReadOnly),
    ("String", ReadOnly),
    ("Symbol", ReadOnly),
    ("WeakMap", ReadOnly),
    ("WeakSet", ReadOnly),
    ("globalThis", ReadOnly),
];

const BROWSER: &[(&str, GlobalMode)] = &[
    ("window", ReadOnly),
    ("self", ReadOnly),
    ("document", ReadOnly),
    ("navigator", ReadOnly),
    ("location", ReadOnly),
    ("history", ReadOnly),
    ("console", ReadOnly),
    ("localStorage", ReadOnly),
    ("sessionStorage", ReadOnly),
    ("fetch", ReadOnly),
    ("setTimeout", ReadOnly),
    ("clearTimeout", ReadOnly),
    ("setInterval", ReadOnly),
    ("clearInterval", ReadOnly),
    ("requestAnimationFrame", ReadOnly),
    ("cancelAnimationFrame", ReadOnly),
    ("alert", ReadOnly),
    ("Event", ReadOnly),
    ("CustomEvent", ReadOnly),
    ("HTMLElement", ReadOnly),
    ("URL", ReadOnly),
    ("URLSearchParams", ReadOnly),
    ("XMLHttpRequest", ReadOnly),
    ("WebSocket", ReadOnly),
    ("onload", Writable),
    ("onerror", Writable),
];

const NODE: &[(&str, GlobalMode)] = &[
    ("process", ReadOnly),
    ("Buffer", ReadOnly),
    ("console", ReadOnly),
    ("global", ReadOnly),
    ("require", ReadOnly),
    ("module", Writable),
    ("exports", Writable),
    ("__dirname", ReadOnly),
    ("__filename", ReadOnly),
    ("setTimeout", ReadOnly),
    ("clearTimeout", ReadOnly),
    ("setInterval", ReadOnly),
    ("clearInterval", ReadOnly),
    ("setImmediate", ReadOnly),
    ("clearImmediate", ReadOnly),
    ("URL", ReadOnly),
    ("URLSearchParams", ReadOnly),
];

const WORKER: &[(&str, GlobalMode)] = &[
    ("self", ReadOnly),
    ("console", ReadOnly),
    ("fetch", ReadOnly),
    ("importScripts", ReadOnly),
    ("postMessage", ReadOnly),
    ("close", ReadOnly),
    ("setTimeout", ReadOnly),
    ("clearTimeout", ReadOnly),
    ("setInterval", ReadOnly),
    ("clearInterval", ReadOnly),
    ("onmessage", Writable),
    ("onerror", Writable),
];

/// One named set of globals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    globals: IndexMap<String, GlobalMode>,
}

impl Environment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            globals: IndexMap::new(),
        }
    }

    pub fn with_global(mut self, identifier: impl Into<String>, mode: GlobalMode) -> Self {
        self.globals.insert(identifier.into(), mode);
        self
    }

    fn from_table(name: &str, table: &[(&str, GlobalMode)]) -> Self {
        table
            .iter()
            .fold(Self::new(name), |env, (identifier, mode)| {
                env.with_global(*identifier, *mode)
            })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn globals(&self) -> &IndexMap<String, GlobalMode> {
        &self.globals
    }
}

/// Explicit name -> environment mapping supplied to the loader
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentRegistry {
    environments: IndexMap<String, Environment>,
}

impl EnvironmentRegistry {
    /// An empty registry; fragments naming any environment will fail to load
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the `builtin`, `browser`, `node` and `worker` sets
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(Environment::from_table("builtin", BUILTIN));
        registry.register(Environment::from_table("browser", BROWSER));
        registry.register(Environment::from_table("node", NODE));
        registry.register(Environment::from_table("worker", WORKER));
        registry
    }

    /// Add or replace an environment
    pub fn register(&mut self, environment: Environment) {
        self.environments
            .insert(environment.name.clone(), environment);
    }

    pub fn get(&self, name: &str) -> Option<&Environment> {
        self.environments.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Environment> {
        self.environments.values()
    }

    pub fn len(&self) -> usize {
        self.environments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }
}
