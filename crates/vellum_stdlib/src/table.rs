//! The function table: canonical entries, alias records and host entries.
//!
//! Built-ins live under one canonical namespaced name each
//! (`collections.First`). Short names (`first`) are alias records that
//! point at a canonical name and carry no logic of their own. Host entries
//! registered at runtime shadow both.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vellum_foundation::{Arity, Error, ErrorContext, Result, Value};

use crate::config::FuncsConfig;
use crate::context::CallContext;
use crate::native;

/// Signature of a built-in function.
pub type BuiltinFn = fn(&mut CallContext<'_>, &[Value]) -> Result<Value>;

/// A host-supplied function.
pub type HostFn = Arc<dyn Fn(&mut CallContext<'_>, &[Value]) -> Result<Value> + Send + Sync>;

/// Built-in function callable through the table.
#[derive(Clone, Copy)]
pub struct NativeFn {
    /// Canonical name.
    pub name: &'static str,
    /// Accepted argument counts.
    pub arity: Arity,
    /// Function pointer.
    pub func: BuiltinFn,
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFn({}/{})", self.name, self.arity)
    }
}

#[derive(Clone)]
struct HostEntry {
    arity: Arity,
    func: HostFn,
}

/// What a name resolves to.
enum Entry<'t> {
    Native(&'t NativeFn),
    Host(&'t HostEntry),
}

impl Entry<'_> {
    const fn arity(&self) -> Arity {
        match self {
            Self::Native(native) => native.arity,
            Self::Host(host) => host.arity,
        }
    }
}

/// Name-to-function table shared by every render.
///
/// Immutable once built, so one table can serve any number of concurrent
/// renders. Each render draws randomness through its own [`Scope`].
pub struct FuncTable {
    builtins: HashMap<&'static str, NativeFn>,
    aliases: HashMap<&'static str, &'static str>,
    host: HashMap<String, HostEntry>,
    config: FuncsConfig,
}

impl Default for FuncTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FuncTable {
    /// Creates a table holding every built-in with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(FuncsConfig::default())
    }

    /// Creates a table holding every built-in.
    #[must_use]
    pub fn with_config(config: FuncsConfig) -> Self {
        let builtins = native::functions()
            .map(|native| (native.name, *native))
            .collect();
        let aliases = native::aliases().collect();
        Self {
            builtins,
            aliases,
            host: HashMap::new(),
            config,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &FuncsConfig {
        &self.config
    }

    /// Registers a host function under `name`.
    ///
    /// The host entry takes precedence over any built-in or alias of the
    /// same name, and replaces an earlier host entry.
    pub fn register<F>(&mut self, name: impl Into<String>, arity: Arity, func: F)
    where
        F: Fn(&mut CallContext<'_>, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.builtins.contains_key(name.as_str()) || self.aliases.contains_key(name.as_str()) {
            log::debug!("host function {name} shadows a built-in");
        }
        let entry = HostEntry {
            arity,
            func: Arc::new(func),
        };
        if self.host.insert(name.clone(), entry).is_some() {
            log::debug!("host function {name} replaced");
        }
    }

    fn resolve(&self, name: &str) -> Option<Entry<'_>> {
        if let Some(host) = self.host.get(name) {
            return Some(Entry::Host(host));
        }
        let canonical = self.aliases.get(name).copied().unwrap_or(name);
        self.builtins.get(canonical).map(Entry::Native)
    }

    /// Returns true when `name` resolves to a function.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Returns the arity of whatever `name` resolves to.
    #[must_use]
    pub fn arity(&self, name: &str) -> Option<Arity> {
        self.resolve(name).map(|entry| entry.arity())
    }

    /// Returns the canonical built-in name an alias points at.
    #[must_use]
    pub fn canonical(&self, alias: &str) -> Option<&'static str> {
        self.aliases.get(alias).copied()
    }

    /// Canonical names of every built-in, sorted.
    #[must_use]
    pub fn builtin_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.builtins.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Every alias record as `(alias, canonical)`, sorted by alias.
    #[must_use]
    pub fn aliases(&self) -> Vec<(&'static str, &'static str)> {
        let mut aliases: Vec<_> = self.aliases.iter().map(|(a, c)| (*a, *c)).collect();
        aliases.sort_unstable();
        aliases
    }

    /// Calls `name` with `args`, drawing randomness from `rng`.
    ///
    /// # Errors
    ///
    /// `UnknownFunction` when nothing is registered under `name`,
    /// `ArityMismatch` when the argument count is not accepted, or whatever
    /// the function itself reports.
    pub fn call(&self, name: &str, rng: &mut dyn RngCore, args: &[Value]) -> Result<Value> {
        let entry = self
            .resolve(name)
            .ok_or_else(|| Error::unknown_function(name))?;
        let arity = entry.arity();
        if !arity.accepts(args.len()) {
            return Err(in_function(
                Error::arity_mismatch(arity.to_string(), args.len()),
                name,
            ));
        }

        let mut ctx = CallContext::new(self, rng);
        let result = match entry {
            Entry::Native(native) => (native.func)(&mut ctx, args),
            Entry::Host(host) => (host.func)(&mut ctx, args),
        };
        result.map_err(|err| {
            log::debug!("{name} failed: {err}");
            in_function(err, name)
        })
    }

    /// Starts a render scope with its own random generator.
    #[must_use]
    pub fn scope(&self) -> Scope<'_> {
        Scope::new(self)
    }
}

impl fmt::Debug for FuncTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncTable")
            .field("builtins", &self.builtins.len())
            .field("aliases", &self.aliases.len())
            .field("host", &self.host.len())
            .field("config", &self.config)
            .finish()
    }
}

/// Names the failing function, or records `name` as a caller when the
/// error already names one.
fn in_function(mut err: Error, name: &str) -> Error {
    let context = match err.context.take() {
        Some(context) => context.with_frame(name),
        None => ErrorContext::new().with_function(name),
    };
    err.with_context(context)
}

/// One render's view of a table.
///
/// Owns the render's random generator, seeded from the table's
/// configuration when a seed is set.
pub struct Scope<'t> {
    table: &'t FuncTable,
    rng: ChaCha8Rng,
}

impl<'t> Scope<'t> {
    /// Creates a scope over `table`.
    #[must_use]
    pub fn new(table: &'t FuncTable) -> Self {
        let rng = match table.config().seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { table, rng }
    }

    /// Calls a function by name.
    ///
    /// # Errors
    ///
    /// Fails like [`FuncTable::call`].
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        self.table.call(name, &mut self.rng, args)
    }

    /// The table this scope dispatches through.
    #[must_use]
    pub fn table(&self) -> &'t FuncTable {
        self.table
    }
}
