//! Per-call context handed to every callable.

use rand::RngCore;
use vellum_foundation::{Result, Value};

use crate::config::FuncsConfig;
use crate::table::FuncTable;

/// What a callable sees besides its arguments.
///
/// Carries the table (so `collections.Apply` can dispatch by name) and the
/// random source of the current render.
pub struct CallContext<'a> {
    table: &'a FuncTable,
    rng: &'a mut dyn RngCore,
}

impl<'a> CallContext<'a> {
    /// Creates a context over a table and a random source.
    pub fn new(table: &'a FuncTable, rng: &'a mut dyn RngCore) -> Self {
        Self { table, rng }
    }

    /// The table this call was dispatched through.
    #[must_use]
    pub fn table(&self) -> &'a FuncTable {
        self.table
    }

    /// The table's configuration.
    #[must_use]
    pub fn config(&self) -> &'a FuncsConfig {
        self.table.config()
    }

    /// The render's random source.
    pub fn rng(&mut self) -> &mut dyn RngCore {
        &mut *self.rng
    }

    /// Calls another function by name with the same random source.
    ///
    /// # Errors
    ///
    /// Fails like [`FuncTable::call`].
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        self.table.call(name, &mut *self.rng, args)
    }
}
