use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use log::debug;

use crate::TranslatedLayout;

type Table = HashMap<String, TranslatedLayout>;

/// Formatting and parsing translations of the same layout can differ, so
/// each gets its own table.
#[derive(Debug, Default)]
struct Tables {
    formatting: Table,
    parsing: Table,
}

impl Tables {
    fn get(&self, for_parsing: bool) -> &Table {
        if for_parsing {
            &self.parsing
        } else {
            &self.formatting
        }
    }

    fn get_mut(&mut self, for_parsing: bool) -> &mut Table {
        if for_parsing {
            &mut self.parsing
        } else {
            &mut self.formatting
        }
    }
}

/// Memoizes translated layouts by their source layout and whether they were
/// translated for parsing.
///
/// There is no eviction. Disabling drops the tables, so re-enabling always
/// starts out empty.
#[derive(Debug)]
pub struct FormatCache {
    table: RwLock<Option<Tables>>,
}

impl FormatCache {
    pub fn enabled() -> FormatCache {
        FormatCache {
            table: RwLock::new(Some(Tables::default())),
        }
    }

    pub fn disabled() -> FormatCache {
        FormatCache {
            table: RwLock::new(None),
        }
    }

    /// Starts over with an empty table.
    pub fn enable(&self) {
        *self.write() = Some(Tables::default());
        debug!("layout cache enabled");
    }

    pub fn disable(&self) {
        *self.write() = None;
        debug!("layout cache disabled");
    }

    pub fn is_enabled(&self) -> bool {
        self.read().is_some()
    }

    pub fn get(&self, key: &str, for_parsing: bool) -> Option<TranslatedLayout> {
        self.read().as_ref()?.get(for_parsing).get(key).cloned()
    }

    pub fn set(&self, key: &str, for_parsing: bool, value: TranslatedLayout) {
        if let Some(tables) = self.write().as_mut() {
            tables.get_mut(for_parsing).insert(key.to_owned(), value);
        }
    }

    /// Number of cached translations, zero when disabled.
    pub fn len(&self) -> usize {
        self.read()
            .as_ref()
            .map_or(0, |tables| tables.formatting.len() + tables.parsing.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // the table is never left half-written, so a poisoned lock is still usable
    fn read(&self) -> RwLockReadGuard<'_, Option<Tables>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Tables>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for FormatCache {
    fn default() -> Self {
        FormatCache::enabled()
    }
}
