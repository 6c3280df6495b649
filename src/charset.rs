//! # Character Set
//!
//! Tracks which code page the printer is using. Switching only succeeds
//! for names the dialect knows; an unknown name leaves both the active page
//! and the buffer untouched. There is no automatic fallback: callers switch
//! explicitly before printing characters outside the active page.

use crate::buffer::JobBuffer;
use crate::dialect::Dialect;
use crate::error::{PrinterError, Result};

/// The active code page of one engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    active: String,
}

impl CharacterSet {
    /// Select `name` on a fresh buffer.
    ///
    /// Fails with `UnknownCodePage` when the dialect lacks it, so no
    /// half-configured state is ever returned.
    pub fn initial(dialect: &dyn Dialect, name: &str, buffer: &mut JobBuffer) -> Result<Self> {
        let command = lookup(dialect, name)?;
        buffer.append(&command);
        Ok(Self {
            active: name.to_string(),
        })
    }

    /// Name of the active code page.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Switch to `name`, appending the select command.
    pub fn switch(&mut self, dialect: &dyn Dialect, name: &str, buffer: &mut JobBuffer) -> Result<()> {
        let command = lookup(dialect, name)?;
        buffer.append(&command);
        self.active = name.to_string();
        Ok(())
    }
}

fn lookup(dialect: &dyn Dialect, name: &str) -> Result<Vec<u8>> {
    dialect
        .code_page(name)
        .ok_or_else(|| PrinterError::UnknownCodePage(name.to_string()))
}
