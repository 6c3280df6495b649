//! # Job Buffer
//!
//! The append-only byte sequence an engine assembles a print job into.
//! Fragments land in call order and are never reordered or dropped; the
//! only ways to shrink it are [`JobBuffer::clear`] and [`JobBuffer::replace`].

/// Accumulated print job bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobBuffer {
    data: Vec<u8>,
}

impl JobBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw bytes verbatim.
    #[inline]
    pub fn append(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Append text, encoded as UTF-8.
    #[inline]
    pub fn append_text(&mut self, text: &str) {
        self.data.extend_from_slice(text.as_bytes());
    }

    /// Copy of the current contents.
    pub fn snapshot(&self) -> Vec<u8> {
        self.data.clone()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Contents decoded as UTF-8; invalid sequences become U+FFFD.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }

    /// Swap the whole contents for `bytes`.
    pub fn replace(&mut self, bytes: Vec<u8>) {
        self.data = bytes;
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Truncate back to an earlier length.
    ///
    /// Used to undo a partially lowered call so a failure leaves the
    /// preceding contents intact.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }
}
