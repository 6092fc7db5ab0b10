use std::io;

use crate::entry::ScanEntry;

/// Sink receiving accepted entries in traversal order.
///
/// `accept` is invoked synchronously, once per accepted entry: the root
/// first (when it is reportable), then parents strictly before their
/// children. Returning an error aborts the remainder of the scan; entries
/// already delivered are not retracted.
pub trait Consumer {
    /// Receives the next accepted entry.
    ///
    /// # Errors
    ///
    /// Any error aborts the scan and is surfaced to the caller with the
    /// entry's vpath attached; the error itself is propagated unchanged as
    /// the source.
    fn accept(&mut self, entry: ScanEntry) -> io::Result<()>;
}

impl<F> Consumer for F
where
    F: FnMut(ScanEntry) -> io::Result<()>,
{
    fn accept(&mut self, entry: ScanEntry) -> io::Result<()> {
        self(entry)
    }
}

/// Collects every accepted entry, preserving traversal order.
impl Consumer for Vec<ScanEntry> {
    fn accept(&mut self, entry: ScanEntry) -> io::Result<()> {
        self.push(entry);
        Ok(())
    }
}
