//! Random access byte source and bounded, non-owning views into it.
//!
//! A `Source` owns the single reader over the MOV file.
//! A `Section` is a window `[base, base + len)` into that source,
//! with its own read position. Sections implement `Read` and `Seek`
//! relative to their own bounds, so `binrw` can decode directly from them,
//! and can be sub-sliced without copying any data.

use std::{
    cell::{Cell, RefCell},
    fs::File,
    io::{BufReader, Read, Seek, SeekFrom},
    path::Path,
};

use crate::GpsError;

/// Owns the reader over the full file
/// for the duration of a conversion.
#[derive(Debug)]
pub struct Source<R> {
    /// Shared reader. Only ever borrowed
    /// for the duration of a single read.
    inner: RefCell<R>,
    /// Known position of `inner`,
    /// `None` if unknown (e.g. after a failed read).
    /// Avoids seeking, and dropping `BufReader`
    /// buffers, for sequential reads.
    cursor: Cell<Option<u64>>,
    /// Total size in bytes.
    len: u64,
}

impl Source<BufReader<File>> {
    /// Opens file at `path` as a buffered source.
    pub fn open(path: &Path) -> Result<Self, GpsError> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek> Source<R> {
    /// Wraps `inner`. Size is determined once, by seeking to the end.
    pub fn new(mut inner: R) -> Result<Self, GpsError> {
        let len = inner.seek(SeekFrom::End(0))?;
        Ok(Self {
            inner: RefCell::new(inner),
            cursor: Cell::new(Some(len)),
            len,
        })
    }

    /// Size in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bounded view over the full source.
    pub fn section(&self) -> Section<'_, R> {
        Section::new(self, 0, self.len)
    }

    /// Bounded view starting at absolute `offset`,
    /// spanning at most `len` bytes.
    /// Clamped to the end of the source.
    pub fn section_at(&self, offset: u64, len: u64) -> Section<'_, R> {
        let base = offset.min(self.len);
        let len = len.min(self.len - base);
        Section::new(self, base, len)
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.inner.into_inner()
    }

    /// Reads into `buf` at absolute position `pos`.
    fn read_at(&self, pos: u64, buf: &mut [u8]) -> std::io::Result<usize> {
        let mut inner = self.inner.borrow_mut();
        if self.cursor.get() != Some(pos) {
            self.cursor.set(None);
            inner.seek(SeekFrom::Start(pos))?;
        }
        let n = inner.read(buf)?;
        self.cursor.set(Some(pos + n as u64));
        Ok(n)
    }
}

/// Non-owning view bound to `[base, base + len)` of a `Source`.
#[derive(Debug)]
pub struct Section<'a, R> {
    source: &'a Source<R>,
    /// Absolute byte offset for the start of the view.
    base: u64,
    /// Size of the view in bytes.
    len: u64,
    /// Read position, relative to `base`.
    pos: u64,
}

// Derived `Clone` would require `R: Clone`.
impl<'a, R> Clone for Section<'a, R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source,
            base: self.base,
            len: self.len,
            pos: self.pos,
        }
    }
}

impl<'a, R: Read + Seek> Section<'a, R> {
    pub(crate) fn new(source: &'a Source<R>, base: u64, len: u64) -> Self {
        Self {
            source,
            base,
            len,
            pos: 0,
        }
    }

    /// Size of the view in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Absolute byte offset for the start of the view.
    pub fn offset(&self) -> u64 {
        self.base
    }

    /// Read position relative to the start of the view.
    pub fn pos(&self) -> u64 {
        self.pos
    }

    /// Absolute read position in the source.
    pub fn abs_pos(&self) -> u64 {
        self.base + self.pos
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> u64 {
        self.len.saturating_sub(self.pos)
    }

    /// View over `len` bytes starting at `offset`,
    /// relative to the start of this view.
    /// Clamped to the bounds of this view.
    pub fn sub(&self, offset: u64, len: u64) -> Section<'a, R> {
        let start = offset.min(self.len);
        let len = len.min(self.len - start);
        Section::new(self.source, self.base + start, len)
    }

    /// Moves read position `n` bytes forward
    /// without reading.
    pub(crate) fn skip(&mut self, n: u64) {
        self.pos = self.pos.saturating_add(n);
    }

    /// Raises `GpsError::TruncatedRead` if fewer than `n`
    /// bytes remain.
    pub(crate) fn ensure(&self, what: &'static str, n: u64) -> Result<(), GpsError> {
        let got = self.remaining();
        if got < n {
            return Err(GpsError::TruncatedRead {
                what,
                offset: self.abs_pos(),
                expected: n,
                got,
            });
        }
        Ok(())
    }
}

impl<'a, R: Read + Seek> Read for Section<'a, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let max = (buf.len() as u64).min(self.remaining()) as usize;
        if max == 0 {
            return Ok(0);
        }
        let n = self.source.read_at(self.abs_pos(), &mut buf[..max])?;
        self.pos += n as u64;
        Ok(n)
    }
}

impl<'a, R: Read + Seek> Seek for Section<'a, R> {
    fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
        let new_pos = match pos {
            SeekFrom::Start(n) => Some(n),
            SeekFrom::End(n) => self.len.checked_add_signed(n),
            SeekFrom::Current(n) => self.pos.checked_add_signed(n),
        };
        match new_pos {
            Some(p) => {
                self.pos = p;
                Ok(p)
            }
            None => Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "invalid seek to a negative or overflowing position",
            )),
        }
    }
}
