//! Files read into and written from Ferrule buffers.
//!
//! [`File`] wraps a `std::fs::File` together with its path so every error
//! can name the file it came from. Reads fill caller-provided
//! [`SliceMut`]s or append to a [`DynamicString`]; writes take a borrowed
//! [`Slice`]. All operations block.

use std::fs::{self, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use ferrule_core::{DynamicString, Slice, SliceMut};
use tracing::debug;

use crate::error::FileError;

/// An open file and the path it was opened from.
///
/// Closed when dropped; use [`close`](File::close) to observe errors from
/// flushing data to disk.
#[derive(Debug)]
pub struct File {
    inner: fs::File,
    path: PathBuf,
}

impl File {
    /// Open an existing file for reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, FileError> {
        Self::open_with(path.as_ref(), OpenOptions::new().read(true))
    }

    /// Create (or truncate) a file for writing.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, FileError> {
        Self::open_with(
            path.as_ref(),
            OpenOptions::new().write(true).create(true).truncate(true),
        )
    }

    /// Open a file for reading and writing, creating it if missing.
    /// Existing content is kept.
    pub fn open_or_create(path: impl AsRef<Path>) -> Result<Self, FileError> {
        Self::open_with(
            path.as_ref(),
            OpenOptions::new().read(true).write(true).create(true),
        )
    }

    fn open_with(path: &Path, options: &OpenOptions) -> Result<Self, FileError> {
        let inner = options.open(path).map_err(|source| FileError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "file opened");
        Ok(Self {
            inner,
            path: path.to_path_buf(),
        })
    }

    /// Path the file was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Size of the file in bytes, found by seeking to the end and back.
    ///
    /// The read/write position is unchanged on success.
    pub fn size(&mut self) -> Result<u64, FileError> {
        file_size(&mut self.inner).map_err(|source| self.seek_error(source))
    }

    /// Fill `dst` completely from the current position.
    ///
    /// Fails with [`FileError::Read`] (kind `UnexpectedEof`) if the file
    /// ends first.
    pub fn read_exact(&mut self, mut dst: SliceMut<'_, u8>) -> Result<(), FileError> {
        let len = dst.len();
        self.inner
            .read_exact(dst.as_mut_slice())
            .map_err(|source| self.read_error(source))?;
        debug!(path = %self.path.display(), bytes = len, "exact read");
        Ok(())
    }

    /// Write all of `src` at the current position. Returns the number of
    /// bytes written.
    pub fn write(&mut self, src: Slice<'_, u8>) -> Result<usize, FileError> {
        self.inner
            .write_all(src.as_bytes())
            .map_err(|source| self.write_error(source))?;
        debug!(path = %self.path.display(), bytes = src.len(), "write");
        Ok(src.len())
    }

    /// Replace `dst`'s content with everything from the current position to
    /// the end of the file. Returns the number of bytes read.
    ///
    /// `dst` is pre-sized to the length found by the size probe, so the
    /// read itself never reallocates. If the probe fails `dst` is untouched;
    /// if the read fails `dst` is left empty.
    pub fn read_to_end(&mut self, dst: &mut DynamicString) -> Result<usize, FileError> {
        let remaining = self.remaining_len()?;
        dst.clear();
        dst.try_grow(remaining);
        self.fill_from_position(dst, remaining)
    }

    /// Append everything from the current position to the end of the file
    /// onto `dst`, keeping its existing content. Returns the number of bytes
    /// appended.
    ///
    /// On error `dst` keeps its previous content.
    pub fn append_to_end(&mut self, dst: &mut DynamicString) -> Result<usize, FileError> {
        let remaining = self.remaining_len()?;
        dst.try_grow(dst.len() + remaining);
        self.fill_from_position(dst, remaining)
    }

    /// Bytes between the current position and the end of the file.
    fn remaining_len(&mut self) -> Result<usize, FileError> {
        let size = self.size()?;
        let position = self
            .inner
            .stream_position()
            .map_err(|source| self.seek_error(source))?;
        usize::try_from(size.saturating_sub(position)).map_err(|_| {
            self.read_error(io::Error::new(
                io::ErrorKind::OutOfMemory,
                "file does not fit in memory",
            ))
        })
    }

    fn fill_from_position(
        &mut self,
        dst: &mut DynamicString,
        count: usize,
    ) -> Result<usize, FileError> {
        let inner = &mut self.inner;
        if let Err(source) = dst.append_with(count, |region| inner.read_exact(region)) {
            return Err(self.read_error(source));
        }
        debug!(path = %self.path.display(), bytes = count, "read to end");
        Ok(count)
    }

    /// Flush data to disk and close the file.
    pub fn close(self) -> Result<(), FileError> {
        self.inner
            .sync_all()
            .map_err(|source| FileError::Sync {
                path: self.path.clone(),
                source,
            })
    }

    fn seek_error(&self, source: io::Error) -> FileError {
        FileError::Seek {
            path: self.path.clone(),
            source,
        }
    }

    fn read_error(&self, source: io::Error) -> FileError {
        FileError::Read {
            path: self.path.clone(),
            source,
        }
    }

    fn write_error(&self, source: io::Error) -> FileError {
        FileError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Length of a seekable stream, found by seeking to the end and back.
///
/// The stream's position is restored before returning.
pub fn file_size<S: Seek>(stream: &mut S) -> io::Result<u64> {
    let saved = stream.stream_position()?;
    let end = stream.seek(SeekFrom::End(0))?;
    stream.seek(SeekFrom::Start(saved))?;
    Ok(end)
}

/// Open `path` and replace `dst`'s content with the whole file. Returns
/// the number of bytes read.
pub fn read_to_end(path: impl AsRef<Path>, dst: &mut DynamicString) -> Result<usize, FileError> {
    File::open(path)?.read_to_end(dst)
}

/// Create (or truncate) `path` and write `src` into it. Returns the number
/// of bytes written.
pub fn write_file(path: impl AsRef<Path>, src: Slice<'_, u8>) -> Result<usize, FileError> {
    let mut file = File::create(path)?;
    let written = file.write(src)?;
    file.close()?;
    Ok(written)
}
