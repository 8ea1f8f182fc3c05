//! The bump-pointer arena and its temp-memory marks.

use crate::error::ArenaError;

/// A bump-pointer region allocator over a fixed backing buffer.
///
/// Allocations return byte offsets into the region; resolve them with
/// [`Arena::bytes`] / [`Arena::bytes_mut`]. Offsets stay cheap and
/// `Copy`, and unlike references they survive unrelated pushes.
///
/// Nothing is ever freed individually. [`Arena::reset`] reclaims the
/// whole region; [`Arena::mark`] / [`Arena::rewind`] reclaim a suffix.
/// Offsets taken before a reset or rewind are stale: resolving one
/// afterwards either panics (the range is beyond the cursor) or reads
/// whatever reused storage now occupies it. Staleness is a documented
/// hazard, not something the arena tracks.
pub struct Arena {
    /// Backing storage. Allocated to full capacity at creation.
    data: Vec<u8>,
    /// Next free byte.
    cursor: usize,
}

/// A snapshot of the arena cursor for scoped scratch allocations.
///
/// Take one with [`Arena::mark`], allocate freely, then hand it back
/// to [`Arena::rewind`] to reclaim everything pushed since, without
/// disturbing allocations made before the mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct ArenaMark(usize);

impl Arena {
    /// Create an arena with `capacity` bytes of zeroed backing storage.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            cursor: 0,
        }
    }

    /// Bump-allocate `len` bytes and return the range's starting offset.
    ///
    /// The range is zeroed before it is handed out, so storage reused
    /// after a [`reset`](Arena::reset) or [`rewind`](Arena::rewind)
    /// never leaks earlier contents.
    pub fn push_bytes(&mut self, len: usize) -> Result<usize, ArenaError> {
        let new_cursor = self
            .cursor
            .checked_add(len)
            .filter(|&c| c <= self.data.len())
            .ok_or(ArenaError::CapacityExceeded {
                requested: len,
                remaining: self.remaining(),
            })?;
        let offset = self.cursor;
        self.data[offset..new_cursor].fill(0);
        self.cursor = new_cursor;
        Ok(offset)
    }

    /// Copy `source` into the arena and return the copy's offset.
    pub fn push_copy(&mut self, source: &[u8]) -> Result<usize, ArenaError> {
        let offset = self.push_bytes(source.len())?;
        self.data[offset..offset + source.len()].copy_from_slice(source);
        Ok(offset)
    }

    /// Resolve an offset to a shared byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` extends past the used region. This
    /// includes resolving an offset that was invalidated by a reset or
    /// rewind.
    pub fn bytes(&self, offset: usize, len: usize) -> &[u8] {
        let end = offset + len;
        assert!(end <= self.cursor, "arena range {offset}..{end} is not live");
        &self.data[offset..end]
    }

    /// Resolve an offset to a mutable byte slice.
    ///
    /// # Panics
    ///
    /// Panics if `offset + len` extends past the used region.
    pub fn bytes_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        let end = offset + len;
        assert!(end <= self.cursor, "arena range {offset}..{end} is not live");
        &mut self.data[offset..end]
    }

    /// Snapshot the cursor for a scoped scratch region.
    pub fn mark(&self) -> ArenaMark {
        ArenaMark(self.cursor)
    }

    /// Restore the cursor to `mark`, reclaiming everything pushed since.
    ///
    /// # Panics
    ///
    /// Panics if the mark is ahead of the cursor, i.e. it was taken
    /// before a `reset` or an earlier, deeper rewind.
    pub fn rewind(&mut self, mark: ArenaMark) {
        assert!(
            mark.0 <= self.cursor,
            "arena mark {} is ahead of cursor {}",
            mark.0,
            self.cursor
        );
        self.cursor = mark.0;
    }

    /// Reset the cursor to zero, invalidating every offset handed out.
    ///
    /// The backing storage is not zeroed here; the next `push_bytes`
    /// zeroes what it reuses.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Number of bytes currently allocated.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Remaining free bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len()
    }
}
