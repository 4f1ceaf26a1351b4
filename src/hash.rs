use anyhow::Result;

/// Hasher is the common contract shared by streaming checksums and hashes.
///
/// Code that only needs generic hashing should be written against this trait.
pub trait Hasher {
    /// write feeds `p` into the running state and returns the number of bytes consumed.
    fn write(&mut self, p: &[u8]) -> Result<usize>;

    /// sum appends the current checksum to `b` and returns the resulting buffer.
    /// It does not change the underlying state.
    fn sum(&self, b: Vec<u8>) -> Vec<u8>;

    /// reset restores the hasher to its initial state.
    fn reset(&mut self);

    /// size returns the number of bytes `sum` appends.
    fn size(&self) -> usize;

    /// block_size returns the granularity, in bytes, `write` operates on.
    fn block_size(&self) -> usize;
}

/// Fletcher64x4 extends [`Hasher`] with access to the four computed checksum words.
pub trait Fletcher64x4: Hasher {
    /// sum64x4 returns the current checksum as native words `[a, b, c, d]`.
    fn sum64x4(&self) -> [u64; 4];
}
