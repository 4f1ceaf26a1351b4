use crate::hash::{Fletcher64x4, Hasher};
use anyhow::Result;
use byteorder::{ByteOrder, LittleEndian};
use log::trace;

/// The size in bytes of a fletcher4 checksum.
pub const SIZE: usize = 32;

/// The size in bytes of a word consumed by the checksum. Writes must be a multiple of it.
pub const BLOCK_SIZE: usize = 4;

/// new returns a Digest computing the fletcher4 checksum.
pub fn new() -> Digest {
    Digest::new()
}

/// checksum computes the fletcher4 words of `data` in one pass.
/// `data` must be a multiple of BLOCK_SIZE bytes long.
pub fn checksum(data: &[u8]) -> [u64; 4] {
    let mut d = Digest::new();
    d.update(data);
    d.s
}

/// Digest represents the partial evaluation of a fletcher4 checksum.
///
/// Digest is strict: every write must be a multiple of [`BLOCK_SIZE`] bytes. It does not
/// implement `io::Write`, since readers may hand over chunks of any length. Use
/// [`crate::fletcher4core::Fletcher4`] to feed it from a stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Digest {
    s: [u64; 4], // running sums a, b, c, d
}

impl Digest {
    /// new returns a Digest with all running sums set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// update folds every little-endian word of `p` into the running sums.
    ///
    /// # Panics
    ///
    /// Panics if `p.len()` is not a multiple of [`BLOCK_SIZE`]. The state is left untouched.
    pub fn update(&mut self, p: &[u8]) {
        if p.len() % BLOCK_SIZE != 0 {
            panic!(
                "write to Fletcher64x4 checksummer must be a multiple of {} bytes, got {}",
                BLOCK_SIZE,
                p.len()
            );
        }

        trace!("fletcher4: folding {} words", p.len() / BLOCK_SIZE);
        p.chunks_exact(BLOCK_SIZE)
            .for_each(|w| fold(&mut self.s, LittleEndian::read_u32(w)));
    }
}

// fold applies the a -> b -> c -> d cascade for a single word.
pub(crate) fn fold(s: &mut [u64; 4], w: u32) {
    s[0] = s[0].wrapping_add(u64::from(w));
    s[1] = s[1].wrapping_add(s[0]);
    s[2] = s[2].wrapping_add(s[1]);
    s[3] = s[3].wrapping_add(s[2]);
}

impl Hasher for Digest {
    fn write(&mut self, p: &[u8]) -> Result<usize> {
        self.update(p);
        Ok(p.len())
    }

    fn sum(&self, mut b: Vec<u8>) -> Vec<u8> {
        let mut out = [0; SIZE];
        LittleEndian::write_u64_into(&self.s, &mut out);
        b.extend_from_slice(&out);
        b
    }

    fn reset(&mut self) {
        trace!("fletcher4: reset");
        self.s = [0; 4];
    }

    fn size(&self) -> usize {
        SIZE
    }

    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }
}

impl Fletcher64x4 for Digest {
    fn sum64x4(&self) -> [u64; 4] {
        self.s
    }
}
