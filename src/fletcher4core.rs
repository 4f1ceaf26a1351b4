use std::fmt;

use digest::{
    block_buffer::Eager,
    core_api::{AlgorithmName, Buffer, BufferKindUser, CoreWrapper, FixedOutputCore, UpdateCore},
    crypto_common::{Block, BlockSizeUser},
    typenum::{U32, U4},
    Output, OutputSizeUser, Reset,
};

use byteorder::{ByteOrder, LittleEndian};
use log::trace;

use crate::checksum::{fold, BLOCK_SIZE};

/// Fletcher4 is the buffered hasher built on top of Fletcher4Core.
///
/// Unlike [`crate::checksum::Digest`], it accepts writes of any length and keeps a
/// trailing partial word until more input arrives. It implements `io::Write`, so
/// `io::copy` can feed it from any reader. The total input must still be a multiple
/// of 4 bytes by the time it is finalized.
pub type Fletcher4 = CoreWrapper<Fletcher4Core>;

/// Fletcher4Core is the core implementation of the fletcher4 checksum for the `digest` traits.
#[derive(Clone, Debug, Default)]
pub struct Fletcher4Core {
    s: [u64; 4],
}

impl Fletcher4Core {
    /// sum64x4 returns the running sums of the full words processed so far.
    pub fn sum64x4(&self) -> [u64; 4] {
        self.s
    }
}

impl Reset for Fletcher4Core {
    fn reset(&mut self) {
        self.s = [0; 4];
    }
}

impl AlgorithmName for Fletcher4Core {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Fletcher4")
    }
}

impl BlockSizeUser for Fletcher4Core {
    type BlockSize = U4;
}

impl BufferKindUser for Fletcher4Core {
    type BufferKind = Eager;
}

impl OutputSizeUser for Fletcher4Core {
    type OutputSize = U32;
}

impl UpdateCore for Fletcher4Core {
    fn update_blocks(&mut self, blocks: &[Block<Self>]) {
        for b in blocks {
            fold(&mut self.s, LittleEndian::read_u32(b));
        }
    }
}

impl FixedOutputCore for Fletcher4Core {
    fn finalize_fixed_core(&mut self, buffer: &mut Buffer<Self>, out: &mut Output<Self>) {
        let pending = buffer.get_pos();
        if pending != 0 {
            panic!(
                "fletcher4 input must be a multiple of {} bytes, {} trailing bytes pending",
                BLOCK_SIZE, pending
            );
        }

        trace!("fletcher4: finalize");
        LittleEndian::write_u64_into(&self.s, out);
    }
}
