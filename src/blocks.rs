use std::io::{self, ErrorKind, Read};

/// Number of bytes per output line.
pub const BLOCK_SIZE: usize = 16;

/// A consecutive run of up to [`BLOCK_SIZE`] bytes, holding one output
/// line's worth of data and its zero-based position in the whole input.
///
/// A block shorter than [`BLOCK_SIZE`] occurs only as the last block of the
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub index: u64,
    pub data: Vec<u8>,
}

impl Block {
    pub fn new(index: u64, data: Vec<u8>) -> Block {
        Block { index, data }
    }

    /// Byte offset of the first byte of this block in the original input.
    pub fn offset(&self) -> u64 {
        self.index * BLOCK_SIZE as u64
    }
}

/// Lazy sequence of [`Block`]s over an incremental byte source.
///
/// Works over in-memory buffers (`&[u8]` implements `Read`) and streaming
/// sources alike. The sequence ends when the source is exhausted or the
/// optional block cap is reached; constructing a new `Blocks` over the same
/// source from the start yields the same sequence.
pub struct Blocks<R> {
    reader: R,
    block_size: usize,
    max_blocks: Option<u64>,
    index: u64,
    done: bool,
}

impl<R: Read> Blocks<R> {
    pub fn new(reader: R) -> Blocks<R> {
        Blocks {
            reader,
            block_size: BLOCK_SIZE,
            max_blocks: None,
            index: 0,
            done: false,
        }
    }

    /// Cap the number of blocks emitted. `None` emits all.
    pub fn max_blocks(mut self, max: impl Into<Option<u64>>) -> Blocks<R> {
        self.max_blocks = max.into();
        self
    }

    /// Override the block size. A size of zero is treated as one.
    pub fn block_size(mut self, size: usize) -> Blocks<R> {
        self.block_size = size.max(1);
        self
    }
}

impl<R: Read> Iterator for Blocks<R> {
    type Item = io::Result<Block>;

    fn next(&mut self) -> Option<io::Result<Block>> {
        if self.done || self.max_blocks.map_or(false, |max| self.index >= max) {
            return None;
        }

        let mut data = vec![0; self.block_size];
        let mut filled = 0;
        while filled < self.block_size {
            match self.reader.read(&mut data[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }

        if filled == 0 {
            self.done = true;
            return None;
        }

        data.truncate(filled);
        // a short read means the source is exhausted
        if filled < self.block_size {
            self.done = true;
        }

        let block = Block::new(self.index, data);
        self.index += 1;
        Some(Ok(block))
    }
}
