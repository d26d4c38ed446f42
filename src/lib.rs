//! Render byte buffers as fixed-layout, human-readable hex dumps.
//!
//! One line per 16-byte block: a zero-padded offset column, the bytes as
//! paired hexadecimal digits, and a parallel column of printable-character
//! glyphs, with per-category colors distinguishing zero bytes, whitespace,
//! printable ASCII, non-printable ASCII and non-ASCII bytes.
//!
//! ```
//! use bytedump::DumperBuilder;
//!
//! let dumper = DumperBuilder::new().show_color(false).build();
//! let dump = dumper.dump_bytes(b"abcd").unwrap();
//! assert!(dump.starts_with("   offset"));
//! assert!(dump.contains("6162 6364"));
//! ```

pub mod blocks;
pub mod policy;

mod colors;
mod strip;

pub use blocks::{Block, Blocks, BLOCK_SIZE};
pub use strip::strip_escapes;

use std::io::Read;

use const_format::concatcp;
use thiserror::Error;

use crate::colors::{
    COLOR_ASCII_NONPRINTABLE, COLOR_ASCII_PRINTABLE, COLOR_ASCII_WHITESPACE, COLOR_NONASCII,
    COLOR_OFFSET, COLOR_RESET, COLOR_ZERO,
};

/// Fixed column-label header. A compatibility surface for tests comparing
/// full documents; the spacing is reproduced bit-for-bit.
pub const HEADER: &str = concatcp!(
    "   offset    ",
    "0 1  2 3  4 5  6 7  8 9  A B  C D  E F",
    "    printable data"
);

/// Marker line inserted between the head and tail of a truncated render.
pub const ELISION_MARKER: &str = "  **";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteCategory {
    Zero,
    Space,
    OtherWhitespace,
    NonAscii,
    PrintableAscii,
    NonPrintableAscii,
}

#[derive(Copy, Clone)]
pub struct Byte(pub u8);

impl Byte {
    /// The guards are ordered: ranges overlap at their boundaries and the
    /// earlier arm claims the byte (Zero > Space > OtherWhitespace >
    /// NonAscii > PrintableAscii > NonPrintableAscii).
    pub fn category(self) -> ByteCategory {
        use crate::ByteCategory::*;

        if self.0 == 0x00 {
            Zero
        } else if self.0 == 0x20 {
            Space
        } else if matches!(self.0, 0x09 | 0x0a | 0x0c | 0x0d) {
            OtherWhitespace
        } else if !self.0.is_ascii() {
            NonAscii
        } else if self.0 >= 0x20 {
            PrintableAscii
        } else {
            NonPrintableAscii
        }
    }

    fn color(self) -> &'static str {
        use crate::ByteCategory::*;

        match self.category() {
            Zero => COLOR_ZERO,
            Space | OtherWhitespace => COLOR_ASCII_WHITESPACE,
            NonAscii => COLOR_NONASCII,
            PrintableAscii => COLOR_ASCII_PRINTABLE,
            NonPrintableAscii => COLOR_ASCII_NONPRINTABLE,
        }
    }

    /// The single character shown for this byte in the printable column.
    pub fn glyph(self) -> char {
        use crate::ByteCategory::*;

        match self.category() {
            Zero => '⋄',
            Space => ' ',
            OtherWhitespace => '_',
            NonAscii => '×',
            PrintableAscii => self.0 as char,
            NonPrintableAscii => '•',
        }
    }
}

#[derive(Debug, Error)]
pub enum DumpError {
    /// The byte source failed to yield bytes. The call fails closed; no
    /// partial document is returned.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] std::io::Error),
}

pub struct DumperBuilder {
    show_color: bool,
    limit: Option<usize>,
}

impl DumperBuilder {
    pub fn new() -> Self {
        DumperBuilder {
            show_color: true,
            limit: None,
        }
    }

    pub fn show_color(mut self, show_color: bool) -> Self {
        self.show_color = show_color;
        self
    }

    /// Byte threshold beyond which the head/tail truncation policy
    /// activates. `None` renders everything.
    pub fn limit(mut self, limit: impl Into<Option<usize>>) -> Self {
        self.limit = limit.into();
        self
    }

    pub fn build(self) -> Dumper {
        Dumper::new(self.show_color, self.limit)
    }
}

impl Default for DumperBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Dumper {
    show_color: bool,
    limit: Option<usize>,
    byte_hex_panel: Vec<String>,
    byte_glyph_panel: Vec<String>,
}

impl Dumper {
    fn new(show_color: bool, limit: Option<usize>) -> Dumper {
        Dumper {
            show_color,
            limit,
            byte_hex_panel: (0u8..=u8::MAX)
                .map(|b| {
                    let hex = format!("{:02X}", b);
                    if show_color {
                        format!("{}{}{}", Byte(b).color(), hex, COLOR_RESET)
                    } else {
                        hex
                    }
                })
                .collect(),
            byte_glyph_panel: (0u8..=u8::MAX)
                .map(|b| {
                    let glyph = Byte(b).glyph().to_string();
                    if show_color {
                        format!("{}{}{}", Byte(b).color(), glyph, COLOR_RESET)
                    } else {
                        glyph
                    }
                })
                .collect(),
        }
    }

    /// One three-column text line for `block`: zero-padded offset, hex
    /// column grouped in byte pairs, printable glyphs.
    ///
    /// The hex column of a short final block is padded with blanks so it
    /// always occupies the width of a full 16-byte block; the printable
    /// column is simply shorter.
    pub fn render_line(&self, block: &Block) -> String {
        let mut line = String::new();

        let offset = format!("{:06}0:", block.index);
        if self.show_color {
            line.push_str(COLOR_OFFSET);
            line.push_str(&offset);
            line.push_str(COLOR_RESET);
        } else {
            line.push_str(&offset);
        }
        line.push_str("  ");

        for i in 0..BLOCK_SIZE {
            match block.data.get(i) {
                Some(&b) => line.push_str(&self.byte_hex_panel[b as usize]),
                None => line.push_str("  "),
            }
            if i % 2 == 1 {
                line.push(' ');
            }
        }
        line.push_str("  ");

        for &b in &block.data {
            line.push_str(&self.byte_glyph_panel[b as usize]);
        }

        line
    }

    /// Render `bytes` as a complete document: header line, one line per
    /// 16-byte block, trailing newline included.
    ///
    /// When the input is longer than the configured limit, the first
    /// `limit` bytes are rendered, followed by the elision marker line and
    /// a single tail line holding the last 1–16 bytes of the input at
    /// their true offset. Truncation triggers strictly on `len > limit`.
    /// A limit of zero renders the header only.
    pub fn dump_bytes(&self, bytes: &[u8]) -> Result<String, DumpError> {
        let mut doc = String::new();
        doc.push_str(HEADER);
        doc.push('\n');

        match self.limit {
            Some(0) => {}
            Some(limit) if bytes.len() > limit => {
                self.render_blocks(&mut doc, Blocks::new(&bytes[..limit]))?;
                self.push_marker(&mut doc);

                let tail_len = match bytes.len() % BLOCK_SIZE {
                    0 => BLOCK_SIZE,
                    n => n,
                };
                // the offset the tail would have had in an untruncated render
                let tail = Block::new(
                    ((bytes.len() - tail_len) / BLOCK_SIZE) as u64,
                    bytes[bytes.len() - tail_len..].to_vec(),
                );
                doc.push_str(&self.render_line(&tail));
                doc.push('\n');
            }
            _ => self.render_blocks(&mut doc, Blocks::new(bytes))?,
        }

        Ok(doc)
    }

    /// Read `reader` to its end and render the bytes as a document.
    pub fn dump<R: Read>(&self, mut reader: R) -> Result<String, DumpError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.dump_bytes(&bytes)
    }

    fn render_blocks<R: Read>(&self, doc: &mut String, blocks: Blocks<R>) -> Result<(), DumpError> {
        for block in blocks {
            doc.push_str(&self.render_line(&block?));
            doc.push('\n');
        }
        Ok(())
    }

    fn push_marker(&self, doc: &mut String) {
        if self.show_color {
            doc.push_str(COLOR_OFFSET);
            doc.push_str(ELISION_MARKER);
            doc.push_str(COLOR_RESET);
        } else {
            doc.push_str(ELISION_MARKER);
        }
        doc.push('\n');
    }
}
