//! Decides whether a byte buffer should be handed to the host's ordinary
//! string renderer or to the dump engine.
//!
//! The host-side hook that intercepts a value printer is external to this
//! crate; only its decision function lives here, pure and stateless. Every
//! call carries its own mode and threshold.

use crate::{Byte, ByteCategory};

/// How the caller wants a byte buffer displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Always treat the buffer as text.
    Text,
    /// Always treat the buffer as raw bytes.
    Bytes,
    /// Decide from the buffer's printability.
    Infer,
}

/// The resolved rendering choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderChoice {
    /// Delegate to the host's ordinary string renderer.
    Text,
    /// Render with the dump engine.
    Dump,
}

/// Share of bytes that read as text: `Space`, `OtherWhitespace` and
/// `PrintableAscii` count, everything else does not. An empty buffer is
/// fully printable.
pub fn printable_ratio(bytes: &[u8]) -> f64 {
    if bytes.is_empty() {
        return 1.0;
    }
    let printable = bytes
        .iter()
        .filter(|&&b| {
            matches!(
                Byte(b).category(),
                ByteCategory::Space | ByteCategory::OtherWhitespace | ByteCategory::PrintableAscii
            )
        })
        .count();
    printable as f64 / bytes.len() as f64
}

/// Resolve `mode` against the buffer. `Infer` picks [`RenderChoice::Text`]
/// when [`printable_ratio`] reaches `threshold`.
pub fn choose(bytes: &[u8], mode: DisplayMode, threshold: f64) -> RenderChoice {
    match mode {
        DisplayMode::Text => RenderChoice::Text,
        DisplayMode::Bytes => RenderChoice::Dump,
        DisplayMode::Infer => {
            if printable_ratio(bytes) >= threshold {
                RenderChoice::Text
            } else {
                RenderChoice::Dump
            }
        }
    }
}
