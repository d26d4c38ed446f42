/// Remove every CSI-style escape sequence (ESC, `[`, a run of parameter and
/// intermediate bytes, one final byte in `0x40`–`0x7e`) from `input`,
/// leaving all other characters, including newlines and spacing, untouched.
///
/// Used to obtain the plain-text comparison form of a colorized document.
/// Idempotent: stripping an already-plain document is a no-op.
pub fn strip_escapes(input: &str) -> String {
    let mut plain = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&c) {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_color_sequences() {
        assert_eq!(strip_escapes("\x1b[36mabcd\x1b[39m"), "abcd");
        assert_eq!(strip_escapes("\x1b[1;31mX\x1b[0m Y"), "X Y");
    }

    #[test]
    fn plain_text_is_untouched() {
        let text = "0000000:  6162 6364  abcd\n";
        assert_eq!(strip_escapes(text), text);
    }

    #[test]
    fn idempotent() {
        let once = strip_escapes("\x1b[33m×\x1b[39m plain");
        assert_eq!(strip_escapes(&once), once);
    }

    #[test]
    fn lone_escape_passes_through() {
        assert_eq!(strip_escapes("a\x1bb"), "a\x1bb");
    }
}
