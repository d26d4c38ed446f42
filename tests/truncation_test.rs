use pretty_assertions::assert_eq;

use bytedump::{DumperBuilder, ELISION_MARKER};

fn render_plain(bytes: &[u8], limit: impl Into<Option<usize>>) -> String {
    DumperBuilder::new()
        .show_color(false)
        .limit(limit)
        .build()
        .dump_bytes(bytes)
        .unwrap()
}

#[test]
fn head_marker_and_tail_at_true_offset() {
    let bytes = b"1234567890abcdef".repeat(5);
    assert_eq!(render_plain(&bytes, 32), concat!(
        "   offset    0 1  2 3  4 5  6 7  8 9  A B  C D  E F    printable data\n",
        "0000000:  3132 3334 3536 3738 3930 6162 6364 6566   1234567890abcdef\n",
        "0000010:  3132 3334 3536 3738 3930 6162 6364 6566   1234567890abcdef\n",
        "  **\n",
        "0000040:  3132 3334 3536 3738 3930 6162 6364 6566   1234567890abcdef\n",
    ));
}

#[test]
fn unaligned_tail_keeps_its_untruncated_offset() {
    let bytes = b"0123456789abcdefWXYZ";
    assert_eq!(render_plain(bytes, 16), concat!(
        "   offset    0 1  2 3  4 5  6 7  8 9  A B  C D  E F    printable data\n",
        "0000000:  3031 3233 3435 3637 3839 6162 6364 6566   0123456789abcdef\n",
        "  **\n",
        "0000010:  5758 595A                                 WXYZ\n",
    ));
}

#[test]
fn limit_smaller_than_one_block_still_renders_head_and_tail() {
    let bytes = b"0123456789abcdefWXYZ";
    assert_eq!(render_plain(bytes, 5), concat!(
        "   offset    0 1  2 3  4 5  6 7  8 9  A B  C D  E F    printable data\n",
        "0000000:  3031 3233 34                              01234\n",
        "  **\n",
        "0000010:  5758 595A                                 WXYZ\n",
    ));
}

#[test]
fn limit_equal_to_length_renders_everything() {
    let bytes = b"1234567890abcdef".repeat(2);
    let rendered = render_plain(&bytes, bytes.len());
    assert_eq!(rendered, render_plain(&bytes, None));
    assert!(!rendered.contains(ELISION_MARKER));
}

#[test]
fn limit_larger_than_length_renders_everything() {
    let bytes = [0x41u8; 20];
    assert_eq!(render_plain(&bytes, 1024), render_plain(&bytes, None));
}

#[test]
fn limit_zero_renders_the_header_only() {
    assert_eq!(render_plain(b"abcd", 0), concat!(
        "   offset    0 1  2 3  4 5  6 7  8 9  A B  C D  E F    printable data\n",
    ));
}

#[test]
fn truncated_document_contains_exactly_one_marker_line() {
    let rendered = render_plain(&[0x00u8; 100], 48);
    let markers = rendered
        .lines()
        .filter(|line| *line == ELISION_MARKER)
        .count();
    assert_eq!(markers, 1);
}
