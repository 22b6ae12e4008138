//! Tests for line wrapping.

use b64kit_base64::{encode, encode_to_bytes, encoded_len, EncodeOptions, MAX_LINE_LENGTH};
use rand::Rng;

fn break_lines() -> EncodeOptions {
    EncodeOptions::default().with_break_lines(true)
}

fn encode_wrapped(data: &[u8]) -> Vec<u8> {
    encode_to_bytes(data, 0, data.len(), &break_lines()).unwrap()
}

#[test]
fn lines_hold_76_symbols() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let length = rng.gen_range(0..=600);
        let blob: Vec<u8> = (0..length).map(|_| rng.gen()).collect();
        let wrapped = encode_wrapped(&blob);

        let lines: Vec<&[u8]> = wrapped.split(|&b| b == b'\n').collect();
        let (last, full) = lines.split_last().unwrap();
        for line in full {
            assert_eq!(line.len(), MAX_LINE_LENGTH);
        }
        assert!(last.len() <= MAX_LINE_LENGTH);

        let joined: Vec<u8> = lines.concat();
        assert_eq!(joined, encode(&blob).into_bytes());
    }
}

#[test]
fn short_input_has_no_newline() {
    assert_eq!(encode_wrapped(b"foobar"), b"Zm9vYmFy");
}

#[test]
fn full_final_line_ends_with_newline() {
    let wrapped = encode_wrapped(&[0u8; 57]);
    assert_eq!(wrapped.len(), 77);
    assert_eq!(wrapped.len(), encoded_len(57, true));
    assert_eq!(wrapped.last(), Some(&b'\n'));
}

#[test]
fn partial_final_group_on_boundary_has_no_newline() {
    let wrapped = encode_wrapped(&[0u8; 56]);
    assert_eq!(wrapped.len(), 76);
    assert_eq!(encoded_len(56, true), 77);
    assert_eq!(&wrapped[72..], b"AAA=");
}

#[test]
fn group_after_boundary_follows_newline() {
    let wrapped = encode_wrapped(&[0u8; 58]);
    assert_eq!(wrapped.len(), 81);
    assert_eq!(&wrapped[75..], b"A\nAA==");
}

#[test]
fn two_full_lines() {
    let wrapped = encode_wrapped(&[0u8; 114]);
    assert_eq!(wrapped.len(), 154);
    assert_eq!(wrapped[76], b'\n');
    assert_eq!(wrapped[153], b'\n');
}
