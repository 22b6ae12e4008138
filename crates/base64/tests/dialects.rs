//! Tests for the URL-safe and ordered alphabets.

use b64kit_base64::{encode, encode_with, EncodeOptions};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(1..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

fn encode_opts(data: &[u8], options: EncodeOptions) -> String {
    encode_with(data, 0, data.len(), &options).unwrap()
}

#[test]
fn url_safe_substitutes_symbols() {
    let url_safe = EncodeOptions::default().with_url_safe(true);
    for _ in 0..100 {
        let blob = generate_blob();
        let standard = encode(&blob);
        let result = encode_opts(&blob, url_safe);

        assert!(!result.contains('+'));
        assert!(!result.contains('/'));
        assert_eq!(result, standard.replace('+', "-").replace('/', "_"));
    }
}

#[test]
fn url_safe_keeps_padding() {
    let url_safe = EncodeOptions::default().with_url_safe(true);
    assert_eq!(encode_opts(b"f", url_safe), "Zg==");
    assert_eq!(encode_opts(b"fo", url_safe), "Zm8=");
    assert_eq!(encode_opts(&[0xfb, 0xff, 0xbf], url_safe), "-_-_");
}

#[test]
fn url_safe_wins_when_both_set() {
    let both = EncodeOptions::default().with_url_safe(true).with_ordered(true);
    let url_safe = EncodeOptions::default().with_url_safe(true);
    for _ in 0..20 {
        let blob = generate_blob();
        assert_eq!(encode_opts(&blob, both), encode_opts(&blob, url_safe));
    }
}

#[test]
fn ordered_known_vectors() {
    let ordered = EncodeOptions::default().with_ordered(true);
    assert_eq!(encode_opts(b"foobar", ordered), "OaxjNa4m");
    assert_eq!(encode_opts(b"hello world", ordered), "P5KgQ5wVSqxmQ5F=");
}

#[test]
fn ordered_preserves_sort_order() {
    let ordered = EncodeOptions::default().with_ordered(true);
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        // Equal lengths that are multiples of 3 so no padding is involved.
        let a: Vec<u8> = (0..9).map(|_| rng.gen()).collect();
        let b: Vec<u8> = (0..9).map(|_| rng.gen()).collect();
        let (ea, eb) = (encode_opts(&a, ordered), encode_opts(&b, ordered));
        assert_eq!(a.cmp(&b), ea.cmp(&eb));
    }
}
