#![no_main]

use libfuzzer_sys::fuzz_target;
use scratchio::Scratch;

fuzz_target!(|input: (u16, Vec<u8>, Vec<u8>)| {
    let (offset, base, payload) = input;
    let offset = u64::from(offset);
    let text = String::from_utf8_lossy(&payload).into_owned();
    let scratch = Scratch::default();

    let mut sink = base.clone();
    let n = scratch.write_at(&mut sink, &text, offset).unwrap();
    assert_eq!(n, text.len());

    // Verify: bytes before the offset are untouched
    let start = offset as usize;
    let kept = base.len().min(start);
    assert_eq!(&sink[..kept], &base[..kept]);

    // Verify: the written range reads back as the text
    let (n, got) = scratch.read_at(&sink, text.len(), offset).unwrap();
    assert_eq!(n, text.len());
    assert_eq!(got, text);

    // Verify: bytes after the written range are untouched
    let end = start + text.len();
    if base.len() > end {
        assert_eq!(&sink[end..], &base[end..]);
    }
});
