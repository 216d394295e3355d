#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use scratchio::{Scratch, ScratchConfig};

fuzz_target!(|data: Vec<u8>| {
    let text = String::from_utf8_lossy(&data).into_owned();

    let configs = vec![
        ScratchConfig::default(),
        // Lazily allocated
        ScratchConfig::new(0).unwrap(),
        // Tight retention so long inputs take the private path
        ScratchConfig::default().with_retain_limit(Some(1024)),
    ];

    for config in configs {
        let scratch = Scratch::new(config).unwrap();

        // Verify: write forwards exactly the text's bytes
        let mut sink: Vec<u8> = Vec::new();
        let n = scratch.write(&mut sink, &text).unwrap();
        assert_eq!(n, text.len());
        assert_eq!(sink, text.as_bytes());

        // Verify: read returns exactly what was written
        let (n, got) = scratch.read(&mut Cursor::new(&sink), text.len()).unwrap();
        assert_eq!(n, text.len());
        assert_eq!(got, text);

        // Verify: raw bytes survive untouched, valid UTF-8 or not
        let raw = scratch.read_bytes(&mut Cursor::new(&data), data.len()).unwrap();
        assert_eq!(&raw[..], &data[..]);

        // Verify: shared capacity is a power of two (or zero) and never
        // exceeds what the retain limit allows
        let cap = scratch.capacity().unwrap();
        assert!(cap == 0 || cap.is_power_of_two());
        if let Some(limit) = config.retain_limit() {
            assert!(cap <= limit.next_power_of_two().max(config.initial_capacity()));
        }
    }
});
