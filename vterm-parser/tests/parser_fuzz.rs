use proptest::prelude::*;
use vterm_parser::Parser;

proptest! {
    #[test]
    fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut parser = Parser::new();
        let _ = parser.feed(&bytes);
    }

    #[test]
    fn arbitrary_bytes_fed_in_chunks_never_panic(
        chunks in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..32),
    ) {
        let mut parser = Parser::new();
        for chunk in &chunks {
            let _ = parser.feed(chunk);
        }
    }

    #[test]
    fn escape_heavy_bytes_never_panic(
        bytes in prop::collection::vec(prop_oneof![
            Just(0x1bu8),
            Just(b'['),
            Just(b']'),
            Just(b'P'),
            Just(b'^'),
            Just(b'_'),
            Just(b'\\'),
            any::<u8>(),
        ], 0..512),
    ) {
        let mut parser = Parser::new();
        let _ = parser.feed(&bytes);
    }
}
