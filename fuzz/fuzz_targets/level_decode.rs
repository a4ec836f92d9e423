#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = wire::Limits::for_testing();
    if let Ok(level) = level::decode_level_with_limits(data, &limits) {
        // Anything that decodes must encode to the exact predicted size.
        let bytes = level::encode_level(&level).expect("decoded level must encode");
        assert_eq!(bytes.len(), level::encoded_len(&level));
        let again = level::decode_level(&bytes).expect("re-encoded level must decode");
        assert_eq!(again.objects.len(), level.objects.len());
        assert_eq!(again.top10.single.len(), level.top10.single.len());
    }
});
