#![no_main]

use libfuzzer_sys::fuzz_target;
use wire::{crypt_top10, TOP10_SIZE};

fuzz_target!(|data: &[u8]| {
    let Ok(block) = <[u8; TOP10_SIZE]>::try_from(data) else {
        return;
    };
    assert_eq!(crypt_top10(&crypt_top10(&block)), block);
    let _ = level::decode_top10(&block);
});
