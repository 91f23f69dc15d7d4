#![no_main]
use curve25519_h2c::{
    edwards25519_xmd_ell2_nu, edwards25519_xmd_ell2_ro, edwards25519_xof_ell2_nu,
    edwards25519_xof_ell2_ro, expand_message_xmd, expand_message_xof,
    ristretto255_xmd_r255map_ro, ristretto255_xof_r255map_ro,
};
use libfuzzer_sys::fuzz_target;
use sha2::Sha512;
use sha3::{Shake128, Shake256};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the DST length, the rest is split into DST and message
    let dst_len = usize::from(data[0]).min(data.len() - 1);
    let (dst, msg) = data[1..].split_at(dst_len);

    // Expander errors are only possible for an empty DST
    let expected_ok = !dst.is_empty();

    for result in [
        edwards25519_xmd_ell2_ro::<Sha512>(dst, msg),
        edwards25519_xmd_ell2_nu::<Sha512>(dst, msg),
        edwards25519_xof_ell2_ro::<Shake128>(dst, msg),
        edwards25519_xof_ell2_nu::<Shake256>(dst, msg),
    ] {
        assert_eq!(result.is_ok(), expected_ok);
        if let Ok(point) = result {
            assert!(point.is_torsion_free());
        }
    }

    assert_eq!(ristretto255_xmd_r255map_ro::<Sha512>(dst, msg).is_ok(), expected_ok);
    assert_eq!(ristretto255_xof_r255map_ro::<Shake128>(dst, msg).is_ok(), expected_ok);

    let mut out = [0u8; 200];
    let out = &mut out[..usize::from(data[0]) % 200];
    let expected_ok = expected_ok && !out.is_empty();
    assert_eq!(expand_message_xmd::<Sha512>(out, dst, msg).is_ok(), expected_ok);
    assert_eq!(expand_message_xof::<Shake128>(out, dst, msg).is_ok(), expected_ok);
});
