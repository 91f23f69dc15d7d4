#![no_main]
use curve25519_h2c::{FieldElement, elligator2};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 {
        return;
    }

    let a_bytes: [u8; 32] = data[..32].try_into().unwrap();
    let b_bytes: [u8; 32] = data[32..64].try_into().unwrap();

    // The top bit is ignored and the output is canonical
    let a = FieldElement::from_bytes(&a_bytes);
    let b = FieldElement::from_bytes(&b_bytes);
    let encoded = a.to_bytes();
    assert_eq!(encoded[31] & 0x80, 0);
    assert_eq!(FieldElement::from_bytes(&encoded), a);
    let mut masked = a_bytes;
    masked[31] &= 0x7f;
    assert_eq!(FieldElement::from_bytes(&masked), a);
    assert_eq!(FieldElement::try_from(&data[..32]).unwrap(), a);

    let wide: [u8; 64] = data[..64].try_into().unwrap();
    let w = FieldElement::from_bytes_wide(&wide);
    assert_eq!(FieldElement::from_bytes(&w.to_bytes()), w);

    // Field laws
    assert_eq!(a + (-a), FieldElement::ZERO);
    assert_eq!(a.square(), a * a);
    assert_eq!(a.square2(), a.square() + a.square());
    if !bool::from(a.is_zero()) {
        assert_eq!(a * a.invert(), FieldElement::ONE);
    }

    let (r, was_square) = FieldElement::sqrt_ratio_i(&a, &b);
    assert!(!bool::from(r.is_negative()));
    if !bool::from(b.is_zero()) {
        if bool::from(was_square) {
            assert_eq!(r.square() * b, a);
        } else {
            assert_eq!(r.square() * b, FieldElement::SQRT_M1 * a);
        }
    }

    // Elligator output is always a curve point
    let (u, v) = elligator2::map_to_montgomery(&a);
    let montgomery_rhs = u.square() * u + FieldElement::MONTGOMERY_A * u.square() + u;
    assert_eq!(v.square(), montgomery_rhs);
    assert!(bool::from(elligator2::montgomery_to_edwards(&u, &v).is_on_curve()));
    let _ = elligator2::map_representative(&a_bytes);
});
