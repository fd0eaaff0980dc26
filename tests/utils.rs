use num_bigint::BigUint;
use num_traits::identities::Zero;
use qword_limbs::qword::QWord16;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn gen_seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Recomposes a QWord16 into a BigUint limb by limb, independently of
/// `to_u64`, so a conversion bug cannot cancel out in the oracle checks.
#[allow(dead_code)]
pub fn qword16_to_biguint(v: &QWord16) -> BigUint {
    let limbs = [v.d, v.c, v.b, v.a];
    let mut res = BigUint::from(0u32);

    for (i, limb) in limbs.iter().enumerate() {
        let shift = (i as u32) * 16;
        res += BigUint::from(2u32).pow(shift) * BigUint::from(*limb);
    }

    res
}

/// Converts a num_bigint::BigUint (< 2^64) into a QWord16.
#[allow(dead_code)]
pub fn biguint_to_qword16(val: &BigUint) -> QWord16 {
    let mut limbs = [0u16; 4];
    let mask = BigUint::from(0xffffu32);

    for (i, limb) in limbs.iter_mut().enumerate() {
        let shift = (i as u32) * 16;
        let w = (val.clone() >> shift) & mask.clone();

        if !w.is_zero() {
            *limb = w.to_u32_digits()[0] as u16;
        }
    }

    QWord16::new(limbs[3], limbs[2], limbs[1], limbs[0])
}

#[allow(dead_code)]
pub fn qword16_to_hex(v: &QWord16) -> String {
    let mut res = String::new();
    for limb in [v.d, v.c, v.b, v.a].iter() {
        let h = hex::encode(limb.to_be_bytes());
        res = format!("{}{}", h, res);
    }
    res
}
