use rand::Rng;

/// Alphabet for booking references. 0/1/O/I are left out to keep codes
/// unambiguous when read over the phone or printed on a ticket.
const PNR_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const PNR_LENGTH: usize = 6;

/// Generate a booking reference from the supplied RNG.
pub fn generate_with<R: Rng>(rng: &mut R) -> String {
    (0..PNR_LENGTH)
        .map(|_| PNR_ALPHABET[rng.gen_range(0..PNR_ALPHABET.len())] as char)
        .collect()
}

/// Generate a booking reference with the thread-local RNG.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn pnr_has_expected_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let pnr = generate_with(&mut rng);
        assert_eq!(pnr.len(), PNR_LENGTH);
        assert!(pnr.bytes().all(|b| PNR_ALPHABET.contains(&b)));
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let a = generate_with(&mut StdRng::seed_from_u64(42));
        let b = generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
