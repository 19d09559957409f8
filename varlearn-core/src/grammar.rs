//! Integer encoding of parameter-value sequences.
//!
//! A grammar is an integer whose binary representation fixes all P
//! parameters at once. Parameter i (0-based, declaration order) occupies
//! bit P−1−i, so parameter 0 is the most significant bit of the P-bit
//! field. The sampler and every update strategy share this mapping.

/// A complete parameter assignment, encoded as a bit-pattern.
pub type GrammarId = u64;

/// Opaque sentence identifier drawn from a language.
pub type SentenceId = u64;

/// Largest supported parameter count (bit width of [`GrammarId`]).
pub const MAX_PARAMS: usize = 64;

/// Encode a parameter-value sequence as a big-endian bitstring,
/// parameter 0 most significant.
pub fn encode(bits: &[bool]) -> GrammarId {
    debug_assert!(bits.len() <= MAX_PARAMS);
    bits.iter().fold(0, |g, &b| (g << 1) | GrammarId::from(b))
}

/// Extract parameter `index`'s value from `grammar`.
pub fn bit(grammar: GrammarId, index: usize, num_params: usize) -> bool {
    debug_assert!(index < num_params && num_params <= MAX_PARAMS);
    (grammar >> (num_params - 1 - index)) & 1 == 1
}

/// Flip all P bits of `grammar`.
pub fn complement(grammar: GrammarId, num_params: usize) -> GrammarId {
    grammar ^ all_ones(num_params)
}

/// The grammar with every parameter set to 1.
pub fn all_ones(num_params: usize) -> GrammarId {
    debug_assert!(num_params >= 1 && num_params <= MAX_PARAMS);
    if num_params == MAX_PARAMS {
        GrammarId::MAX
    } else {
        (1 << num_params) - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_zero_is_most_significant() {
        assert_eq!(encode(&[true, false, false]), 0b100);
        assert_eq!(encode(&[false, false, true]), 0b001);
        assert_eq!(encode(&[true, false, true]), 0b101);
    }

    #[test]
    fn encode_then_bit_round_trips() {
        let values = [true, false, true, true, false];
        let grammar = encode(&values);
        for (i, &v) in values.iter().enumerate() {
            assert_eq!(bit(grammar, i, values.len()), v, "parameter {i}");
        }
    }

    #[test]
    fn empty_and_all_zero_encodings() {
        assert_eq!(encode(&[]), 0);
        assert_eq!(encode(&[false; 13]), 0);
    }

    #[test]
    fn complement_flips_every_parameter() {
        assert_eq!(complement(0b011, 3), 0b100);
        assert_eq!(complement(0, 13), all_ones(13));
        assert_eq!(complement(all_ones(13), 13), 0);
    }

    #[test]
    fn all_ones_at_full_width() {
        assert_eq!(all_ones(64), GrammarId::MAX);
        assert_eq!(all_ones(13), 8191);
        assert_eq!(all_ones(1), 1);
    }
}
