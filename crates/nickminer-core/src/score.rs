//! Bit-level address pattern scoring.

/// Score an address against a desired suffix and prefix.
///
/// Suffix bytes are compared from the last byte backwards, each XOR walked
/// from bit 0 upwards; prefix bytes from the first byte forwards, each XOR
/// walked from bit 7 downwards. Every matching bit before the first
/// mismatch scores one point and the first mismatch ends that pattern.
///
/// The prefix only counts once every suffix bit matched, so a full suffix
/// always outranks any partial one.
pub fn score(address: &[u8; 20], suffix: &[u8], prefix: &[u8]) -> u32 {
    let mut score = 0u32;

    for (addr_byte, want) in address.iter().rev().zip(suffix.iter().rev()) {
        let diff = addr_byte ^ want;
        let matched = diff.trailing_zeros();
        score += matched;
        if diff != 0 {
            break;
        }
    }

    if score != 8 * suffix.len() as u32 {
        return score;
    }

    for (addr_byte, want) in address.iter().zip(prefix.iter()) {
        let diff = addr_byte ^ want;
        score += diff.leading_zeros();
        if diff != 0 {
            break;
        }
    }

    score
}

/// Highest score reachable for the given pattern lengths.
#[inline]
pub fn max_score(suffix_len: usize, prefix_len: usize) -> u32 {
    8 * (suffix_len + prefix_len) as u32
}
