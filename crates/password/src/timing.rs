//! Constant-time hash comparison.
//!
//! Ordinary `==` on strings or slices returns at the first differing byte, so
//! its running time tells a remote attacker how long the matching prefix of a
//! guessed hash is. Repeating the probe lets them recover a stored hash one byte
//! at a time. Every comparison of a freshly computed hash against a stored one
//! must go through [`compare_strings`] instead.
//!
//! # Guarantee
//!
//! For inputs of equal length the loop runs exactly `len` times and does the
//! same work per step whether or not, and wherever, the inputs differ. Length
//! itself is not hidden: hash lengths are fixed per algorithm and public.
//!
//! Only loop-structure constancy is claimed. Cache behaviour, branch
//! prediction on the final check and other hardware effects are outside what
//! this code can control. Unit tests can only check the structure (iteration
//! counts); actual timing needs a statistical harness.

use std::hint::black_box;

use subtle::ConstantTimeEq;

/// Compare two hashes in constant time.
///
/// Returns `false` straight away when the lengths differ. Otherwise every byte
/// pair is visited and the XOR differences are OR-ed into one accumulator;
/// the result is `true` only if the accumulator ends at zero.
///
/// Accepts anything byte-like: `&str`, `String`, `&[u8]`, `Vec<u8>`.
///
/// ```
/// use passlib_password::compare_strings;
///
/// assert!(compare_strings("abc123", "abc123"));
/// assert!(!compare_strings("abc123", "abc124"));
/// assert!(!compare_strings("abc", "abcd"));
/// assert!(compare_strings("", ""));
/// ```
pub fn compare_strings(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
    let (a, b) = (a.as_ref(), b.as_ref());
    if a.len() != b.len() {
        return false;
    }
    let diff = accumulate_difference(a, b);
    diff.ct_eq(&0u8).into()
}

// Kept out of line so the optimizer cannot fuse the loop with the zero check
// and turn it back into an early-exit compare.
#[inline(never)]
fn accumulate_difference(a: &[u8], b: &[u8]) -> u8 {
    debug_assert_eq!(a.len(), b.len());
    let mut acc = 0u8;
    for (x, y) in a.iter().zip(b) {
        // Bitwise only. `||`, `&&` or `!=` would short-circuit.
        acc = black_box(acc | (x ^ y));
        #[cfg(test)]
        probe::step();
    }
    acc
}

/// Iteration counter for the comparison loop, compiled into test builds only.
#[cfg(test)]
pub(crate) mod probe {
    use std::cell::Cell;

    thread_local! {
        static STEPS: Cell<usize> = const { Cell::new(0) };
    }

    pub(crate) fn step() {
        STEPS.with(|s| s.set(s.get() + 1));
    }

    /// Returns the steps counted on this thread and resets the counter.
    pub(crate) fn take() -> usize {
        STEPS.with(|s| s.replace(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps_for(a: &[u8], b: &[u8]) -> (bool, usize) {
        probe::take();
        let equal = compare_strings(a, b);
        (equal, probe::take())
    }

    #[test]
    fn test_equal_hashes() {
        assert!(compare_strings("abc123", "abc123"));
        assert!(compare_strings(b"$2a$10$abc".to_vec(), "$2a$10$abc"));
    }

    #[test]
    fn test_different_hashes() {
        assert!(!compare_strings("abc123", "abc124"));
        assert!(!compare_strings("hello", "world"));
    }

    #[test]
    fn test_different_lengths() {
        assert!(!compare_strings("abc", "abcd"));
        assert!(!compare_strings("abcd", "abc"));
        assert!(!compare_strings("", "a"));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(compare_strings("", ""));
        assert!(compare_strings(b"", b""));
    }

    #[test]
    fn test_binary_input() {
        let a = [0x00u8, 0xff, 0x80, 0x7f];
        let mut b = a;
        assert!(compare_strings(a, b));
        b[3] = 0xfe;
        assert!(!compare_strings(a, b));
    }

    #[test]
    fn test_length_mismatch_skips_walk() {
        let (equal, steps) = steps_for(b"abc", b"abcd");
        assert!(!equal);
        assert_eq!(steps, 0);
    }

    #[test]
    fn test_iterations_independent_of_mismatch_position() {
        let stored = b"$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";
        let len = stored.len();

        let (equal, steps) = steps_for(stored, stored);
        assert!(equal);
        assert_eq!(steps, len);

        for position in [0, 1, len / 2, len - 2, len - 1] {
            let mut guess = *stored;
            guess[position] ^= 0x01;
            let (equal, steps) = steps_for(stored, &guess);
            assert!(!equal, "mismatch at {position} reported equal");
            assert_eq!(steps, len, "mismatch at {position} changed the walk");
        }
    }

    #[test]
    fn test_fully_different_walks_whole_input() {
        let (equal, steps) = steps_for(&[0u8; 32], &[0xffu8; 32]);
        assert!(!equal);
        assert_eq!(steps, 32);
    }

    #[test]
    fn test_empty_walk() {
        let (equal, steps) = steps_for(b"", b"");
        assert!(equal);
        assert_eq!(steps, 0);
    }
}
