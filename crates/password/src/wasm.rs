//! WASM bindings for hash detection and comparison.

use wasm_bindgen::prelude::*;

/// Constant-time comparison of two hash strings.
///
/// # Returns
/// true if both hashes are byte-for-byte identical, false otherwise
#[wasm_bindgen]
pub fn compare_hashes(a: &str, b: &str) -> bool {
    crate::compare_strings(a, b)
}

/// Check whether a stored hash carries the given algorithm prefix.
///
/// An empty prefix never matches.
#[wasm_bindgen]
pub fn detect_prefix(prefix: &str, hash: &str) -> bool {
    crate::has_prefix(hash, prefix)
}

/// Check a stored hash against a descriptor given as TOML.
///
/// Invalid descriptors and descriptors without a prefix detect nothing.
#[wasm_bindgen]
pub fn detect_with_descriptor(descriptor_toml: &str, hash: &str) -> bool {
    crate::AlgorithmDescriptor::from_toml_str(descriptor_toml)
        .map(|d| d.detect(hash))
        .unwrap_or(false)
}
