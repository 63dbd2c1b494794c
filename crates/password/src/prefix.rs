//! Prefix matching for algorithm detection.

/// Returns true if `hash` starts with exactly the bytes of `prefix`.
///
/// This is a plain early-exit match. The prefix is a public algorithm tag, so
/// there is nothing to hide here. An empty prefix never matches: an algorithm
/// without a tag cannot claim every hash.
#[inline]
pub fn has_prefix(hash: impl AsRef<[u8]>, prefix: impl AsRef<[u8]>) -> bool {
    let prefix = prefix.as_ref();
    !prefix.is_empty() && hash.as_ref().starts_with(prefix)
}

/// Normalizes a declared prefix: empty counts as not declared.
#[inline]
pub(crate) fn declared(prefix: Option<&str>) -> Option<&str> {
    prefix.filter(|p| !p.is_empty())
}
