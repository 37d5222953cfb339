use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 of the generated text, lowercase hex
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Fingerprint(String);

impl Fingerprint {
    pub(crate) fn of(text: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Wrap a digest read back from storage. Blank lines yield `None`.
    pub(crate) fn from_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_ascii_lowercase()))
        }
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest() {
        assert_eq!(
            Fingerprint::of("abc").as_str(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn deterministic_and_fixed_length() {
        let a = Fingerprint::of("Amen.");
        let b = Fingerprint::of("Amen.");
        assert_eq!(a, b);
        assert_eq!(a.as_str().len(), 64);
    }

    #[test]
    fn distinct_texts_differ() {
        assert_ne!(Fingerprint::of("Amen."), Fingerprint::of("Amen"));
        assert_ne!(Fingerprint::of("a\nb"), Fingerprint::of("a b"));
    }

    #[test]
    fn from_line_trims_and_skips_blank() {
        let fp = Fingerprint::of("x");
        let line = format!("  {}\r\n", fp.as_str().to_uppercase());
        assert_eq!(Fingerprint::from_line(&line), Some(fp));
        assert_eq!(Fingerprint::from_line("   "), None);
    }
}
