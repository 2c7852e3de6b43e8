//! Magic-byte signatures for the formats polymedia cares about.

/// Matches any byte.
const __: u16 = 0x100;

struct Signature {
    offset: usize,
    magic: &'static [u16],
    mime: &'static str,
}

impl Signature {
    fn matches(&self, bytes: &[u8]) -> bool {
        let Some(window) = bytes.get(self.offset..self.offset + self.magic.len()) else {
            return false;
        };
        window
            .iter()
            .zip(self.magic)
            .all(|(&byte, &expected)| expected == __ || u16::from(byte) == expected)
    }
}

// More specific signatures come before the ones they would otherwise shadow.
#[rustfmt::skip]
const SIGNATURES: &[Signature] = &[
    Signature { offset: 0, magic: &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], mime: "image/png" },
    Signature { offset: 0, magic: &[0xFF, 0xD8, 0xFF], mime: "image/jpeg" },
    Signature { offset: 0, magic: &[0x47, 0x49, 0x46, 0x38, __, 0x61], mime: "image/gif" },
    Signature { offset: 0, magic: &[0x52, 0x49, 0x46, 0x46, __, __, __, __, 0x57, 0x45, 0x42, 0x50], mime: "image/webp" },
    Signature { offset: 0, magic: &[0x42, 0x4D], mime: "image/bmp" },
    Signature { offset: 0, magic: &[0x52, 0x49, 0x46, 0x46, __, __, __, __, 0x57, 0x41, 0x56, 0x45], mime: "audio/wav" },
    Signature { offset: 0, magic: &[0x52, 0x49, 0x46, 0x46, __, __, __, __, 0x41, 0x56, 0x49, 0x20], mime: "video/x-msvideo" },
    Signature { offset: 0, magic: &[0x49, 0x44, 0x33], mime: "audio/mpeg" },
    Signature { offset: 0, magic: &[0xFF, 0xFB], mime: "audio/mpeg" },
    Signature { offset: 0, magic: &[0x66, 0x4C, 0x61, 0x43], mime: "audio/flac" },
    Signature { offset: 0, magic: &[0x4F, 0x67, 0x67, 0x53], mime: "audio/ogg" },
    Signature { offset: 4, magic: &[0x66, 0x74, 0x79, 0x70, 0x4D, 0x34, 0x41, 0x20], mime: "audio/mp4" },
    Signature { offset: 4, magic: &[0x66, 0x74, 0x79, 0x70, 0x71, 0x74, 0x20, 0x20], mime: "video/quicktime" },
    Signature { offset: 4, magic: &[0x66, 0x74, 0x79, 0x70], mime: "video/mp4" },
    Signature { offset: 0, magic: &[0x1A, 0x45, 0xDF, 0xA3], mime: "video/webm" },
    Signature { offset: 0, magic: &[0x25, 0x50, 0x44, 0x46, 0x2D], mime: "application/pdf" },
];

/// MIME type of the first signature `bytes` starts with.
pub(crate) fn sniff(bytes: &[u8]) -> Option<&'static str> {
    SIGNATURES
        .iter()
        .find(|signature| signature.matches(bytes))
        .map(|signature| signature.mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_header() {
        let png = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00];
        assert_eq!(sniff(&png), Some("image/png"));
    }

    #[test]
    fn riff_containers_are_told_apart() {
        assert_eq!(sniff(b"RIFF\x24\x00\x00\x00WAVEfmt "), Some("audio/wav"));
        assert_eq!(sniff(b"RIFF\x24\x00\x00\x00WEBPVP8 "), Some("image/webp"));
        assert_eq!(sniff(b"RIFF\x24\x00\x00\x00AVI LIST"), Some("video/x-msvideo"));
    }

    #[test]
    fn ftyp_brands() {
        assert_eq!(sniff(b"\x00\x00\x00\x20ftypM4A \x00"), Some("audio/mp4"));
        assert_eq!(sniff(b"\x00\x00\x00\x20ftypisom\x00"), Some("video/mp4"));
    }

    #[test]
    fn short_or_unknown_input() {
        assert_eq!(sniff(&[]), None);
        assert_eq!(sniff(&[0x89, 0x50]), None);
        assert_eq!(sniff(b"plain text"), None);
    }
}
