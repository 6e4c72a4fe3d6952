//! Content preparation: deciding which bytes actually go into the symbol.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use log::debug;

/// How the input bytes were transcoded before encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Encoding {
    /// The input bytes, untouched.
    Raw,
    /// Standard-alphabet, padded Base64 text of the input bytes.
    Base64,
}

/// The bytes handed to the symbol generator, plus what they were made from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Payload {
    data: Vec<u8>,
    encoding: Encoding,
    original_len: usize,
}

impl Payload {
    /// Prepares `input` for encoding, optionally transcoding it to Base64.
    ///
    /// Raw input is passed through as-is with no text validation. Base64 output
    /// is `4 * ceil(n / 3)` characters long. This never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use file2qr::content::{Encoding, Payload};
    ///
    /// let payload = Payload::prepare(b"hi!", true);
    /// assert_eq!(payload.encoding(), Encoding::Base64);
    /// assert_eq!(payload.as_bytes(), b"aGkh");
    /// ```
    pub fn prepare(input: &[u8], base64: bool) -> Self {
        let (data, encoding) = if base64 {
            (STANDARD.encode(input).into_bytes(), Encoding::Base64)
        } else {
            (input.to_vec(), Encoding::Raw)
        };
        debug!(
            "prepared {:?} payload: {} input bytes -> {} payload bytes",
            encoding,
            input.len(),
            data.len()
        );
        Self {
            data,
            encoding,
            original_len: input.len(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Payload length in bytes (characters, for Base64).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Size of the input before any transcoding.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Human-readable size notes for the diagnostic stream.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut notes = vec![format!("Read {} bytes of input", self.original_len)];
        if self.encoding == Encoding::Base64 {
            notes.push(format!(
                "Data encoded as Base64 (length: {} characters)",
                self.data.len()
            ));
        }
        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_raw_passes_bytes_through() {
        let input = [0xff, 0x00, b'a', 0xc3];
        let payload = Payload::prepare(&input, false);
        assert_eq!(payload.as_bytes(), &input);
        assert_eq!(payload.encoding(), Encoding::Raw);
        assert_eq!(payload.original_len(), 4);
        assert_eq!(payload.diagnostics(), vec!["Read 4 bytes of input"]);
    }

    #[test]
    fn test_base64_length_and_padding() {
        assert_eq!(Payload::prepare(b"", true).as_bytes(), b"");
        assert_eq!(Payload::prepare(b"f", true).as_bytes(), b"Zg==");
        assert_eq!(Payload::prepare(b"fo", true).as_bytes(), b"Zm8=");
        assert_eq!(Payload::prepare(b"foo", true).as_bytes(), b"Zm9v");

        let payload = Payload::prepare(&[7u8; 3000], true);
        assert_eq!(payload.len(), 4000);
        assert_eq!(payload.original_len(), 3000);
        assert_eq!(
            payload.diagnostics(),
            vec![
                "Read 3000 bytes of input".to_string(),
                "Data encoded as Base64 (length: 4000 characters)".to_string(),
            ]
        );
    }

    proptest! {
        #[test]
        fn base64_payload_decodes_to_input(input in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let payload = Payload::prepare(&input, true);
            prop_assert_eq!(payload.len(), input.len().div_ceil(3) * 4);
            let decoded = STANDARD.decode(payload.as_bytes()).unwrap();
            prop_assert_eq!(decoded, input);
        }
    }
}
