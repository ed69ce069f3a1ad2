// src/kubeconfig/encoding.rs
use base64::{engine::general_purpose, Engine as _};
use serde::{de, Deserialize, Deserializer, Serializer};

/// Serde adapter for the `*-data` fields: raw bytes in memory, standard
/// padded base64 on disk.
pub mod base64_bytes {
    use super::*;

    pub fn serialize<S>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&general_purpose::STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        decode(&encoded).map_err(de::Error::custom)
    }
}

/// Decodes base64 text, ignoring embedded ASCII whitespace.
pub fn decode(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = encoded
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    general_purpose::STANDARD.decode(compact)
}

/// Treats an explicit `null` the same as a missing key.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_ignores_line_breaks() {
        assert_eq!(decode("aGVs\nbG8=\n").unwrap(), b"hello".to_vec());
        assert_eq!(decode("  aGVsbG8= ").unwrap(), b"hello".to_vec());
    }

    #[test]
    fn decode_rejects_invalid_text() {
        assert!(decode("not base64!").is_err());
    }

    #[test]
    fn decode_empty_is_empty() {
        assert!(decode("").unwrap().is_empty());
    }
}
