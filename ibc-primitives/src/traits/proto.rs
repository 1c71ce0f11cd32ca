use core::fmt::Display;

use displaydoc::Display as DisplayDoc;

/// Errors raised while turning protobuf bytes back into domain types.
#[derive(Debug, DisplayDoc)]
pub enum ProtoError {
    /// failed to decode protobuf bytes: `{0}`
    Decode(prost::DecodeError),
    /// failed to convert raw message into domain type: `{description}`
    TryFromProtobuf { description: String },
}

#[cfg(feature = "std")]
impl std::error::Error for ProtoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::Decode(e) => Some(e),
            Self::TryFromProtobuf { .. } => None,
        }
    }
}

/// Binds a domain type to its raw protobuf representation `Raw`.
///
/// Encoding is infallible because every domain value has a raw form; decoding
/// goes through the domain type's `TryFrom<Raw>` validation.
pub trait Protobuf<Raw>
where
    Self: Sized + Clone + TryFrom<Raw>,
    <Self as TryFrom<Raw>>::Error: Display,
    Raw: From<Self> + prost::Message + Default,
{
    fn encode_vec(self) -> Vec<u8> {
        Raw::from(self).encode_to_vec()
    }

    fn decode_vec(bytes: &[u8]) -> Result<Self, ProtoError> {
        let raw = Raw::decode(bytes).map_err(ProtoError::Decode)?;

        Self::try_from(raw).map_err(|e| ProtoError::TryFromProtobuf {
            description: e.to_string(),
        })
    }
}

/// Convenient trait for converting types to a raw Protobuf `Vec<u8>`.
pub trait ToVec {
    fn to_vec(&self) -> Vec<u8>;
}

impl<T: prost::Message> ToVec for T {
    fn to_vec(&self) -> Vec<u8> {
        self.encode_to_vec()
    }
}
