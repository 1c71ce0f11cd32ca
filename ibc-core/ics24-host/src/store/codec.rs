use core::any::type_name;
use core::fmt::Display;
use core::marker::PhantomData;

use ibc_core_host_types::error::CodecError;

/// A trait that defines how types are decoded/encoded.
pub trait Codec {
    type Type;

    fn encode(d: &Self::Type) -> Result<Vec<u8>, CodecError>;

    fn decode(bytes: &[u8]) -> Result<Self::Type, CodecError>;
}

/// A Protobuf codec that uses `prost` to encode/decode
#[derive(Clone, Debug)]
pub struct ProtobufCodec<T, R> {
    domain_type: PhantomData<T>,
    raw_type: PhantomData<R>,
}

impl<T, R> Codec for ProtobufCodec<T, R>
where
    T: Into<R> + Clone,
    R: TryInto<T> + Default + prost::Message,
    <R as TryInto<T>>::Error: Display,
{
    type Type = T;

    fn encode(d: &Self::Type) -> Result<Vec<u8>, CodecError> {
        let r: R = d.clone().into();
        Ok(r.encode_to_vec())
    }

    fn decode(bytes: &[u8]) -> Result<Self::Type, CodecError> {
        let r = R::decode(bytes).map_err(|e| CodecError::Decode {
            type_name: type_name::<T>(),
            description: e.to_string(),
        })?;
        r.try_into().map_err(|e| CodecError::Decode {
            type_name: type_name::<T>(),
            description: e.to_string(),
        })
    }
}

/// A JSON codec that uses `serde_json` to encode/decode as a JSON string
#[cfg(feature = "serde")]
#[derive(Clone, Debug)]
pub struct JsonCodec<T>(PhantomData<T>);

#[cfg(feature = "serde")]
impl<T> Codec for JsonCodec<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned,
{
    type Type = T;

    fn encode(d: &Self::Type) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(d).map_err(|e| CodecError::Encode {
            type_name: type_name::<T>(),
            description: e.to_string(),
        })
    }

    fn decode(bytes: &[u8]) -> Result<Self::Type, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode {
            type_name: type_name::<T>(),
            description: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use ibc_core_client_types::proto::Committer as RawCommitter;
    use ibc_core_client_types::{Committer, Height, ValidatorSetCommitment};

    use super::*;

    type CommitterCodec = ProtobufCodec<Committer, RawCommitter>;

    #[test]
    fn protobuf_codec_rejects_invalid_domain_value() {
        let raw = RawCommitter {
            height: 0,
            validator_set_commitment: vec![1],
        };
        let bytes = prost::Message::encode_to_vec(&raw);

        assert!(matches!(
            CommitterCodec::decode(&bytes),
            Err(CodecError::Decode { .. })
        ));
    }

    #[test]
    fn protobuf_codec_rejects_garbage() {
        assert!(CommitterCodec::decode(&[0xff, 0xff, 0xff]).is_err());

        let committer = Committer::new(Height::min(), ValidatorSetCommitment::from_bytes(b"v"));
        let bytes = CommitterCodec::encode(&committer).expect("encodes");
        assert_eq!(CommitterCodec::decode(&bytes).expect("decodes"), committer);
    }
}
