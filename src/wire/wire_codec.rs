use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::wire::{TFunction, WireConfig, WireError};

/// Owned envelope, the shape produced by [`WireCodec::decode`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TFunctionEnvelope {
    pub version: u32,
    pub function: TFunction,
}

// Same field layout as `TFunctionEnvelope`, borrowing so encode needs no clone.
#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    function: &'a TFunction,
}

/// Encodes projected functions into versioned envelopes and back.
///
/// Output is deterministic: every wire struct serializes its fields in
/// declaration order and none of them holds a hash map.
#[derive(Debug, Clone, Default)]
pub struct WireCodec {
    config: WireConfig,
}

impl WireCodec {
    pub fn new(config: WireConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WireConfig {
        &self.config
    }

    pub fn encode(&self, function: &TFunction) -> Result<Vec<u8>, WireError> {
        let envelope = EnvelopeRef { version: self.config.protocol_version, function };
        let bytes = if self.config.pretty {
            serde_json::to_vec_pretty(&envelope)
        } else {
            serde_json::to_vec(&envelope)
        }
        .map_err(WireError::Encode)?;

        trace!(
            function = %function.name.function_name,
            version = self.config.protocol_version,
            bytes = bytes.len(),
            "encoded function envelope"
        );
        Ok(bytes)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<TFunction, WireError> {
        let envelope: TFunctionEnvelope = serde_json::from_slice(bytes).map_err(WireError::Decode)?;
        if envelope.version != self.config.protocol_version {
            debug!(
                expected = self.config.protocol_version,
                found = envelope.version,
                "rejecting function envelope"
            );
            return Err(WireError::UnsupportedVersion {
                expected: self.config.protocol_version,
                found: envelope.version,
            });
        }
        Ok(envelope.function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{
        TAggregateFunction, TFunctionBinaryType, TFunctionName, TPrimitiveType, TScalarType, TTypeDesc,
    };

    fn bigint() -> TTypeDesc { TTypeDesc::scalar(TScalarType::of(TPrimitiveType::Bigint)) }

    fn count_fn() -> TFunction {
        TFunction {
            name: TFunctionName { db_name: None, function_name: "COUNT".into() },
            binary_type: TFunctionBinaryType::Builtin,
            arg_types: vec![],
            ret_type: bigint(),
            has_var_args: false,
            id: Some(1),
            aggregate_fn: Some(TAggregateFunction { intermediate_type: bigint() }),
        }
    }

    #[test]
    fn encode_then_decode_keeps_function() {
        let codec = WireCodec::default();
        let bytes = codec.encode(&count_fn()).unwrap();
        assert_eq!(codec.decode(&bytes).unwrap(), count_fn());
    }

    #[test]
    fn encoding_is_stable_across_calls() {
        let codec = WireCodec::default();
        let f = count_fn();
        assert_eq!(codec.encode(&f).unwrap(), codec.encode(&f).unwrap());
    }

    #[test]
    fn compact_layout_is_exact() {
        let bytes = WireCodec::default().encode(&count_fn()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            concat!(
                r#"{"version":1,"function":{"name":{"function_name":"COUNT"},"binary_type":"BUILTIN","#,
                r#""arg_types":[],"ret_type":{"types":[{"type":"SCALAR","scalar_type":{"type":"BIGINT"}}]},"#,
                r#""has_var_args":false,"id":1,"aggregate_fn":{"intermediate_type":"#,
                r#"{"types":[{"type":"SCALAR","scalar_type":{"type":"BIGINT"}}]}}}}"#,
            )
        );
    }

    #[test]
    fn pretty_output_decodes_with_compact_codec() {
        let bytes = WireCodec::new(WireConfig::pretty()).encode(&count_fn()).unwrap();
        assert!(bytes.contains(&b'\n'));
        assert_eq!(WireCodec::default().decode(&bytes).unwrap(), count_fn());
    }

    #[test]
    fn foreign_version_is_rejected() {
        let bytes = WireCodec::new(WireConfig::version(7)).encode(&count_fn()).unwrap();
        let err = WireCodec::default().decode(&bytes).unwrap_err();
        assert!(matches!(err, WireError::UnsupportedVersion { expected: 1, found: 7 }));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = WireCodec::default().decode(b"not json").unwrap_err();
        assert!(matches!(err, WireError::Decode(_)));
        assert!(err.to_string().starts_with("failed to decode function"));
    }
}
