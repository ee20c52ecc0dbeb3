/// Version stamped on every encoded function envelope.
pub const PROTOCOL_VERSION: u32 = 1;

/// Encoding options for [`WireCodec`](crate::wire::WireCodec).
///
/// - `protocol_version` is written on encode and required on decode.
/// - `pretty` switches to indented JSON, useful when dumping plans for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct WireConfig {
    pub protocol_version: u32,
    pub pretty: bool,
}

impl Default for WireConfig {
    fn default() -> Self {
        Self { protocol_version: PROTOCOL_VERSION, pretty: false }
    }
}

impl WireConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(protocol_version: u32, pretty: bool) -> Self {
        Self { protocol_version, pretty }
    }

    /// Current protocol, indented output.
    pub fn pretty() -> Self {
        Self { pretty: true, ..Self::default() }
    }

    /// Compact output pinned to an explicit protocol version.
    pub fn version(protocol_version: u32) -> Self {
        Self { protocol_version, ..Self::default() }
    }
}
