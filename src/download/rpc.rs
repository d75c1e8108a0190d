//! aria2 JSON-RPC message types.

use serde::Serialize;

/// JSON-RPC protocol version.
pub const JSONRPC_VERSION: &str = "2.0";

/// Method that enqueues a URI download.
pub const ADD_URI_METHOD: &str = "aria2.addUri";

/// `aria2.addUri` request.
///
/// `params` serializes as `["token:<secret>", [<uri>], {options}]`.
#[derive(Debug, Serialize)]
pub struct AddUriRequest {
    pub jsonrpc: &'static str,
    pub method: &'static str,
    pub id: String,
    pub params: (String, Vec<String>, AddUriOptions),
}

/// Per-download options. aria2 expects every value as a string.
#[derive(Debug, Serialize)]
pub struct AddUriOptions {
    pub dir: String,
    pub out: String,
    #[serde(rename = "allow-overwrite")]
    pub allow_overwrite: String,
}

impl AddUriRequest {
    pub fn new(
        id: String,
        secret: &str,
        uri: String,
        dir: String,
        out: String,
        allow_overwrite: bool,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method: ADD_URI_METHOD,
            id,
            params: (
                format!("token:{}", secret),
                vec![uri],
                AddUriOptions {
                    dir,
                    out,
                    allow_overwrite: allow_overwrite.to_string(),
                },
            ),
        }
    }
}
