//! AES keys for the current build's pak files

use serde::{Deserialize, Serialize};

use super::encode_params;
use crate::client::Client;
use crate::error::Result;
use crate::flags::ResponseFlags;
use crate::transport::RequestContext;

/// Encoding of returned keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyFormat {
    #[default]
    Hex,
    Base64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AesKeyParams {
    /// Service default is hex
    pub key_format: Option<KeyFormat>,
    pub response_flags: Option<ResponseFlags>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AesDynamicKey {
    pub pak_filename: String,
    pub pak_guid: String,
    pub key: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AesKey {
    pub build: String,
    pub main_key: String,
    pub dynamic_keys: Vec<AesDynamicKey>,
    pub updated: String,
}

impl Client {
    /// Get the main and dynamic AES keys of the current build
    pub async fn get_aes_key(
        &self,
        ctx: &RequestContext,
        params: Option<AesKeyParams>,
    ) -> Result<AesKey> {
        self.get(ctx, "/v2/aes", encode_params(params)?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format_param() {
        let params = AesKeyParams {
            key_format: Some(KeyFormat::Base64),
            ..Default::default()
        };
        let query = encode_params(Some(params)).unwrap();
        assert_eq!(query.get("keyFormat"), Some("base64"));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_decode_aes_key() {
        let json = r#"{
            "build": "++Fortnite+Release-30.00-CL-1",
            "mainKey": "0xABCDEF",
            "dynamicKeys": [
                {"pakFilename": "pakchunk1001-WindowsClient.pak", "pakGuid": "1234", "key": "0x01"}
            ],
            "updated": "2024-06-01T00:00:00Z"
        }"#;
        let key: AesKey = serde_json::from_str(json).unwrap();

        assert_eq!(key.main_key, "0xABCDEF");
        assert_eq!(key.dynamic_keys.len(), 1);
        assert_eq!(key.dynamic_keys[0].pak_guid, "1234");
    }
}
