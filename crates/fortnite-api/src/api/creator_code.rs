//! Support-a-creator code lookup

use serde::{Deserialize, Serialize};

use super::{encode_params, require_non_empty};
use crate::client::Client;
use crate::error::Result;
use crate::flags::ResponseFlags;
use crate::transport::RequestContext;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorCodeParams {
    /// Overwritten by the `name` argument of [`Client::get_creator_code`]
    pub name: Option<String>,
    pub response_flags: Option<ResponseFlags>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatorCodeAccount {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatorCode {
    pub code: String,
    pub account: CreatorCodeAccount,
    pub status: String,
    pub verified: bool,
}

impl Client {
    /// Look up a creator code by name
    pub async fn get_creator_code(
        &self,
        ctx: &RequestContext,
        name: &str,
        params: Option<CreatorCodeParams>,
    ) -> Result<CreatorCode> {
        require_non_empty("name", name)?;

        let mut params = params.unwrap_or_default();
        params.name = Some(name.to_string());
        self.get(ctx, "/v2/creatorcode", encode_params(Some(params))?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_creator_code() {
        let json = r#"{
            "code": "ninja",
            "account": {"id": "4735ce9132924caf8a5b17789b40f79c", "name": "Ninja"},
            "status": "ACTIVE",
            "verified": false
        }"#;
        let code: CreatorCode = serde_json::from_str(json).unwrap();
        assert_eq!(code.account.name, "Ninja");
        assert_eq!(code.status, "ACTIVE");
    }
}
