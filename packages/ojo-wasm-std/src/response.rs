use cosmwasm_std::{from_json, CosmosMsg, Response, WasmMsg};
use error_stack::{bail, Result, ResultExt};
use serde::de::DeserializeOwned;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("response must contain exactly one message")]
    InvalidMessageCount,
    #[error("message is not a wasm execute message")]
    InvalidMessageType,
    #[error("failed to deserialize message payload")]
    DeserializationFailed,
}

/// Extracts the json payload of the single wasm execute message contained in a response.
/// Intended for tests that need to look at what a contract is about to dispatch.
pub fn inspect_response_msg<T>(response: Response) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    let mut msgs = response.messages.into_iter();

    match (msgs.next(), msgs.next()) {
        (Some(sub_msg), None) => match sub_msg.msg {
            CosmosMsg::Wasm(WasmMsg::Execute { msg, .. }) => {
                from_json(&msg).change_context(Error::DeserializationFailed)
            }
            _ => bail!(Error::InvalidMessageType),
        },
        _ => bail!(Error::InvalidMessageCount),
    }
}
