use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Coin, HexBinary};
use ojo_wasm_std::nonempty;

#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to replace the trusted-source params.
    pub governance_address: String,
    /// Gateway contract that delivers incoming general messages.
    pub gateway_address: String,
    /// Oracle contract that executes relayed price commands.
    pub oracle_address: String,
    pub params: Params,
}

/// Trusted-source configuration for incoming general messages. Only messages
/// submitted by one of `gmp_addresses` through `gmp_channel` are accepted.
#[cw_serde]
pub struct Params {
    pub gmp_addresses: Vec<nonempty::String>,
    pub gmp_channel: nonempty::String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Handle a general message delivered by the gateway. The payload is
    /// decoded, turned into a relay command and dispatched to the oracle.
    HandleMessage {
        source_chain: String,
        source_address: String,
        receiver: String,
        payload: HexBinary,
        sender: String,
        channel: String,
    },
    /// Same pipeline as `HandleMessage`, with funds attached to the command.
    HandleMessageWithToken {
        source_chain: String,
        source_address: String,
        receiver: String,
        payload: HexBinary,
        sender: String,
        channel: String,
        token: Coin,
    },
    /// Replace the trusted-source params. Only governance may call this.
    UpdateParams(Params),
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Params)]
    Params,
}
