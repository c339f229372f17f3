#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response};
use error_stack::ResultExt;
use ojo_wasm_std::error::ContractError;
use ojo_wasm_std::{address, FnExt, IntoContractError};

use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{self, Config};

mod execute;

pub use execute::Error as ExecuteError;

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(thiserror::Error, Debug, IntoContractError)]
pub enum Error {
    #[error("failed to handle a general message")]
    HandleMessage,
    #[error("failed to handle a general message with token")]
    HandleMessageWithToken,
    #[error("failed to update params")]
    UpdateParams,
    #[error("failed to query params")]
    QueryParams,
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(
    deps: DepsMut,
    _env: Env,
    _msg: Empty,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        governance: address::validate_cosmwasm_address(deps.api, &msg.governance_address)?,
        gateway: address::validate_cosmwasm_address(deps.api, &msg.gateway_address)?,
        oracle: address::validate_cosmwasm_address(deps.api, &msg.oracle_address)?,
    };

    state::save_config(deps.storage, &config)?;
    state::save_params(deps.storage, &msg.params)?;

    Ok(Response::new())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::HandleMessage {
            source_chain,
            source_address,
            receiver,
            payload,
            sender,
            channel,
        } => execute::handle_message(
            deps,
            info,
            execute::GmpCall {
                source_chain,
                source_address,
                receiver,
                sender,
                channel,
            },
            payload,
            None,
        )
        .change_context(Error::HandleMessage),
        ExecuteMsg::HandleMessageWithToken {
            source_chain,
            source_address,
            receiver,
            payload,
            sender,
            channel,
            token,
        } => execute::handle_message(
            deps,
            info,
            execute::GmpCall {
                source_chain,
                source_address,
                receiver,
                sender,
                channel,
            },
            payload,
            Some(token),
        )
        .change_context(Error::HandleMessageWithToken),
        ExecuteMsg::UpdateParams(params) => {
            execute::update_params(deps, info, params).change_context(Error::UpdateParams)
        }
    }?
    .then(Ok)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Params => to_json_binary(
            &state::load_params(deps.storage).change_context(Error::QueryParams)?,
        ),
    }?
    .then(Ok)
}
