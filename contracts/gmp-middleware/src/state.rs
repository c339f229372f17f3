use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdError, Storage};
use cw_storage_plus::Item;
use ojo_wasm_std::IntoContractError;

use crate::msg::Params;

#[cw_serde]
pub(crate) struct Config {
    pub governance: Addr,
    pub gateway: Addr,
    pub oracle: Addr,
}

const CONFIG_NAME: &str = "config";
const CONFIG: Item<Config> = Item::new(CONFIG_NAME);
const PARAMS_NAME: &str = "params";
const PARAMS: Item<Params> = Item::new(PARAMS_NAME);

#[derive(thiserror::Error, Debug, IntoContractError)]
pub enum Error {
    #[error(transparent)]
    Std(#[from] StdError),
    #[error("middleware got into an invalid state, its config is missing")]
    MissingConfig,
    #[error("middleware got into an invalid state, its params are missing")]
    MissingParams,
}

pub(crate) fn save_config(storage: &mut dyn Storage, value: &Config) -> Result<(), Error> {
    CONFIG.save(storage, value).map_err(Error::from)
}

pub(crate) fn load_config(storage: &dyn Storage) -> Result<Config, Error> {
    CONFIG
        .may_load(storage)
        .map_err(Error::from)?
        .ok_or(Error::MissingConfig)
}

pub(crate) fn save_params(storage: &mut dyn Storage, value: &Params) -> Result<(), Error> {
    PARAMS.save(storage, value).map_err(Error::from)
}

pub(crate) fn load_params(storage: &dyn Storage) -> Result<Params, Error> {
    PARAMS
        .may_load(storage)
        .map_err(Error::from)?
        .ok_or(Error::MissingParams)
}
