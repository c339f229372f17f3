use cosmwasm_schema::cw_serde;

use crate::primitives::RelayCommand;

#[cw_serde]
pub enum ExecuteMsg {
    /// Feed a validated price-relay command into the oracle. The oracle owns
    /// everything from here on: price lookup, packaging and the return trip
    /// to the destination chain.
    RelayPrice(RelayCommand),
}
