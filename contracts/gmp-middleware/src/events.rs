use cosmwasm_std::{Coin, Event, HexBinary};

use crate::msg::Params;

pub enum GmpMiddlewareEvent {
    /// Record of an incoming general message, emitted before any command
    /// reaches the oracle.
    MessageReceived {
        source_chain: String,
        source_address: String,
        receiver: String,
        payload: HexBinary,
        token: Option<Coin>,
    },
    ParamsUpdated {
        params: Params,
    },
}

impl From<GmpMiddlewareEvent> for Event {
    fn from(other: GmpMiddlewareEvent) -> Self {
        match other {
            GmpMiddlewareEvent::MessageReceived {
                source_chain,
                source_address,
                receiver,
                payload,
                token,
            } => {
                let event = Event::new("message_received")
                    .add_attribute("source_chain", source_chain)
                    .add_attribute("source_address", source_address)
                    .add_attribute("receiver", receiver)
                    .add_attribute("payload", payload.to_string());

                match token {
                    Some(token) => event.add_attribute("token", token.to_string()),
                    None => event,
                }
            }
            GmpMiddlewareEvent::ParamsUpdated { params } => Event::new("params_updated")
                .add_attribute(
                    "gmp_addresses",
                    params
                        .gmp_addresses
                        .iter()
                        .map(|address| address.to_string())
                        .collect::<Vec<_>>()
                        .join(","),
                )
                .add_attribute("gmp_channel", params.gmp_channel.to_string()),
        }
    }
}
