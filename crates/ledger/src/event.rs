//! Events emitted by successful ledger calls.
//!
//! Events carry the same fields as the `Transfer` and `Approval` events of the token
//! ABI in [`binding::token`], and convert to and from EVM log records so that
//! indexing tooling can consume ledger output and on-chain logs alike.

use alloy_primitives::{Address, Log, LogData, U256};
use alloy_sol_types::SolEvent;
use binding::token::Token;
use serde::{Deserialize, Serialize};

/// A structured record of one state change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Event {
    /// `value` base units moved from `from` to `to`
    Transfer {
        from: Address,
        to: Address,
        value: U256,
    },
    /// `owner` allowed `spender` to move up to `value` base units
    Approval {
        owner: Address,
        spender: Address,
        value: U256,
    },
}

impl Event {
    /// The event name as it appears in the contract ABI.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Transfer { .. } => "Transfer",
            Self::Approval { .. } => "Approval",
        }
    }

    /// Encode as EVM log topics and data.
    pub fn to_log_data(&self) -> LogData {
        match *self {
            Self::Transfer { from, to, value } => {
                Token::Transfer { from, to, value }.encode_log_data()
            }
            Self::Approval {
                owner,
                spender,
                value,
            } => Token::Approval {
                owner,
                spender,
                value,
            }
            .encode_log_data(),
        }
    }

    /// Encode as an EVM log emitted by the contract at `emitter`.
    pub fn to_log(&self, emitter: Address) -> Log {
        Log {
            address: emitter,
            data: self.to_log_data(),
        }
    }

    /// Decode a `Transfer` or `Approval` log.
    ///
    /// Returns `None` for logs of any other event or with malformed topics/data.
    pub fn from_log_data(data: &LogData) -> Option<Self> {
        let signature = *data.topics().first()?;

        if signature == Token::Transfer::SIGNATURE_HASH {
            let event = Token::Transfer::decode_log_data(data).ok()?;
            Some(Self::Transfer {
                from: event.from,
                to: event.to,
                value: event.value,
            })
        } else if signature == Token::Approval::SIGNATURE_HASH {
            let event = Token::Approval::decode_log_data(data).ok()?;
            Some(Self::Approval {
                owner: event.owner,
                spender: event.spender,
                value: event.value,
            })
        } else {
            None
        }
    }
}

/// Outcome of a successful mutating call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Events emitted by the call, in emission order
    pub events: Vec<Event>,
}

impl Receipt {
    /// Encode all events as logs emitted by the contract at `emitter`.
    pub fn logs(&self, emitter: Address) -> Vec<Log> {
        self.events.iter().map(|e| e.to_log(emitter)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256, B256};

    const DEPLOYER: Address = address!("0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
    const RECEIVER: Address = address!("0x70997970C51812dc3A010C7d01b50e0d17dc79C8");

    #[test]
    fn test_transfer_log_layout() {
        let event = Event::Transfer {
            from: DEPLOYER,
            to: RECEIVER,
            value: U256::from(100),
        };
        let data = event.to_log_data();

        // keccak256("Transfer(address,address,uint256)")
        assert_eq!(
            data.topics()[0],
            b256!("0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef")
        );
        assert_eq!(data.topics()[1], B256::left_padding_from(DEPLOYER.as_slice()));
        assert_eq!(data.topics()[2], B256::left_padding_from(RECEIVER.as_slice()));
        assert_eq!(data.data.as_ref(), &U256::from(100).to_be_bytes::<32>());
    }

    #[test]
    fn test_log_decodes_to_same_event() {
        let approval = Event::Approval {
            owner: DEPLOYER,
            spender: RECEIVER,
            value: U256::from(7),
        };
        let log = approval.to_log(Address::repeat_byte(0x11));

        assert_eq!(log.address, Address::repeat_byte(0x11));
        assert_eq!(Event::from_log_data(&log.data), Some(approval));
    }

    #[test]
    fn test_unknown_log_is_ignored() {
        let data = LogData::new_unchecked(vec![B256::repeat_byte(0xab)], Default::default());
        assert_eq!(Event::from_log_data(&data), None);

        let empty = LogData::new_unchecked(vec![], Default::default());
        assert_eq!(Event::from_log_data(&empty), None);
    }

    #[test]
    fn test_event_json_is_tagged() {
        let event = Event::Transfer {
            from: DEPLOYER,
            to: RECEIVER,
            value: U256::from(1),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "Transfer");
    }
}
