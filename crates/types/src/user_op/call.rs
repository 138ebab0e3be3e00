use crate::bindings::ISimple7702Account;
use alloy::{
    primitives::{Address, Bytes, U256},
    sol_types::SolCall,
};
use serde::{Deserialize, Serialize};

/// A single call executed by the smart account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Call {
    /// Call target.
    pub to: Address,
    /// Native value sent with the call.
    pub value: U256,
    /// Calldata.
    pub data: Bytes,
}

impl Call {
    /// Create a new call.
    pub const fn new(to: Address, value: U256, data: Bytes) -> Self {
        Self { to, value, data }
    }

    /// Create a call to a contract method, sending no value.
    pub fn contract<C: SolCall>(to: Address, call: &C) -> Self {
        Self { to, value: U256::ZERO, data: call.abi_encode().into() }
    }
}

impl From<Call> for ISimple7702Account::Call {
    fn from(call: Call) -> Self {
        Self { target: call.to, value: call.value, data: call.data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::IERC20Permit;

    #[test]
    fn contract_call_encodes_selector() {
        let recipient = Address::repeat_byte(0x33);
        let call = Call::contract(
            Address::repeat_byte(0x89),
            &IERC20Permit::transferCall { to: recipient, amount: U256::from(10_000) },
        );
        assert_eq!(call.value, U256::ZERO);
        assert_eq!(&call.data[..4], &IERC20Permit::transferCall::SELECTOR);
        assert_eq!(call.data.len(), 4 + 64);
    }
}
