#![allow(clippy::too_many_arguments)]
#![allow(missing_docs)]

mod token {
    alloy::sol!(
        /// ERC-20 token exposing the EIP-2612 permit surface.
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface IERC20Permit {
            function name() external view returns (string);
            function version() external view returns (string);
            function nonces(address owner) external view returns (uint256);
            function balanceOf(address account) external view returns (uint256);
            function transfer(address to, uint256 amount) external returns (bool);
            function approve(address spender, uint256 amount) external returns (bool);
        }
    );
}
pub use token::IERC20Permit;

mod erc1271 {
    alloy::sol!(
        /// Contract signature validation.
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface IERC1271 {
            function isValidSignature(bytes32 hash, bytes signature)
                external
                view
                returns (bytes4 magicValue);
        }
    );
}
pub use erc1271::IERC1271;

mod erc6492 {
    alloy::sol!(
        /// ERC-6492 universal signature validator. Deploys counterfactual
        /// signers through their factory before checking ERC-1271.
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface IValidator6492 {
            function isValidSig(address signer, bytes32 hash, bytes calldata signature)
                external
                returns (bool);

            error ERC1271Revert(bytes error);
            error ERC6492DeployFailed(bytes error);
        }
    );
}
pub use erc6492::IValidator6492;

/// `bytes4(keccak256("isValidSignature(bytes32,bytes)"))`, returned by
/// [`IERC1271::isValidSignature`] for a valid signature.
pub const ERC1271_MAGIC_VALUE: alloy::primitives::FixedBytes<4> =
    alloy::primitives::fixed_bytes!("0x1626ba7e");

mod entry_point {
    alloy::sol!(
        /// The subset of the ERC-4337 EntryPoint used to sequence operations.
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface IEntryPoint {
            function getNonce(address sender, uint192 key) external view returns (uint256 nonce);
        }
    );
}
pub use entry_point::IEntryPoint;

mod account {
    alloy::sol!(
        /// The `Simple7702Account` execution surface.
        #[derive(Debug, PartialEq, Eq)]
        interface ISimple7702Account {
            struct Call {
                address target;
                uint256 value;
                bytes data;
            }

            function execute(address target, uint256 value, bytes calldata data) external;
            function executeBatch(Call[] calldata calls) external;
        }
    );
}
pub use account::ISimple7702Account;

mod swap {
    alloy::sol!(
        /// Router swapping through a hooked pool.
        #[derive(Debug, PartialEq, Eq)]
        interface ISwapRouter {
            struct PoolKey {
                address currency0;
                address currency1;
                uint24 fee;
                int24 tickSpacing;
                address hooks;
            }

            function swapExactTokensForTokens(
                uint256 amountIn,
                uint256 amountOutMin,
                bool zeroForOne,
                PoolKey poolKey,
                bytes hookData,
                address receiver,
                uint256 deadline
            ) external returns (uint256 amountOut);
        }
    );
}
pub use swap::ISwapRouter;

mod typed {
    alloy::sol!(
        /// EIP-2612 permit message.
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        struct Permit {
            address owner;
            address spender;
            uint256 value;
            uint256 nonce;
            uint256 deadline;
        }

        /// ERC-4337 v0.8 packed user operation, hashed with EIP-712.
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        struct PackedUserOperation {
            address sender;
            uint256 nonce;
            bytes initCode;
            bytes callData;
            bytes32 accountGasLimits;
            uint256 preVerificationGas;
            bytes32 gasFees;
            bytes paymasterAndData;
        }
    );
}
pub use typed::{PackedUserOperation, Permit};

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::sol_types::{SolCall, SolStruct};

    #[test]
    fn permit_type_string() {
        assert_eq!(
            Permit::eip712_encode_type(),
            "Permit(address owner,address spender,uint256 value,uint256 nonce,uint256 deadline)"
        );
    }

    #[test]
    fn packed_user_operation_type_string() {
        assert_eq!(
            PackedUserOperation::eip712_encode_type(),
            "PackedUserOperation(address sender,uint256 nonce,bytes initCode,bytes callData,\
             bytes32 accountGasLimits,uint256 preVerificationGas,bytes32 gasFees,\
             bytes paymasterAndData)"
        );
    }

    #[test]
    fn selectors() {
        assert_eq!(IERC20Permit::transferCall::SELECTOR, [0xa9, 0x05, 0x9c, 0xbb]);
        assert_eq!(IERC1271::isValidSignatureCall::SELECTOR, *ERC1271_MAGIC_VALUE);
        assert_eq!(ISimple7702Account::executeCall::SELECTOR, [0xb6, 0x1d, 0x27, 0xf6]);
    }
}
