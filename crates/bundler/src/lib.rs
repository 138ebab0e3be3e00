//! Gasless Bundler Library
//!
//! A JSON-RPC client for ERC-4337 bundlers, and [`UserOpSender`], which
//! assembles, signs and submits user operations paid for through a permit
//! paymaster.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod client;
pub use client::BundlerClient;

mod error;
pub use error::{BundlerError, SenderError};

mod sender;
pub use sender::UserOpSender;

/// Bundler response types.
pub mod types;
pub use types::{GasPriceTiers, PollOptions, TransactionInfo, UserOperationReceipt};
