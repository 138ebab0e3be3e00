//! Gasless Account Library
//!
//! Wraps an owner key as an EIP-7702 delegated `Simple7702Account`: the
//! account's address is the owner's EOA, and its code is a delegation to
//! the shared account implementation.

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

mod account;
pub use account::{delegation_code, Simple7702Account, DUMMY_SIGNATURE};

mod error;
pub use error::AccountError;
