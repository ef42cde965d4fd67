//! Resilience patterns for cropwise-runtime.
//!
//! The only retry policy is a fixed chain of alternative prompts tried in
//! order. There is no backoff and no parallel dispatch.

mod prompt_chain;

pub use prompt_chain::{ChainSuccess, PromptChain, RETRY_TEMPERATURE};
