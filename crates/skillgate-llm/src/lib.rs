//! # skillgate-llm
//!
//! The request shape handed to an LLM backend, and the transport trait a
//! caller implements to deliver it. skillgate itself ships no network
//! transport; [`MockTransport`] exists for tests and dry runs.

pub mod mock;
pub mod request;
pub mod transport;

pub use mock::{MockResponse, MockTransport};
pub use request::{Content, ContentRole, GenerationConfig, GenerationRequest};
pub use transport::LlmTransport;
