//! Core domain logic for the tradefit project.
//!
//! Pure types and functions shared by the server and its storage backends:
//! wellness scoring, position sizing, request and response schemas, the
//! repository traits, and the error taxonomy. No I/O happens in this crate.

pub mod market;
pub mod scan;
pub mod storage;
pub mod trader;
