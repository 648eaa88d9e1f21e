//! Résumé builder core.
//!
//! Owns the résumé aggregate and everything that reads or rewrites it:
//! copy-on-write section editors, completion rules, validation, the two
//! preview projections, the export pipeline and AI text generation. Hosts
//! supply the outside world through traits (rasterizer, document assembler,
//! download sink, text completion, scroll assist).

pub mod cli;
pub mod completion;
pub mod config;
pub mod editor;
pub mod errors;
pub mod export;
pub mod layout;
pub mod llm_client;
pub mod logging;
pub mod models;
pub mod preview;
pub mod summary;
pub mod validation;
