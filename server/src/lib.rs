//! OrderDesk: schemas and LLM tool definitions over an order dataset.
//!
//! The core component is the filter layer in [`domain::orders`]: a factory
//! that captures a dataset's product-name universe and validates/normalizes
//! filter payloads against it. [`api`] exposes that component (plus the
//! invoice and chart schemas) as MCP tools over stdio.

pub mod api;
mod app;
pub mod core;
pub mod data;
pub mod domain;
