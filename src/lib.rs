//! MCP server for banco Inter's banking API.
//!
//! Exposes saldo, extrato and boleto (cobrança) operations as MCP tools
//! backed by Inter's REST API with mutual TLS and OAuth2 client
//! credentials. The binary in `main.rs` wires the handler to a stdio or
//! streamable-HTTP transport; everything else lives here so the
//! integration tests can drive the server in-process.

pub mod config;
pub mod mcp;
