//! Core library for jira-gateway
//!
//! This crate implements the **Functional Core** of the jira-gateway application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`jira_gateway_core`** (this crate): Pure transformation functions with zero I/O
//! - **`jira-gateway`**: HTTP gateway, Jira REST calls and CLI (the Imperative Shell)
//!
//! Every function here is deterministic and side-effect free, so it can be
//! tested with fixture data and called concurrently without coordination.
//!
//! # Module Organization
//!
//! - [`adf`]: Building, validating and rendering ADF (Atlassian Document Format)
//!   trees, the rich-text format Jira's v3 API requires
//! - [`atlassian`]: Jira request payload builders and response transformations
//!
//! # Example Usage
//!
//! ```rust
//! use jira_gateway_core::adf;
//!
//! let doc = adf::text_to_document(Some("First paragraph\n\nSecond paragraph"));
//! assert_eq!(doc.content.len(), 2);
//! assert!(adf::validate(&doc.to_value()));
//! ```

pub mod adf;
pub mod atlassian;
