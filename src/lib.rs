//! Payroll calculation and reconciliation engine.
//!
//! This crate computes expected monthly earnings from a salary-level lookup
//! table and per-person period inputs, reconciles the computed total against
//! an externally reported total, raises advisory alerts on threshold
//! breaches, and accumulates results into a consolidated list exportable as
//! a formatted workbook with a dedicated alerts sheet.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
pub mod table;
