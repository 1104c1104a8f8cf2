//! Holiday administration and leave reporting.
//!
//! This crate provides a controller for maintaining company holidays and a
//! pipeline that aggregates leave requests into department, employee and
//! leave-type reports and exports them as Excel workbooks or PDF documents.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod holidays;
pub mod models;
pub mod reports;
