//! # UI Components Module
//!
//! This module organizes all UI components for the Fare Ledger application.
//! Each submodule handles a specific aspect of the user interface.
//!
//! ## Module Organization:
//! - `data_refresh` - Dashboard cache rebuilding from the backend
//! - `styling` - Visual styling, colors and currency formatting
//! - `filter_bar` - Month/year period selectors with the Apply button
//! - `summary_cards` - Income, expense and balance cards
//! - `record_forms` - Income and expense entry forms
//! - `record_table` - The per-period transaction table
//! - `category_chart` - The expense category doughnut chart
//! - `modals` - Record detail and delete confirmation overlays

pub mod category_chart;
pub mod data_refresh;
pub mod filter_bar;
pub mod modals;
pub mod record_forms;
pub mod record_table;
pub mod styling;
pub mod summary_cards;
