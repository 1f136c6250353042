//! Payroll Engine for monthly salary and attendance calculation
//!
//! This crate provides the calendar rules (alternating working Saturdays and
//! public holidays), the salary rules (per-day rate, attendance deductions,
//! overtime, performance bonus, proration) and salary slip generation for a
//! monthly-salaried workforce, plus an HTTP API over them.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod calendar;
pub mod config;
pub mod error;
pub mod models;
