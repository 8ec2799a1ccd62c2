//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option pricing models.
//!
//! This crate provides:
//! - The Black-Scholes model for European calls and puts
//! - The standard normal distribution function used by the formula
//! - Structured errors for domain violations and numeric overflow
//!
//! ## Design Principles
//!
//! - **Validated inputs** via `pricer_core::types::PricingInputs`
//! - **Explicit errors** instead of NaN or infinity leaking to callers
//! - **Pure functions**: no state, no caching, no side effects

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
