//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns membership information into results: it merges partial
//! membership vectors, extracts surviving points in input order, and checks
//! that a membership vector really describes the skyline.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Membership reduction and survivor extraction.
pub mod aggregate;

/// Skyline certificate checking.
pub mod verify;
