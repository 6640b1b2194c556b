//! Layer 3: Algorithms
//!
//! This layer implements the brute-force dominance sweep: the inner scan that
//! eliminates everything one candidate dominates, the sequential kernel built
//! on it, and the unshrinking block scan used by domain decomposition. It is
//! orchestrated by the engine layer.

// Dominance filtering kernels.
pub mod filter;
