//! # calc_core - Geotechnical Calculation Engine
//!
//! `calc_core` is the computational heart of Geostack, providing earth
//! pressure calculations for basement and retaining walls with a clean,
//! LLM-friendly API. All inputs and outputs are JSON-serializable, making it
//! ideal for integration with AI assistants via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Public formulas carry worked examples
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::calculations::{solve, Layer, LayerStack, WaterTable};
//!
//! // 5 m basement wall, 5 kPa surcharge, fill over clay
//! let stack = LayerStack::new(5.0, 5.0)
//!     .with_layer(Layer::new("Fill", 2.0, 18.0, 30.0, 1.0))
//!     .with_layer(Layer::bottom("Clay", 20.0, 16.0, 1.0));
//!
//! // Groundwater 1 m above the foundation base
//! let result = solve(&stack, &WaterTable::at_height(1.0)).unwrap();
//! assert_eq!(result.segments.len(), 3);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Earth pressure solver and its data model
//! - [`equations`] - Soil stress and pressure diagram formulas
//! - [`soils`] - Reference soil catalog
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod soils;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{solve, validate, EarthPressureInput, SolveResult};
pub use errors::{CalcError, CalcResult, SolveError, ValidationError};
