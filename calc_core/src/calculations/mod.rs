//! # Geotechnical Calculations
//!
//! This module contains the earth pressure calculation. It follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## LLM Integration
//!
//! All types are designed for LLM consumption:
//! - Comprehensive rustdoc with examples
//! - Clean JSON serialization
//! - Structured error responses
//!
//! ## Available Calculations
//!
//! - [`earth_pressure`] - At-rest earth pressure on a basement wall
//!
//! Supporting modules:
//!
//! - [`layers`] - Soil layer stack, validation and height completion
//! - [`water_table`] - Groundwater position and pore pressure
//! - [`resultant`] - Resultant thrust and overturning moment

pub mod earth_pressure;
pub mod layers;
pub mod resultant;
pub mod water_table;

// Re-export commonly used types
pub use earth_pressure::{
    calculate, solve, validate, EarthPressureInput, PressureSegment, SolveResult,
};
pub use layers::{Layer, LayerStack, ResolvedStack};
pub use resultant::Resultant;
pub use water_table::{WaterTable, WaterTableModel};
