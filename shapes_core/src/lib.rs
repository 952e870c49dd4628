//! # shapes_core - Structural Section Profiles
//!
//! `shapes_core` gives structural-analysis code a typed vocabulary for
//! cross-section properties and physical quantities. Every quantity carries
//! an explicit unit tag instead of relying on an implied convention.
//!
//! ## Design Philosophy
//!
//! - **Data only**: no unit conversion, no arithmetic, no property derivation
//! - **Explicit units**: a magnitude never travels without its unit tag
//! - **Value semantics**: records are compared and hashed field by field
//! - **Complete construction**: struct literals must name every field;
//!   builders report the first missing one
//!
//! ## Quick Start
//!
//! ```rust
//! use shapes_core::sections::{ConstantSectionProfile, SectionProfileData};
//! use shapes_core::units::{Area, AreaUnit};
//!
//! let profile = SectionProfileData::aisc_us("W14x90", 90.0, 26.5, 999.0, 362.0, 4.06)
//!     .with_strong_axis_shear_area(Area::new(6.16, AreaUnit::SquareInch));
//!
//! assert_eq!(profile.area(), Area::new(26.5, AreaUnit::SquareInch));
//! assert!(profile.weak_axis_shear_area.is_none());
//! ```
//!
//! ## Modules
//!
//! - [`units`] - Unit-tagged quantity types and their unit enumerations
//! - [`sections`] - Section profile contracts and records
//! - [`errors`] - Structured error types
//!
//! ## Features
//!
//! - `serde` - `Serialize`/`Deserialize` for every public data type

pub mod errors;
pub mod sections;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{ShapeError, ShapeResult};
pub use sections::{AiscWShapeData, ConstantSectionProfile, SectionProfile, SectionProfileData};
pub use units::Quantity;
