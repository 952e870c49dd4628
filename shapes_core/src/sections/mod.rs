//! # Section Profiles
//!
//! Contracts for named structural cross-sections, and the records that carry
//! their properties as unit-tagged quantities.
//!
//! ## Contracts
//!
//! - [`SectionProfile`]: anything with a shape designation ("W14x90")
//! - [`ConstantSectionProfile`]: a prismatic section, i.e. one whose
//!   cross-section does not vary along the member. Exposes nominal
//!   self-weight and gross area.
//!
//! ## Records
//!
//! - [`SectionProfileData`]: generic record (area, Ix, Iy, J, optional shear areas)
//! - [`AiscWShapeData`]: AISC wide-flange record with the manual's field
//!   names (`d`, `tw`, `tf`, `bf`, `zx`, `zy`)
//!
//! Records are plain values with public fields. A struct literal must name
//! every field, so an incomplete record does not compile; the builders cover
//! construction from runtime data and report the first missing field.
//!
//! ## Example
//!
//! ```rust
//! use shapes_core::sections::{ConstantSectionProfile, SectionProfile, SectionProfileData};
//! use shapes_core::units::{ForcePerLengthUnit, AreaUnit};
//!
//! let w14x90 = SectionProfileData::aisc_us("W14x90", 90.0, 26.5, 999.0, 362.0, 4.06);
//!
//! assert_eq!(w14x90.name(), "W14x90");
//! assert_eq!(w14x90.nominal_weight().unit, ForcePerLengthUnit::PoundForcePerFoot);
//! assert_eq!(w14x90.area().unit, AreaUnit::SquareInch);
//! assert!(w14x90.strong_axis_shear_area.is_none());
//! ```

pub mod aisc;
pub mod profile;

pub use aisc::{AiscWShapeBuilder, AiscWShapeData};
pub use profile::{SectionProfileBuilder, SectionProfileData};

use crate::errors::{ShapeError, ShapeResult};
use crate::units::{Area, ForcePerLength};

/// A named structural cross-section.
pub trait SectionProfile {
    /// Shape designation, e.g. "W14x90". Not validated; may be empty.
    fn name(&self) -> &str;
}

/// A prismatic section profile.
pub trait ConstantSectionProfile: SectionProfile {
    /// Nominal self-weight per unit length
    fn nominal_weight(&self) -> ForcePerLength;

    /// Gross cross-sectional area
    fn area(&self) -> Area;
}

/// Unwrap a builder field, or fail with `MissingField`.
pub(crate) fn required<T>(record: &'static str, field: &'static str, value: Option<T>) -> ShapeResult<T> {
    value.ok_or_else(|| {
        tracing::debug!(record, field, "section profile builder missing required field");
        ShapeError::missing_field(field)
    })
}
