//! Generic section profile record.
//!
//! Carries the properties every prismatic shape has (weight, area, Ix, Iy,
//! J) plus optional shear areas. Shapes from the AISC database carry their
//! numbers in US customary units; [`SectionProfileData::aisc_us`] tags them.
//!
//! Every field must be named in a struct literal:
//!
//! ```rust,compile_fail
//! use shapes_core::sections::SectionProfileData;
//! use shapes_core::units::*;
//!
//! let in4 = AreaMomentOfInertiaUnit::InchToTheFourth;
//! let profile = SectionProfileData {
//!     name: "W14x90".to_string(),
//!     nominal_weight: ForcePerLength::new(90.0, ForcePerLengthUnit::PoundForcePerFoot),
//!     area: Area::new(26.5, AreaUnit::SquareInch),
//!     ix: AreaMomentOfInertia::new(999.0, in4),
//!     iy: AreaMomentOfInertia::new(362.0, in4),
//!     // j omitted
//!     strong_axis_shear_area: None,
//!     weak_axis_shear_area: None,
//! };
//! ```

use super::{required, AiscWShapeData, ConstantSectionProfile, SectionProfile};
use crate::errors::ShapeResult;
use crate::units::{
    Area, AreaMomentOfInertia, AreaMomentOfInertiaUnit, AreaUnit, ForcePerLength,
    ForcePerLengthUnit,
};

/// Section profile with strong/weak axis inertia and torsional constant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionProfileData {
    /// Shape designation (e.g., "W14x90")
    pub name: String,

    /// Nominal self-weight per unit length
    pub nominal_weight: ForcePerLength,

    /// Gross cross-sectional area
    pub area: Area,

    /// Moment of inertia about the strong (X-X) axis
    pub ix: AreaMomentOfInertia,

    /// Moment of inertia about the weak (Y-Y) axis
    pub iy: AreaMomentOfInertia,

    /// Torsional constant
    pub j: AreaMomentOfInertia,

    /// Shear area for strong-axis shear. `None` means not provided for this
    /// shape, not zero.
    pub strong_axis_shear_area: Option<Area>,

    /// Shear area for weak-axis shear. `None` means not provided.
    pub weak_axis_shear_area: Option<Area>,
}

impl SectionProfileData {
    /// Create a profile without shear areas
    pub fn new(
        name: impl Into<String>,
        nominal_weight: ForcePerLength,
        area: Area,
        ix: AreaMomentOfInertia,
        iy: AreaMomentOfInertia,
        j: AreaMomentOfInertia,
    ) -> Self {
        Self {
            name: name.into(),
            nominal_weight,
            area,
            ix,
            iy,
            j,
            strong_axis_shear_area: None,
            weak_axis_shear_area: None,
        }
    }

    /// Create a profile from raw AISC database numbers.
    ///
    /// Weight is tagged lbf/ft, area in², and Ix, Iy, J in⁴. No conversion
    /// takes place.
    pub fn aisc_us(
        name: impl Into<String>,
        weight_plf: f64,
        area_in2: f64,
        ix_in4: f64,
        iy_in4: f64,
        j_in4: f64,
    ) -> Self {
        let in4 = AreaMomentOfInertiaUnit::InchToTheFourth;
        Self::new(
            name,
            ForcePerLength::new(weight_plf, ForcePerLengthUnit::PoundForcePerFoot),
            Area::new(area_in2, AreaUnit::SquareInch),
            AreaMomentOfInertia::new(ix_in4, in4),
            AreaMomentOfInertia::new(iy_in4, in4),
            AreaMomentOfInertia::new(j_in4, in4),
        )
    }

    /// Start a builder for runtime construction
    pub fn builder() -> SectionProfileBuilder {
        SectionProfileBuilder::default()
    }

    pub fn with_strong_axis_shear_area(self, area: Area) -> Self {
        Self {
            strong_axis_shear_area: Some(area),
            ..self
        }
    }

    pub fn with_weak_axis_shear_area(self, area: Area) -> Self {
        Self {
            weak_axis_shear_area: Some(area),
            ..self
        }
    }
}

impl SectionProfile for SectionProfileData {
    fn name(&self) -> &str {
        &self.name
    }
}

impl ConstantSectionProfile for SectionProfileData {
    fn nominal_weight(&self) -> ForcePerLength {
        self.nominal_weight
    }

    fn area(&self) -> Area {
        self.area
    }
}

/// Generic view of a W-shape. Shear areas are left unset.
impl From<&AiscWShapeData> for SectionProfileData {
    fn from(shape: &AiscWShapeData) -> Self {
        Self::new(
            shape.name.clone(),
            shape.nominal_weight,
            shape.area,
            shape.ix,
            shape.iy,
            shape.j,
        )
    }
}

/// Builder for [`SectionProfileData`].
///
/// `build` fails with `MissingField` for the first unset required field,
/// checked in declaration order. Shear areas are optional.
#[derive(Debug, Clone, Default)]
pub struct SectionProfileBuilder {
    name: Option<String>,
    nominal_weight: Option<ForcePerLength>,
    area: Option<Area>,
    ix: Option<AreaMomentOfInertia>,
    iy: Option<AreaMomentOfInertia>,
    j: Option<AreaMomentOfInertia>,
    strong_axis_shear_area: Option<Area>,
    weak_axis_shear_area: Option<Area>,
}

impl SectionProfileBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn nominal_weight(mut self, nominal_weight: ForcePerLength) -> Self {
        self.nominal_weight = Some(nominal_weight);
        self
    }

    pub fn area(mut self, area: Area) -> Self {
        self.area = Some(area);
        self
    }

    pub fn ix(mut self, ix: AreaMomentOfInertia) -> Self {
        self.ix = Some(ix);
        self
    }

    pub fn iy(mut self, iy: AreaMomentOfInertia) -> Self {
        self.iy = Some(iy);
        self
    }

    pub fn j(mut self, j: AreaMomentOfInertia) -> Self {
        self.j = Some(j);
        self
    }

    pub fn strong_axis_shear_area(mut self, area: Area) -> Self {
        self.strong_axis_shear_area = Some(area);
        self
    }

    pub fn weak_axis_shear_area(mut self, area: Area) -> Self {
        self.weak_axis_shear_area = Some(area);
        self
    }

    pub fn build(self) -> ShapeResult<SectionProfileData> {
        const RECORD: &str = "SectionProfileData";
        Ok(SectionProfileData {
            name: required(RECORD, "name", self.name)?,
            nominal_weight: required(RECORD, "nominal_weight", self.nominal_weight)?,
            area: required(RECORD, "area", self.area)?,
            ix: required(RECORD, "ix", self.ix)?,
            iy: required(RECORD, "iy", self.iy)?,
            j: required(RECORD, "j", self.j)?,
            strong_axis_shear_area: self.strong_axis_shear_area,
            weak_axis_shear_area: self.weak_axis_shear_area,
        })
    }
}
