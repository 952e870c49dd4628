//! AISC W-Shape Record
//!
//! Wide-flange section properties named the way the AISC Shapes Database
//! names them:
//!
//! | Field | Meaning |
//! |---|---|
//! | `d` | Overall depth |
//! | `tw` | Web thickness |
//! | `tf` | Flange thickness |
//! | `bf` | Flange width |
//! | `ix`, `iy` | Moments of inertia, strong/weak axis |
//! | `zx`, `zy` | Plastic section moduli, strong/weak axis |
//! | `j` | Torsional constant |
//!
//! Values keep whatever units they were tagged with.

use super::{required, ConstantSectionProfile, SectionProfile};
use crate::errors::ShapeResult;
use crate::units::{Area, AreaMomentOfInertia, ForcePerLength, Length, Volume};

/// Wide flange (W) shape with AISC property names
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiscWShapeData {
    /// AISC Manual label (e.g., "W14X90")
    pub name: String,

    /// Nominal weight per unit length
    pub nominal_weight: ForcePerLength,

    /// Cross-sectional area
    pub area: Area,

    // === Strong / weak axis ===
    pub ix: AreaMomentOfInertia,
    pub iy: AreaMomentOfInertia,

    /// Torsional constant
    pub j: AreaMomentOfInertia,

    /// Plastic section modulus about X-axis
    pub zx: Volume,

    /// Plastic section modulus about Y-axis
    pub zy: Volume,

    // === Dimensions ===
    pub d: Length,
    pub tw: Length,
    pub tf: Length,
    pub bf: Length,
}

impl AiscWShapeData {
    /// Start a builder for runtime construction
    pub fn builder() -> AiscWShapeBuilder {
        AiscWShapeBuilder::default()
    }
}

impl SectionProfile for AiscWShapeData {
    fn name(&self) -> &str {
        &self.name
    }
}

impl ConstantSectionProfile for AiscWShapeData {
    fn nominal_weight(&self) -> ForcePerLength {
        self.nominal_weight
    }

    fn area(&self) -> Area {
        self.area
    }
}

/// Builder for [`AiscWShapeData`]. Every field is required.
#[derive(Debug, Clone, Default)]
pub struct AiscWShapeBuilder {
    name: Option<String>,
    nominal_weight: Option<ForcePerLength>,
    area: Option<Area>,
    ix: Option<AreaMomentOfInertia>,
    iy: Option<AreaMomentOfInertia>,
    j: Option<AreaMomentOfInertia>,
    zx: Option<Volume>,
    zy: Option<Volume>,
    d: Option<Length>,
    tw: Option<Length>,
    tf: Option<Length>,
    bf: Option<Length>,
}

macro_rules! setters {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        $(
            pub fn $field(mut self, $field: $ty) -> Self {
                self.$field = Some($field);
                self
            }
        )+
    };
}

impl AiscWShapeBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    setters! {
        nominal_weight: ForcePerLength,
        area: Area,
        ix: AreaMomentOfInertia,
        iy: AreaMomentOfInertia,
        j: AreaMomentOfInertia,
        zx: Volume,
        zy: Volume,
        d: Length,
        tw: Length,
        tf: Length,
        bf: Length,
    }

    pub fn build(self) -> ShapeResult<AiscWShapeData> {
        const RECORD: &str = "AiscWShapeData";
        Ok(AiscWShapeData {
            name: required(RECORD, "name", self.name)?,
            nominal_weight: required(RECORD, "nominal_weight", self.nominal_weight)?,
            area: required(RECORD, "area", self.area)?,
            ix: required(RECORD, "ix", self.ix)?,
            iy: required(RECORD, "iy", self.iy)?,
            j: required(RECORD, "j", self.j)?,
            zx: required(RECORD, "zx", self.zx)?,
            zy: required(RECORD, "zy", self.zy)?,
            d: required(RECORD, "d", self.d)?,
            tw: required(RECORD, "tw", self.tw)?,
            tf: required(RECORD, "tf", self.tf)?,
            bf: required(RECORD, "bf", self.bf)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ShapeError;
    use crate::sections::SectionProfileData;
    use crate::units::{
        AreaMomentOfInertiaUnit, AreaUnit, ForcePerLengthUnit, LengthUnit, VolumeUnit,
    };

    fn inch(value: f64) -> Length {
        Length::new(value, LengthUnit::Inch)
    }

    fn in3(value: f64) -> Volume {
        Volume::new(value, VolumeUnit::CubicInch)
    }

    fn in4(value: f64) -> AreaMomentOfInertia {
        AreaMomentOfInertia::new(value, AreaMomentOfInertiaUnit::InchToTheFourth)
    }

    fn w14x90_builder() -> AiscWShapeBuilder {
        AiscWShapeData::builder()
            .name("W14X90")
            .nominal_weight(ForcePerLength::new(90.0, ForcePerLengthUnit::PoundForcePerFoot))
            .area(Area::new(26.5, AreaUnit::SquareInch))
            .ix(in4(999.0))
            .iy(in4(362.0))
            .j(in4(4.06))
            .zx(in3(157.0))
            .zy(in3(75.6))
            .d(inch(14.0))
            .tw(inch(0.44))
            .tf(inch(0.71))
            .bf(inch(14.5))
    }

    #[test]
    fn test_builder_fields_read_back() {
        let shape = w14x90_builder().build().unwrap();

        assert_eq!(shape.name(), "W14X90");
        assert_eq!(shape.area(), Area::new(26.5, AreaUnit::SquareInch));
        assert_eq!(shape.ix, in4(999.0));
        assert_eq!(shape.iy, in4(362.0));
        assert_eq!(shape.j, in4(4.06));
        assert_eq!(shape.zx, in3(157.0));
        assert_eq!(shape.zy, in3(75.6));
        assert_eq!(shape.d, inch(14.0));
        assert_eq!(shape.tw, inch(0.44));
        assert_eq!(shape.tf, inch(0.71));
        assert_eq!(shape.bf, inch(14.5));
    }

    #[test]
    fn test_builder_rejects_each_missing_field() {
        let full = w14x90_builder();
        let cases: Vec<(&str, AiscWShapeBuilder)> = vec![
            ("name", AiscWShapeBuilder { name: None, ..full.clone() }),
            ("nominal_weight", AiscWShapeBuilder { nominal_weight: None, ..full.clone() }),
            ("area", AiscWShapeBuilder { area: None, ..full.clone() }),
            ("ix", AiscWShapeBuilder { ix: None, ..full.clone() }),
            ("iy", AiscWShapeBuilder { iy: None, ..full.clone() }),
            ("j", AiscWShapeBuilder { j: None, ..full.clone() }),
            ("zx", AiscWShapeBuilder { zx: None, ..full.clone() }),
            ("zy", AiscWShapeBuilder { zy: None, ..full.clone() }),
            ("d", AiscWShapeBuilder { d: None, ..full.clone() }),
            ("tw", AiscWShapeBuilder { tw: None, ..full.clone() }),
            ("tf", AiscWShapeBuilder { tf: None, ..full.clone() }),
            ("bf", AiscWShapeBuilder { bf: None, ..full.clone() }),
        ];

        for (field, builder) in cases {
            assert_eq!(builder.build(), Err(ShapeError::missing_field(field)));
        }
    }

    #[test]
    fn test_value_semantics() {
        let a = w14x90_builder().build().unwrap();
        assert_eq!(a, w14x90_builder().build().unwrap());

        let thicker_web = w14x90_builder().tw(inch(0.45)).build().unwrap();
        assert_ne!(a, thicker_web);

        let metric_depth = w14x90_builder()
            .d(Length::new(14.0, LengthUnit::Millimeter))
            .build()
            .unwrap();
        assert_ne!(a, metric_depth);
    }

    #[test]
    fn test_generic_view_drops_w_shape_fields() {
        let shape = w14x90_builder().build().unwrap();
        let generic = SectionProfileData::from(&shape);

        assert_eq!(
            generic,
            SectionProfileData::aisc_us("W14X90", 90.0, 26.5, 999.0, 362.0, 4.06)
        );
        assert!(generic.strong_axis_shear_area.is_none());
        assert!(generic.weak_axis_shear_area.is_none());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialization_roundtrip() {
        // dyadic values only, so the JSON float round trip is exact
        let shape = w14x90_builder()
            .j(in4(4.0))
            .zy(in3(75.5))
            .tw(inch(0.5))
            .tf(inch(0.75))
            .build()
            .unwrap();
        let json = serde_json::to_string(&shape).unwrap();
        let roundtrip: AiscWShapeData = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, roundtrip);
    }
}
