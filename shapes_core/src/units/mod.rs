//! # Unit Types
//!
//! Unit-tagged quantity types for section properties and loads. Each
//! quantity pairs an `f64` magnitude with an explicit unit tag drawn from a
//! closed enumeration for its dimension.
//!
//! ## Design Philosophy
//!
//! These are carriers, not a units library:
//! - No conversions between units, no arithmetic, no formatting
//! - Equality is structural: `1 m` and `100 cm` are different values
//! - Every unit enum starts with `Undefined = 0`, the default tag
//!
//! ## Example
//!
//! ```rust
//! use shapes_core::units::{Length, LengthUnit, Angle, AngleUnit};
//!
//! let depth = Length::new(14.0, LengthUnit::Inch);
//! assert_eq!(depth.value, 14.0);
//! assert_eq!(depth.unit, LengthUnit::Inch);
//!
//! // No normalization between units
//! assert_ne!(Length::new(1.0, LengthUnit::Meter), Length::new(100.0, LengthUnit::Centimeter));
//!
//! // Angles default to radians, everything else to Undefined
//! assert_eq!(Angle::default(), Angle::new(0.0, AngleUnit::Radian));
//! assert_eq!(Length::default().unit, LengthUnit::Undefined);
//! ```
//!
//! Both fields are required when building a quantity literally:
//!
//! ```rust,compile_fail
//! use shapes_core::units::Length;
//!
//! let depth = Length { value: 14.0 };
//! ```

use std::fmt::Debug;
use std::hash::Hash;

/// Common surface of every quantity type in this module.
pub trait Quantity: Copy + Debug + Default + Eq + Hash {
    /// Unit enumeration for this dimension
    type Unit: Copy + Debug + Eq + Hash + 'static;

    /// Every unit of the dimension, `Undefined` first
    const UNITS: &'static [Self::Unit];

    fn new(value: f64, unit: Self::Unit) -> Self;

    fn value(&self) -> f64;

    fn unit(&self) -> Self::Unit;
}

/// Bit pattern used for equality and hashing of magnitudes.
///
/// `-0.0` folds onto `0.0` and every NaN onto one NaN so that `Eq` and
/// `Hash` agree.
pub(crate) fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

// ============================================================================
// Definition macros (must precede the submodules that use them)
// ============================================================================

macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum $name {
            /// No unit assigned
            #[default]
            Undefined = 0,
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// All units, `Undefined` first, in declaration order
            pub const ALL: &'static [$name] = &[$name::Undefined, $($name::$variant),+];

            /// `false` only for `Undefined`
            pub const fn is_defined(self) -> bool {
                !matches!(self, $name::Undefined)
            }
        }
    };
}

macro_rules! quantity {
    (
        $(#[$meta:meta])*
        $name:ident($unit:ident), default = $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            /// Magnitude, expressed in `unit`
            pub value: f64,
            /// Unit tag for `value`
            pub unit: $unit,
        }

        impl $name {
            /// Pair a magnitude with its unit
            pub const fn new(value: f64, unit: $unit) -> Self {
                Self { value, unit }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(0.0, $unit::$default)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.unit == other.unit
                    && $crate::units::canonical_bits(self.value)
                        == $crate::units::canonical_bits(other.value)
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                std::hash::Hash::hash(&$crate::units::canonical_bits(self.value), state);
                std::hash::Hash::hash(&self.unit, state);
            }
        }

        impl $crate::units::Quantity for $name {
            type Unit = $unit;

            const UNITS: &'static [$unit] = $unit::ALL;

            fn new(value: f64, unit: $unit) -> Self {
                $name::new(value, unit)
            }

            fn value(&self) -> f64 {
                self.value
            }

            fn unit(&self) -> $unit {
                self.unit
            }
        }
    };
}

mod geometric;
mod mechanical;

pub use geometric::{
    Area, AreaMomentOfInertia, AreaMomentOfInertiaUnit, AreaUnit, Length, LengthUnit, Volume,
    VolumeUnit,
};
pub use mechanical::{
    Angle, AngleUnit, Force, ForcePerLength, ForcePerLengthUnit, ForceUnit, Pressure,
    PressureUnit, Torque, TorqueUnit,
};
