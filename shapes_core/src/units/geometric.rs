//! Geometric quantities: length and its powers.

// ============================================================================
// Length
// ============================================================================

unit_enum! {
    /// Length units
    LengthUnit {
        /// cm
        Centimeter,
        /// ft
        Foot,
        /// in
        Inch,
        /// m
        Meter,
        /// mm
        Millimeter,
    }
}

quantity! {
    /// Length (depth, thickness, flange width, span)
    Length(LengthUnit), default = Undefined
}

// ============================================================================
// Area
// ============================================================================

unit_enum! {
    /// Area units
    AreaUnit {
        /// cm²
        SquareCentimeter,
        /// ft²
        SquareFoot,
        /// in²
        SquareInch,
        /// m²
        SquareMeter,
        /// mm²
        SquareMillimeter,
    }
}

quantity! {
    /// Area (gross section area, shear area)
    Area(AreaUnit), default = Undefined
}

// ============================================================================
// Volume
// ============================================================================

unit_enum! {
    /// Volume units, also used for section moduli
    VolumeUnit {
        /// cm³
        CubicCentimeter,
        /// ft³
        CubicFoot,
        /// in³
        CubicInch,
        /// m³
        CubicMeter,
        /// mm³
        CubicMillimeter,
    }
}

quantity! {
    /// Length cubed. Carries elastic and plastic section moduli.
    Volume(VolumeUnit), default = Undefined
}

// ============================================================================
// Area Moment of Inertia
// ============================================================================

unit_enum! {
    /// Length to the fourth power
    AreaMomentOfInertiaUnit {
        /// cm⁴
        CentimeterToTheFourth,
        /// ft⁴
        FootToTheFourth,
        /// in⁴
        InchToTheFourth,
        /// m⁴
        MeterToTheFourth,
        /// mm⁴
        MillimeterToTheFourth,
    }
}

quantity! {
    /// Second moment of area (Ix, Iy) and torsional constant (J)
    AreaMomentOfInertia(AreaMomentOfInertiaUnit), default = Undefined
}
