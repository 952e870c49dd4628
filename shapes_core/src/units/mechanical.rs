//! Mechanical quantities: force, angle, and the force/length combinations.

unit_enum! {
    /// Force units
    ForceUnit {
        /// kN
        Kilonewton,
        /// kip
        KilopoundForce,
        /// N
        Newton,
        /// lbf
        PoundForce,
    }
}

quantity! {
    /// Point force
    Force(ForceUnit), default = Undefined
}

unit_enum! {
    AngleUnit {
        Degree,
        Radian,
    }
}

quantity! {
    /// Plane angle. Unlike every other quantity, the default is `0 rad`.
    Angle(AngleUnit), default = Radian
}

unit_enum! {
    /// Force × length
    TorqueUnit {
        KilonewtonCentimeter,
        KilonewtonMeter,
        KilonewtonMillimeter,
        KilopoundForceFoot,
        KilopoundForceInch,
        NewtonCentimeter,
        NewtonMeter,
        NewtonMillimeter,
        PoundForceFoot,
        PoundForceInch,
    }
}

quantity! {
    /// Torque or bending moment
    Torque(TorqueUnit), default = Undefined
}

unit_enum! {
    /// Force ÷ length
    ForcePerLengthUnit {
        KilonewtonPerCentimeter,
        KilonewtonPerMeter,
        KilonewtonPerMillimeter,
        KilopoundForcePerFoot,
        KilopoundForcePerInch,
        NewtonPerCentimeter,
        NewtonPerMeter,
        NewtonPerMillimeter,
        /// plf, the unit of AISC nominal weights
        PoundForcePerFoot,
        PoundForcePerInch,
    }
}

quantity! {
    /// Distributed force, including self-weight per unit length
    ForcePerLength(ForcePerLengthUnit), default = Undefined
}

unit_enum! {
    /// Force ÷ area
    PressureUnit {
        KilonewtonPerSquareCentimeter,
        KilonewtonPerSquareMeter,
        KilonewtonPerSquareMillimeter,
        KilopoundForcePerSquareFoot,
        /// ksi
        KilopoundForcePerSquareInch,
        NewtonPerSquareCentimeter,
        NewtonPerSquareMeter,
        /// MPa
        NewtonPerSquareMillimeter,
        /// psf
        PoundForcePerSquareFoot,
        /// psi
        PoundForcePerSquareInch,
    }
}

quantity! {
    /// Pressure or stress
    Pressure(PressureUnit), default = Undefined
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_default_is_radian() {
        assert_eq!(Angle::default(), Angle::new(0.0, AngleUnit::Radian));
        assert_eq!(AngleUnit::default(), AngleUnit::Undefined);
    }

    #[test]
    fn test_unit_counts() {
        assert_eq!(ForceUnit::ALL.len(), 5);
        assert_eq!(AngleUnit::ALL.len(), 3);
        assert_eq!(TorqueUnit::ALL.len(), 11);
        assert_eq!(ForcePerLengthUnit::ALL.len(), 11);
        assert_eq!(PressureUnit::ALL.len(), 11);
    }

    #[test]
    fn test_moment_tags_stay_distinct() {
        // 1 kip-ft and 12 kip-in are the same moment but different values here
        let a = Torque::new(1.0, TorqueUnit::KilopoundForceFoot);
        let b = Torque::new(12.0, TorqueUnit::KilopoundForceInch);
        assert_ne!(a, b);
    }

    #[test]
    fn test_pressure_literal() {
        let fy = Pressure {
            value: 50.0,
            unit: PressureUnit::KilopoundForcePerSquareInch,
        };
        assert_eq!(fy.value, 50.0);
        assert_eq!(fy.unit, PressureUnit::KilopoundForcePerSquareInch);
    }
}
