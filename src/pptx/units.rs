/// Length and font size units used by DrawingML.

/// English Metric Units per inch. All positions and extents in the package
/// are expressed in EMUs.
pub const EMU_PER_INCH: i64 = 914_400;

/// Convert inches to EMUs, rounding to the nearest unit.
#[inline]
pub fn emu_from_inches(inches: f64) -> i64 {
    (inches * EMU_PER_INCH as f64).round() as i64
}

/// Convert a font size in points to the centipoint value used by
/// `<a:rPr sz="..."/>`.
#[inline]
pub fn centipoints_from_points(points: f64) -> u32 {
    (points * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emu_from_inches() {
        assert_eq!(emu_from_inches(1.0), 914_400);
        assert_eq!(emu_from_inches(10.0), 9_144_000);
        assert_eq!(emu_from_inches(5.625), 5_143_500);
    }

    #[test]
    fn test_centipoints() {
        assert_eq!(centipoints_from_points(44.0), 4400);
        assert_eq!(centipoints_from_points(10.5), 1050);
    }
}
