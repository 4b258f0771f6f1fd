use std::fmt::Write;

/// 2D Point (X,Y).
pub type Point2 = [f64; 2];

pub trait ToPoint2 {
    fn to_p2(self) -> Point2;
}

impl ToPoint2 for Point2 {
    fn to_p2(self) -> Point2 {
        self
    }
}
impl ToPoint2 for &Point2 {
    fn to_p2(self) -> Point2 {
        *self
    }
}
impl ToPoint2 for (f64, f64) {
    fn to_p2(self) -> Point2 {
        let (x, y) = self;
        [x, y]
    }
}
impl ToPoint2 for &(f64, f64) {
    fn to_p2(self) -> Point2 {
        (*self).to_p2()
    }
}

/// Append `<x> <y>` to `buf`, each component formatted fixed-point with
/// `precision` fractional digits. No grouping, no scientific notation.
pub(crate) fn append_xy(buf: &mut String, p: impl ToPoint2, precision: usize) {
    let [x, y] = p.to_p2();
    write!(buf, "{x:.precision$} {y:.precision$}").expect("writing into a string buffer");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_point_testing() {
        assert_eq!([3.0, 1.5].to_p2(), [3.0, 1.5]);
        assert_eq!((3.0, 1.5).to_p2(), [3.0, 1.5]);
        assert_eq!((&[3.0, 1.5]).to_p2(), [3.0, 1.5]);
        assert_eq!((&(3.0, 1.5)).to_p2(), [3.0, 1.5]);
    }

    #[test]
    fn fixed_point_formatting() {
        let mut s = String::new();
        append_xy(&mut s, (3.2, 4.2), 7);
        assert_eq!(s, "3.2000000 4.2000000");

        let mut s = String::new();
        append_xy(&mut s, (-1.0, 0.128), 2);
        assert_eq!(s, "-1.00 0.13");

        // zero precision drops the decimal point entirely
        let mut s = String::new();
        append_xy(&mut s, (3.0, -4.0), 0);
        assert_eq!(s, "3 -4");

        // large magnitudes stay fixed-point, never scientific
        let mut s = String::new();
        append_xy(&mut s, (1e10, 0.0), 1);
        assert_eq!(s, "10000000000.0 0.0");
    }
}
