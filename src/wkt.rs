use crate::coord::*;
use std::mem;

/// Output flavour: plain WKT, or EWKT which carries a leading `SRID=<srid>;`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum WktMode {
    #[default]
    Wkt,
    Ewkt,
}

/// Where the builder is in a geometry call sequence.
///
/// Every operation checks the phase it runs in. A call made out of order is
/// a caller bug, so it panics rather than silently emitting malformed text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    /// No geometry open, buffer empty.
    Idle,
    /// Inside `LINESTRING(`.
    LineString,
    /// Inside `MULTIPOLYGON(`, between polygons.
    MultiPolygon,
    /// Inside a polygon, before its outer ring has been closed.
    Polygon,
    /// Inside a polygon with at least one closed ring.
    PolygonRings,
    /// Inside a ring.
    Ring,
}

/// Streaming WKT/EWKT emitter.
///
/// Point emission is one-shot and takes `&self`. LineString and MultiPolygon
/// are built incrementally: `start`, feed locations (and ring/polygon events
/// for multipolygons), then `finish`, which moves the completed text out and
/// leaves the builder ready for the next geometry.
///
/// Each location appends a trailing `,` unconditionally; the matching finish
/// swaps the last pending `,` for the closing `)`. This keeps the emission
/// loop free of first/last-element branches, at the cost of a strict call
/// grammar (see the `multipolygon_*` methods).
///
/// # Example
/// ```rust
/// use wkt_emit::*;
///
/// let mut b = WktBuilder::new(4326);
/// b.linestring_start();
/// b.linestring_add_location([1.0, 2.0]);
/// b.linestring_add_location([3.0, 4.0]);
/// assert_eq!(
///     b.linestring_finish(2),
///     "LINESTRING(1.0000000 2.0000000,3.0000000 4.0000000)"
/// );
/// ```
#[derive(Clone, Debug)]
pub struct WktBuilder {
    srid_prefix: String,
    precision: usize,
    buf: String,
    phase: Phase,
    locs: usize,
}

impl WktBuilder {
    /// Builder with the default precision of 7 fractional digits, plain WKT.
    pub fn new(srid: i32) -> Self {
        Self::with_options(srid, 7, WktMode::Wkt)
    }

    /// Builder with explicit precision and output mode.
    ///
    /// `srid` is only rendered in [`WktMode::Ewkt`]; it is not validated
    /// against any SRID registry.
    pub fn with_options(srid: i32, precision: usize, mode: WktMode) -> Self {
        let srid_prefix = match mode {
            WktMode::Wkt => String::new(),
            WktMode::Ewkt => format!("SRID={srid};"),
        };
        Self {
            srid_prefix,
            precision,
            buf: String::new(),
            phase: Phase::Idle,
            locs: 0,
        }
    }

    /// One-shot `POINT(<x> <y>)` emission.
    ///
    /// Touches no builder state, so it may be called at any time, including
    /// while a linestring or multipolygon is mid-build.
    pub fn make_point(&self, coord: impl ToPoint2) -> String {
        let mut out = String::with_capacity(self.srid_prefix.len() + 2 * self.precision + 16);
        out.push_str(&self.srid_prefix);
        out.push_str("POINT(");
        append_xy(&mut out, coord, self.precision);
        out.push(')');
        out
    }

    /* LineString */

    pub fn linestring_start(&mut self) {
        self.expect_phase(Phase::Idle, "linestring_start");
        debug_assert!(self.buf.is_empty());
        self.buf.push_str(&self.srid_prefix);
        self.buf.push_str("LINESTRING(");
        self.locs = 0;
        self.phase = Phase::LineString;
    }

    pub fn linestring_add_location(&mut self, coord: impl ToPoint2) {
        self.expect_phase(Phase::LineString, "linestring_add_location");
        append_xy(&mut self.buf, coord.to_p2(), self.precision);
        self.buf.push(',');
        self.locs += 1;
    }

    /// Close the linestring and move the completed text out.
    ///
    /// `num_points` must equal the number of `linestring_add_location` calls
    /// since `linestring_start`, and must be at least one.
    pub fn linestring_finish(&mut self, num_points: usize) -> String {
        self.expect_phase(Phase::LineString, "linestring_finish");
        assert_eq!(
            num_points, self.locs,
            "linestring_finish: caller declared {num_points} points but {} were added",
            self.locs
        );
        self.phase = Phase::Idle;
        let mut out = mem::take(&mut self.buf);
        match out.pop() {
            Some(',') => out.push(')'),
            _ => panic!("linestring_finish called before any location was added"),
        }
        log::trace!("finished linestring ({} bytes)", out.len());
        out
    }

    /* MultiPolygon */

    // The caller must follow this grammar exactly:
    //
    //   multipolygon_start
    //     { multipolygon_polygon_start
    //         multipolygon_outer_ring_start
    //           multipolygon_add_location+
    //         multipolygon_outer_ring_finish
    //         { multipolygon_inner_ring_start
    //             multipolygon_add_location+
    //           multipolygon_inner_ring_finish }*
    //       multipolygon_polygon_finish
    //     }+
    //   multipolygon_finish

    pub fn multipolygon_start(&mut self) {
        self.expect_phase(Phase::Idle, "multipolygon_start");
        debug_assert!(self.buf.is_empty());
        self.buf.push_str(&self.srid_prefix);
        self.buf.push_str("MULTIPOLYGON(");
        self.locs = 0;
        self.phase = Phase::MultiPolygon;
    }

    pub fn multipolygon_polygon_start(&mut self) {
        self.expect_phase(Phase::MultiPolygon, "multipolygon_polygon_start");
        self.buf.push('(');
        self.phase = Phase::Polygon;
    }

    pub fn multipolygon_outer_ring_start(&mut self) {
        self.expect_phase(Phase::Polygon, "multipolygon_outer_ring_start");
        self.buf.push('(');
        self.phase = Phase::Ring;
    }

    pub fn multipolygon_add_location(&mut self, coord: impl ToPoint2) {
        self.expect_phase(Phase::Ring, "multipolygon_add_location");
        append_xy(&mut self.buf, coord.to_p2(), self.precision);
        self.buf.push(',');
        self.locs += 1;
    }

    pub fn multipolygon_outer_ring_finish(&mut self) {
        self.expect_phase(Phase::Ring, "multipolygon_outer_ring_finish");
        self.close_ring("multipolygon_outer_ring_finish");
        self.phase = Phase::PolygonRings;
    }

    /// Open an inner ring. Only valid once the outer ring has been closed.
    pub fn multipolygon_inner_ring_start(&mut self) {
        self.expect_phase(Phase::PolygonRings, "multipolygon_inner_ring_start");
        self.buf.push_str(",(");
        self.phase = Phase::Ring;
    }

    pub fn multipolygon_inner_ring_finish(&mut self) {
        self.expect_phase(Phase::Ring, "multipolygon_inner_ring_finish");
        self.close_ring("multipolygon_inner_ring_finish");
        self.phase = Phase::PolygonRings;
    }

    pub fn multipolygon_polygon_finish(&mut self) {
        self.expect_phase(Phase::PolygonRings, "multipolygon_polygon_finish");
        self.buf.push_str("),");
        self.phase = Phase::MultiPolygon;
    }

    /// Close the multipolygon and move the completed text out.
    pub fn multipolygon_finish(&mut self) -> String {
        self.expect_phase(Phase::MultiPolygon, "multipolygon_finish");
        self.phase = Phase::Idle;
        let mut out = mem::take(&mut self.buf);
        match out.pop() {
            Some(',') => out.push(')'),
            _ => panic!("multipolygon_finish called before any polygon was finished"),
        }
        log::trace!("finished multipolygon ({} bytes)", out.len());
        out
    }

    fn expect_phase(&self, expected: Phase, op: &str) {
        assert!(
            self.phase == expected,
            "{op} called in {:?} phase (expected {expected:?})",
            self.phase
        );
    }

    // Swap the pending `,` left by the last add_location for the ring's `)`.
    fn close_ring(&mut self, op: &str) {
        match self.buf.pop() {
            Some(',') => self.buf.push(')'),
            _ => panic!("{op} called before any location was added to the ring"),
        }
    }
}
