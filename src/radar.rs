//! Radar-chart geometry for the four-pillar metrics.
//!
//! Pure geometry over a dynamic baseline. Typical scores sit in 70..=100,
//! so the chart rescales that band to the full radius: the baseline is
//! `max(70, min(values) - 10)` and anything at or below it collapses to the
//! center. Angles follow screen coordinates (y grows downward), so -90° is
//! the top of the chart.

use serde::Serialize;

use crate::catalog::Metrics;

/// Grid rings drawn at fixed fractions of the radius.
pub const GRID_LEVELS: [f64; 4] = [0.25, 0.5, 0.75, 1.0];

/// Inset between the polygon's reach and the viewbox edge, in pixels.
const EDGE_PADDING: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance_to(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// One metric axis: fixed angle and marker color, value-dependent data point.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AxisGeometry {
    pub key: &'static str,
    pub angle_deg: f64,
    pub color: &'static str,
    pub value: u8,
    /// End of the axis line, at full radius.
    pub axis_end: Point,
    /// Where this metric's value lands.
    pub point: Point,
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarGeometry {
    pub size: f64,
    pub center: Point,
    pub radius: f64,
    pub baseline: f64,
    /// Axis order: quality (top), efficiency (right), cost (bottom),
    /// trust (left). The data polygon connects the points in this order.
    pub axes: [AxisGeometry; 4],
    /// One polygon per grid level, each with a vertex per axis.
    pub grid: [[Point; 4]; 4],
}

impl RadarGeometry {
    pub fn compute(metrics: &Metrics, size: f64) -> Self {
        let center = size / 2.0;
        let radius = size / 2.0 - EDGE_PADDING;

        let baseline = (metrics.min() as f64 - 10.0).max(70.0);
        let range = 100.0 - baseline;

        let defs: [(&'static str, f64, &'static str, u8); 4] = [
            ("quality", -90.0, "#10B981", metrics.quality),
            ("efficiency", 0.0, "#3B82F6", metrics.efficiency),
            ("cost", 90.0, "#A855F7", metrics.cost),
            ("trust", 180.0, "#F59E0B", metrics.trust),
        ];

        let project = |angle_deg: f64, distance: f64| -> Point {
            let radians = angle_deg.to_radians();
            Point {
                x: center + distance * radians.cos(),
                y: center + distance * radians.sin(),
            }
        };

        let axes = defs.map(|(key, angle_deg, color, value)| {
            let normalized = ((value as f64 - baseline) / range).clamp(0.0, 1.0);
            AxisGeometry {
                key,
                angle_deg,
                color,
                value,
                axis_end: project(angle_deg, radius),
                point: project(angle_deg, normalized * radius),
            }
        });

        let grid = GRID_LEVELS
            .map(|level| defs.map(|(_, angle_deg, _, _)| project(angle_deg, level * radius)));

        RadarGeometry {
            size,
            center: Point {
                x: center,
                y: center,
            },
            radius,
            baseline,
            axes,
            grid,
        }
    }

    pub fn data_points(&self) -> [Point; 4] {
        [
            self.axes[0].point,
            self.axes[1].point,
            self.axes[2].point,
            self.axes[3].point,
        ]
    }

    /// Render the chart: background circle, grid rings, axis lines, data
    /// polygon, and one marker per axis.
    pub fn to_svg(&self) -> String {
        let mut svg = String::with_capacity(2048);
        svg.push_str(&format!(
            "<svg width=\"{s}\" height=\"{s}\" viewBox=\"0 0 {s} {s}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
            s = self.size
        ));

        svg.push_str(&format!(
            "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"rgba(21, 94, 239, 0.03)\"/>\n",
            self.center.x, self.center.y, self.radius
        ));

        for ring in &self.grid {
            svg.push_str(&format!(
                "  <polygon points=\"{}\" fill=\"none\" stroke=\"rgba(148, 163, 184, 0.15)\" stroke-width=\"0.5\"/>\n",
                points_attr(ring)
            ));
        }

        for axis in &self.axes {
            svg.push_str(&format!(
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"rgba(148, 163, 184, 0.2)\" stroke-width=\"0.5\"/>\n",
                self.center.x, self.center.y, axis.axis_end.x, axis.axis_end.y
            ));
        }

        svg.push_str(&format!(
            "  <polygon points=\"{}\" fill=\"rgba(21, 94, 239, 0.25)\" stroke=\"#155EEF\" stroke-width=\"1.5\" stroke-linejoin=\"round\"/>\n",
            points_attr(&self.data_points())
        ));

        for axis in &self.axes {
            svg.push_str(&format!(
                "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"3.5\" fill=\"{}\" stroke=\"white\" stroke-width=\"1.5\"/>\n",
                axis.point.x, axis.point.y, axis.color
            ));
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{:.2},{:.2}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(q: u8, e: u8, c: u8, t: u8) -> Metrics {
        Metrics {
            quality: q,
            efficiency: e,
            cost: c,
            trust: t,
        }
    }

    #[test]
    fn points_stay_within_radius() {
        let size = 80.0;
        for q in (0..=100).step_by(10) {
            for e in (0..=100).step_by(20) {
                let geom = RadarGeometry::compute(&metrics(q, e, 75, 100), size);
                for p in geom.data_points() {
                    let d = p.distance_to(geom.center);
                    assert!(
                        d <= geom.radius + 1e-9,
                        "point {:?} escaped radius {} (q={q}, e={e})",
                        p,
                        geom.radius
                    );
                }
            }
        }
    }

    #[test]
    fn all_seventies_collapse_to_center() {
        let geom = RadarGeometry::compute(&metrics(70, 70, 70, 70), 80.0);
        assert_eq!(geom.baseline, 70.0);
        for p in geom.data_points() {
            assert!(p.distance_to(geom.center) < 1e-9);
        }
    }

    #[test]
    fn values_below_baseline_clamp_to_center() {
        // min=95 puts the baseline at 85; a hypothetical 80 must not go
        // negative, it lands at the center.
        let geom = RadarGeometry::compute(&metrics(95, 96, 97, 98), 80.0);
        assert_eq!(geom.baseline, 85.0);
        let clamped = RadarGeometry::compute(&metrics(95, 96, 97, 80), 80.0);
        // baseline follows the new minimum, so 80 -> max(70, 70) = 70
        assert_eq!(clamped.baseline, 70.0);
        for p in clamped.data_points() {
            assert!(p.distance_to(clamped.center) <= clamped.radius + 1e-9);
        }
    }

    #[test]
    fn baseline_never_drops_below_seventy() {
        let geom = RadarGeometry::compute(&metrics(10, 20, 30, 40), 80.0);
        assert_eq!(geom.baseline, 70.0);
        // Everything is below baseline, so the polygon degenerates to the
        // center point.
        for p in geom.data_points() {
            assert!(p.distance_to(geom.center) < 1e-9);
        }
    }

    #[test]
    fn axes_point_at_the_four_compass_directions() {
        let geom = RadarGeometry::compute(&metrics(100, 100, 100, 100), 80.0);
        let c = geom.center;
        let r = geom.radius;
        // quality: top (y decreases in screen coordinates)
        assert!((geom.axes[0].point.x - c.x).abs() < 1e-9);
        assert!((geom.axes[0].point.y - (c.y - r)).abs() < 1e-9);
        // efficiency: right
        assert!((geom.axes[1].point.x - (c.x + r)).abs() < 1e-9);
        // cost: bottom
        assert!((geom.axes[2].point.y - (c.y + r)).abs() < 1e-9);
        // trust: left
        assert!((geom.axes[3].point.x - (c.x - r)).abs() < 1e-9);
    }

    #[test]
    fn full_scores_reach_full_radius() {
        let geom = RadarGeometry::compute(&metrics(100, 100, 100, 100), 120.0);
        for p in geom.data_points() {
            assert!((p.distance_to(geom.center) - geom.radius).abs() < 1e-9);
        }
    }

    #[test]
    fn svg_contains_all_artifact_groups() {
        let geom = RadarGeometry::compute(&metrics(95, 88, 92, 90), 80.0);
        let svg = geom.to_svg();
        assert_eq!(svg.matches("<circle").count(), 1 + 4); // background + markers
        assert_eq!(svg.matches("<polygon").count(), 4 + 1); // grid rings + data
        assert_eq!(svg.matches("<line").count(), 4);
        assert!(svg.contains("#155EEF"));
    }
}
