use serde::Serialize;

/// A point in sparkline space: x grows rightwards, y grows downwards from the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Line and area geometry for a series drawn into a `width` x `height` box.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SparklinePath {
    pub width: f64,
    pub height: f64,
    /// One point per series entry, left to right.
    pub points: Vec<Point>,
    /// `points` closed against the baseline: starts at `(0, height)` and ends at
    /// `(width, height)`.
    pub fill: Vec<Point>,
}

/// Outcome of laying out a series. `NoData` means the series was empty, which
/// renders differently from a flat line of zeroes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sparkline {
    NoData,
    Path(SparklinePath),
}

impl Sparkline {
    pub fn path(&self) -> Option<&SparklinePath> {
        match self {
            Sparkline::NoData => None,
            Sparkline::Path(path) => Some(path),
        }
    }
}

/// Map `series` onto a `width` x `height` box.
///
/// x is spread evenly by index across `[0, width]`; y is scaled against the series
/// maximum (at least 1) so the tallest week touches the top edge and a zero week
/// sits on the baseline at `height`.
pub fn sparkline_geometry(series: &[u64], width: f64, height: f64) -> Sparkline {
    if series.is_empty() {
        return Sparkline::NoData;
    }

    let max = series.iter().copied().max().unwrap_or(0).max(1) as f64;
    let divisor = series.len().saturating_sub(1).max(1) as f64;

    let points: Vec<Point> = series
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = (i as f64 / divisor) * width;
            let y = height - (value as f64 / max) * height;
            Point::new(x, y)
        })
        .collect();

    let mut fill = Vec::with_capacity(points.len() + 2);
    fill.push(Point::new(0.0, height));
    fill.extend_from_slice(&points);
    fill.push(Point::new(width, height));

    Sparkline::Path(SparklinePath {
        width,
        height,
        points,
        fill,
    })
}

impl SparklinePath {
    /// `x,y` pairs with one decimal, space separated, for a polyline.
    pub fn polyline_points(&self) -> String {
        self.points
            .iter()
            .map(|p| format!("{:.1},{:.1}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Closed path data for the filled area under the line.
    pub fn fill_path_data(&self) -> String {
        let mut data = String::new();
        for (i, p) in self.fill.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            if i > 0 {
                data.push(' ');
            }
            data.push_str(&format!("{cmd}{:.1},{:.1}", p.x, p.y));
        }
        data.push_str(" Z");
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_series_is_no_data() {
        assert_eq!(sparkline_geometry(&[], 80.0, 16.0), Sparkline::NoData);
    }

    #[test]
    fn all_zero_series_is_flat_at_baseline() {
        let spark = sparkline_geometry(&[0, 0, 0], 80.0, 16.0);
        let path = spark.path().expect("zero series still has a path");
        assert_eq!(
            path.points,
            vec![
                Point::new(0.0, 16.0),
                Point::new(40.0, 16.0),
                Point::new(80.0, 16.0)
            ]
        );
    }

    #[test]
    fn single_point_sits_at_origin_column() {
        let spark = sparkline_geometry(&[5], 100.0, 20.0);
        let path = spark.path().unwrap();
        assert_eq!(path.points, vec![Point::new(0.0, 0.0)]);
    }

    #[test]
    fn values_scale_against_maximum() {
        let spark = sparkline_geometry(&[0, 2, 4], 10.0, 20.0);
        let path = spark.path().unwrap();
        assert_eq!(path.points[0], Point::new(0.0, 20.0));
        assert_eq!(path.points[1], Point::new(5.0, 10.0));
        assert_eq!(path.points[2], Point::new(10.0, 0.0));
    }

    #[test]
    fn fill_is_closed_against_baseline() {
        let spark = sparkline_geometry(&[1, 3], 10.0, 6.0);
        let path = spark.path().unwrap();
        assert_eq!(path.fill.len(), path.points.len() + 2);
        assert_eq!(path.fill.first(), Some(&Point::new(0.0, 6.0)));
        assert_eq!(path.fill.last(), Some(&Point::new(10.0, 6.0)));
        assert_eq!(&path.fill[1..3], path.points.as_slice());
    }

    #[test]
    fn path_strings() {
        let spark = sparkline_geometry(&[0, 1], 10.0, 4.0);
        let path = spark.path().unwrap();
        assert_eq!(path.polyline_points(), "0.0,4.0 10.0,0.0");
        assert_eq!(path.fill_path_data(), "M0.0,4.0 L0.0,4.0 L10.0,0.0 L10.0,4.0 Z");
    }
}
