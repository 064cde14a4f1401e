//! Sentiment gauge figure.

use serde::Serialize;

/// Upper bound of the gauge scale.
pub const GAUGE_MAX: f64 = 100.0;

/// Map a polarity in [-1, 1] onto the 0..=100 gauge scale.
pub fn normalize(score: f64) -> f64 {
    (score + 1.0) * 50.0
}

/// Colored band of the gauge dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GaugeBand {
    /// [0, 30)
    Red,
    /// [30, 70)
    Yellow,
    /// [70, 100]
    Green,
}

impl GaugeBand {
    /// All bands in dial order.
    pub const ALL: [GaugeBand; 3] = [GaugeBand::Red, GaugeBand::Yellow, GaugeBand::Green];

    /// The band containing a gauge value.
    pub fn for_value(value: f64) -> Self {
        if value < 30.0 {
            Self::Red
        } else if value < 70.0 {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    /// Start and end of the band on the gauge scale.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Red => (0.0, 30.0),
            Self::Yellow => (30.0, 70.0),
            Self::Green => (70.0, GAUGE_MAX),
        }
    }
}

/// Everything needed to draw the sentiment gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeFigure {
    pub title: String,
    /// Average polarity the gauge was built from.
    pub score: f64,
    /// Gauge value, `normalize(score)`.
    pub value: f64,
    /// Band the value falls in.
    pub band: GaugeBand,
    /// Position of the threshold marker.
    pub threshold: f64,
}

/// Build the gauge for a company's average sentiment.
pub fn sentiment_gauge(score: f64, company_name: &str) -> GaugeFigure {
    let value = normalize(score);
    GaugeFigure {
        title: format!("Sentiment pour {}", company_name),
        score,
        value,
        band: GaugeBand::for_value(value),
        threshold: value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_endpoints() {
        assert_eq!(normalize(-1.0), 0.0);
        assert_eq!(normalize(0.0), 50.0);
        assert_eq!(normalize(1.0), 100.0);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(GaugeBand::for_value(0.0), GaugeBand::Red);
        assert_eq!(GaugeBand::for_value(29.99), GaugeBand::Red);
        assert_eq!(GaugeBand::for_value(30.0), GaugeBand::Yellow);
        assert_eq!(GaugeBand::for_value(69.99), GaugeBand::Yellow);
        assert_eq!(GaugeBand::for_value(70.0), GaugeBand::Green);
        assert_eq!(GaugeBand::for_value(100.0), GaugeBand::Green);
    }

    #[test]
    fn test_bands_cover_scale() {
        let ranges: Vec<_> = GaugeBand::ALL.iter().map(|b| b.range()).collect();
        assert_eq!(ranges.first().map(|r| r.0), Some(0.0));
        assert_eq!(ranges.last().map(|r| r.1), Some(GAUGE_MAX));
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].1, pair[1].0);
        }
    }

    #[test]
    fn test_gauge_figure() {
        let figure = sentiment_gauge(0.5, "Airbus");
        assert_eq!(figure.title, "Sentiment pour Airbus");
        assert_eq!(figure.value, 75.0);
        assert_eq!(figure.threshold, 75.0);
        assert_eq!(figure.band, GaugeBand::Green);
    }
}
