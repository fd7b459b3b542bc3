use ordered_float::OrderedFloat;
use tracing::warn;

use crate::core::{Attribute, DataPoint, nice_ticks};
use crate::error::{ChartError, ChartResult};

/// Half-width added around a zero-span domain so its single value lands mid-range.
const DEGENERATE_DOMAIN_PADDING: f64 = 0.5;
/// Padding floor relative to the value's magnitude, for values where ±0.5 rounds away.
const DEGENERATE_DOMAIN_RELATIVE_PADDING: f64 = 1e-9;

/// Continuous linear mapping from a data domain to a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to pixels. Non-finite input yields non-finite output.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Maps pixels back to the domain. A zero-width range maps everything to the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Nice tick values inside the domain, roughly `count` of them.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain_start, self.domain_end, count)
    }

    /// Step between consecutive ticks returned by [`LinearScale::ticks`].
    #[must_use]
    pub fn tick_step(self, count: usize) -> f64 {
        let ticks = self.ticks(count);
        match ticks.as_slice() {
            [first, second, ..] => second - first,
            _ => (self.domain_end - self.domain_start).abs(),
        }
    }
}

/// Builds the scale for `attribute` over every point in `points`.
///
/// The domain is `[min, max]` of the attribute, ignoring non-finite values.
/// A zero-span domain is padded symmetrically and an empty column falls back to
/// `[0, 1]`, so the result is always a usable scale.
pub fn build_scale(
    points: &[DataPoint],
    attribute: Attribute,
    range: (f64, f64),
) -> ChartResult<LinearScale> {
    let values = points
        .iter()
        .map(|point| point.value(attribute))
        .filter(|value| value.is_finite())
        .map(OrderedFloat);

    let bounds = values.fold(None, |acc: Option<(OrderedFloat<f64>, OrderedFloat<f64>)>, v| {
        Some(match acc {
            Some((min, max)) => (min.min(v), max.max(v)),
            None => (v, v),
        })
    });

    let domain = match bounds {
        None => {
            warn!(
                attribute = attribute.key(),
                points = points.len(),
                "no finite values for attribute, using unit domain"
            );
            (0.0, 1.0)
        }
        Some((min, max)) if min == max => {
            warn!(
                attribute = attribute.key(),
                value = min.0,
                "zero-span domain, padding around single value"
            );
            let pad = DEGENERATE_DOMAIN_PADDING
                .max(min.0.abs() * DEGENERATE_DOMAIN_RELATIVE_PADDING);
            (min.0 - pad, max.0 + pad)
        }
        Some((min, max)) => (min.0, max.0),
    };

    LinearScale::new(domain, range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(value: f64) -> DataPoint {
        DataPoint::new("S", "S").with_value(Attribute::Poverty, value)
    }

    #[test]
    fn map_and_invert_round_trip() {
        let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");
        let px = scale.map(42.5);
        assert!((scale.invert(px) - 42.5).abs() <= 1e-9);
    }

    #[test]
    fn inverted_range_maps_max_to_top() {
        let scale = LinearScale::new((0.0, 10.0), (380.0, 0.0)).expect("valid scale");
        assert_eq!(scale.map(0.0), 380.0);
        assert_eq!(scale.map(10.0), 0.0);
    }

    #[test]
    fn zero_span_domain_is_rejected_by_constructor() {
        assert!(LinearScale::new((1.0, 1.0), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((0.0, 1.0), (0.0, f64::NAN)).is_err());
    }

    #[test]
    fn build_scale_ignores_nan_values() {
        let points = vec![point(3.0), point(f64::NAN), point(9.0)];
        let scale = build_scale(&points, Attribute::Poverty, (0.0, 100.0)).expect("scale");
        assert_eq!(scale.domain(), (3.0, 9.0));
    }

    #[test]
    fn degenerate_domain_maps_to_mid_range() {
        let points = vec![point(7.0), point(7.0)];
        let scale = build_scale(&points, Attribute::Poverty, (0.0, 100.0)).expect("scale");
        assert_eq!(scale.map(7.0), 50.0);
    }

    #[test]
    fn degenerate_domain_padding_scales_with_magnitude() {
        let points = vec![point(1e17), point(1e17)];
        let scale = build_scale(&points, Attribute::Poverty, (0.0, 100.0)).expect("scale");
        let (lo, hi) = scale.domain();
        assert!(lo < 1e17 && hi > 1e17);
        assert!((scale.map(1e17) - 50.0).abs() <= 1e-6);
    }

    #[test]
    fn empty_points_use_unit_domain() {
        let scale = build_scale(&[], Attribute::Age, (0.0, 100.0)).expect("scale");
        assert_eq!(scale.domain(), (0.0, 1.0));
    }
}
