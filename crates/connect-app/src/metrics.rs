// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Aggregates computed over a full record collection for summary cards, and
//! bar scaling for the analytics chart.

use crate::format::{format_compact, format_percent};

type Predicate<'a, R> = Box<dyn Fn(&R) -> bool + 'a>;
type Field<'a, R> = Box<dyn Fn(&R) -> f64 + 'a>;

pub enum Aggregation<'a, R> {
    Count(Predicate<'a, R>),
    Sum(Field<'a, R>),
    /// `round(100 * count(numerator) / count(denominator))`.
    Ratio {
        numerator: Predicate<'a, R>,
        denominator: Predicate<'a, R>,
    },
}

pub struct MetricSpec<'a, R> {
    pub name: &'static str,
    pub aggregation: Aggregation<'a, R>,
}

impl<'a, R> MetricSpec<'a, R> {
    pub fn count(name: &'static str, predicate: impl Fn(&R) -> bool + 'a) -> Self {
        Self {
            name,
            aggregation: Aggregation::Count(Box::new(predicate)),
        }
    }

    pub fn sum(name: &'static str, field: impl Fn(&R) -> f64 + 'a) -> Self {
        Self {
            name,
            aggregation: Aggregation::Sum(Box::new(field)),
        }
    }

    pub fn ratio(
        name: &'static str,
        numerator: impl Fn(&R) -> bool + 'a,
        denominator: impl Fn(&R) -> bool + 'a,
    ) -> Self {
        Self {
            name,
            aggregation: Aggregation::Ratio {
                numerator: Box::new(numerator),
                denominator: Box::new(denominator),
            },
        }
    }

    fn evaluate(&self, records: &[R]) -> MetricValue {
        match &self.aggregation {
            Aggregation::Count(predicate) => {
                MetricValue::Count(records.iter().filter(|&record| predicate(record)).count())
            }
            Aggregation::Sum(field) => MetricValue::Sum(
                records
                    .iter()
                    .map(|record| field(record))
                    .filter(|value| value.is_finite())
                    .sum(),
            ),
            Aggregation::Ratio {
                numerator,
                denominator,
            } => {
                let top = records.iter().filter(|&record| numerator(record)).count();
                let bottom = records.iter().filter(|&record| denominator(record)).count();
                MetricValue::Percent(rounded_percent(top, bottom))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Count(usize),
    Sum(f64),
    Percent(u32),
}

impl MetricValue {
    pub fn display(self) -> String {
        match self {
            Self::Count(count) => count.to_string(),
            Self::Sum(total) => format_compact(total),
            Self::Percent(percent) => format_percent(percent),
        }
    }

    pub fn as_count(self) -> Option<usize> {
        match self {
            Self::Count(count) => Some(count),
            _ => None,
        }
    }

    pub fn as_sum(self) -> Option<f64> {
        match self {
            Self::Sum(total) => Some(total),
            _ => None,
        }
    }

    pub fn as_percent(self) -> Option<u32> {
        match self {
            Self::Percent(percent) => Some(percent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DerivedMetric {
    pub name: &'static str,
    pub value: MetricValue,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedMetrics(Vec<DerivedMetric>);

impl DerivedMetrics {
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.0
            .iter()
            .find(|metric| metric.name == name)
            .map(|metric| metric.value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DerivedMetric> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Evaluates every spec against `records`, in spec order.
pub fn derive_metrics<R>(records: &[R], specs: &[MetricSpec<'_, R>]) -> DerivedMetrics {
    DerivedMetrics(
        specs
            .iter()
            .map(|spec| DerivedMetric {
                name: spec.name,
                value: spec.evaluate(records),
            })
            .collect(),
    )
}

/// Integer percentage rounded half-up; `0` when the denominator is empty.
pub fn rounded_percent(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 0;
    }
    let numerator = numerator as u128;
    let denominator = denominator as u128;
    let rounded = (200 * numerator + denominator) / (2 * denominator);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// Scales `values` linearly so the largest becomes `target_max_height`.
///
/// Negative and non-finite inputs render as empty bars. When nothing is
/// positive every height is zero.
pub fn scale_to_chart(values: &[f64], target_max_height: f64) -> Vec<f64> {
    let max = values
        .iter()
        .copied()
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values
        .iter()
        .map(|value| {
            if value.is_finite() && *value > 0.0 {
                value / max * target_max_height
            } else {
                0.0
            }
        })
        .collect()
}
