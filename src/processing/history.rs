//! Bounded point history
//!
//! Fixed-capacity ring of the most recent pen samples. Each stored sample
//! carries its distance from the sample pushed before it, so distance-based
//! filters can walk the path without recomputing square roots.

use serde::{Deserialize, Serialize};

/// Number of samples retained per stroke
pub const HISTORY_CAPACITY: usize = 64;

/// One fully assembled pen observation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenPoint {
    pub x: f64,
    pub y: f64,
    pub pressure: f64,
    pub tilt_x: f64,
    pub tilt_y: f64,
}

impl PenPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn distance_to(&self, other: &PenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A point as stored in the history
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sample {
    point: PenPoint,
    distance: f64,
}

impl Sample {
    pub fn point(&self) -> &PenPoint {
        &self.point
    }

    /// Distance from the previously pushed sample (0 for the first one)
    pub fn distance(&self) -> f64 {
        self.distance
    }
}

#[derive(Debug, Clone)]
pub struct PointHistory {
    samples: [Sample; HISTORY_CAPACITY],
    /// Index of the newest sample
    head: usize,
    len: usize,
}

impl Default for PointHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PointHistory {
    pub fn new() -> Self {
        Self {
            samples: [Sample::default(); HISTORY_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    /// Append a point, evicting the oldest one once full
    pub fn push(&mut self, point: PenPoint) {
        let distance = self
            .latest()
            .map(|prev| point.distance_to(prev.point()))
            .unwrap_or(0.0);

        let idx = if self.len == 0 {
            0
        } else {
            (self.head + 1) % HISTORY_CAPACITY
        };
        self.samples[idx] = Sample { point, distance };
        self.head = idx;
        if self.len < HISTORY_CAPACITY {
            self.len += 1;
        }
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn latest(&self) -> Option<&Sample> {
        if self.len == 0 {
            None
        } else {
            Some(&self.samples[self.head])
        }
    }

    /// Samples newest-first, paired with their age (0 = newest)
    pub fn iter_recent(&self) -> RecentSamples<'_> {
        RecentSamples {
            history: self,
            age: 0,
        }
    }
}

/// Newest-to-oldest iterator over a `PointHistory`
#[derive(Debug, Clone)]
pub struct RecentSamples<'a> {
    history: &'a PointHistory,
    age: usize,
}

impl<'a> Iterator for RecentSamples<'a> {
    type Item = (&'a Sample, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.age >= self.history.len {
            return None;
        }
        let idx = (self.history.head + HISTORY_CAPACITY - self.age) % HISTORY_CAPACITY;
        let item = (&self.history.samples[idx], self.age);
        self.age += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.history.len - self.age;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RecentSamples<'_> {}
