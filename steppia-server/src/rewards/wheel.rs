//! Roulette wheel
//!
//! Weighted segments the server draws from when the client does not send
//! its own outcome label.

use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};
use shared::models::WheelSegment;

/// Default wheel shown to clients
pub const DEFAULT_SEGMENTS: [(&str, u32); 4] = [
    ("特賞ギフト券", 1),
    ("コンサル面談券", 2),
    ("カフェ券", 2),
    ("ハズレ", 5),
];

/// Label used when a wheel has no drawable segment
pub const MISS_LABEL: &str = "ハズレ";

#[derive(Debug, Clone)]
pub struct Wheel {
    segments: Vec<WheelSegment>,
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new(
            DEFAULT_SEGMENTS
                .iter()
                .map(|(label, weight)| WheelSegment {
                    label: label.to_string(),
                    weight: *weight,
                })
                .collect(),
        )
    }
}

impl Wheel {
    /// Zero-weight segments are kept for display but never drawn.
    pub fn new(segments: Vec<WheelSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[WheelSegment] {
        &self.segments
    }

    /// Draw one label, weighted
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        match WeightedIndex::new(self.segments.iter().map(|s| s.weight)) {
            Ok(dist) => self.segments[dist.sample(rng)].label.clone(),
            // empty wheel or all weights zero
            Err(_) => MISS_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn draws_only_from_segments() {
        let wheel = Wheel::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let label = wheel.draw(&mut rng);
            assert!(DEFAULT_SEGMENTS.iter().any(|(l, _)| *l == label));
        }
    }

    #[test]
    fn zero_weight_is_never_drawn() {
        let wheel = Wheel::new(vec![
            WheelSegment {
                label: "特賞".into(),
                weight: 0,
            },
            WheelSegment {
                label: "ハズレ".into(),
                weight: 1,
            },
        ]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(wheel.draw(&mut rng), "ハズレ");
        }
    }

    #[test]
    fn empty_wheel_misses() {
        let wheel = Wheel::new(vec![]);
        assert_eq!(wheel.draw(&mut StdRng::seed_from_u64(0)), MISS_LABEL);
    }
}
