//! # Tongue Weight Calculation
//!
//! Computes the tongue weight of a trailer from its load layout and axle
//! positions via a two-support moment balance about the hitch.
//!
//! ## Assumptions
//!
//! - The hitch sits at the origin of the distance axis (0 in)
//! - All loads act at discrete points along the trailer's longitudinal axis
//! - The axle group carries weight collectively at the mean axle position
//!   (single support-point model; per-axle load distribution of a
//!   statically-indeterminate multi-axle group is not computed)
//! - Pounds and inches throughout; no unit conversion
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use tow_core::calculations::tongue::{calculate, Axle, TrailerInput, TrailerLoad};
//!
//! let input = TrailerInput {
//!     label: "TR-1".to_string(),
//!     loads: vec![TrailerLoad::new(3000.0, 178.0)],
//!     axles: vec![Axle::new(180.0), Axle::new(228.0)],
//! };
//!
//! let result = calculate(&input).unwrap();
//!
//! println!("Total weight: {:.0} lb", result.total_weight_lb);
//! println!("Tongue weight: {:.0} lb ({:.1}%)", result.tongue_weight_lb, result.tongue_weight_pct);
//! println!("In range: {}", result.is_in_range());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{TowError, TowResult};

/// Lower bound of the recommended tongue weight band (% of total weight, inclusive)
pub const RECOMMENDED_MIN_PCT: f64 = 10.0;

/// Upper bound of the recommended tongue weight band (% of total weight, inclusive)
pub const RECOMMENDED_MAX_PCT: f64 = 15.0;

/// One load (machine, cargo item) positioned on the trailer.
///
/// ## JSON Example
///
/// ```json
/// { "weight_lb": 2000.0, "distance_in": 100.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailerLoad {
    /// Load weight in pounds
    pub weight_lb: f64,

    /// Distance from the hitch to the load's center of gravity, in inches
    pub distance_in: f64,
}

impl TrailerLoad {
    pub fn new(weight_lb: f64, distance_in: f64) -> Self {
        Self {
            weight_lb,
            distance_in,
        }
    }

    /// Moment of this load about the hitch (in-lb)
    pub fn moment_inlb(&self) -> f64 {
        self.weight_lb * self.distance_in
    }

    /// Portion of this load carried at the hitch (lb) for a given axle
    /// group position.
    ///
    /// From the moment balance between the hitch and the axle group:
    /// `W * (1 - x / x_axle)`. Negative when the load sits beyond the axle
    /// group - that load lifts the hitch instead of pressing on it.
    pub fn hitch_share_lb(&self, axle_position_in: f64) -> f64 {
        self.weight_lb * (1.0 - self.distance_in / axle_position_in)
    }
}

/// One axle position on the trailer.
///
/// ## JSON Example
///
/// ```json
/// { "distance_in": 180.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axle {
    /// Distance from the hitch to the axle centerline, in inches
    pub distance_in: f64,
}

impl Axle {
    pub fn new(distance_in: f64) -> Self {
        Self { distance_in }
    }
}

/// Input parameters for a tongue weight calculation.
///
/// A configuration is constructed fresh per computation; the engine keeps no
/// state between calls. Order of loads and axles is irrelevant.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "TR-1",
///   "loads": [
///     { "weight_lb": 2000.0, "distance_in": 100.0 },
///     { "weight_lb": 500.0, "distance_in": 150.0 }
///   ],
///   "axles": [
///     { "distance_in": 180.0 },
///     { "distance_in": 228.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrailerInput {
    /// User label for this configuration (e.g., "TR-1", "Excavator haul")
    pub label: String,

    /// Loads on the trailer deck
    pub loads: Vec<TrailerLoad>,

    /// Axle positions
    pub axles: Vec<Axle>,
}

impl TrailerInput {
    /// Validate input parameters.
    ///
    /// Checks per-field sanity (finite, non-negative) and the configuration
    /// invariants: at least one load and axle, positive total weight,
    /// positive mean axle position.
    pub fn validate(&self) -> TowResult<()> {
        if self.loads.is_empty() {
            return Err(TowError::invalid_configuration(
                "loads",
                "0",
                "At least one load is required",
            ));
        }
        if self.axles.is_empty() {
            return Err(TowError::invalid_configuration(
                "axles",
                "0",
                "At least one axle is required",
            ));
        }

        for (i, load) in self.loads.iter().enumerate() {
            if !load.weight_lb.is_finite() || load.weight_lb < 0.0 {
                return Err(TowError::invalid_input(
                    format!("loads[{}].weight_lb", i),
                    load.weight_lb.to_string(),
                    "Weight must be finite and non-negative",
                ));
            }
            if !load.distance_in.is_finite() || load.distance_in < 0.0 {
                return Err(TowError::invalid_input(
                    format!("loads[{}].distance_in", i),
                    load.distance_in.to_string(),
                    "Distance from hitch must be finite and non-negative",
                ));
            }
        }

        for (i, axle) in self.axles.iter().enumerate() {
            if !axle.distance_in.is_finite() || axle.distance_in < 0.0 {
                return Err(TowError::invalid_input(
                    format!("axles[{}].distance_in", i),
                    axle.distance_in.to_string(),
                    "Axle position must be finite and non-negative",
                ));
            }
        }

        let total = self.total_weight_lb();
        if total <= 0.0 {
            return Err(TowError::invalid_configuration(
                "loads",
                total.to_string(),
                "Total weight must be positive - at least one load must carry weight",
            ));
        }

        let axle_position = self.axle_position_in();
        if axle_position <= 0.0 {
            return Err(TowError::invalid_configuration(
                "axles",
                axle_position.to_string(),
                "Mean axle position must be behind the hitch",
            ));
        }

        Ok(())
    }

    /// Total trailer weight (lb): sum of all load weights
    pub fn total_weight_lb(&self) -> f64 {
        self.loads.iter().map(|l| l.weight_lb).sum()
    }

    /// Total moment about the hitch (in-lb): sum of weight x distance
    pub fn total_moment_inlb(&self) -> f64 {
        self.loads.iter().map(|l| l.moment_inlb()).sum()
    }

    /// Effective axle group position (in): arithmetic mean of axle distances.
    ///
    /// The axle group is treated as a single support reaction point at this
    /// position. Returns 0.0 for an empty axle list; `validate()` rejects
    /// that configuration before it reaches the moment balance.
    pub fn axle_position_in(&self) -> f64 {
        if self.axles.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.axles.iter().map(|a| a.distance_in).sum();
        sum / self.axles.len() as f64
    }
}

/// Classification of the tongue weight percentage against the recommended
/// 10-15% band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RangeStatus {
    /// Within the recommended band (inclusive on both ends)
    InRange,
    /// Below the band - risk of trailer sway
    TooLow,
    /// Above the band - risk of overloading the tow vehicle
    TooHigh,
}

impl RangeStatus {
    /// Classify a tongue weight percentage against the recommended band.
    ///
    /// Both bounds are inclusive: exactly 10.0% and exactly 15.0% are in
    /// range.
    pub fn classify(tongue_weight_pct: f64) -> Self {
        if tongue_weight_pct < RECOMMENDED_MIN_PCT {
            RangeStatus::TooLow
        } else if tongue_weight_pct > RECOMMENDED_MAX_PCT {
            RangeStatus::TooHigh
        } else {
            RangeStatus::InRange
        }
    }

    pub fn is_in_range(&self) -> bool {
        matches!(self, RangeStatus::InRange)
    }

    /// Short display name for reports and UI
    pub fn display_name(&self) -> &'static str {
        match self {
            RangeStatus::InRange => "IN RANGE",
            RangeStatus::TooLow => "TOO LOW",
            RangeStatus::TooHigh => "TOO HIGH",
        }
    }

    /// Operator-facing caution for out-of-band configurations
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            RangeStatus::InRange => None,
            RangeStatus::TooLow => Some("Tongue weight is too low - risk of trailer sway"),
            RangeStatus::TooHigh => {
                Some("Tongue weight is too high - risk of overloading the tow vehicle")
            }
        }
    }
}

/// Results from a tongue weight calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_weight_lb": 2500.0,
///   "total_moment_inlb": 275000.0,
///   "axle_position_in": 204.0,
///   "axle_reaction_lb": 1348.0,
///   "tongue_weight_lb": 1152.0,
///   "tongue_weight_pct": 46.1,
///   "status": "TooHigh"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TongueResult {
    /// Total trailer weight (lb)
    pub total_weight_lb: f64,

    /// Total load moment about the hitch (in-lb)
    pub total_moment_inlb: f64,

    /// Effective axle group position used as the support point (in)
    pub axle_position_in: f64,

    /// Reaction carried by the axle group (lb): total moment / axle position
    pub axle_reaction_lb: f64,

    /// Weight carried at the hitch (lb)
    ///
    /// Negative when the load centroid sits behind the axle group - the
    /// coupling is being lifted rather than loaded.
    pub tongue_weight_lb: f64,

    /// Tongue weight as a percentage of total weight
    pub tongue_weight_pct: f64,

    /// Classification against the recommended 10-15% band
    pub status: RangeStatus,
}

impl TongueResult {
    /// Check if the tongue weight sits inside the recommended band
    pub fn is_in_range(&self) -> bool {
        self.status.is_in_range()
    }

    /// Operator-facing caution, present when out of band
    pub fn warning(&self) -> Option<&'static str> {
        self.status.warning()
    }
}

/// Calculate tongue weight and classify it against the recommended band.
///
/// This is a pure function: deterministic, side-effect free, no I/O. The
/// result depends only on the input configuration.
///
/// # Arguments
///
/// * `input` - Trailer configuration (loads and axle positions)
///
/// # Returns
///
/// * `Ok(TongueResult)` - Weights, percentage, and range classification
/// * `Err(TowError)` - Structured error if the configuration is degenerate
///
/// # Example
///
/// ```rust
/// use tow_core::calculations::tongue::{calculate, Axle, TrailerInput, TrailerLoad};
///
/// // 1000 lb load 30 in behind the hitch, single axle at 100 in
/// let input = TrailerInput {
///     label: "Dolly".to_string(),
///     loads: vec![TrailerLoad::new(1000.0, 30.0)],
///     axles: vec![Axle::new(100.0)],
/// };
///
/// let result = calculate(&input).unwrap();
/// assert!((result.tongue_weight_lb - 700.0).abs() < 1e-9);
/// assert!(!result.is_in_range());
/// ```
pub fn calculate(input: &TrailerInput) -> TowResult<TongueResult> {
    // Validate inputs
    input.validate()?;

    let total_weight_lb = input.total_weight_lb();
    let total_moment_inlb = input.total_moment_inlb();
    let axle_position_in = input.axle_position_in();

    // Two-support moment balance: the axle group reaction balances the
    // total moment about the hitch; the hitch carries the rest. Summing
    // per-load hitch shares keeps the sign of each contribution explicit
    // when a load sits beyond the axle group.
    let axle_reaction_lb = total_moment_inlb / axle_position_in;
    let tongue_weight_lb: f64 = input
        .loads
        .iter()
        .map(|l| l.hitch_share_lb(axle_position_in))
        .sum();

    let tongue_weight_pct = 100.0 * tongue_weight_lb / total_weight_lb;
    let status = RangeStatus::classify(tongue_weight_pct);

    Ok(TongueResult {
        total_weight_lb,
        total_moment_inlb,
        axle_position_in,
        axle_reaction_lb,
        tongue_weight_lb,
        tongue_weight_pct,
        status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_load(weight_lb: f64, distance_in: f64, axle_in: f64) -> TrailerInput {
        TrailerInput {
            label: "Test Trailer".to_string(),
            loads: vec![TrailerLoad::new(weight_lb, distance_in)],
            axles: vec![Axle::new(axle_in)],
        }
    }

    #[test]
    fn test_single_load_near_hitch() {
        // 1000 lb at 30 in, axle at 100 in:
        // tongue = 1000 * (1 - 30/100) = 700 lb, 70% of total
        let input = single_load(1000.0, 30.0, 100.0);
        let result = calculate(&input).unwrap();

        assert!((result.total_weight_lb - 1000.0).abs() < 1e-9);
        assert!((result.axle_position_in - 100.0).abs() < 1e-9);
        assert!((result.tongue_weight_lb - 700.0).abs() < 1e-9);
        assert!((result.tongue_weight_pct - 70.0).abs() < 1e-9);
        assert_eq!(result.status, RangeStatus::TooHigh);
    }

    #[test]
    fn test_tandem_axles_use_mean_position() {
        // 3000 lb at 80 in, axles at 95 and 105 in (mean 100):
        // tongue = 3000 * (1 - 80/100) = 600 lb, 20%
        let input = TrailerInput {
            label: "Tandem".to_string(),
            loads: vec![TrailerLoad::new(3000.0, 80.0)],
            axles: vec![Axle::new(95.0), Axle::new(105.0)],
        };
        let result = calculate(&input).unwrap();

        assert!((result.axle_position_in - 100.0).abs() < 1e-9);
        assert!((result.tongue_weight_lb - 600.0).abs() < 1e-9);
        assert!((result.tongue_weight_pct - 20.0).abs() < 1e-9);
        assert_eq!(result.status, RangeStatus::TooHigh);
    }

    #[test]
    fn test_multiple_loads_sum_their_shares() {
        // 2000 lb at 10 in + 500 lb at 50 in, axle at 100 in:
        // tongue = 2000*(1 - 10/100) + 500*(1 - 50/100) = 1800 + 250 = 2050
        let input = TrailerInput {
            label: "Two loads".to_string(),
            loads: vec![TrailerLoad::new(2000.0, 10.0), TrailerLoad::new(500.0, 50.0)],
            axles: vec![Axle::new(100.0)],
        };
        let result = calculate(&input).unwrap();

        assert!((result.total_weight_lb - 2500.0).abs() < 1e-9);
        assert!((result.tongue_weight_lb - 2050.0).abs() < 1e-9);
        assert!((result.tongue_weight_pct - 82.0).abs() < 1e-9);
        assert_eq!(result.status, RangeStatus::TooHigh);
    }

    #[test]
    fn test_load_near_axles_lands_in_range() {
        // 3000 lb at 88 in, axle at 100 in:
        // tongue = 3000 * (1 - 88/100) = 360 lb = 12%
        let input = single_load(3000.0, 88.0, 100.0);
        let result = calculate(&input).unwrap();

        assert!((result.tongue_weight_lb - 360.0).abs() < 1e-9);
        assert!((result.tongue_weight_pct - 12.0).abs() < 1e-6);
        assert_eq!(result.status, RangeStatus::InRange);
        assert!(result.warning().is_none());
    }

    #[test]
    fn test_classification_boundaries_inclusive() {
        assert_eq!(RangeStatus::classify(10.0), RangeStatus::InRange);
        assert_eq!(RangeStatus::classify(15.0), RangeStatus::InRange);
        assert_eq!(RangeStatus::classify(9.999), RangeStatus::TooLow);
        assert_eq!(RangeStatus::classify(15.001), RangeStatus::TooHigh);
        assert_eq!(RangeStatus::classify(12.5), RangeStatus::InRange);
    }

    #[test]
    fn test_warnings_name_the_risk() {
        assert!(RangeStatus::TooLow.warning().unwrap().contains("sway"));
        assert!(RangeStatus::TooHigh.warning().unwrap().contains("overloading"));
        assert!(RangeStatus::InRange.warning().is_none());
    }

    #[test]
    fn test_tongue_weight_bounded_when_loads_inside_axle_span() {
        // All load distances within [0, axle_position]:
        // 0 <= tongue weight <= total weight
        let input = TrailerInput {
            label: "Bounded".to_string(),
            loads: vec![
                TrailerLoad::new(500.0, 0.0),
                TrailerLoad::new(750.0, 40.0),
                TrailerLoad::new(250.0, 100.0),
            ],
            axles: vec![Axle::new(100.0)],
        };
        let result = calculate(&input).unwrap();

        assert!(result.tongue_weight_lb >= 0.0);
        assert!(result.tongue_weight_lb <= result.total_weight_lb);
        // Load at the hitch contributes fully, load on the axle not at all
        assert!((result.tongue_weight_lb - (500.0 + 750.0 * 0.6)).abs() < 1e-9);
    }

    #[test]
    fn test_load_beyond_axles_lifts_the_hitch() {
        // 1000 lb at 120 in with the axle at 100 in: the hitch share is
        // 1000 * (1 - 1.2) = -200 lb
        let load = TrailerLoad::new(1000.0, 120.0);
        assert!((load.hitch_share_lb(100.0) + 200.0).abs() < 1e-9);

        let input = single_load(1000.0, 120.0, 100.0);
        let result = calculate(&input).unwrap();
        assert!((result.tongue_weight_lb + 200.0).abs() < 1e-9);
        assert!((result.tongue_weight_pct + 20.0).abs() < 1e-9);
        assert_eq!(result.status, RangeStatus::TooLow);
    }

    #[test]
    fn test_tongue_equals_total_minus_axle_reaction() {
        let input = TrailerInput {
            label: "Balance".to_string(),
            loads: vec![
                TrailerLoad::new(1800.0, 60.0),
                TrailerLoad::new(2600.0, 140.0),
                TrailerLoad::new(400.0, 210.0),
            ],
            axles: vec![Axle::new(170.0), Axle::new(218.0)],
        };
        let result = calculate(&input).unwrap();

        let balance = result.total_weight_lb - result.axle_reaction_lb;
        assert!((result.tongue_weight_lb - balance).abs() < 1e-6);
    }

    #[test]
    fn test_empty_loads_rejected() {
        let input = TrailerInput {
            label: "Empty deck".to_string(),
            loads: vec![],
            axles: vec![Axle::new(100.0)],
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_empty_axles_rejected() {
        let input = TrailerInput {
            label: "No axles".to_string(),
            loads: vec![TrailerLoad::new(1000.0, 50.0)],
            axles: vec![],
        };
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_weightless_configuration_rejected() {
        // A zero-weight load is a valid row, but the total must be positive
        // for the percentage to mean anything
        let input = single_load(0.0, 50.0, 100.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_axle_group_at_hitch_rejected() {
        let input = single_load(1000.0, 50.0, 0.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn test_negative_weight_rejected() {
        let input = single_load(-100.0, 50.0, 100.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_distance_rejected() {
        let input = single_load(1000.0, f64::NAN, 100.0);
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = TrailerInput {
            label: "TR-1".to_string(),
            loads: vec![TrailerLoad::new(2000.0, 100.0)],
            axles: vec![Axle::new(180.0), Axle::new(228.0)],
        };
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: TrailerInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("tongue_weight_lb"));
        assert!(json.contains("status"));
        let roundtrip: TongueResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
