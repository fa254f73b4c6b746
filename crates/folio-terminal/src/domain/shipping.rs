//! Sal's shipping calculator.

use std::fmt;

use super::RULE;
use super::number::{format_fixed, format_number, parse_leading_float};

const GROUND_BASE: f64 = 20.0;
const GROUND_RATES: [f64; 4] = [1.50, 3.00, 4.00, 4.75];
const DRONE_RATES: [f64; 4] = [4.50, 9.00, 12.00, 14.25];
const PREMIUM_FLAT: f64 = 125.0;

/// Per-pound rate for `weight` at the 2/6/10 lb breakpoints.
fn tier_rate(weight: f64, rates: [f64; 4]) -> f64 {
    if weight <= 2.0 {
        rates[0]
    } else if weight <= 6.0 {
        rates[1]
    } else if weight <= 10.0 {
        rates[2]
    } else {
        rates[3]
    }
}

/// Shipping options, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShippingMethod {
    Ground,
    Drone,
    Premium,
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ground => "Ground",
            Self::Drone => "Drone",
            Self::Premium => "Premium",
        })
    }
}

/// The cheapest option for a quote.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recommendation {
    pub method: ShippingMethod,
    pub cost: f64,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${})", self.method, format_fixed(self.cost, 2))
    }
}

/// Costs of all three options for one package weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShippingQuote {
    pub weight: f64,
    pub ground: f64,
    pub drone: f64,
    pub premium: f64,
}

impl ShippingQuote {
    #[must_use]
    pub fn for_weight(weight: f64) -> Self {
        Self {
            weight,
            ground: GROUND_BASE + weight * tier_rate(weight, GROUND_RATES),
            drone: weight * tier_rate(weight, DRONE_RATES),
            premium: PREMIUM_FLAT,
        }
    }

    /// Cheapest option; on equal cost ground beats drone beats premium.
    #[must_use]
    pub fn recommendation(&self) -> Recommendation {
        let candidates = [
            (ShippingMethod::Drone, self.drone),
            (ShippingMethod::Premium, self.premium),
        ];
        let mut best = Recommendation {
            method: ShippingMethod::Ground,
            cost: self.ground,
        };
        for (method, cost) in candidates {
            if cost < best.cost {
                best = Recommendation { method, cost };
            }
        }
        best
    }
}

/// Opening lines shown when the app is selected.
#[must_use]
pub fn banner() -> Vec<String> {
    vec![
        ">>> Sal's Shipping Calculator Loaded".to_owned(),
        "Type a package weight (lbs) to compare shipping rates.".to_owned(),
    ]
}

/// Quotes a package weight typed by the user.
#[must_use]
pub fn step(input: &str) -> Vec<String> {
    let Some(weight) = parse_leading_float(input) else {
        return vec!["Error: Please enter a valid number for weight.".to_owned()];
    };

    let quote = ShippingQuote::for_weight(weight);
    let recommendation = quote.recommendation();
    vec![
        format!("Checking rates for {} lbs...", format_number(weight)),
        RULE.to_owned(),
        format!("Ground Shipping: ${}", format_fixed(quote.ground, 2)),
        format!("Drone Shipping:  ${}", format_fixed(quote.drone, 2)),
        format!("Premium Ground:  ${}", format_fixed(quote.premium, 2)),
        RULE.to_owned(),
        format!(
            "Recommendation: Use {} Shipping (${})",
            recommendation.method,
            format_fixed(recommendation.cost, 2)
        ),
    ]
}
