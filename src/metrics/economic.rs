//! Economic losses avoided on rejected lots
//!
//! Priced on the high end of the avoided-waste range:
//! economic_loss_avoided = waste_max × price_per_ton

/// USD per year not lost to rejected lots
pub fn calculate_economic_loss_avoided(waste_max_tons: f64, price_per_ton: f64) -> f64 {
    waste_max_tons * price_per_ton
}
