//! Fare computation.
//!
//! `price = BASE_FARE + (COMFORT_SURCHARGE if comfort) + SERVICE_SURCHARGE × services`

use crate::model::Tariff;

pub const BASE_FARE: f64 = 300.0;
pub const COMFORT_SURCHARGE: f64 = 200.0;
/// Per add-on service (child seat, wifi, ...).
pub const SERVICE_SURCHARGE: f64 = 50.0;

/// Base price of the fare class.
pub fn base_price(tariff: &Tariff) -> f64 {
    if tariff.is_comfort() {
        BASE_FARE + COMFORT_SURCHARGE
    } else {
        BASE_FARE
    }
}

pub fn quote(tariff: &Tariff, selected_services: &[String]) -> f64 {
    base_price(tariff) + SERVICE_SURCHARGE * selected_services.len() as f64
}
