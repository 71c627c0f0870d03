//! Pure pricing functions.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::catalog::{AddOnId, OptionKind, ServiceDefinition, ServiceOption};
use super::details::EventDetails;

/// Extra share of the price charged for every day after the first.
pub const PER_EXTRA_DAY: Decimal = dec!(0.3);

/// A chosen option value. Serialized untagged so widget JSON (`true`,
/// `"oil"`, `2`) maps directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Toggle state.
    Toggle(bool),
    /// Number of units.
    Quantity(u32),
    /// Chosen select id.
    Select(String),
}

/// Option values of one selected service, keyed by option id.
pub type ServiceOptions = BTreeMap<String, OptionValue>;

/// Selected add-ons of a quote, ordered for display.
pub type AddOnSelection = BTreeSet<AddOnId>;

/// Initial option values for a freshly added service: toggles off, selects
/// on their first choice, numbers at their default.
#[must_use]
pub fn default_options(definition: &ServiceDefinition) -> ServiceOptions {
    definition
        .options
        .iter()
        .filter_map(|option| {
            let value = match option.kind {
                OptionKind::Toggle { .. } => OptionValue::Toggle(false),
                OptionKind::Select { choices } => {
                    OptionValue::Select(choices.first()?.id.to_owned())
                }
                OptionKind::Number { default, .. } => OptionValue::Quantity(default),
            };
            Some((option.id.to_owned(), value))
        })
        .collect()
}

/// Checks `value` against the option's kind. Quantities are clamped into the
/// option's bounds; a value of the wrong kind or an unknown select id yields
/// `None`.
#[must_use]
pub fn normalize_option_value(option: &ServiceOption, value: &OptionValue) -> Option<OptionValue> {
    match (option.kind, value) {
        (OptionKind::Toggle { .. }, OptionValue::Toggle(_)) => Some(value.clone()),
        (OptionKind::Select { choices }, OptionValue::Select(id)) => choices
            .iter()
            .any(|choice| choice.id == id.as_str())
            .then(|| value.clone()),
        (OptionKind::Number { min, max, .. }, OptionValue::Quantity(units)) => {
            Some(OptionValue::Quantity((*units).clamp(min, max)))
        }
        _ => None,
    }
}

/// Price contribution of one option value. Mismatched values contribute
/// nothing.
#[must_use]
pub fn option_price(option: &ServiceOption, value: &OptionValue) -> Decimal {
    match (option.kind, value) {
        (OptionKind::Toggle { price }, OptionValue::Toggle(true)) => Decimal::from(price),
        (OptionKind::Select { choices }, OptionValue::Select(id)) => choices
            .iter()
            .find(|choice| choice.id == id.as_str())
            .map_or(Decimal::ZERO, |choice| Decimal::from(choice.price)),
        (OptionKind::Number { price_per_unit, .. }, OptionValue::Quantity(units)) => {
            Decimal::from(price_per_unit) * Decimal::from(*units)
        }
        _ => Decimal::ZERO,
    }
}

/// Base price plus every option's contribution.
#[must_use]
pub fn service_subtotal(definition: &ServiceDefinition, options: &ServiceOptions) -> Decimal {
    definition
        .options
        .iter()
        .filter_map(|option| options.get(option.id).map(|value| option_price(option, value)))
        .fold(Decimal::from(definition.base_price), |total, price| {
            total + price
        })
}

/// `1 + (days - 1) * 0.3`. Zero days price like one.
#[must_use]
pub fn duration_multiplier(days: u32) -> Decimal {
    Decimal::ONE + Decimal::from(days.saturating_sub(1)) * PER_EXTRA_DAY
}

/// A derived price breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteEstimate {
    /// Sum of service subtotals.
    pub services_subtotal: Decimal,
    /// Sum of add-on prices.
    pub add_ons_subtotal: Decimal,
    /// Services plus add-ons.
    pub subtotal: Decimal,
    /// Duration multiplier applied to the subtotal.
    pub duration_multiplier: Decimal,
    /// Final price, rounded to whole won.
    pub total: Decimal,
}

/// Derives the estimate from a selection.
#[must_use]
pub fn estimate<'a>(
    service_subtotals: impl IntoIterator<Item = Decimal>,
    add_ons: impl IntoIterator<Item = &'a AddOnId>,
    details: &EventDetails,
) -> QuoteEstimate {
    let services_subtotal: Decimal = service_subtotals.into_iter().sum();
    let add_ons_subtotal: Decimal = add_ons
        .into_iter()
        .map(|id| Decimal::from(id.definition().price))
        .sum();
    let subtotal = services_subtotal + add_ons_subtotal;
    let multiplier = duration_multiplier(details.duration_days);
    let total = (subtotal * multiplier)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    QuoteEstimate {
        services_subtotal,
        add_ons_subtotal,
        subtotal,
        duration_multiplier: multiplier.normalize(),
        total,
    }
}
