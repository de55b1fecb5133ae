use serde::Serialize;

use crate::recommend::dto::SpendData;

/// Reward rates are cashback fractions per category; fees are annual.
struct Card {
    name: &'static str,
    dining: f64,
    groceries: f64,
    travel: f64,
    fuel: f64,
    online_shopping: f64,
    other: f64,
    annual_fee: f64,
}

const CATALOG: &[Card] = &[
    Card {
        name: "Everyday Cashback",
        dining: 0.01,
        groceries: 0.02,
        travel: 0.01,
        fuel: 0.01,
        online_shopping: 0.01,
        other: 0.01,
        annual_fee: 0.0,
    },
    Card {
        name: "Gourmet Rewards",
        dining: 0.05,
        groceries: 0.01,
        travel: 0.01,
        fuel: 0.0,
        online_shopping: 0.01,
        other: 0.005,
        annual_fee: 95.0,
    },
    Card {
        name: "Miles Voyager",
        dining: 0.02,
        groceries: 0.01,
        travel: 0.05,
        fuel: 0.01,
        online_shopping: 0.01,
        other: 0.005,
        annual_fee: 120.0,
    },
    Card {
        name: "Commuter Fuel Plus",
        dining: 0.01,
        groceries: 0.02,
        travel: 0.01,
        fuel: 0.04,
        online_shopping: 0.0,
        other: 0.005,
        annual_fee: 50.0,
    },
    Card {
        name: "Digital Shopper",
        dining: 0.01,
        groceries: 0.01,
        travel: 0.005,
        fuel: 0.0,
        online_shopping: 0.05,
        other: 0.01,
        annual_fee: 75.0,
    },
];

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub card: String,
    pub estimated_monthly_value: f64,
    pub top_category: String,
}

fn monthly_value(card: &Card, spend: &SpendData) -> f64 {
    spend.dining * card.dining
        + spend.groceries * card.groceries
        + spend.travel * card.travel
        + spend.fuel * card.fuel
        + spend.online_shopping * card.online_shopping
        + spend.other * card.other
        - card.annual_fee / 12.0
}

fn top_category(spend: &SpendData) -> &'static str {
    let categories = [
        ("dining", spend.dining),
        ("groceries", spend.groceries),
        ("travel", spend.travel),
        ("fuel", spend.fuel),
        ("online_shopping", spend.online_shopping),
        ("other", spend.other),
    ];
    categories
        .iter()
        .fold(("other", f64::NEG_INFINITY), |best, &(name, amount)| {
            if amount > best.1 {
                (name, amount)
            } else {
                best
            }
        })
        .0
}

/// Picks the catalog card with the highest net monthly value for this spend
/// profile. Ties keep the earlier catalog entry, so the result is
/// deterministic for equal inputs.
pub fn recommend_card(spend: &SpendData) -> Recommendation {
    let mut best = &CATALOG[0];
    let mut best_value = monthly_value(best, spend);
    for card in &CATALOG[1..] {
        let value = monthly_value(card, spend);
        if value > best_value {
            best = card;
            best_value = value;
        }
    }

    Recommendation {
        card: best.name.to_string(),
        estimated_monthly_value: (best_value * 100.0).round() / 100.0,
        top_category: top_category(spend).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_spend_prefers_the_no_fee_card() {
        let rec = recommend_card(&SpendData::default());
        assert_eq!(rec.card, "Everyday Cashback");
        assert_eq!(rec.estimated_monthly_value, 0.0);
    }

    #[test]
    fn heavy_dining_spend_wins_the_dining_card() {
        let spend = SpendData {
            dining: 3000.0,
            ..Default::default()
        };
        let rec = recommend_card(&spend);
        assert_eq!(rec.card, "Gourmet Rewards");
        assert_eq!(rec.top_category, "dining");
    }

    #[test]
    fn heavy_travel_spend_wins_the_travel_card() {
        let spend = SpendData {
            travel: 5000.0,
            groceries: 200.0,
            ..Default::default()
        };
        let rec = recommend_card(&spend);
        assert_eq!(rec.card, "Miles Voyager");
        assert_eq!(rec.top_category, "travel");
    }

    #[test]
    fn fee_outweighs_rewards_for_small_spend() {
        // 5% of 100 is less than the fee share, so the free card wins.
        let spend = SpendData {
            dining: 100.0,
            ..Default::default()
        };
        let rec = recommend_card(&spend);
        assert_eq!(rec.card, "Everyday Cashback");
    }

    #[test]
    fn recommendation_is_deterministic() {
        let spend = SpendData {
            online_shopping: 2500.0,
            fuel: 300.0,
            ..Default::default()
        };
        assert_eq!(recommend_card(&spend), recommend_card(&spend));
    }
}
