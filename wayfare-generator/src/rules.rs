use serde::{Deserialize, Serialize};
use wayfare_shared::CabinClass;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmenityRule {
    pub name: String,
    pub conditions: Vec<AmenityCondition>,
    pub actions: Vec<AmenityAction>,
    pub priority: i32,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AmenityCondition {
    Cabin(CabinClass),
    MinQuality(u8),
    MaxQuality(u8),
    WideBody(bool),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AmenityAction {
    Baggage(String),
    Meal(String),
    Entertainment(String),
}

/// What the rules are evaluated against
#[derive(Debug, Clone, Copy)]
pub struct AmenityContext {
    pub cabin_class: CabinClass,
    pub quality_score: u8,
    pub wide_body: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Amenities {
    pub baggage: String,
    pub meal: String,
    pub entertainment: String,
}

/// Deterministic amenity lookup. For each descriptor the highest priority
/// matching rule wins.
pub struct AmenityEngine {
    rules: Vec<AmenityRule>,
}

impl AmenityEngine {
    pub fn new(rules: Vec<AmenityRule>) -> Self {
        let mut rules = rules;
        rules.sort_by_key(|r| -r.priority);
        Self { rules }
    }

    pub fn evaluate(&self, context: &AmenityContext) -> Amenities {
        let mut baggage = None;
        let mut meal = None;
        let mut entertainment = None;

        for rule in &self.rules {
            if !rule.is_active || !self.matches(rule, context) {
                continue;
            }
            for action in &rule.actions {
                match action {
                    AmenityAction::Baggage(value) => {
                        baggage.get_or_insert_with(|| value.clone());
                    }
                    AmenityAction::Meal(value) => {
                        meal.get_or_insert_with(|| value.clone());
                    }
                    AmenityAction::Entertainment(value) => {
                        entertainment.get_or_insert_with(|| value.clone());
                    }
                }
            }
        }

        Amenities {
            baggage: baggage.unwrap_or_else(|| "20kg".to_string()),
            meal: meal.unwrap_or_else(|| "Snack".to_string()),
            entertainment: entertainment.unwrap_or_else(|| "None".to_string()),
        }
    }

    fn matches(&self, rule: &AmenityRule, context: &AmenityContext) -> bool {
        rule.conditions.iter().all(|condition| match condition {
            AmenityCondition::Cabin(class) => context.cabin_class == *class,
            AmenityCondition::MinQuality(min) => context.quality_score >= *min,
            AmenityCondition::MaxQuality(max) => context.quality_score <= *max,
            AmenityCondition::WideBody(wide) => context.wide_body == *wide,
        })
    }
}

impl Default for AmenityEngine {
    fn default() -> Self {
        Self::new(get_default_rules())
    }
}

fn rule(
    name: &str,
    priority: i32,
    conditions: Vec<AmenityCondition>,
    actions: Vec<AmenityAction>,
) -> AmenityRule {
    AmenityRule {
        name: name.to_string(),
        conditions,
        actions,
        priority,
        is_active: true,
    }
}

pub fn get_default_rules() -> Vec<AmenityRule> {
    use AmenityAction::*;
    use AmenityCondition::*;

    vec![
        rule(
            "First Class",
            100,
            vec![Cabin(CabinClass::First)],
            vec![
                Baggage("3 x 32kg".to_string()),
                Meal("Chef-curated dining".to_string()),
                Entertainment("Private suite screen".to_string()),
            ],
        ),
        rule(
            "Business Class",
            90,
            vec![Cabin(CabinClass::Business)],
            vec![
                Baggage("2 x 32kg".to_string()),
                Meal("Multi-course dining".to_string()),
                Entertainment("Personal screen with noise-cancelling headphones".to_string()),
            ],
        ),
        rule(
            "Premium Economy",
            80,
            vec![Cabin(CabinClass::PremiumEconomy)],
            vec![
                Baggage("2 x 23kg".to_string()),
                Meal("Premium meal service".to_string()),
                Entertainment("Personal screen".to_string()),
            ],
        ),
        rule(
            "Full Service Economy",
            70,
            vec![Cabin(CabinClass::Economy), MinQuality(8)],
            vec![Baggage("30kg".to_string()), Meal("Hot meal".to_string())],
        ),
        rule(
            "Budget Economy",
            65,
            vec![Cabin(CabinClass::Economy), MaxQuality(5)],
            vec![
                Baggage("7kg cabin only".to_string()),
                Meal("Buy on board".to_string()),
                Entertainment("None".to_string()),
            ],
        ),
        rule(
            "Wide Body Screens",
            60,
            vec![WideBody(true)],
            vec![Entertainment("Seatback screens".to_string())],
        ),
        rule(
            "Standard Economy",
            10,
            vec![Cabin(CabinClass::Economy)],
            vec![
                Baggage("20kg".to_string()),
                Meal("Complimentary snack".to_string()),
                Entertainment("Streaming to own device".to_string()),
            ],
        ),
    ]
}
