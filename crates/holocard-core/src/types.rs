//! Core types for Holocard
//!
//! Card records mirror the JSON served by the Pokémon TCG API, so field
//! names follow its camelCase conventions on the wire.

use serde::{Deserialize, Serialize};

/// Number of cards requested per listing page
pub const PAGE_SIZE: u32 = 24;

/// Image URL used when neither the API nor the fallback card has artwork
pub const PLACEHOLDER_IMAGE: &str = "/card.png";

/// Card artwork at the two sizes the API publishes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImages {
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub large: String,
}

/// A single attack printed on the card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    /// Energy types required, in printed order
    #[serde(default)]
    pub cost: Vec<String>,
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub text: String,
}

/// Weakness or resistance entry, e.g. `Water ×2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeModifier {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// The expansion a card was printed in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

/// A trading card as returned by the API.
///
/// Treated as an immutable snapshot: views replace it wholesale on refetch.
/// Trainer and energy cards omit `hp` and `types` upstream, so those default
/// to empty rather than failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub hp: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub images: CardImages,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacks: Option<Vec<Attack>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weaknesses: Option<Vec<TypeModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resistances: Option<Vec<TypeModifier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retreat_cost: Option<Vec<String>>,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub set: CardSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
}

impl Card {
    /// The card shown whenever a fetch fails: Base Set 2 Charizard.
    pub fn fallback() -> Self {
        Self {
            id: "base4-4".to_string(),
            name: "Charizard".to_string(),
            hp: "120".to_string(),
            types: vec!["Fire".to_string()],
            images: CardImages {
                small: PLACEHOLDER_IMAGE.to_string(),
                large: PLACEHOLDER_IMAGE.to_string(),
            },
            attacks: Some(vec![Attack {
                name: "Fire Blast".to_string(),
                cost: vec!["Fire".to_string(); 4],
                damage: "100".to_string(),
                text: "Discard 1 Energy card attached to Charizard in order to use this attack."
                    .to_string(),
            }]),
            weaknesses: Some(vec![TypeModifier {
                kind: "Water".to_string(),
                value: "×2".to_string(),
            }]),
            resistances: Some(vec![TypeModifier {
                kind: "Electric".to_string(),
                value: "-30".to_string(),
            }]),
            retreat_cost: Some(vec!["Colorless".to_string(); 3]),
            number: "4".to_string(),
            set: CardSet {
                name: "Base Set".to_string(),
                ..Default::default()
            },
            rarity: None,
        }
    }

    /// Whether the card carries artwork suitable for the detail view
    pub fn has_large_image(&self) -> bool {
        !self.images.large.trim().is_empty()
    }

    /// Whether the card carries a thumbnail suitable for the gallery grid
    pub fn has_small_image(&self) -> bool {
        !self.images.small.trim().is_empty()
    }

    /// Large image URL, or the local placeholder
    pub fn large_image(&self) -> &str {
        if self.has_large_image() {
            &self.images.large
        } else {
            PLACEHOLDER_IMAGE
        }
    }

    /// First attack, if the card has any
    pub fn primary_attack(&self) -> Option<&Attack> {
        self.attacks.as_ref().and_then(|a| a.first())
    }

    /// First weakness, if the card has any
    pub fn primary_weakness(&self) -> Option<&TypeModifier> {
        self.weaknesses.as_ref().and_then(|w| w.first())
    }

    /// HP for display, `?` when the card has none
    pub fn hp_label(&self) -> &str {
        if self.hp.is_empty() {
            "?"
        } else {
            &self.hp
        }
    }

    /// First type for display, `Unknown` when the card has none
    pub fn type_label(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or("Unknown")
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} • {} • #{}", self.name, self.set.name, self.number)
    }
}

/// Every energy type the type filter offers, in display order
pub const CARD_TYPES: [&str; 18] = [
    "Fire", "Water", "Grass", "Electric", "Psychic", "Ice", "Dragon", "Dark", "Fairy", "Normal",
    "Fighting", "Poison", "Ground", "Flying", "Bug", "Rock", "Ghost", "Steel",
];

/// Type filter for listing queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    All,
    Type(String),
}

impl TypeFilter {
    /// Parse a filter label; `all` (any case) or an empty string means no filter
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case("all") {
            TypeFilter::All
        } else {
            TypeFilter::Type(label.to_string())
        }
    }

    /// Display label as shown on the filter pills
    pub fn label(&self) -> &str {
        match self {
            TypeFilter::All => "All Types",
            TypeFilter::Type(t) => t,
        }
    }

    /// All filters offered by the gallery, starting with `All`
    pub fn all_filters() -> Vec<TypeFilter> {
        std::iter::once(TypeFilter::All)
            .chain(CARD_TYPES.iter().map(|t| TypeFilter::Type(t.to_string())))
            .collect()
    }
}

/// A paged listing query
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardQuery {
    /// Free-text name search; empty means no name constraint
    pub term: String,
    pub card_type: TypeFilter,
    /// 1-based page number
    pub page: u32,
}

impl Default for CardQuery {
    fn default() -> Self {
        Self {
            term: String::new(),
            card_type: TypeFilter::All,
            page: 1,
        }
    }
}

impl CardQuery {
    /// Build the API's Lucene-style `q` parameter, if any constraint applies
    pub fn search_expression(&self) -> Option<String> {
        let mut clauses = Vec::new();

        let term = self.term.trim();
        if !term.is_empty() {
            let escaped = term.replace('"', "");
            clauses.push(format!("name:\"{}*\"", escaped));
        }
        if let TypeFilter::Type(t) = &self.card_type {
            clauses.push(format!("types:{}", t));
        }

        if clauses.is_empty() {
            None
        } else {
            Some(clauses.join(" "))
        }
    }

    /// Query-string pairs for the `/cards` listing endpoint
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.max(1).to_string()),
            ("pageSize", PAGE_SIZE.to_string()),
            ("orderBy", "-set.releaseDate".to_string()),
        ];
        if let Some(q) = self.search_expression() {
            params.push(("q", q));
        }
        params
    }

    /// Same query, different page
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }
}

/// One page of listing results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPage {
    #[serde(rename = "data")]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_count: u32,
}

impl CardPage {
    /// Total number of pages for this query (at least 1)
    pub fn page_count(&self) -> u32 {
        let size = if self.page_size == 0 { PAGE_SIZE } else { self.page_size };
        self.total_count.div_ceil(size).max(1)
    }

    /// A missing page number reads as page 1
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page.max(1) < self.page_count()
    }
}
