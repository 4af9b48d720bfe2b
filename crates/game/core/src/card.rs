//! Card characteristics the client needs for routing and rendering.
use bitflags::bitflags;

use crate::ids::CardId;

/// A single printed card type.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum CardType {
    Artifact,
    Battle,
    Conspiracy,
    Creature,
    Enchantment,
    Instant,
    Land,
    Planeswalker,
    Sorcery,
    Tribal,
}

impl CardType {
    const fn tag(self) -> TypeTags {
        match self {
            Self::Artifact => TypeTags::ARTIFACT,
            Self::Battle => TypeTags::BATTLE,
            Self::Conspiracy => TypeTags::CONSPIRACY,
            Self::Creature => TypeTags::CREATURE,
            Self::Enchantment => TypeTags::ENCHANTMENT,
            Self::Instant => TypeTags::INSTANT,
            Self::Land => TypeTags::LAND,
            Self::Planeswalker => TypeTags::PLANESWALKER,
            Self::Sorcery => TypeTags::SORCERY,
            Self::Tribal => TypeTags::TRIBAL,
        }
    }
}

bitflags! {
    /// Set of card types carried by an object.
    ///
    /// On the wire this is a list of type names (`["Artifact", "Creature"]`).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(from = "Vec<CardType>", into = "Vec<CardType>"))]
    pub struct TypeTags: u16 {
        const ARTIFACT     = 1 << 0;
        const BATTLE       = 1 << 1;
        const CONSPIRACY   = 1 << 2;
        const CREATURE     = 1 << 3;
        const ENCHANTMENT  = 1 << 4;
        const INSTANT      = 1 << 5;
        const LAND         = 1 << 6;
        const PLANESWALKER = 1 << 7;
        const SORCERY      = 1 << 8;
        const TRIBAL       = 1 << 9;

        /// Types that stay on the battlefield once resolved.
        const PERMANENT = Self::ARTIFACT.bits()
                        | Self::BATTLE.bits()
                        | Self::CREATURE.bits()
                        | Self::ENCHANTMENT.bits()
                        | Self::LAND.bits()
                        | Self::PLANESWALKER.bits();
    }
}

impl TypeTags {
    pub fn is_land(&self) -> bool {
        self.contains(Self::LAND)
    }

    pub fn is_creature(&self) -> bool {
        self.contains(Self::CREATURE)
    }

    /// Iterates the individual card types in declaration order.
    pub fn card_types(&self) -> impl Iterator<Item = CardType> + '_ {
        use strum::IntoEnumIterator;

        CardType::iter().filter(|ty| self.contains(ty.tag()))
    }
}

impl From<CardType> for TypeTags {
    fn from(ty: CardType) -> Self {
        ty.tag()
    }
}

impl FromIterator<CardType> for TypeTags {
    fn from_iter<I: IntoIterator<Item = CardType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |tags, ty| tags | ty.tag())
    }
}

impl From<Vec<CardType>> for TypeTags {
    fn from(types: Vec<CardType>) -> Self {
        types.into_iter().collect()
    }
}

impl From<TypeTags> for Vec<CardType> {
    fn from(tags: TypeTags) -> Self {
        tags.card_types().collect()
    }
}

/// Color of a unit of mana.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ManaColor {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

impl ManaColor {
    /// Single-letter symbol used in card text (`W`, `U`, `B`, `R`, `G`, `C`).
    pub const fn symbol(&self) -> char {
        match self {
            Self::White => 'W',
            Self::Blue => 'U',
            Self::Black => 'B',
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Colorless => 'C',
        }
    }
}

/// One unit of mana sitting in a player's pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManaSymbol {
    pub color: ManaColor,
}

impl ManaSymbol {
    pub const fn new(color: ManaColor) -> Self {
        Self { color }
    }
}

/// Rendering data for a card definition. Never consulted for routing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardArt {
    pub id: CardId,
    pub name: String,
    pub image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_collect_from_card_types() {
        let tags: TypeTags = [CardType::Artifact, CardType::Creature].into_iter().collect();
        assert!(tags.is_creature());
        assert!(!tags.is_land());
        assert_eq!(
            tags.card_types().collect::<Vec<_>>(),
            vec![CardType::Artifact, CardType::Creature]
        );
    }

    #[test]
    fn permanent_mask_excludes_spells() {
        assert!(TypeTags::PERMANENT.contains(TypeTags::LAND));
        assert!(!TypeTags::PERMANENT.intersects(TypeTags::INSTANT | TypeTags::SORCERY));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn tags_round_trip_as_type_name_list() {
        let tags = TypeTags::LAND;
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["Land"]"#);

        let parsed: TypeTags = serde_json::from_str(r#"["Creature","Artifact"]"#).unwrap();
        assert_eq!(parsed, TypeTags::CREATURE | TypeTags::ARTIFACT);
    }
}
