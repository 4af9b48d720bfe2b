//! Zone query facade.
//!
//! Translates a zone descriptor into the ordered list of objects the engine
//! reports for it. Queries are always fresh; the only cached copy of a zone is
//! the one captured inside an [`EngineSnapshot`](crate::EngineSnapshot).

use game_core::{
    EntitySummary, GameError, GlobalZone, PlayerId, PlayerZone, RulesEngine, ZoneId,
};
use strum::IntoEnumIterator;

/// A zone as named by presentation code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneDescriptor {
    Global(GlobalZone),
    Player(PlayerZone, PlayerId),
}

impl ZoneDescriptor {
    pub const fn zone_id(self) -> ZoneId {
        match self {
            Self::Global(zone) => ZoneId::global(zone),
            Self::Player(zone, player) => ZoneId::player(zone, player),
        }
    }
}

impl From<GlobalZone> for ZoneDescriptor {
    fn from(zone: GlobalZone) -> Self {
        Self::Global(zone)
    }
}

impl From<(PlayerZone, PlayerId)> for ZoneDescriptor {
    fn from((zone, player): (PlayerZone, PlayerId)) -> Self {
        Self::Player(zone, player)
    }
}

impl From<ZoneDescriptor> for ZoneId {
    fn from(descriptor: ZoneDescriptor) -> Self {
        descriptor.zone_id()
    }
}

/// Queries the engine for the objects in a zone, in engine order.
///
/// Engine errors are absorbed: the failure is logged and the zone reads as
/// empty.
pub fn query_zone<E>(engine: &E, descriptor: impl Into<ZoneDescriptor>) -> Vec<EntitySummary>
where
    E: RulesEngine + ?Sized,
{
    let zone = descriptor.into().zone_id();
    match engine.objects_in_zone(zone) {
        Ok(objects) => objects,
        Err(error) => {
            tracing::warn!(
                %zone,
                code = error.error_code(),
                severity = %error.severity(),
                "zone query failed: {error}"
            );
            Vec::new()
        }
    }
}

/// Every zone worth capturing for the given players.
///
/// Shared zones come first, then each player's zones in player order.
pub fn all_zones(players: impl IntoIterator<Item = PlayerId>) -> Vec<ZoneDescriptor> {
    let mut zones: Vec<ZoneDescriptor> = GlobalZone::iter().map(ZoneDescriptor::Global).collect();
    for player in players {
        zones.extend(PlayerZone::iter().map(|zone| ZoneDescriptor::Player(zone, player)));
    }
    zones
}

/// A player's battlefield split into the two layout rows.
#[derive(Clone, Debug, Default)]
pub struct BattlefieldRows<'a> {
    /// Non-land permanents.
    pub creatures: Vec<&'a EntitySummary>,
    pub lands: Vec<&'a EntitySummary>,
}

impl<'a> BattlefieldRows<'a> {
    pub fn split(objects: impl IntoIterator<Item = &'a EntitySummary>) -> Self {
        let (lands, creatures) = objects
            .into_iter()
            .partition(|object| object.types.is_land());
        Self { creatures, lands }
    }
}
