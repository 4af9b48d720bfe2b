//! Human-readable text for commands, engine states, and steps.
//!
//! Entities are referred to by id (`#12`) since names are not part of the
//! summaries the engine reports for every zone.

use game_core::{Command, EntityId, GlobalState, InputCategory, PlayerId, StepId};

/// Describes a command as "<player> <does something>".
///
/// Examples:
/// - "Player 1 passes priority"
/// - "Player 1 attacks with #3, #4"
/// - "Player 2 declares no blockers"
pub fn format_command(player_name: &str, command: &Command) -> String {
    match command {
        Command::Concede => format!("{player_name} concedes"),
        Command::PassPriority => format!("{player_name} passes priority"),
        Command::ChooseAttackers { attackers } if attackers.is_empty() => {
            format!("{player_name} declares no attackers")
        }
        Command::ChooseAttackers { attackers } => {
            format!("{player_name} attacks with {}", entity_list(attackers))
        }
        Command::ChooseBlockers { blockers } if blockers.is_empty() => {
            format!("{player_name} declares no blockers")
        }
        Command::ChooseBlockers { blockers } => {
            format!("{player_name} blocks with {}", entity_list(blockers))
        }
        Command::PlayLand { card } => format!("{player_name} plays land {card}"),
        Command::StartCastingSpell { spell } => format!("{player_name} begins casting {spell}"),
        Command::PayIncompleteSpellMana { spell, mana_index } => {
            format!("{player_name} pays mana {mana_index} toward {spell}")
        }
        Command::FinishCastingSpell { spell } => format!("{player_name} casts {spell}"),
        Command::CancelCastingSpell { spell } => format!("{player_name} cancels {spell}"),
    }
}

/// Describes the decision the engine is waiting on.
///
/// `name_of` resolves a player id to a display name.
pub fn format_state<F>(state: &GlobalState, name_of: F) -> String
where
    F: Fn(PlayerId) -> String,
{
    match state {
        GlobalState::AwaitingInput { player, category } => {
            format!("{}: {}", name_of(*player), category_label(*category))
        }
        GlobalState::GameOver {
            winner: Some(winner),
        } => format!("{} wins", name_of(*winner)),
        GlobalState::GameOver { winner: None } => "Game drawn".to_string(),
    }
}

pub const fn category_label(category: InputCategory) -> &'static str {
    match category {
        InputCategory::Priority => "Priority",
        InputCategory::ChooseAttackers => "Declare attackers",
        InputCategory::ChooseBlockers => "Declare blockers",
        InputCategory::PayIncompleteSpellMana => "Pay mana",
        InputCategory::FinishOrCancelSpell => "Finish or cancel spell",
    }
}

/// "<phase>: <step>", e.g. "Combat: Attackers".
pub fn format_step(step: StepId) -> String {
    format!("{}: {}", step.phase().label(), step.label())
}

fn entity_list(ids: &[EntityId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::ManaIndex;

    #[test]
    fn combat_commands_list_their_entities() {
        let attack = Command::ChooseAttackers {
            attackers: vec![EntityId(3), EntityId(4)],
        };
        assert_eq!(
            format_command("Player 1", &attack),
            "Player 1 attacks with #3, #4"
        );
        let no_blocks = Command::ChooseBlockers { blockers: vec![] };
        assert_eq!(
            format_command("Player 2", &no_blocks),
            "Player 2 declares no blockers"
        );
    }

    #[test]
    fn mana_payment_names_index_and_spell() {
        let pay = Command::PayIncompleteSpellMana {
            spell: EntityId(9),
            mana_index: ManaIndex(2),
        };
        assert_eq!(format_command("Ann", &pay), "Ann pays mana 2 toward #9");
    }

    #[test]
    fn states_use_display_names() {
        let names = |id: PlayerId| format!("Seat {}", id.0);
        let state = GlobalState::awaiting(PlayerId(1), InputCategory::ChooseBlockers);
        assert_eq!(format_state(&state, names), "Seat 1: Declare blockers");
        let over = GlobalState::GameOver { winner: None };
        assert_eq!(format_state(&over, names), "Game drawn");
    }

    #[test]
    fn steps_carry_their_phase() {
        assert_eq!(format_step(StepId::DeclareAttackers), "Combat: Attackers");
        assert_eq!(format_step(StepId::Main2), "Main 2: Main");
    }
}
