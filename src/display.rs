//! Text rendering for summaries, battle banners and the end state.
//!
//! Everything renders into a `String` so the game loop decides where it goes
//! and tests can assert on the exact transcript.

use crate::battle::BattleOutcome;
use crate::models::Pokemon;
use crate::stats::{extract_stats, strength_rating, total_power};
use crate::utils::capitalize;

const BANNER_WIDTH: usize = 40;

/// Render one Pokémon's info block. With `show_cpu_commentary` the block
/// also carries the strength rating and a flavor line keyed on it.
pub fn render_summary(pokemon: &Pokemon, show_cpu_commentary: bool) -> String {
    let stats = extract_stats(pokemon);
    let banner = "=".repeat(BANNER_WIDTH);
    let type_str = pokemon.types.join("/").to_uppercase();
    let ability = pokemon
        .abilities
        .first()
        .map(String::as_str)
        .unwrap_or("none");

    let mut out = String::new();
    out.push_str(&format!("\n{}\n", banner));
    out.push_str(&format!("Name: {}\n", capitalize(&pokemon.name)));
    out.push_str(&format!("Type: {}\n", type_str));
    out.push_str(&format!("Height: {:.1}m\n", pokemon.height as f64 / 10.0));
    out.push_str(&format!("Weight: {:.1}kg\n", pokemon.weight as f64 / 10.0));
    out.push_str(&format!("Ability: {}\n", ability));

    out.push_str("\nStats:\n");
    for name in ["hp", "attack", "defense", "speed"] {
        let label = match name {
            "hp" => "HP",
            "attack" => "Attack",
            "defense" => "Defense",
            _ => "Speed",
        };
        out.push_str(&format!(
            "  {}: {}\n",
            label,
            stats.get(name).copied().unwrap_or(0)
        ));
    }
    out.push_str(&format!("  Total Power: {}\n", total_power(&stats)));

    if show_cpu_commentary {
        let strength = strength_rating(&stats);
        out.push_str(&format!("\nCPU Strength Rating: {}\n", strength));
        out.push_str(&format!("{}\n", commentary(strength)));
    }

    out.push_str(&format!("{}\n", banner));
    out
}

/// CPU flavor line for a strength rating. Both comparisons are strict, so a
/// rating of exactly 120 or 80 falls into the lower bracket.
pub fn commentary(strength: u32) -> &'static str {
    if strength > 120 {
        "CPU: This Pokémon is powerful! Prepare yourself."
    } else if strength > 80 {
        "CPU: Decent strength! Let's see how this goes."
    } else {
        "CPU: Hmm… this one isn't very strong, but I'll battle anyway!"
    }
}

/// The "vs" banner shown right before resolution.
pub fn render_battle_banner(
    player: &Pokemon,
    cpu: &Pokemon,
    player_power: u32,
    cpu_power: u32,
) -> String {
    let stars = "*".repeat(BANNER_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", stars));
    out.push_str(&format!(
        "BATTLE: {} vs {}\n",
        capitalize(&player.name),
        capitalize(&cpu.name)
    ));
    out.push_str(&format!("{}\n", stars));
    out.push_str(&format!(
        "\n{} power level: {}\n",
        capitalize(&player.name),
        player_power
    ));
    out.push_str(&format!(
        "{} power level: {}\n",
        capitalize(&cpu.name),
        cpu_power
    ));
    out.push_str("\nBattling...\n");
    out
}

/// The winner line shown once the powers have been compared.
pub fn winner_line(outcome: BattleOutcome, player: &Pokemon, cpu: &Pokemon) -> String {
    match outcome {
        BattleOutcome::PlayerWins => format!("{} wins!", capitalize(&player.name)),
        BattleOutcome::CpuWins => format!("{} wins!", capitalize(&cpu.name)),
        BattleOutcome::Draw => "It's a draw!".to_string(),
    }
}

/// The final banner mapping the outcome to the player's point of view.
pub fn render_outcome(outcome: BattleOutcome) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let verdict = match outcome {
        BattleOutcome::PlayerWins => "YOU WIN!",
        BattleOutcome::CpuWins => "YOU LOSE!",
        BattleOutcome::Draw => "TIE GAME!",
    };
    format!("\n{}\n{}\n{}\n", banner, verdict, banner)
}
