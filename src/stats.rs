//! Stat extraction and the two derived scores used by the game.

use crate::models::Pokemon;
use std::collections::HashMap;

/// Project the record's ordered stat list into a name -> base value map.
/// Last-seen value wins if the source ever repeats a name.
pub fn extract_stats(pokemon: &Pokemon) -> HashMap<String, u32> {
    let mut stats = HashMap::new();
    for stat in &pokemon.stats {
        stats.insert(stat.name.clone(), stat.base);
    }
    stats
}

/// Total power: the sum of every base stat. Used for battle resolution.
pub fn total_power(stats: &HashMap<String, u32>) -> u32 {
    stats.values().sum()
}

/// Strength rating: attack + defense, used only for the CPU commentary.
///
/// Panics if either key is missing. The data source always returns both, so
/// absence means the schema contract was broken, not a user error.
pub fn strength_rating(stats: &HashMap<String, u32>) -> u32 {
    stats["attack"] + stats["defense"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Stat;

    fn stat_map(entries: &[(&str, u32)]) -> HashMap<String, u32> {
        entries
            .iter()
            .map(|(name, base)| (name.to_string(), *base))
            .collect()
    }

    #[test]
    fn total_power_sums_every_entry() {
        let stats = stat_map(&[("hp", 45), ("attack", 49), ("defense", 49), ("speed", 45)]);
        assert_eq!(total_power(&stats), 188);

        // Insertion order is irrelevant.
        let reversed = stat_map(&[("speed", 45), ("defense", 49), ("attack", 49), ("hp", 45)]);
        assert_eq!(total_power(&reversed), 188);
    }

    #[test]
    fn strength_rating_is_attack_plus_defense_only() {
        let stats = stat_map(&[("hp", 200), ("attack", 52), ("defense", 43), ("speed", 120)]);
        assert_eq!(strength_rating(&stats), 95);

        let boosted = stat_map(&[("hp", 999), ("attack", 52), ("defense", 43), ("speed", 1)]);
        assert_eq!(strength_rating(&boosted), 95);
    }

    #[test]
    fn extract_stats_keeps_last_value_on_duplicate_names() {
        let pokemon = Pokemon {
            stats: vec![
                Stat {
                    name: "attack".into(),
                    base: 10,
                },
                Stat {
                    name: "attack".into(),
                    base: 20,
                },
            ],
            ..Default::default()
        };
        assert_eq!(extract_stats(&pokemon)["attack"], 20);
    }
}
