//! Battle resolution: highest total power wins.

/// Result of a single battle, computed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleOutcome {
    PlayerWins,
    CpuWins,
    Draw,
}

/// Compare the two total-power scores. Pure and total.
pub fn resolve(player_power: u32, cpu_power: u32) -> BattleOutcome {
    if player_power > cpu_power {
        BattleOutcome::PlayerWins
    } else if cpu_power > player_power {
        BattleOutcome::CpuWins
    } else {
        BattleOutcome::Draw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_power_wins() {
        assert_eq!(resolve(199, 188), BattleOutcome::CpuWins);
        assert_eq!(resolve(188, 100), BattleOutcome::PlayerWins);
    }

    #[test]
    fn resolve_is_antisymmetric() {
        for (a, b) in [(0, 1), (120, 80), (300, 299), (1, 500)] {
            match resolve(a, b) {
                BattleOutcome::PlayerWins => assert_eq!(resolve(b, a), BattleOutcome::CpuWins),
                BattleOutcome::CpuWins => assert_eq!(resolve(b, a), BattleOutcome::PlayerWins),
                BattleOutcome::Draw => assert_eq!(resolve(b, a), BattleOutcome::Draw),
            }
        }
    }

    #[test]
    fn equal_power_is_a_draw() {
        for power in [0, 188, 600] {
            assert_eq!(resolve(power, power), BattleOutcome::Draw);
        }
    }
}
