//! The game loop: player selection, CPU selection, presentation, battle.
//!
//! Everything runs on one control path; the stages below happen strictly in
//! order, each gated on the previous stage's I/O.

use crate::battle::{resolve, BattleOutcome};
use crate::display::{render_battle_banner, render_outcome, render_summary, winner_line};
use crate::fetch::Fetcher;
use crate::models::Pokemon;
use crate::stats::{extract_stats, total_power};
use std::error::Error;
use std::io::{BufRead, Write};
use std::time::Duration;

const CPU_THINK_PAUSE: Duration = Duration::from_millis(500);
const BATTLE_PAUSE: Duration = Duration::from_secs(1);

/// Cosmetic pacing. The real implementation sleeps; tests use [`NoDelay`]
/// so the whole flow runs instantly.
pub trait Delay {
    fn pause(&self, duration: Duration);
}

pub struct RealDelay;

impl Delay for RealDelay {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Zero-cost pacing for tests.
pub struct NoDelay;

impl Delay for NoDelay {
    fn pause(&self, _duration: Duration) {}
}

pub struct Game<F, D> {
    fetcher: F,
    delay: D,
}

impl<F: Fetcher, D: Delay> Game<F, D> {
    pub fn new(fetcher: F, delay: D) -> Self {
        Game { fetcher, delay }
    }

    /// Run one full game. Random-fetch errors propagate out and end the run;
    /// name-lookup failures were already absorbed inside selection.
    pub async fn run(
        &mut self,
        input: &mut impl BufRead,
        out: &mut impl Write,
    ) -> Result<BattleOutcome, Box<dyn Error>> {
        let banner = "=".repeat(40);
        writeln!(out, "{}", banner)?;
        writeln!(out, "POKEMON BATTLE GAME")?;
        writeln!(out, "{}", banner)?;

        // Stage 1: player picks by name, or types "random".
        writeln!(out, "\nChoose your pokemon (or type 'random' for random):")?;
        write!(out, "> ")?;
        out.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        let choice = line.trim().to_lowercase();
        let player = self.select_player(&choice, out).await?;

        // Stage 2: CPU "thinks", then picks at random.
        write!(out, "\nCPU is selecting their pokemon")?;
        out.flush()?;
        for _ in 0..3 {
            self.delay.pause(CPU_THINK_PAUSE);
            write!(out, ".")?;
            out.flush()?;
        }
        writeln!(out)?;
        let cpu = self.fetcher.fetch_random().await?;

        // Stage 3: show both sides.
        writeln!(out, "\n--- YOUR POKEMON ---")?;
        write!(out, "{}", render_summary(&player, false))?;
        writeln!(out, "\n--- CPU POKEMON ---")?;
        write!(out, "{}", render_summary(&cpu, true))?;

        // Stage 4: pacing only, the input itself is ignored.
        write!(out, "\nPress Enter to battle...")?;
        out.flush()?;
        let mut ack = String::new();
        input.read_line(&mut ack)?;

        // Stage 5: compare total power and declare the result.
        let player_power = total_power(&extract_stats(&player));
        let cpu_power = total_power(&extract_stats(&cpu));
        write!(
            out,
            "{}",
            render_battle_banner(&player, &cpu, player_power, cpu_power)
        )?;
        self.delay.pause(BATTLE_PAUSE);

        let outcome = resolve(player_power, cpu_power);
        writeln!(out, "\n{}", winner_line(outcome, &player, &cpu))?;
        write!(out, "{}", render_outcome(outcome))?;
        Ok(outcome)
    }

    /// Resolve the player's typed choice into a record. A failed name lookup
    /// falls back to exactly one random fetch.
    async fn select_player(
        &mut self,
        choice: &str,
        out: &mut impl Write,
    ) -> Result<Pokemon, Box<dyn Error>> {
        if choice == "random" {
            writeln!(out, "\nGetting random pokemon...")?;
            return Ok(self.fetcher.fetch_random().await?);
        }

        writeln!(out, "\nSearching for {}...", choice)?;
        match self.fetcher.fetch_by_name(choice).await {
            Some(pokemon) => Ok(pokemon),
            None => {
                log::warn!("lookup for {:?} failed, falling back to a random pick", choice);
                writeln!(out, "Pokemon not found! Getting random pokemon instead...")?;
                Ok(self.fetcher.fetch_random().await?)
            }
        }
    }
}
