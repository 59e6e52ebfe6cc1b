use anyhow::{bail, Result};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::errors::LeagueError;
use crate::fixtures::{random_pairing, round_robin_schedule, weekly_matchups};
use crate::snapshot::SnapshotFile;
use crate::stats::{biggest_upsets, head_to_head, league_overview, player_stats, rankings};

use super::league::LeagueService;
use super::report;

/// Runs one CLI command against the league store and renders the result
/// either as a table or as pretty JSON.
pub struct CommandRunner {
    service: LeagueService,
    config: AppConfig,
    json: bool,
}

impl CommandRunner {
    pub fn new(service: LeagueService, config: AppConfig, json: bool) -> Self {
        Self { service, config, json }
    }

    fn emit<T: Serialize>(&self, value: &T, table: impl FnOnce(&T) -> String) -> Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(value)? + "\n")
        } else {
            Ok(table(value))
        }
    }

    pub fn run(&self, command: &Command) -> Result<String> {
        match command {
            Command::AddPlayer { name } => {
                let player = self.service.mutate(|league| Ok(league.add_player(name).clone()))?;
                info!("Player {} is on the roster at {:.0}", player.name, player.rating);
                self.emit(&player, |p| format!("Added {} ({:.0})\n", p.name, p.rating))
            }
            Command::RemovePlayer { name } => {
                let removed = self.service.mutate(|league| {
                    league
                        .remove_player(name)
                        .ok_or_else(|| LeagueError::UnknownPlayer(name.clone()))
                })?;
                self.emit(&removed, |p| format!("Removed {}. Their matches stay in the history.\n", p.name))
            }
            Command::Report { player1, player2, score1, score2 } => {
                let record = self
                    .service
                    .mutate(|league| league.report_match(player1, player2, *score1, *score2).cloned())?;
                info!("Recorded match #{}", record.id);
                self.emit(&record, |m| report::render_match(m) + "\n")
            }
            Command::DeleteMatch { id } => {
                let removed = self.service.mutate(|league| league.delete_match(*id))?;
                info!("Deleted match #{} and rebuilt ratings", removed.id);
                self.emit(&removed, |m| format!("Deleted {}\n", report::render_match(m)))
            }
            Command::Rankings => {
                let league = self.service.load()?;
                self.emit(&rankings(&league), |rows| report::render_rankings(rows))
            }
            Command::Matches { player } => {
                let league = self.service.load()?;
                let matches: Vec<_> = match player {
                    Some(name) => league.matches_for(name).cloned().collect(),
                    None => league.matches().to_vec(),
                };
                self.emit(&matches, |m| report::render_matches(m))
            }
            Command::Stats { name } => {
                let league = self.service.load()?;
                match player_stats(league.matches(), name) {
                    Some(stats) => self.emit(&stats, report::render_stats),
                    None if league.player(name).is_some() => {
                        Ok(format!("{} has not played any matches yet.\n", name))
                    }
                    None => bail!(LeagueError::UnknownPlayer(name.clone())),
                }
            }
            Command::Overview => {
                let league = self.service.load()?;
                let overview = league_overview(&league, self.config.stats.recent_matches);
                self.emit(&overview, report::render_overview)
            }
            Command::HeadToHead { player_a, player_b } => {
                let league = self.service.load()?;
                let h2h = head_to_head(league.matches(), player_a, player_b);
                self.emit(&h2h, report::render_head_to_head)
            }
            Command::Upsets { limit } => {
                let league = self.service.load()?;
                let mut upsets = biggest_upsets(league.matches());
                upsets.truncate(limit.unwrap_or(self.config.stats.upsets_shown));
                self.emit(&upsets, |u| report::render_upsets(u))
            }
            Command::Matchups { seed } => {
                let names = self.service.load()?.player_names();
                let pairs = match seed {
                    Some(seed) => random_pairing(&names, &mut StdRng::seed_from_u64(*seed)),
                    None => weekly_matchups(&names),
                };
                self.emit(&pairs, |p| report::render_pairings(p))
            }
            Command::Schedule => {
                let names = self.service.load()?.player_names();
                let rounds = round_robin_schedule(&names);
                self.emit(&rounds, |r| report::render_schedule(r))
            }
            Command::Export { path } => {
                let league = self.service.load()?;
                let file = SnapshotFile::new(path);
                file.save(&league)?;
                Ok(format!(
                    "Exported {} players and {} matches to {}\n",
                    league.players().len(),
                    league.matches().len(),
                    path.display()
                ))
            }
            Command::Import { path } => {
                let file = SnapshotFile::new(path);
                if !file.exists() {
                    bail!("No league file at {}", path.display());
                }
                let league = file.load(self.config.rating)?;
                self.service.replace(&league)?;
                info!("Imported league from {}", path.display());
                Ok(format!(
                    "Imported {} players and {} matches from {}\n",
                    league.players().len(),
                    league.matches().len(),
                    path.display()
                ))
            }
            Command::Completions { .. } => bail!("completions are generated without a league"),
        }
    }
}
