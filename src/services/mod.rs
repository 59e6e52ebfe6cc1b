pub mod commands;
pub mod league;
pub mod report;

pub use commands::CommandRunner;
pub use league::LeagueService;
