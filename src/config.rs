use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use thiserror::Error;
use crate::transport::purchase_url;
use crate::virtual_user::Pacing;

/// Black Friday shopper swarm
#[derive(Parser, Debug, Clone)]
#[command(name = "blackfriday-swarm")]
#[command(about = "Simulates concurrent shoppers posting purchases to a sales-ingestion API")]
#[command(version)]
pub struct Cli {
    /// Base URL of the ingestion API; purchases go to {host}/purchase
    #[arg(long, default_value = "http://localhost:3000", env = "BLACKFRIDAY_HOST")]
    pub host: String,

    /// Number of concurrent virtual users
    #[arg(short, long, default_value_t = 10, env = "BLACKFRIDAY_USERS")]
    pub users: usize,

    /// Users started per second during ramp-up
    #[arg(short = 'r', long, default_value_t = 1.0, env = "BLACKFRIDAY_SPAWN_RATE")]
    pub spawn_rate: f64,

    /// Stop after this many seconds (runs until Ctrl+C when omitted)
    #[arg(short = 't', long, env = "BLACKFRIDAY_RUN_TIME")]
    pub run_time: Option<u64>,

    /// Shortest think time between purchases, in seconds
    #[arg(long, default_value_t = 0.5)]
    pub min_wait: f64,

    /// Longest think time between purchases, in seconds
    #[arg(long, default_value_t = 2.0)]
    pub max_wait: f64,

    /// Per-request timeout in seconds (none when omitted)
    #[arg(long)]
    pub request_timeout: Option<u64>,

    /// Seed for reproducible traffic; user N draws from seed + N
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with a custom scenario list instead of the built-in mix
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("At least one user is required")]
    NoUsers,
    #[error("Spawn rate must be a positive number, got {0}")]
    InvalidSpawnRate(f64),
    #[error("Invalid wait interval {min}..={max} seconds")]
    InvalidWait { min: f64, max: f64 },
    #[error("Invalid host {host}: {reason}")]
    InvalidHost { host: String, reason: String },
}

/// Validated run settings.
#[derive(Debug, Clone)]
pub struct LoadTestConfig {
    pub host: String,
    pub users: usize,
    /// Delay between two user spawns during ramp-up.
    pub spawn_interval: Duration,
    pub run_time: Option<Duration>,
    pub pacing: Pacing,
    pub request_timeout: Option<Duration>,
    pub seed: Option<u64>,
    pub catalog_path: Option<PathBuf>,
}

impl TryFrom<Cli> for LoadTestConfig {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        if cli.users == 0 {
            return Err(ConfigError::NoUsers);
        }

        if !(cli.spawn_rate.is_finite() && cli.spawn_rate > 0.0) {
            return Err(ConfigError::InvalidSpawnRate(cli.spawn_rate));
        }
        let spawn_interval = Duration::try_from_secs_f64(1.0 / cli.spawn_rate)
            .map_err(|_| ConfigError::InvalidSpawnRate(cli.spawn_rate))?
            .max(Duration::from_nanos(1));

        let invalid_wait = || ConfigError::InvalidWait { min: cli.min_wait, max: cli.max_wait };
        let min_wait = Duration::try_from_secs_f64(cli.min_wait).map_err(|_| invalid_wait())?;
        let max_wait = Duration::try_from_secs_f64(cli.max_wait).map_err(|_| invalid_wait())?;
        let pacing = Pacing::new(min_wait, max_wait).ok_or_else(invalid_wait)?;

        purchase_url(&cli.host).map_err(|e| ConfigError::InvalidHost {
            host: cli.host.clone(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            host: cli.host,
            users: cli.users,
            spawn_interval,
            run_time: cli.run_time.map(Duration::from_secs),
            pacing,
            request_timeout: cli.request_timeout.map(Duration::from_secs),
            seed: cli.seed,
            catalog_path: cli.catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        let argv = std::iter::once("blackfriday-swarm").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn defaults_match_the_black_friday_run() {
        let config = LoadTestConfig::try_from(parse(&[])).unwrap();
        assert_eq!(config.users, 10);
        assert_eq!(config.spawn_interval, Duration::from_secs(1));
        assert_eq!(config.run_time, None);
        assert_eq!(config.pacing, Pacing::default());
        assert_eq!(config.request_timeout, None);
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn flags_are_applied() {
        let cli = parse(&[
            "--host", "http://api.test:8080",
            "-u", "200",
            "-r", "20",
            "-t", "300",
            "--min-wait", "1",
            "--max-wait", "3",
            "--request-timeout", "5",
            "--seed", "99",
        ]);
        let config = LoadTestConfig::try_from(cli).unwrap();

        assert_eq!(config.host, "http://api.test:8080");
        assert_eq!(config.users, 200);
        assert_eq!(config.spawn_interval, Duration::from_millis(50));
        assert_eq!(config.run_time, Some(Duration::from_secs(300)));
        assert_eq!(config.pacing.min(), Duration::from_secs(1));
        assert_eq!(config.pacing.max(), Duration::from_secs(3));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn rejects_zero_users() {
        let err = LoadTestConfig::try_from(parse(&["-u", "0"])).unwrap_err();
        assert_eq!(err, ConfigError::NoUsers);
    }

    #[test]
    fn rejects_non_positive_spawn_rate() {
        let err = LoadTestConfig::try_from(parse(&["-r", "0"])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidSpawnRate(0.0));
    }

    #[test]
    fn rejects_inverted_or_negative_wait() {
        let err = LoadTestConfig::try_from(parse(&["--min-wait", "3", "--max-wait", "1"])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidWait { min: 3.0, max: 1.0 });

        let err = LoadTestConfig::try_from(parse(&["--min-wait=-1"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWait { .. }));
    }

    #[test]
    fn rejects_malformed_host() {
        let err = LoadTestConfig::try_from(parse(&["--host", "localhost:3000"])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost { .. }));
    }
}
