use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand, ValueEnum};
use shiftboard_core::{
    dates::parse_date,
    grid::GroupAxis,
    models::{NewEntry, format::parse_datetime},
};

/// Terminal front end for shift requests and availability.
#[derive(Debug, Parser)]
#[command(name = "shiftboard", version)]
pub struct Cli {
    /// Base URL of the shift API; overrides SHIFTBOARD_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Log in and print the session cookie to export as SHIFTBOARD_SESSION
    Login {
        login_id: String,
        #[arg(long, env = "SHIFTBOARD_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// End the current session
    Logout,
    /// Show the logged-in user and roles
    Whoami,
    /// List all requests
    Requests,
    /// Create a request (managers only)
    Create {
        #[arg(long, value_parser = parse_date_arg)]
        start_date: NaiveDate,
        #[arg(long, value_parser = parse_date_arg)]
        end_date: NaiveDate,
        /// `YYYY-MM-DD HH:MM:SS`, or a bare date for midnight
        #[arg(long, value_parser = parse_datetime_arg)]
        deadline: NaiveDateTime,
    },
    /// Show a request and its availability grid
    Show {
        id: i64,
        #[arg(long, value_enum, default_value_t = ViewAxis::Submitter)]
        by: ViewAxis,
        #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..24))]
        from_hour: u8,
        #[arg(long, default_value_t = 23, value_parser = clap::value_parser!(u8).range(0..24))]
        to_hour: u8,
    },
    /// Submit availability for a request (employees only)
    Submit {
        id: i64,
        /// `YYYY-MM-DD:H`, repeatable
        #[arg(long = "slot", value_parser = parse_slot, required = true)]
        slots: Vec<NewEntry>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewAxis {
    Submitter,
    Date,
}

impl From<ViewAxis> for GroupAxis {
    fn from(axis: ViewAxis) -> Self {
        match axis {
            ViewAxis::Submitter => GroupAxis::Submitter,
            ViewAxis::Date => GroupAxis::Date,
        }
    }
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("expected YYYY-MM-DD, got `{value}`"))
}

fn parse_datetime_arg(value: &str) -> Result<NaiveDateTime, String> {
    parse_datetime(value).ok_or_else(|| format!("expected `YYYY-MM-DD HH:MM:SS`, got `{value}`"))
}

/// Parses `2024-06-01:9` into a slot.
pub fn parse_slot(value: &str) -> Result<NewEntry, String> {
    let (date, hour) = value
        .rsplit_once(':')
        .ok_or_else(|| format!("expected DATE:HOUR, got `{value}`"))?;
    let date = parse_date_arg(date)?;
    let hour: u8 = hour
        .trim()
        .parse()
        .map_err(|_| format!("invalid hour in `{value}`"))?;
    if hour > 23 {
        return Err(format!("hour must be between 0 and 23 in `{value}`"));
    }
    Ok(NewEntry { date, hour })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case("2024-06-01:9", 9)]
    #[case("2024-06-01:23", 23)]
    #[case("2024-06-01: 0", 0)]
    fn parses_slots(#[case] raw: &str, #[case] hour: u8) {
        let slot = parse_slot(raw).unwrap();
        assert_eq!(slot.hour, hour);
        assert_eq!(slot.date, parse_date("2024-06-01").unwrap());
    }

    #[rstest]
    #[case("2024-06-01")]
    #[case("2024-06-01:24")]
    #[case("2024-06-01:nine")]
    #[case("06/01:9")]
    fn rejects_bad_slots(#[case] raw: &str) {
        assert!(parse_slot(raw).is_err());
    }

    #[test]
    fn parses_show_command() {
        let cli = Cli::parse_from(["shiftboard", "show", "3", "--by", "date", "--from-hour", "8"]);
        match cli.command {
            Command::Show { id, by, from_hour, to_hour } => {
                assert_eq!(id, 3);
                assert_eq!(by, ViewAxis::Date);
                assert_eq!(from_hour, 8);
                assert_eq!(to_hour, 23);
            }
            other => panic!("Expected show, got: {other:?}"),
        }
    }

    #[test]
    fn parses_submit_command() {
        let cli = Cli::parse_from([
            "shiftboard",
            "--api-url",
            "http://example.test/api",
            "submit",
            "4",
            "--slot",
            "2024-06-01:9",
            "--slot",
            "2024-06-02:14",
        ]);
        assert_eq!(cli.api_url.as_deref(), Some("http://example.test/api"));
        match cli.command {
            Command::Submit { id, slots } => {
                assert_eq!(id, 4);
                assert_eq!(slots.len(), 2);
            }
            other => panic!("Expected submit, got: {other:?}"),
        }
    }

    #[test]
    fn show_rejects_out_of_range_hour() {
        let result = Cli::try_parse_from(["shiftboard", "show", "3", "--to-hour", "24"]);
        assert!(result.is_err());
    }
}
