use clap::Parser;

use super::*;

#[test]
fn test_cli_parses_run() {
    let cli = Cli::try_parse_from([
        "combine-rank",
        "run",
        "--raw",
        "bnw_bar_raw.csv",
        "--out",
        "out",
    ])
    .unwrap();
    let Command::Run(args) = cli.command;
    assert_eq!(args.raw, PathBuf::from("bnw_bar_raw.csv"));
    assert!(args.state.is_none());
    assert!(args.years.is_empty());
    assert!(!args.no_grid);
}

#[test]
fn test_cli_years_list() {
    let cli = Cli::try_parse_from([
        "combine-rank",
        "run",
        "--raw",
        "raw.csv",
        "--out",
        "out",
        "--years",
        "2025,2028",
    ])
    .unwrap();
    let Command::Run(args) = cli.command;
    assert_eq!(args.years, vec![2025, 2028]);
}

#[test]
fn test_cli_rejects_bad_year() {
    assert!(
        Cli::try_parse_from([
            "combine-rank",
            "run",
            "--raw",
            "raw.csv",
            "--out",
            "out",
            "--years",
            "2025,abcd",
        ])
        .is_err()
    );
    assert!(
        Cli::try_parse_from([
            "combine-rank",
            "run",
            "--raw",
            "raw.csv",
            "--out",
            "out",
            "--years",
            "3000",
        ])
        .is_err()
    );
}

#[test]
fn test_cli_requires_raw_and_out() {
    assert!(Cli::try_parse_from(["combine-rank", "run", "--out", "out"]).is_err());
    assert!(Cli::try_parse_from(["combine-rank", "run", "--raw", "raw.csv"]).is_err());
}

#[test]
fn test_parse_year_bounds() {
    assert_eq!(parse_year("2026"), Ok(2026));
    assert!(parse_year("1999").is_err());
    assert!(parse_year("2100").is_err());
    assert!(parse_year("").is_err());
}
