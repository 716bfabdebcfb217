use std::path::{Path, PathBuf};

use super::*;
use dealerscan_core::{AppConfig, RegionConfig, SearchPoint};
use dealerscan_scraper::{CollectionSummary, SinkOutcome};

fn test_config(regions_dir: &Path) -> AppConfig {
    AppConfig {
        endpoint_url: "http://127.0.0.1:1/ajax".to_string(),
        user_agent: "dealerscan-test/0.1".to_string(),
        request_timeout_secs: 1,
        inter_request_delay_ms: 0,
        log_level: "info".to_string(),
        log_file: regions_dir.join("test.log"),
        regions_dir: regions_dir.to_path_buf(),
    }
}

fn sample_region() -> RegionConfig {
    RegionConfig {
        name: "au".to_string(),
        country: "AU".to_string(),
        output: PathBuf::from("mcintosh_dealers_australia.csv"),
        points: vec![
            SearchPoint {
                postal_code: "2000".to_string(),
                latitude: -33.8688,
                longitude: 151.2093,
                radius: 100,
                label: Some("Sydney".to_string()),
            },
            SearchPoint {
                postal_code: "0800".to_string(),
                latitude: -12.4634,
                longitude: 130.8456,
                radius: 100,
                label: None,
            },
        ],
    }
}

const REGION_YAML: &str = r#"
country: AU
output: dealers.csv
points:
  - { postal_code: "2000", latitude: -33.8688, longitude: 151.2093 }
"#;

#[test]
fn parses_collect_with_region() {
    let cli = Cli::try_parse_from(["dealerscan", "collect", "--region", "us"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Commands::Collect {
            region: ref r,
            output: None,
            dry_run: false
        } if r == "us"
    ));
}

#[test]
fn parses_collect_with_output_and_dry_run() {
    let cli = Cli::try_parse_from([
        "dealerscan",
        "collect",
        "--region",
        "config/regions/au.yaml",
        "--output",
        "out/au.csv",
        "--dry-run",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Commands::Collect {
            output: Some(ref o),
            dry_run: true,
            ..
        } if o == Path::new("out/au.csv")
    ));
}

#[test]
fn collect_requires_region() {
    assert!(Cli::try_parse_from(["dealerscan", "collect"]).is_err());
}

#[test]
fn parses_regions_without_filter() {
    let cli = Cli::try_parse_from(["dealerscan", "regions"]).unwrap();
    assert!(matches!(cli.command, Commands::Regions { region: None }));
}

#[test]
fn parses_regions_with_filter() {
    let cli = Cli::try_parse_from(["dealerscan", "regions", "--region", "au"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::Regions { region: Some(ref r) } if r == "au"
    ));
}

#[test]
fn missing_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["dealerscan"]).is_err());
}

#[test]
fn dry_run_lists_every_point() {
    let text = collect::format_dry_run(&sample_region(), Path::new("out.csv"));
    assert!(text.starts_with("dry-run: would search 2 point(s) in au (AU), writing out.csv\n"));
    assert!(text.contains("  Sydney (2000) lat=-33.8688 lng=151.2093 radius=100\n"));
    assert!(text.contains("  0800 lat=-12.4634 lng=130.8456 radius=100\n"));
}

#[test]
fn summary_reports_written_path() {
    let summary = CollectionSummary {
        points_searched: 15,
        points_failed: 1,
        points_empty: 3,
        records_extracted: 40,
        unique_dealers: 22,
        sink: SinkOutcome::Written {
            path: PathBuf::from("dealers.csv"),
            count: 22,
        },
    };
    assert_eq!(
        collect::format_summary("us", &summary),
        "us: searched 15 point(s), 1 failed, 40 record(s) extracted, \
         22 unique dealer(s) written to dealers.csv"
    );
}

#[test]
fn summary_reports_skipped_write() {
    let summary = CollectionSummary {
        points_searched: 2,
        points_failed: 2,
        points_empty: 0,
        records_extracted: 0,
        unique_dealers: 0,
        sink: SinkOutcome::Skipped,
    };
    assert!(collect::format_summary("au", &summary).ends_with("0 unique dealer(s) nothing written"));
}

#[test]
fn region_line_names_country_points_and_output() {
    let line = regions::format_region_line(Path::new("config/regions/au.yaml"), &sample_region());
    assert_eq!(
        line,
        "au [AU] 2 point(s) -> mcintosh_dealers_australia.csv (config/regions/au.yaml)"
    );
}

#[test]
fn regions_command_accepts_valid_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("au.yaml"), REGION_YAML).unwrap();

    let config = test_config(dir.path());
    assert!(regions::run_regions(&config, None).is_ok());
    assert!(regions::run_regions(&config, Some("au")).is_ok());
}

#[test]
fn regions_command_fails_on_invalid_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("au.yaml"), REGION_YAML).unwrap();
    std::fs::write(dir.path().join("bad.yaml"), "country: AU\npoints: []\n").unwrap();

    let config = test_config(dir.path());
    assert!(regions::run_regions(&config, None).is_err());
}

#[test]
fn regions_command_fails_on_empty_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(regions::run_regions(&test_config(dir.path()), None).is_err());
}

#[tokio::test]
async fn dry_run_collect_sends_no_request_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("au.yaml"), REGION_YAML).unwrap();
    let output = dir.path().join("dealers.csv");

    let config = test_config(dir.path());
    collect::run_collect(&config, "au", Some(&output), true)
        .await
        .expect("dry run should succeed");

    assert!(!output.exists());
}

#[tokio::test]
async fn collect_fails_for_unknown_region() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    assert!(collect::run_collect(&config, "nowhere", None, true).await.is_err());
}
