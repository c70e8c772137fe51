// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod list;
mod logging;
mod runtime;

use anyhow::{Context, Result, anyhow, bail};
use config::Config;
use connect_app::{AppState, TabKind};
use connect_catalog::{APP_NAME, version_line};
use connect_tui::UiOptions;
use list::ListRequest;
use logging::LogTarget;
use runtime::{CatalogRuntime, CatalogSource};
use std::env;
use std::path::PathBuf;

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.show_version {
        println!("{}", version_line());
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `{APP_NAME} --print-example-config` to generate a v1 template",
            options.config_path.display()
        )
    })?;

    let headless = options.list.is_some() || options.export_catalog || options.check_only;
    let log_target = if headless {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.log_file()?)
    };
    logging::init(&config.log_level(), &log_target)?;

    let source = match options.catalog_path.clone().or_else(|| config.catalog_path()) {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Mock,
    };
    let mut runtime = CatalogRuntime::open(source.clone()).with_context(|| match &source {
        CatalogSource::File(path) => format!(
            "open catalog {}; fix the file or drop --catalog / [data].catalog to use the built-in data",
            path.display()
        ),
        CatalogSource::Mock => "open built-in catalog".to_owned(),
    })?;

    if options.export_catalog {
        println!("{}", runtime.catalog().to_json()?);
        return Ok(());
    }

    if let Some(request) = &options.list {
        print!("{}", list::render(runtime.catalog(), request)?);
        return Ok(());
    }

    let ui_options = UiOptions {
        status_timeout: config.status_timeout()?,
    };
    if options.check_only {
        tracing::debug!(
            config = %options.config_path.display(),
            start_tab = config.start_tab().label(),
            "check passed"
        );
        return Ok(());
    }

    tracing::info!(
        config = %options.config_path.display(),
        start_tab = config.start_tab().label(),
        version = env!("CARGO_PKG_VERSION"),
        "starting"
    );
    let mut state = AppState::new(config.start_tab());
    connect_tui::run_app(&mut state, &mut runtime, ui_options)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    catalog_path: Option<PathBuf>,
    print_config_path: bool,
    print_example: bool,
    export_catalog: bool,
    check_only: bool,
    list: Option<ListRequest>,
    show_help: bool,
    show_version: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        catalog_path: None,
        print_config_path: false,
        print_example: false,
        export_catalog: false,
        check_only: false,
        list: None,
        show_help: false,
        show_version: false,
    };
    let mut list_tab: Option<TabKind> = None;
    let mut category: Option<String> = None;
    let mut search: Option<String> = None;
    let mut sort: Option<String> = None;
    let mut json = false;

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        let mut value_for = |flag: &str, what: &str| -> Result<String> {
            iter.next()
                .map(|value| value.as_ref().to_owned())
                .ok_or_else(|| anyhow!("{flag} requires {what}"))
        };
        match arg.as_ref() {
            "--config" => {
                options.config_path = PathBuf::from(value_for("--config", "a file path")?);
            }
            "--catalog" => {
                options.catalog_path = Some(PathBuf::from(value_for("--catalog", "a file path")?));
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--export-catalog" => {
                options.export_catalog = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--list" => {
                let raw = value_for("--list", "a tab name (discover, campaigns, outreach)")?;
                let tab = TabKind::parse(&raw).filter(|tab| tab.is_list()).ok_or_else(|| {
                    anyhow!("--list got {raw:?}; use one of: discover, campaigns, outreach")
                })?;
                list_tab = Some(tab);
            }
            "--category" => {
                category = Some(value_for("--category", "a chip label such as Fashion")?);
            }
            "--search" => {
                search = Some(value_for("--search", "search text")?);
            }
            "--sort" => {
                sort = Some(value_for("--sort", "a sort key such as name or name:desc")?);
            }
            "--json" => {
                json = true;
            }
            "--version" | "-V" => {
                options.show_version = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                bail!("unknown argument {unknown:?}; run with --help to see supported options");
            }
        }
    }

    match list_tab {
        Some(tab) => {
            options.list = Some(ListRequest {
                category,
                search: search.unwrap_or_default(),
                sort,
                json,
                ..ListRequest::new(tab)
            });
        }
        None => {
            let stray = [
                ("--category", category.is_some()),
                ("--search", search.is_some()),
                ("--sort", sort.is_some()),
                ("--json", json),
            ];
            if let Some((flag, _)) = stray.iter().find(|(_, set)| *set) {
                bail!("{flag} only applies to --list; add --list <tab>");
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("{}", version_line());
    println!("  --config <path>          Use a specific config path");
    println!("  --catalog <path>         Load records from a JSON catalog instead of the built-in data");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a v1 config template");
    println!("  --export-catalog         Print the active catalog as JSON");
    println!("  --check                  Validate config and catalog, then exit");
    println!("  --list <tab>             Print a list screen: discover, campaigns, outreach");
    println!("    --category <label>     Only rows in this category (All, Fashion, Active, Sent, ...)");
    println!("    --search <text>        Case-insensitive search over the screen's search fields");
    println!("    --sort <key>[:desc]    Sort the filtered rows");
    println!("    --json                 Print JSON instead of an aligned table");
    println!("  --version, -V            Show version");
    println!("  --help, -h               Show this help");
}

#[cfg(test)]
mod tests {
    use super::{CliOptions, parse_cli_args};
    use crate::list::ListRequest;
    use anyhow::Result;
    use connect_app::TabKind;
    use std::path::PathBuf;

    fn default_options_path() -> PathBuf {
        PathBuf::from("/tmp/connect-config.toml")
    }

    #[test]
    fn parse_cli_args_defaults_to_provided_config_path() -> Result<()> {
        let options = parse_cli_args(Vec::<String>::new(), default_options_path())?;
        assert_eq!(
            options,
            CliOptions {
                config_path: default_options_path(),
                catalog_path: None,
                print_config_path: false,
                print_example: false,
                export_catalog: false,
                check_only: false,
                list: None,
                show_help: false,
                show_version: false,
            }
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_config_and_catalog_paths() -> Result<()> {
        let options = parse_cli_args(
            vec![
                "--config",
                "/custom/config.toml",
                "--catalog",
                "/data/catalog.json",
            ],
            default_options_path(),
        )?;
        assert_eq!(options.config_path, PathBuf::from("/custom/config.toml"));
        assert_eq!(
            options.catalog_path,
            Some(PathBuf::from("/data/catalog.json"))
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_errors_for_missing_values() {
        let error = parse_cli_args(vec!["--config"], default_options_path())
            .expect_err("missing config value should fail");
        assert!(error.to_string().contains("--config requires a file path"));

        let error = parse_cli_args(vec!["--list", "campaigns", "--sort"], default_options_path())
            .expect_err("missing sort value should fail");
        assert!(error.to_string().contains("--sort requires"));
    }

    #[test]
    fn parse_cli_args_errors_for_unknown_argument() {
        let error = parse_cli_args(vec!["--wat"], default_options_path())
            .expect_err("unknown arg should fail");
        let message = error.to_string();
        assert!(message.contains("unknown argument"));
        assert!(message.contains("--help"));
    }

    #[test]
    fn parse_cli_args_builds_list_request() -> Result<()> {
        let options = parse_cli_args(
            vec![
                "--json",
                "--list",
                "Outreach",
                "--category",
                "Replied",
                "--search",
                "sarah",
                "--sort",
                "unread:desc",
            ],
            default_options_path(),
        )?;
        assert_eq!(
            options.list,
            Some(ListRequest {
                tab: TabKind::Outreach,
                category: Some("Replied".to_owned()),
                search: "sarah".to_owned(),
                sort: Some("unread:desc".to_owned()),
                json: true,
            })
        );
        Ok(())
    }

    #[test]
    fn parse_cli_args_rejects_non_list_tabs() {
        let error = parse_cli_args(vec!["--list", "profile"], default_options_path())
            .expect_err("profile has no list");
        assert!(
            error
                .to_string()
                .contains("use one of: discover, campaigns, outreach")
        );
    }

    #[test]
    fn parse_cli_args_rejects_list_flags_without_list() {
        let error = parse_cli_args(vec!["--search", "chen"], default_options_path())
            .expect_err("search needs --list");
        assert!(error.to_string().contains("--search only applies to --list"));
    }

    #[test]
    fn parse_cli_args_sets_print_and_check_flags() -> Result<()> {
        let options = parse_cli_args(
            vec![
                "--print-config-path",
                "--print-example-config",
                "--check",
                "--export-catalog",
            ],
            default_options_path(),
        )?;
        assert!(options.print_config_path);
        assert!(options.print_example);
        assert!(options.check_only);
        assert!(options.export_catalog);
        assert!(!options.show_help);
        Ok(())
    }

    #[test]
    fn parse_cli_args_sets_help_and_version_flags() -> Result<()> {
        let long = parse_cli_args(vec!["--help"], default_options_path())?;
        assert!(long.show_help);

        let short = parse_cli_args(vec!["-h"], default_options_path())?;
        assert!(short.show_help);

        let version = parse_cli_args(vec!["-V"], default_options_path())?;
        assert!(version.show_version);
        Ok(())
    }
}
