use dep_impact::adapters::outbound::console::StderrProgressReporter;
use dep_impact::adapters::outbound::filesystem::FileSystemReader;
use dep_impact::application::dto::{AnalysisRequest, OutputFormat};
use dep_impact::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use dep_impact::application::read_models::ImpactReadModelBuilder;
use dep_impact::application::use_cases::AnalyzeDependenciesUseCase;
use dep_impact::cli::Args;
use dep_impact::config::{self, ConfigFile};
use dep_impact::dependency_analysis::domain::LayoutOptions;
use dep_impact::logging;
use dep_impact::shared::error::ExitCode;
use dep_impact::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    let args = Args::parse_args();
    logging::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::for_error(&e).as_i32());
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let settings = Settings::merge(&args, config.as_ref())?;

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };
    let use_case = AnalyzeDependenciesUseCase::new(FileSystemReader::new(), progress_reporter);

    let request = AnalysisRequest::builder()
        .manifest_path(&args.manifest)
        .lockfile_path(&args.lockfile)
        .package(settings.package)
        .remove(settings.remove)
        .search(args.search.clone())
        .depth(settings.depth)
        .max_nodes(settings.max_nodes)
        .build()?;

    let response = use_case.execute(request)?;
    let read_model = ImpactReadModelBuilder::build(&response);

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(settings.format));
    }

    let formatter = FormatterFactory::create(settings.format);
    let output = formatter.format(&read_model)?;

    let presenter = PresenterFactory::create(PresenterType::from(args.output.clone()), args.quiet);
    presenter.present(&output)?;

    Ok(())
}

/// Explicit `--config` must exist; otherwise look for one in the working directory.
fn load_config(args: &Args) -> Result<Option<ConfigFile>> {
    match &args.config {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let discovered = config::discover_config(Path::new("."))?;
            if discovered.is_some() && !args.quiet {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            Ok(discovered)
        }
    }
}

/// Effective settings after applying CLI > config file > defaults.
#[derive(Debug, PartialEq)]
struct Settings {
    format: OutputFormat,
    depth: usize,
    max_nodes: usize,
    package: Option<String>,
    remove: Option<String>,
}

impl Settings {
    fn merge(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        let config_format = match config {
            Some(config) => config.output_format()?,
            None => None,
        };

        Ok(Self {
            format: args.format.or(config_format).unwrap_or_default(),
            depth: args
                .depth
                .or_else(|| config.and_then(|c| c.depth))
                .unwrap_or(LayoutOptions::DEFAULT_DEPTH),
            max_nodes: args
                .max_nodes
                .or_else(|| config.and_then(|c| c.max_nodes))
                .unwrap_or(LayoutOptions::DEFAULT_MAX_NODES),
            package: args
                .package
                .clone()
                .or_else(|| config.and_then(|c| c.package.clone())),
            remove: args
                .remove
                .clone()
                .or_else(|| config.and_then(|c| c.remove.clone())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["dep-impact"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn config(yaml: &str) -> ConfigFile {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    #[test]
    fn test_settings_defaults_without_config() {
        let settings = Settings::merge(&args(&[]), None).unwrap();

        assert_eq!(
            settings,
            Settings {
                format: OutputFormat::Text,
                depth: LayoutOptions::DEFAULT_DEPTH,
                max_nodes: LayoutOptions::DEFAULT_MAX_NODES,
                package: None,
                remove: None,
            }
        );
    }

    #[test]
    fn test_settings_config_fills_missing_flags() {
        let config = config("format: md\ndepth: 4\nmax_nodes: 60\npackage: react\nremove: lodash\n");
        let settings = Settings::merge(&args(&[]), Some(&config)).unwrap();

        assert_eq!(settings.format, OutputFormat::Markdown);
        assert_eq!(settings.depth, 4);
        assert_eq!(settings.max_nodes, 60);
        assert_eq!(settings.package.as_deref(), Some("react"));
        assert_eq!(settings.remove.as_deref(), Some("lodash"));
    }

    #[test]
    fn test_settings_cli_overrides_config() {
        let config = config("format: md\ndepth: 4\npackage: react\n");
        let settings = Settings::merge(
            &args(&["-f", "json", "-d", "1", "-p", "vue"]),
            Some(&config),
        )
        .unwrap();

        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.depth, 1);
        assert_eq!(settings.package.as_deref(), Some("vue"));
    }

    #[test]
    fn test_settings_invalid_config_format() {
        let config = config("format: pdf\n");
        assert!(Settings::merge(&args(&[]), Some(&config)).is_err());
    }

    #[test]
    fn test_load_config_explicit_missing_file_fails() {
        let err = load_config(&args(&["-c", "/nonexistent/dep-impact.config.yml"])).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
