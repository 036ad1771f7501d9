//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and initializes logging
//! - parses CLI arguments
//! - runs interpolation or fitting via the pipeline
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, HermiteArgs, PlotArgs, PolyArgs};
use crate::domain::{HermiteConfig, HermiteSegment, PolyConfig};
use crate::error::AppError;
use crate::interp::DomainSelection;

pub mod pipeline;

/// Entry point for the `curvekit` binary.
pub fn run() -> Result<(), AppError> {
    // Missing `.env` is fine; flags and built-in defaults still apply.
    dotenvy::dotenv().ok();
    init_logging();

    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Hermite(args) => handle_hermite(args),
        Command::Poly(args) => handle_poly(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    // A logger may already be installed when embedded (e.g. in tests).
    env_logger::Builder::from_env(env).try_init().ok();
}

fn handle_hermite(args: HermiteArgs) -> Result<(), AppError> {
    let config = hermite_config_from_args(&args)?;
    let points = pipeline::run_hermite(&config)?;

    match &config.output {
        Some(path) => crate::io::write_points_tsv(path, &points)?,
        None => print!("{}", crate::report::format_hermite_points(&points)),
    }
    Ok(())
}

fn handle_poly(args: PolyArgs) -> Result<(), AppError> {
    let config = poly_config_from_args(&args);
    let run = pipeline::run_poly(&config)?;

    println!("{}", crate::report::format_demo_summary(&run.outcome, &config));

    if !run.ridge_path.is_empty() {
        println!(
            "Ridge path (degree {}):\n{}",
            run.outcome.report.model.degree,
            crate::report::format_ridge_path(&run.ridge_path, &run.dataset)
        );
    }

    if config.plot {
        let plot = crate::plot::render_fit_plot(
            &run.dataset,
            &run.outcome.report.model,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    if let Some(path) = &config.export_model {
        crate::io::write_model_json(path, &run.outcome)?;
    }

    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let file = crate::io::read_model_json(&args.model)?;

    println!(
        "Model: {} degree {} | MSE={:.4}",
        file.model.kind.display_name(),
        file.model.degree,
        file.mse
    );
    let plot = crate::plot::render_model_file_plot(&file, args.width, args.height);
    println!("{plot}");
    Ok(())
}

/// Resolve Hermite flags (reading `--tfile` if given) into a run configuration.
pub fn hermite_config_from_args(args: &HermiteArgs) -> Result<HermiteConfig, AppError> {
    let list = args
        .tfile
        .as_deref()
        .map(crate::io::read_param_lines)
        .transpose()?;

    let selection = DomainSelection {
        single: args.t,
        range: args.trange.clone(),
        list,
    };

    Ok(HermiteConfig {
        segment: HermiteSegment::new(args.f0, args.f1, args.fd0, args.fd1),
        domain: selection.resolve()?,
        output: args.output.clone(),
    })
}

pub fn poly_config_from_args(args: &PolyArgs) -> PolyConfig {
    PolyConfig {
        npoints: args.npoints,
        noise_std: args.noise,
        seed: args.seed,
        requested_degree: args.degree,
        demo: args.demo,
        alpha: args.alpha,
        alphas: args.alphas.clone(),
        plot: !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_model: args.export_model.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ParamDomain;

    fn hermite_args() -> HermiteArgs {
        HermiteArgs {
            f0: 0.0,
            f1: 1.0,
            fd0: 0.0,
            fd1: 0.0,
            t: None,
            trange: None,
            tfile: None,
            output: None,
        }
    }

    #[test]
    fn hermite_without_domain_is_configuration_error() {
        let err = hermite_config_from_args(&hermite_args()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn hermite_with_conflicting_domains_is_configuration_error() {
        let args = HermiteArgs {
            t: Some(0.5),
            trange: Some("0,1,0.5".to_string()),
            ..hermite_args()
        };
        assert_eq!(hermite_config_from_args(&args).unwrap_err().exit_code(), 2);
    }

    #[test]
    fn hermite_single_value() {
        let args = HermiteArgs {
            t: Some(0.5),
            ..hermite_args()
        };
        let config = hermite_config_from_args(&args).unwrap();
        assert_eq!(config.domain, ParamDomain::Single(0.5));
        assert_eq!(config.segment, HermiteSegment::new(0.0, 1.0, 0.0, 0.0));
    }
}
