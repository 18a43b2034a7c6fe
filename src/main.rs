use certgen::{cli, config, error, export, pipeline, render, source};
use certgen_common::export::excel_core::generate_input_sheet_buffer;
use certgen_common::LogicalField;
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::{CertGenError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("✖ Error: {}", e);
            if let CertGenError::Common(certgen_common::Error::ColumnNotFound { available, .. }) = &e {
                eprintln!("Available columns: {:?}", available);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match (&cli.command, cli.config.as_deref()) {
        // `config --init --config <new file>`: nothing to load yet
        (Commands::Config { init: true, .. }, Some(path)) if !path.exists() => Config::default(),
        (_, explicit) => Config::load(explicit)?,
    };

    match cli.command {
        Commands::Generate {
            sheet,
            single,
            multi,
            output,
            max_line_width,
            line_spacing,
            default_type,
            strict_ids,
        } => {
            println!("🎓 certgen - certificate generation\n");

            let mut render_config = config.render.clone();
            if let Some(width) = max_line_width {
                render_config.max_line_width = width;
            }
            if let Some(spacing) = line_spacing {
                render_config.line_spacing = spacing;
            }
            if let Some(label) = default_type {
                render_config.default_participant_type = label;
            }
            render_config.validate()?;

            let single = required_path(single.or(config.single_line_template), "--single")?;
            let multi = required_path(multi.or(config.multi_line_template), "--multi")?;
            let output_dir = output
                .or(config.output_dir)
                .unwrap_or_else(|| PathBuf::from("certificates"));

            // 1. Load everything before touching any row
            println!("[1/3] Loading templates, fonts and spreadsheet...");
            let templates = render::Templates::load(&single, &multi)?;
            let fonts = render::FontBook::load(&render_config)?;
            let table = source::load_table(&sheet)?;
            println!("✔ {} rows loaded from {}\n", table.len(), sheet.display());

            // 2. Render + export
            println!("[2/3] Generating certificates...");
            let renderer = render::Renderer::new(templates, fonts, render_config);
            let exporter = export::Exporter::with_pdf(&output_dir);
            let pipeline = pipeline::Pipeline::new(
                renderer,
                exporter,
                pipeline::PipelineOptions { strict_ids },
            );

            let progress = ProgressBar::new(table.len() as u64);
            if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len}") {
                progress.set_style(style);
            }
            let report = pipeline.run_with_progress(&table, &progress)?;

            // 3. Summary
            println!("\n[3/3] Summary");
            if !report.duplicate_ids.is_empty() {
                println!("⚠ Duplicate paper ids (overwritten): {}", report.duplicate_ids.join(", "));
            }
            println!("✔ Generated: {}", report.generated());
            println!("{} Failures: {}", if report.is_success() { "✔" } else { "✖" }, report.failures());
            println!("  Output: {}", output_dir.display());

            if report.is_success() {
                println!("\n✅ Done");
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }

        Commands::Columns { sheet } => {
            let table = source::load_table(&sheet)?;
            println!("Columns: {:?}", table.headers);
            println!("Rows: {}\n", table.len());

            let mapping = pipeline::preview_mapping(&table)?;
            for field in [
                LogicalField::ParticipantName,
                LogicalField::Institute,
                LogicalField::ParticipantType,
                LogicalField::PaperTitle,
                LogicalField::PaperId,
            ] {
                match mapping.column(field) {
                    Some(col) => println!("  {:<17} ← \"{}\"", field.key(), col.header),
                    None => println!(
                        "  {:<17} ← (absent, default \"{}\")",
                        field.key(),
                        config.render.default_participant_type
                    ),
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::InitSheet { output } => {
            let buffer = generate_input_sheet_buffer().map_err(CertGenError::ExcelGeneration)?;
            std::fs::write(&output, buffer)?;
            println!("✔ Participant sheet written: {}", output.display());
            Ok(ExitCode::SUCCESS)
        }

        Commands::Config { show, init } => {
            if init {
                let path = match cli.config.as_deref() {
                    Some(path) => path.to_path_buf(),
                    None => Config::config_path()?,
                };
                if path.exists() {
                    println!("Config already exists: {}", path.display());
                } else {
                    Config::default().save(&path)?;
                    println!("✔ Default config written: {}", path.display());
                }
            }

            if show || !init {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn required_path(path: Option<PathBuf>, flag: &str) -> Result<PathBuf> {
    path.ok_or_else(|| {
        CertGenError::Config(format!("{} template is not set (flag or config file)", flag))
    })
}
