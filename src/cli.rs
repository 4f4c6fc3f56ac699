use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use crate::editor::EditorSession;
use crate::model::Color;
use crate::protocol::DEFAULT_EXPORT_CELL_SIZE;
use crate::remote::DEFAULT_SERVER_URL;
use crate::render::{DEFAULT_CELL_SIZE, RenderOptions};
use crate::runtime::AppContext;

#[derive(Debug, Parser)]
#[command(
    name = "beadgrid",
    version,
    about = "Bead art pixel grid editor and recognition service client"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sends an image to the recognition service and installs the detected grid.
    Upload {
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
        #[arg(long)]
        save: Option<PathBuf>,
        #[arg(long)]
        render: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
        cell_size: u32,
    },
    Import {
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
        #[arg(long)]
        save: Option<PathBuf>,
    },
    Export {
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value = DEFAULT_SERVER_URL)]
        server: String,
        #[arg(long, default_value_t = DEFAULT_EXPORT_CELL_SIZE)]
        cell_size: u32,
    },
    Render {
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        select: Option<String>,
        #[arg(long, default_value_t = DEFAULT_CELL_SIZE)]
        cell_size: u32,
    },
    Info {
        input: PathBuf,
    },
    Apply {
        input: PathBuf,
        #[arg(long)]
        script: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let app = AppContext::new();

    match cli.command {
        Commands::Upload {
            input,
            server,
            save,
            render,
            cell_size,
        } => {
            let client = app.remote_service().client(&server);
            let payload = app
                .remote_service()
                .recognize_file(&client, &input)
                .map_err(|error| error.to_string())?;
            let mut session = EditorSession::new();
            app.session_service()
                .receive(&mut session, payload)
                .map_err(|error| error.to_string())?;
            let grid = session
                .grid()
                .ok_or_else(|| "no grid installed".to_string())?;
            if let Some(path) = &save {
                app.session_service()
                    .save_file(grid, path)
                    .map_err(|error| error.to_string())?;
            }
            if let Some(path) = &render {
                let image = app
                    .render_service()
                    .render_grid(grid, None, RenderOptions::new(cell_size))
                    .map_err(|error| error.to_string())?;
                app.render_service()
                    .save_png(path, &image)
                    .map_err(|error| error.to_string())?;
            }
            let summary = session
                .summary()
                .ok_or_else(|| "no grid installed".to_string())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).map_err(|error| error.to_string())?
            );
        }
        Commands::Import {
            input,
            server,
            save,
        } => {
            let client = app.remote_service().client(&server);
            let payload = app
                .remote_service()
                .import_file(&client, &input)
                .map_err(|error| error.to_string())?;
            let mut session = EditorSession::new();
            app.session_service()
                .receive(&mut session, payload)
                .map_err(|error| error.to_string())?;
            let grid = session
                .grid()
                .ok_or_else(|| "no grid installed".to_string())?;
            if let Some(path) = &save {
                app.session_service()
                    .save_file(grid, path)
                    .map_err(|error| error.to_string())?;
            }
            let summary = session
                .summary()
                .ok_or_else(|| "no grid installed".to_string())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&summary).map_err(|error| error.to_string())?
            );
        }
        Commands::Export {
            input,
            output,
            server,
            cell_size,
        } => {
            let mut session = EditorSession::new();
            app.session_service()
                .load_file(&mut session, &input)
                .map_err(|error| error.to_string())?;
            let grid = session
                .grid()
                .ok_or_else(|| "no grid installed".to_string())?;
            let client = app.remote_service().client(&server);
            let bytes = app
                .remote_service()
                .export(&client, grid, cell_size)
                .map_err(|error| error.to_string())?;
            std::fs::write(&output, &bytes).map_err(|error| error.to_string())?;
            println!(
                "{}",
                json!({"status": "ok", "output": output, "bytes": bytes.len()})
            );
        }
        Commands::Render {
            input,
            output,
            select,
            cell_size,
        } => {
            let mut session = EditorSession::new();
            app.session_service()
                .load_file(&mut session, &input)
                .map_err(|error| error.to_string())?;
            if let Some(hex) = &select {
                let color = hex.parse::<Color>().map_err(|error| error.to_string())?;
                let present = session
                    .grid()
                    .is_some_and(|grid| grid.stats().contains(color));
                if !present {
                    return Err(format!("color {color} does not appear in the grid"));
                }
                session.select_color(color);
            }
            let image = app
                .render_service()
                .render_session(&session, RenderOptions::new(cell_size))
                .map_err(|error| error.to_string())?
                .ok_or_else(|| "no grid installed".to_string())?;
            app.render_service()
                .save_png(&output, &image)
                .map_err(|error| error.to_string())?;
            println!(
                "{}",
                json!({
                    "status": "ok",
                    "output": output,
                    "width": image.width(),
                    "height": image.height()
                })
            );
        }
        Commands::Info { input } => {
            let mut session = EditorSession::new();
            app.session_service()
                .load_file(&mut session, &input)
                .map_err(|error| error.to_string())?;
            let grid = session
                .grid()
                .ok_or_else(|| "no grid installed".to_string())?;
            println!(
                "{}",
                serde_json::to_string_pretty(&grid.summary()).map_err(|error| error.to_string())?
            );
        }
        Commands::Apply {
            input,
            script,
            output,
            report,
        } => {
            let mut session = EditorSession::new();
            app.session_service()
                .load_file(&mut session, &input)
                .map_err(|error| error.to_string())?;
            let grid = session
                .grid()
                .ok_or_else(|| "no grid installed".to_string())?;
            let spec = app
                .script_service()
                .load_script(&script)
                .map_err(|error| error.to_string())?;
            let (edited, run_report) = app
                .script_service()
                .run(&spec, grid)
                .map_err(|error| error.to_string())?;
            let edited_grid = edited
                .grid()
                .ok_or_else(|| "script produced no grid".to_string())?;
            app.session_service()
                .save_file(edited_grid, &output)
                .map_err(|error| error.to_string())?;
            if let Some(report_path) = report {
                app.script_service()
                    .save_report(report_path, &run_report)
                    .map_err(|error| error.to_string())?;
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&run_report).map_err(|error| error.to_string())?
            );
        }
    }

    Ok(())
}
