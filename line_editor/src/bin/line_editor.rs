// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read lines in a loop and echo them back, with history hints shown beneath the edit
//! row. Ctrl+C or closing stdin exits.

use clap::Parser;
use crossterm::style::Stylize;
use miette::IntoDiagnostic;
use r3bl_line_editor::{EditorConfig, HistoryHinter, RawModeGuard, Readline, ReadlineError,
                       StdinKeyReader, TracingConfig, try_initialize_logging};
use std::{io::{Write, stdout},
          path::PathBuf};
use tracing_core::LevelFilter;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "line_editor")]
#[command(about = "Emacs style line editor with history search 🔎")]
#[command(version)]
#[command(next_line_help = true)]
pub struct CLIArg {
    #[arg(long, short = 'p', default_value = "> ", help = "Prompt shown before the line")]
    pub prompt: String,

    #[arg(
        long,
        short = 'c',
        help = "JSON config file. Defaults to `r3bl-line-editor/config.json` in the user's config dir"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "History file. Overrides `history_file` from the config")]
    pub history: Option<PathBuf>,

    #[arg(long, short = 'l', help = "Log to this file for debugging")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        default_value = "debug",
        help = "One of: off, error, warn, info, debug, trace"
    )]
    pub log_level: String,
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let _guard = try_initialize_logging(TracingConfig {
        level_filter: cli_arg.log_level.parse::<LevelFilter>().into_diagnostic()?,
        log_file: cli_arg.log_file.clone(),
    })?;

    let mut config = match cli_arg.config.or_else(EditorConfig::default_path) {
        Some(path) => EditorConfig::try_load_or_default(&path)?,
        None => EditorConfig::default(),
    };
    if let Some(history_file) = cli_arg.history {
        config.history_file = Some(history_file);
    }

    let mut readline = Readline::try_new(&config)?.with_hinter(HistoryHinter::default());
    let prompt = cli_arg.prompt.as_str().green().bold().to_string();

    let mut key_reader = StdinKeyReader;
    let mut stdout = stdout();
    let _raw_mode = RawModeGuard::new()?;

    loop {
        match readline.read_line(&prompt, &mut key_reader, &mut stdout) {
            Ok(line) => {
                write!(stdout, "{}\r\n", format!("{line:?}").cyan()).into_diagnostic()?;
                if let Some(error) = readline.last_history_error() {
                    write!(stdout, "{}\r\n", format!("history not saved: {error}").yellow())
                        .into_diagnostic()?;
                }
                stdout.flush().into_diagnostic()?;
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(error) => return Err(error.into()),
        }
    }

    write!(stdout, "\r\n").into_diagnostic()?;
    stdout.flush().into_diagnostic()?;
    tracing::info!(message = "line_editor -> exit");
    Ok(())
}
