//! CaseForge CLI
//!
//! Modes:
//! - (none) or tui — interactive terminal UI
//! - fetch <KEY> — print the issue description and exit
//! - generate <KEY> — fetch, generate test cases, print and exit
//!
//! EXIT: Ctrl+Q and Ctrl+C quit the TUI from any state

use std::io::{self};
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use caseforge::cli::{
    parse_args, resolve_config_root, run_cli_mode, run_config_preflight, Args, Mode,
    PreflightOutcome, EXIT_CONFIG_ERROR, EXIT_FAILURE,
};
use caseforge::ui::{App, AppState};
use caseforge::{config, logging};

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args: Vec<String> = std::env::args().collect();

    let parsed = match parse_args(args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    };

    // Handle --version flag
    if parsed.show_version {
        println!("caseforge v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Handle --help flag
    if parsed.show_help {
        print_help();
        return Ok(());
    }

    let mode = parsed.mode.clone().unwrap_or(Mode::Tui);

    // Handle CLI-only modes (non-TUI)
    if matches!(mode, Mode::Fetch { .. } | Mode::Generate { .. }) {
        let exit_code = run_cli_mode(parsed);
        std::process::exit(exit_code);
    }

    // TUI mode (default or explicit)
    run_tui_mode(parsed)
}

/// Run TUI mode
fn run_tui_mode(args: Args) -> anyhow::Result<()> {
    // Resolve config root
    let config_root = match resolve_config_root(args.config_root) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = logging::init_logging(&config_root);

    // Run configuration preflight (first-run wizard)
    match run_config_preflight(&config_root) {
        Ok(PreflightOutcome::Exit) => {
            return Ok(());
        }
        Ok(PreflightOutcome::Proceed) => {}
        Err(e) => {
            eprintln!("Preflight error: {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    }

    let config = match config::load_config(&config_root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let mut app = App::new(&config);

    // Main event loop
    while app.state() != AppState::Quitting {
        // Render
        caseforge::ui::render(&mut terminal, &app)?;

        // Block for input (100ms timeout)
        if poll(Duration::from_millis(100))? {
            if let Event::Key(key) = read()? {
                // Ctrl+C exits immediately from any state
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }

                handle_key_event(&mut app, key);

                if app.state() == AppState::Quitting {
                    break;
                }
            }
        }
    }

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

/// Print help message
fn print_help() {
    println!(
        "caseforge v{} - Jira test case generator",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    caseforge [options] [mode] [mode-args]");
    println!();
    println!("MODES:");
    println!("    (none)          TUI mode (default)");
    println!("    tui             TUI mode (explicit)");
    println!("    fetch <KEY>     Print the Jira issue description for <KEY>");
    println!("    generate <KEY>  Fetch <KEY> and generate test cases from it");
    println!();
    println!("OPTIONS:");
    println!("    --config-root <path>  Config root (default: CASEFORGE_HOME or current directory)");
    println!("    --json                Output JSON (for scripting)");
    println!("    --version             Show version information");
    println!("    --help                Show this help message");
    println!();
    println!("TUI KEYS:");
    println!("    Tab / Shift+Tab   Move between fields");
    println!("    Ctrl+F            Fetch the issue description");
    println!("    Ctrl+G            Generate test cases from the requirement");
    println!("    Ctrl+R            Discard edits, restore the fetched description");
    println!("    Up / Down         Select a test case in the results panel");
    println!("    Enter / Space     Expand or collapse the selected test case");
    println!("    Esc               Dismiss the status notice");
    println!("    Ctrl+Q / Ctrl+C   Quit");
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Control chords act on the whole app, regardless of focus
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('f') => app.fetch(),
            KeyCode::Char('g') => app.generate(),
            KeyCode::Char('r') => app.discard_edits(),
            KeyCode::Char('q') => app.quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(c) => app.handle_char(c),
        KeyCode::Backspace => app.handle_backspace(),
        KeyCode::Enter => app.handle_enter(),
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_prev(),
        KeyCode::Up => app.select_prev_case(),
        KeyCode::Down => app.select_next_case(),
        KeyCode::Esc => app.clear_notice(),
        _ => {}
    }
}
