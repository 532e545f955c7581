use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use statement_insight::ui::app::{App, View};
use statement_insight::ui::render;

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| render::render(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                if app.show_detail {
                    match key.code {
                        KeyCode::Esc | KeyCode::Char('d') => app.toggle_detail(),
                        KeyCode::Char('q') => return Ok(()),
                        _ => {}
                    }
                    continue;
                }

                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Tab => app.cycle_view(),
                    KeyCode::Char('1') => app.switch_view(View::Transactions),
                    KeyCode::Char('2') => app.switch_view(View::Summary),
                    KeyCode::Char('3') => app.switch_view(View::Wasteful),
                    KeyCode::Char('4') => app.switch_view(View::Advice),
                    KeyCode::Up => app.previous(),
                    KeyCode::Down => app.next(),
                    KeyCode::Char('d') | KeyCode::Enter => app.toggle_detail(),
                    _ => {}
                }
            }
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let statement_path = args.get(1).ok_or_else(|| {
        anyhow::anyhow!(
            "Please provide a statement text file as an argument\nUsage: statement-insight <statement-text-file>"
        )
    })?;

    // Analyze before touching the terminal so read errors stay readable.
    let app = App::new(statement_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
