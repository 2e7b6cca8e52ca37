//! skypanel - weather snapshot TUI

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventKind, EventOutcome,
    RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

use skypanel::action::Action;
use skypanel::components::{Component, SnapshotDisplay, SnapshotDisplayProps};
use skypanel::effect::Effect;
use skypanel::provider;
use skypanel::reducer::reducer;
use skypanel::state::{AppState, REFRESH_ANIM_TICK_MS};

/// skypanel - single-screen weather snapshot TUI
#[derive(Parser, Debug)]
#[command(name = "skypanel")]
#[command(about = "A single-screen weather snapshot display")]
struct Args {
    /// Simulated reload delay in milliseconds
    #[arg(long, default_value_t = provider::REFRESH_DELAY_MS)]
    refresh_delay_ms: u64,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        refresh_delay_ms,
        debug: debug_args,
    } = Args::parse();

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(refresh_delay_ms))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    debug
        .run_effect_app(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            None,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(REFRESH_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            |frame, area, state, render_ctx: RenderContext| {
                let mut display = SnapshotDisplay;
                display.render(
                    frame,
                    area,
                    SnapshotDisplayProps {
                        state,
                        is_focused: render_ctx.is_focused(),
                    },
                );
            },
            |event, state| handle_event(event, state),
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

fn handle_event(event: &EventKind, state: &AppState) -> EventOutcome<Action> {
    let mut display = SnapshotDisplay;
    let props = SnapshotDisplayProps {
        state,
        is_focused: true,
    };
    let action = display.handle_event(event, props).into_iter().next();
    match action {
        Some(action) => EventOutcome::from(action),
        None => match event {
            // Re-render on terminal resize (no action needed, just redraw)
            EventKind::Resize(_, _) => EventOutcome::ignored().with_render(),
            _ => EventOutcome::ignored(),
        },
    }
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::ReloadSnapshot { delay_ms } => {
            ctx.tasks().spawn("refresh", async move {
                match provider::load_snapshot(Duration::from_millis(delay_ms)).await {
                    Ok(snapshot) => Action::SnapshotDidLoad(snapshot),
                    // ProviderError is uninhabited; this arm is statically dead
                    Err(error) => match error {},
                }
            });
        }
    }
}
