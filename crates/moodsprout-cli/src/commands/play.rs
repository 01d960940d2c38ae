//! Interactive session driven by stdin lines.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use moodsprout_core::{dispatch, Config, Mood, MoodSession, Renderer, TaskCatalog};
use rand::Rng;

use crate::render::{FallibleRenderer, JsonRenderer, TerminalRenderer};

#[derive(Args)]
pub struct PlayArgs {
    /// Fixed RNG seed (overrides session.seed)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Emit directives as JSON lines instead of text
    #[arg(long)]
    pub json: bool,
    /// Task catalog TOML (overrides content.tasks_file)
    #[arg(long)]
    pub tasks_file: Option<PathBuf>,
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayCommand {
    Select(Mood),
    Done,
    Quote,
    Moods,
    Quit,
    Unknown(String),
}

impl PlayCommand {
    /// `None` for blank lines.
    pub fn parse(line: &str, catalog: &TaskCatalog) -> Option<Self> {
        let line = line.trim();
        let cmd = match line {
            "" => return None,
            "done" | "d" => PlayCommand::Done,
            "quote" | "q" => PlayCommand::Quote,
            "moods" | "m" => PlayCommand::Moods,
            "quit" | "exit" => PlayCommand::Quit,
            other => match catalog.resolve(other) {
                Some(mood) => PlayCommand::Select(mood.clone()),
                None => PlayCommand::Unknown(other.to_string()),
            },
        };
        Some(cmd)
    }
}

pub fn run(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let catalog = match &args.tasks_file {
        Some(path) => TaskCatalog::load(path)?,
        None => config.catalog()?,
    };
    let seed = args.seed.or(config.session.seed);
    let mut session =
        MoodSession::with_seed(seed).with_energy_step(config.session.energy_step);

    let input = io::stdin().lock();
    if args.json {
        let mut renderer = JsonRenderer::new(io::stdout());
        run_loop(&mut session, &catalog, input, &mut renderer, &mut io::sink())
    } else {
        let effects_rng = moodsprout_core::session_rng(seed.map(|s| s.wrapping_add(1)));
        let confetti = config.effects.confetti_count as usize;
        let mut renderer = TerminalRenderer::new(io::stdout(), effects_rng, confetti);
        run_loop(&mut session, &catalog, input, &mut renderer, &mut io::stdout())
    }
}

/// Feed `input` lines to the session until EOF or `quit`.
///
/// Directives go to `renderer`; menus and help go to `menu`.
pub fn run_loop<R, I, F>(
    session: &mut MoodSession<R>,
    catalog: &TaskCatalog,
    input: I,
    renderer: &mut F,
    menu: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>>
where
    R: Rng,
    I: BufRead,
    F: FallibleRenderer,
{
    renderer.apply(&session.change_quote());
    write_menu(menu, catalog)?;
    check_output(renderer)?;

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = PlayCommand::parse(&line, catalog) else {
            continue;
        };
        tracing::debug!(?cmd, "input");
        match cmd {
            PlayCommand::Select(mood) => {
                let out = session.select_mood(&mood, catalog)?;
                dispatch(&out, &mut *renderer);
            }
            PlayCommand::Done => dispatch(&session.complete_current_task(), &mut *renderer),
            PlayCommand::Quote => renderer.apply(&session.change_quote()),
            PlayCommand::Moods => write_menu(menu, catalog)?,
            PlayCommand::Quit => break,
            PlayCommand::Unknown(text) => {
                writeln!(menu, "unknown command: {text} (try 'moods')")?;
            }
        }
        check_output(renderer)?;
    }
    Ok(())
}

fn check_output<F: FallibleRenderer>(renderer: &mut F) -> io::Result<()> {
    match renderer.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn write_menu(menu: &mut dyn Write, catalog: &TaskCatalog) -> io::Result<()> {
    writeln!(menu, "Moods:")?;
    for (i, mood) in catalog.moods().enumerate() {
        writeln!(menu, "  {}. {mood}", i + 1)?;
    }
    writeln!(menu, "Type a mood, 'done', 'quote', 'moods' or 'quit'.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodsprout_core::session_rng;
    use std::io::Cursor;

    fn run_json(script: &str) -> (Vec<serde_json::Value>, String, u8) {
        let catalog = TaskCatalog::builtin();
        let mut session = MoodSession::with_seed(Some(3));
        let mut renderer = JsonRenderer::new(Vec::new());
        let mut menu = Vec::new();
        run_loop(
            &mut session,
            &catalog,
            Cursor::new(script.to_string()),
            &mut renderer,
            &mut menu,
        )
        .unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let directives = out
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (directives, String::from_utf8(menu).unwrap(), session.energy())
    }

    fn types(directives: &[serde_json::Value]) -> Vec<&str> {
        directives.iter().map(|d| d["type"].as_str().unwrap()).collect()
    }

    #[test]
    fn parse_commands() {
        let catalog = TaskCatalog::builtin();
        assert_eq!(PlayCommand::parse("  ", &catalog), None);
        assert_eq!(PlayCommand::parse("d", &catalog), Some(PlayCommand::Done));
        assert_eq!(PlayCommand::parse("quit", &catalog), Some(PlayCommand::Quit));
        assert_eq!(
            PlayCommand::parse("2", &catalog),
            Some(PlayCommand::Select(Mood::new("難過")))
        );
        assert_eq!(
            PlayCommand::parse("dance", &catalog),
            Some(PlayCommand::Unknown("dance".into()))
        );
    }

    #[test]
    fn done_before_mood_is_advisory() {
        let (directives, _, energy) = run_json("done\n");
        assert_eq!(types(&directives), vec!["show_quote", "advisory"]);
        assert_eq!(energy, 0);
    }

    #[test]
    fn full_run_reaches_celebration() {
        let (directives, menu, energy) = run_json("開心\ndone\ndone\ndone\ndone\ndone\ndone\n");
        assert_eq!(energy, 100);
        assert!(types(&directives).contains(&"celebrate"));
        assert!(menu.contains("1. 開心"));
    }

    #[test]
    fn quit_stops_reading() {
        let (_, _, energy) = run_json("1\nquit\ndone\n");
        assert_eq!(energy, 0);
    }

    #[test]
    fn unknown_input_goes_to_menu() {
        let (directives, menu, _) = run_json("dance\n");
        assert_eq!(types(&directives), vec!["show_quote"]);
        assert!(menu.contains("unknown command: dance"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_surfaces_without_input() {
        let catalog = TaskCatalog::builtin();
        let mut session = MoodSession::with_seed(Some(3));
        let mut renderer = JsonRenderer::new(ClosedPipe);
        let err = run_loop(
            &mut session,
            &catalog,
            Cursor::new(""),
            &mut renderer,
            &mut io::sink(),
        )
        .unwrap_err();
        let err = err.downcast::<io::Error>().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn text_renderer_run() {
        let catalog = TaskCatalog::builtin();
        let mut session = MoodSession::with_seed(Some(4));
        let mut renderer = TerminalRenderer::new(Vec::new(), session_rng(Some(5)), 30);
        run_loop(
            &mut session,
            &catalog,
            Cursor::new("焦慮\ndone\n"),
            &mut renderer,
            &mut io::sink(),
        )
        .unwrap();
        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(text.contains("== 你的療癒行動：焦慮 =="));
        assert!(text.contains("20%"));
    }
}
