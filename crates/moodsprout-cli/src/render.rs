//! Terminal renderers for session directives.

use std::io::{self, Write};

use moodsprout_core::effects::{ConfettiBurst, Viewport};
use moodsprout_core::{Directive, FeedbackStyle, LeafColor, Renderer, TaskStyle, TreeVisuals};
use rand::Rng;

const BAR_WIDTH: usize = 20;
const CONFETTI_COLUMNS: f64 = 48.0;

/// Plain-text renderer. Write errors are kept and surfaced by `take_error`,
/// since `Renderer::apply` cannot fail.
pub struct TerminalRenderer<W: Write, R: Rng> {
    out: W,
    rng: R,
    confetti_count: usize,
    error: Option<io::Error>,
}

impl<W: Write, R: Rng> TerminalRenderer<W, R> {
    pub fn new(out: W, rng: R, confetti_count: usize) -> Self {
        Self {
            out,
            rng,
            confetti_count,
            error: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, directive: &Directive) -> io::Result<()> {
        match directive {
            Directive::SetTitle { text } => writeln!(self.out, "== {text} =="),
            Directive::RevealPanels => writeln!(self.out, "{}", "─".repeat(BAR_WIDTH + 8)),
            Directive::SetFeedback(feedback) => match feedback.style {
                FeedbackStyle::Plain => writeln!(self.out, "{}", feedback.text),
                FeedbackStyle::Banner => {
                    let rule = "★".repeat(BAR_WIDTH);
                    writeln!(self.out, "{rule}\n{}\n{rule}", feedback.text)
                }
            },
            Directive::ShowTask { text, style } => {
                writeln!(self.out, "{} {text}", task_marker(*style))
            }
            Directive::UpdateTree(visuals) => {
                for line in tree_art(visuals) {
                    writeln!(self.out, "{line}")?;
                }
                Ok(())
            }
            Directive::SetEnergyBar { percent } => {
                writeln!(self.out, "{}", energy_bar(*percent))
            }
            Directive::Celebrate => {
                let line = confetti_line(self.confetti_count, &mut self.rng);
                writeln!(self.out, "{line}")
            }
            Directive::ShowQuote(quote) => writeln!(self.out, "{} {}", quote.emoji, quote.text),
            Directive::Advisory { message } => writeln!(self.out, "! {message}"),
        }
    }
}

impl<W: Write, R: Rng> Renderer for TerminalRenderer<W, R> {
    fn apply(&mut self, directive: &Directive) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.write(directive) {
            self.error = Some(e);
        }
    }
}

/// One JSON object per directive, one per line.
pub struct JsonRenderer<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn apply(&mut self, directive: &Directive) {
        if self.error.is_some() {
            return;
        }
        let result = serde_json::to_writer(&mut self.out, directive)
            .map_err(io::Error::from)
            .and_then(|()| writeln!(self.out));
        if let Err(e) = result {
            self.error = Some(e);
        }
    }
}

/// A renderer whose output can fail; the failure is reported after the fact.
pub trait FallibleRenderer: Renderer {
    fn take_error(&mut self) -> Option<io::Error>;
}

impl<W: Write, R: Rng> FallibleRenderer for TerminalRenderer<W, R> {
    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

impl<W: Write> FallibleRenderer for JsonRenderer<W> {
    fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }
}

fn task_marker(style: TaskStyle) -> &'static str {
    match style {
        TaskStyle::Plain => "✎",
        TaskStyle::Style2 => "✍",
        TaskStyle::Style3 => "🖋",
    }
}

pub fn energy_bar(percent: u8) -> String {
    let percent = percent.min(100);
    let filled = usize::from(percent) * BAR_WIDTH / 100;
    format!(
        "[{}{}] {percent}%",
        "#".repeat(filled),
        ".".repeat(BAR_WIDTH - filled)
    )
}

/// Small ASCII tree. Canopy width follows `scale`, trunk rows follow
/// `trunk_height`, flowers and sparkles fade in with their opacities.
pub fn tree_art(visuals: &TreeVisuals) -> Vec<String> {
    let leaf = match visuals.leaf_color {
        LeafColor::Sprout => '.',
        LeafColor::Leafy => 'o',
        LeafColor::Lush => '@',
    };
    let canopy_rows = (visuals.scale * 3.0).round() as usize;
    let trunk_rows = (visuals.trunk_height / 15.0).round().max(1.0) as usize;
    let width = canopy_rows * 2 + 1;
    let flowers_per_row = (visuals.flower_opacity * 2.0).round() as usize;

    let mut lines = Vec::new();
    if visuals.sparkle_active {
        lines.push(format!("{:^w$}", "✨ ✨ ✨", w = width + 4));
    }
    for row in 0..canopy_rows {
        let span = row * 2 + 1;
        let mut cells: Vec<char> = std::iter::repeat(leaf).take(span).collect();
        for i in 0..flowers_per_row.min(span / 2) {
            cells[i * 2 + 1] = '*';
        }
        let row_text: String = cells.into_iter().collect();
        lines.push(format!("{:^width$}", row_text));
    }
    for _ in 0..trunk_rows {
        lines.push(format!("{:^width$}", "|"));
    }
    lines.push(format!("{:^width$}", "~".repeat(width)));
    lines
}

/// Single-line confetti: one simulated burst, bucketed by column and hue.
pub fn confetti_line<R: Rng + ?Sized>(count: usize, rng: &mut R) -> String {
    const GLYPHS: [char; 6] = ['*', '+', 'o', '~', '^', '%'];
    let burst = ConfettiBurst::launch(count, Viewport::new(CONFETTI_COLUMNS, 1.0), rng);
    let mut cells = vec![' '; CONFETTI_COLUMNS as usize];
    for particle in burst.particles() {
        let column = (particle.x as usize).min(cells.len() - 1);
        let glyph = GLYPHS[(particle.hue / 60.0) as usize % GLYPHS.len()];
        cells[column] = glyph;
    }
    format!("🎉 {} 🎉", cells.into_iter().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use moodsprout_core::{map_energy, session_rng, EnergyTier, Feedback};

    fn render(directives: &[Directive]) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new(), session_rng(Some(1)), 20);
        moodsprout_core::dispatch(directives, &mut renderer);
        assert!(renderer.take_error().is_none());
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn energy_bar_fills_proportionally() {
        assert_eq!(energy_bar(0), "[....................] 0%");
        assert_eq!(energy_bar(50), "[##########..........] 50%");
        assert_eq!(energy_bar(100), "[####################] 100%");
    }

    #[test]
    fn tree_grows_with_energy() {
        let small = tree_art(&map_energy(0));
        let big = tree_art(&map_energy(100));
        assert!(big.len() > small.len());
        assert!(big[0].contains('✨'));
        assert!(!small.iter().any(|l| l.contains('✨')));
        assert!(big.iter().any(|l| l.contains('*')));
        assert!(!small.iter().any(|l| l.contains('*')));
    }

    #[test]
    fn renders_text_directives() {
        let text = render(&[
            Directive::SetTitle { text: "你的療癒行動：開心".into() },
            Directive::SetFeedback(Feedback::on_select(EnergyTier::Full)),
            Directive::ShowTask {
                text: "喝水".into(),
                style: TaskStyle::Plain,
            },
            Directive::Advisory {
                message: "請先選擇心情喔～".into(),
            },
            Directive::Celebrate,
        ]);
        assert!(text.contains("== 你的療癒行動：開心 =="));
        assert!(text.contains('★'));
        assert!(text.contains("✎ 喝水"));
        assert!(text.contains("! 請先選擇心情喔～"));
        assert!(text.contains("🎉"));
    }

    #[test]
    fn json_renderer_writes_one_object_per_line() {
        let mut renderer = JsonRenderer::new(Vec::new());
        renderer.apply(&Directive::Celebrate);
        renderer.apply(&Directive::SetEnergyBar { percent: 20 });
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let v: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(v["type"], "set_energy_bar");
    }
}
