//! Headless renderer that replays a fixed list of intents.

use super::Renderer;
use anyhow::{Context, Result};
use rewind_tictactoe::{GameView, Intent};
use std::collections::VecDeque;
use std::path::Path;
use tracing::{debug, instrument};

/// Output format for a finished replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON view.
    #[default]
    Json,
    /// Board grid, status line and move list.
    Text,
}

/// Renderer fed from a script instead of a user.
///
/// Every rendered view is recorded so callers can inspect the whole run.
#[derive(Debug, Default)]
pub struct ScriptRenderer {
    pending: VecDeque<Intent>,
    frames: Vec<GameView>,
}

impl ScriptRenderer {
    /// Creates a renderer that will emit `intents` in order, then quit.
    pub fn new(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            pending: intents.into_iter().collect(),
            frames: Vec::new(),
        }
    }

    /// Reads a JSON array of intents from a file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read intent script {}", path.display()))?;
        let intents: Vec<Intent> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse intent script {}", path.display()))?;
        debug!(count = intents.len(), "Intent script loaded");
        Ok(Self::new(intents))
    }

    /// Builds the replay queue for the command line: the intents from
    /// `script` (if any) run first, then one click per entry in `cells`.
    pub fn from_sources(script: Option<&Path>, cells: &[usize]) -> Result<Self> {
        let mut renderer = match script {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        renderer.extend(cells.iter().copied().map(Intent::CellClicked));
        Ok(renderer)
    }

    /// Appends more intents after the ones already queued.
    pub fn extend(&mut self, intents: impl IntoIterator<Item = Intent>) {
        self.pending.extend(intents);
    }

    /// Every view rendered so far, oldest first.
    pub fn frames(&self) -> &[GameView] {
        &self.frames
    }

    /// The most recent view, if anything was rendered.
    pub fn last_frame(&self) -> Option<&GameView> {
        self.frames.last()
    }

    /// Formats the most recent view.
    pub fn output(&self, format: OutputFormat) -> Result<String> {
        let view = self.last_frame().context("Nothing was rendered")?;
        match format {
            OutputFormat::Json => {
                serde_json::to_string_pretty(view).context("Failed to serialize view")
            }
            OutputFormat::Text => Ok(format_text(view)),
        }
    }
}

impl Renderer for ScriptRenderer {
    fn render(&mut self, view: &GameView) -> Result<()> {
        self.frames.push(view.clone());
        Ok(())
    }

    fn next_intent(&mut self) -> Result<Option<Intent>> {
        Ok(self.pending.pop_front())
    }
}

/// Formats a view as plain text: board, status, then the move list with
/// the current entry marked.
pub fn format_text(view: &GameView) -> String {
    let mut out = view.board().display();
    out.push_str("\n\n");
    out.push_str(view.status());
    out.push('\n');
    for (index, label) in view.move_labels().iter().enumerate() {
        let marker = if index == *view.current_index() { '>' } else { ' ' };
        out.push_str(&format!("{} {}. {}\n", marker, index, label));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::GameHistory;

    #[test]
    fn test_emits_intents_in_order_then_quits() {
        let mut renderer = ScriptRenderer::new([Intent::CellClicked(4), Intent::JumpTo(0)]);
        assert_eq!(renderer.next_intent().unwrap(), Some(Intent::CellClicked(4)));
        assert_eq!(renderer.next_intent().unwrap(), Some(Intent::JumpTo(0)));
        assert_eq!(renderer.next_intent().unwrap(), None);
    }

    #[test]
    fn test_output_requires_a_frame() {
        let renderer = ScriptRenderer::default();
        assert!(renderer.output(OutputFormat::Text).is_err());
    }

    #[test]
    fn test_format_text_marks_current_move() {
        let mut history = GameHistory::new();
        history.dispatch(Intent::CellClicked(0)).unwrap();
        history.dispatch(Intent::CellClicked(4)).unwrap();
        history.dispatch(Intent::JumpTo(1)).unwrap();

        let text = format_text(&history.view());
        assert_eq!(
            text,
            "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\n\
             Next player: O\n  \
             0. Go to game start\n\
             > 1. Go to move #1\n  \
             2. Go to move #2\n"
        );
    }
}
