use std::io::{self, BufRead, Write};

use chrono::{DateTime, Utc};

use crate::clipboard::{Clipboard, copy_best_effort};
use crate::models::{Energy, Mood, PlaylistResult, Situation};
use crate::playlist::PlaylistFormatting;
use crate::wizard::{Step, Wizard};

const BAR_WIDTH: usize = 30;

/// Something the user typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Choose(usize), // 1-indexed option
    Next,
    Back,
    Copy,
    Regenerate,
    Quit,
}

/// Interpret one line of input for the given screen
pub fn parse_action(step: Step, line: &str) -> Option<Action> {
    let line = line.trim().to_lowercase();
    match (step, line.as_str()) {
        (_, "q" | "quit" | "exit") => Some(Action::Quit),
        (Step::Result, "c" | "copy") => Some(Action::Copy),
        (Step::Result, "r" | "regenerate") => Some(Action::Regenerate),
        (Step::Result, _) => None,
        (_, "" | "n" | "next") => Some(Action::Next),
        (_, "b" | "back") => Some(Action::Back),
        (_, other) => other.parse().ok().map(Action::Choose),
    }
}

/// Run the questionnaire until the user quits or input ends
pub fn run<I: BufRead, O: Write>(
    wizard: &mut Wizard,
    clipboard: &mut dyn Clipboard,
    mut input: I,
    mut output: O,
) -> io::Result<()> {
    loop {
        render_screen(wizard, &mut output)?;
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(());
        }

        match parse_action(wizard.step(), &line) {
            Some(Action::Quit) => return Ok(()),
            Some(Action::Choose(number)) => {
                if !choose(wizard, number) {
                    writeln!(output, "There is no option {number} here.")?;
                }
            }
            Some(Action::Next) => {
                let before = wizard.step();
                wizard.advance();
                if wizard.step() == before {
                    writeln!(output, "Pick an option first.")?;
                }
            }
            Some(Action::Back) => wizard.back(),
            Some(Action::Copy) => {
                if let Some(text) = wizard.clipboard_text() {
                    if copy_best_effort(clipboard, &text) {
                        writeln!(output, "✓ Copied!")?;
                    } else {
                        writeln!(output, "Not copied. Here is the text instead:\n{text}")?;
                    }
                }
            }
            Some(Action::Regenerate) => wizard.reset(),
            None => writeln!(output, "Didn't catch '{}'.", line.trim())?,
        }
    }
}

/// Apply the n-th option of the current screen
fn choose(wizard: &mut Wizard, number: usize) -> bool {
    let index = match number.checked_sub(1) {
        Some(index) => index,
        None => return false,
    };

    match wizard.step() {
        Step::Mood => {
            if let Some(mood) = Mood::ALL.get(index) {
                wizard.select_mood(*mood);
                return true;
            }
        }
        Step::Situation => {
            if let Some(situation) = Situation::ALL.get(index) {
                wizard.select_situation(*situation);
                return true;
            }
        }
        Step::Energy => {
            if let Some(energy) = Energy::ALL.get(index) {
                wizard.select_energy(*energy);
                return true;
            }
        }
        Step::Result => {}
    }
    false
}

/// Option lines for an input screen with a marker on the current selection
fn option_lines(wizard: &Wizard) -> Vec<String> {
    let state = wizard.state();
    let marker = |selected: bool| if selected { "*" } else { " " };

    match wizard.step() {
        Step::Mood => Mood::ALL
            .iter()
            .map(|m| {
                format!(
                    "{} {} {} - Select this if you feel {}.",
                    marker(state.mood() == Some(*m)),
                    m.emoji(),
                    m.label(),
                    m.label().to_lowercase()
                )
            })
            .collect(),
        Step::Situation => Situation::ALL
            .iter()
            .map(|s| {
                format!(
                    "{} {} - Music tailored for {}.",
                    marker(state.situation() == Some(*s)),
                    s.label(),
                    s.label().to_lowercase()
                )
            })
            .collect(),
        Step::Energy => Energy::ALL
            .iter()
            .map(|e| {
                format!(
                    "{} {} - {}",
                    marker(state.energy() == Some(*e)),
                    e.label(),
                    e.blurb()
                )
            })
            .collect(),
        Step::Result => Vec::new(),
    }
}

fn render_screen<O: Write>(wizard: &Wizard, output: &mut O) -> io::Result<()> {
    let step = wizard.step();
    writeln!(output)?;

    if let Some(percent) = step.progress_percent() {
        writeln!(
            output,
            "{}  {}",
            step.title(),
            PlaylistFormatting::intensity_bar(percent, BAR_WIDTH / 2)
        )?;
    }

    match (step.question(), wizard.result()) {
        (Some(question), _) => {
            writeln!(output, "{question}")?;
            let lines = option_lines(wizard);
            for (i, line) in lines.iter().enumerate() {
                writeln!(output, "  {}) {}", i + 1, line)?;
            }
            let next = if step == Step::Energy { "generate playlist" } else { "next" };
            let back = if step == Step::Mood { "" } else { "  [b] back" };
            writeln!(output, "[1-{}] select  [n] {next}{back}  [q] quit", lines.len())
        }
        (None, Some(result)) => {
            writeln!(output, "{}", step.title())?;
            render_result(result, wizard.saved_at(), output)?;
            writeln!(output, "[c] copy description  [r] regenerate  [q] quit")
        }
        (None, None) => Ok(()),
    }
}

/// Print a playlist card
pub fn render_result<O: Write>(
    result: &PlaylistResult,
    saved_at: Option<DateTime<Utc>>,
    output: &mut O,
) -> io::Result<()> {
    writeln!(output, "AI Curated | {}", result.genres.join(" · "))?;
    writeln!(output)?;
    writeln!(output, "  {}", result.name)?;
    writeln!(output, "  \"{}\"", result.description)?;
    writeln!(output)?;
    writeln!(
        output,
        "BPM Intensity {}  {}",
        PlaylistFormatting::intensity_bar(result.bpm_value, BAR_WIDTH),
        result.bpm_range
    )?;
    writeln!(output, "Sounds Like: {}", result.sounds_like.join(", "))?;
    if let Some(saved_at) = saved_at {
        writeln!(output, "Saved {}", saved_at.format("%Y-%m-%d %H:%M UTC"))?;
    }
    Ok(())
}
