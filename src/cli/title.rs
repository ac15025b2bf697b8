use console::{measure_text_width, style, Term};
use figlet_rs::FIGfont;
use crate::utils::error::{Result, ScaffoldError};

pub const TITLE_TEXT: &str = "CLI Creator";

/// Horizontal padding between the border and the art
const PADDING: usize = 1;

/// Render `text` as FIGlet art
pub fn figlet_text(text: &str) -> Result<String> {
    let font = FIGfont::standard().map_err(ScaffoldError::BannerError)?;
    let figure = font
        .convert(text)
        .ok_or_else(|| ScaffoldError::BannerError(format!("Could not render '{text}' as ASCII art")))?;

    Ok(figure.to_string())
}

/// Frame `art` in a rounded box, centered within `term_width` columns
pub fn frame(art: &str, term_width: usize) -> String {
    let mut lines: Vec<&str> = art.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let inner_width = lines.iter().map(|line| measure_text_width(line)).max().unwrap_or(0) + PADDING * 2;
    let box_width = inner_width + 2;
    let margin = " ".repeat(term_width.saturating_sub(box_width) / 2);

    let horizontal = "─".repeat(inner_width);
    let mut out = String::new();
    out.push_str(&format!("{margin}{}\n", style(format!("╭{horizontal}╮")).magenta().bright()));

    for line in &lines {
        let fill = " ".repeat(inner_width - PADDING * 2 - measure_text_width(line));
        let side = style("│").magenta().bright();
        out.push_str(&format!(
            "{margin}{side}{pad}{}{fill}{pad}{side}\n",
            style(line).blue().bright(),
            pad = " ".repeat(PADDING),
        ));
    }

    out.push_str(&format!("{margin}{}", style(format!("╰{horizontal}╯")).magenta().bright()));
    out
}

/// Print the banner. Fails before anything touches the filesystem.
pub fn display_title() -> Result<()> {
    let art = figlet_text(TITLE_TEXT)?;
    let (_, columns) = Term::stdout().size();

    println!("{}", frame(&art, usize::from(columns)));
    Ok(())
}
