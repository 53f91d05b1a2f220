//! Column-aligned table rendering.
//!
//! `Pretty` mode pads every column to the widest cell of that column (header
//! included) and styles the header and emphasized rows. `Plain` mode joins the
//! cells of each row with a single space and never prints the header, which
//! keeps the output easy to pipe into other tools.

use console::Style;
use std::collections::HashSet;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Pretty,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    /// There were no rows, so nothing was written.
    Nothing,
}

#[derive(Debug, Clone)]
pub struct Table {
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
    alignment: Vec<Alignment>,
    spacing: usize,
    emphasized: HashSet<usize>,
}

fn stringify<R, C>(row: R) -> Vec<String>
where
    R: IntoIterator<Item = C>,
    C: ToString,
{
    row.into_iter().map(|cell| cell.to_string()).collect()
}

impl Table {
    pub fn new<I, R, C>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = C>,
        C: ToString,
    {
        Self {
            header: None,
            rows: rows.into_iter().map(stringify).collect(),
            alignment: Vec::new(),
            spacing: 1,
            emphasized: HashSet::new(),
        }
    }

    pub fn with_header<R, C>(mut self, header: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: ToString,
    {
        self.header = Some(stringify(header));
        self
    }

    /// Per-column alignment; columns past the end of the list align left.
    pub fn with_alignment(mut self, alignment: Vec<Alignment>) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn with_spacing(mut self, spacing: usize) -> Self {
        self.spacing = spacing;
        self
    }

    /// Row indices (into the data rows, header excluded) to emphasize.
    pub fn with_emphasized(mut self, rows: impl IntoIterator<Item = usize>) -> Self {
        self.emphasized = rows.into_iter().collect();
        self
    }

    fn all_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.header.iter().chain(self.rows.iter())
    }

    /// Widest cell per column, measured in chars, header included.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = Vec::new();
        for row in self.all_rows() {
            for (i, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// Header (if any) followed by the rows, padded and joined, unstyled.
    pub fn align_columns(&self) -> Vec<String> {
        let widths = self.column_widths();
        let separator = " ".repeat(self.spacing);

        self.all_rows()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        let width = widths[i];
                        match self.alignment.get(i).copied().unwrap_or_default() {
                            Alignment::Left => format!("{:<width$}", cell),
                            Alignment::Center => format!("{:^width$}", cell),
                            Alignment::Right => format!("{:>width$}", cell),
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(&separator)
            })
            .collect()
    }

    pub fn render<W: Write>(&self, mode: DisplayMode, out: &mut W) -> io::Result<RenderOutcome> {
        if self.rows.is_empty() {
            return Ok(RenderOutcome::Nothing);
        }

        match mode {
            DisplayMode::Plain => {
                for row in &self.rows {
                    writeln!(out, "{}", row.join(" "))?;
                }
            }
            DisplayMode::Pretty => {
                let header_style = Style::new().bold().magenta().force_styling(true);
                let emphasis_style = Style::new().green().force_styling(true);

                let mut lines = self.align_columns().into_iter();
                if self.header.is_some() {
                    if let Some(header) = lines.next() {
                        writeln!(out, "{}", header_style.apply_to(header))?;
                    }
                }
                for (i, line) in lines.enumerate() {
                    if self.emphasized.contains(&i) {
                        writeln!(out, "{}", emphasis_style.apply_to(line))?;
                    } else {
                        writeln!(out, "{}", line)?;
                    }
                }
            }
        }

        Ok(RenderOutcome::Rendered)
    }
}
