use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use std::io::Write;
use std::str::FromStr;

use super::report::Report;
use super::sections::{report_title, sections, Section};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            "terminal" => Ok(Self::Terminal),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        self.write_header(report)?;
        for section in sections(report) {
            self.write_section(&section)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, report: &Report) -> anyhow::Result<()> {
        writeln!(self.writer, "# {} Report", report_title(report))?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_section(&mut self, section: &Section) -> anyhow::Result<()> {
        writeln!(self.writer, "## {}", section.title)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| {} |", section.headers.join(" | "))?;
        let separator = vec!["---"; section.headers.len()].join("|");
        writeln!(self.writer, "|{separator}|")?;
        for row in &section.rows {
            let cells: Vec<String> = row.iter().map(|cell| escape_markdown(cell)).collect();
            writeln!(self.writer, "| {} |", cells.join(" | "))?;
        }
        writeln!(self.writer)?;
        for note in &section.notes {
            writeln!(self.writer, "_{}_", escape_markdown(note))?;
            writeln!(self.writer)?;
        }
        Ok(())
    }
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|").replace('*', "\\*")
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl Default for TerminalWriter<std::io::Stdout> {
    fn default() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()> {
        let title = report_title(report);
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.len()).blue())?;
        writeln!(self.writer)?;
        for section in sections(report) {
            self.print_section(&section)?;
        }
        Ok(())
    }
}

impl<W: Write> TerminalWriter<W> {
    fn print_section(&mut self, section: &Section) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", section.title.bold())?;

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(section.headers.clone());
        for row in &section.rows {
            table.add_row(row.clone());
        }
        for index in 1..section.headers.len() {
            if let Some(column) = table.column_mut(index) {
                column.set_cell_alignment(CellAlignment::Right);
            }
        }
        writeln!(self.writer, "{table}")?;

        for note in &section.notes {
            writeln!(self.writer, "  {}", note.dimmed())?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

pub fn create_writer<'a>(
    format: OutputFormat,
    destination: Box<dyn Write + 'a>,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    }
}
