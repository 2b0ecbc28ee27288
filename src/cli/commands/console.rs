//! Interactive admin console.
//!
//! A line-oriented session over the catalog: one command per line, every
//! action runs to completion before the next line is read. The session owns
//! the editor and enrollment buffers; the catalog outlives nothing beyond
//! the process.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use std::io::{BufRead, Write};
use tracing::debug;

use super::{write_catalog, write_stats, write_workshop_line};
use crate::catalog::{CategoryFilter, WorkshopCatalog};
use crate::seed::CATEGORIES;
use crate::session::{EditorBuffer, EnrollmentForm};

pub struct ConsoleSession<R, W> {
    input: R,
    output: W,
    editor: EditorBuffer,
    enrollment: EnrollmentForm,
    filter: CategoryFilter,
}

/// Run the interactive console until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(
    catalog: &mut WorkshopCatalog,
    input: R,
    output: W,
) -> Result<()> {
    // Pre-select the first catalog entry for enrollment, as the UI does
    let enrollment = catalog
        .list(&CategoryFilter::All)
        .first()
        .map(|w| EnrollmentForm::with_selection(w.id.clone()))
        .unwrap_or_default();

    let mut session = ConsoleSession {
        input,
        output,
        editor: EditorBuffer::new(),
        enrollment,
        filter: CategoryFilter::All,
    };
    session.run_loop(catalog)
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    fn run_loop(&mut self, catalog: &mut WorkshopCatalog) -> Result<()> {
        writeln!(
            self.output,
            "🎓 Workshop Console - type 'help' for commands"
        )?;

        loop {
            let prompt = match self.editor.editing() {
                Some(id) => format!("workshop-console (editing {})> ", id),
                None => "workshop-console> ".to_string(),
            };
            let Some(line) = self.read_line(&prompt)? else {
                break;
            };

            let mut parts = line.splitn(2, char::is_whitespace);
            let command = parts.next().unwrap_or("");
            // categories may contain spaces, so the argument is the rest of the line
            let argument = parts
                .next()
                .map(str::trim)
                .filter(|rest| !rest.is_empty())
                .map(str::to_string);
            debug!(command, argument = argument.as_deref(), "console command");

            match command {
                "" => {}
                "help" => self.show_help()?,
                "list" => write_catalog(&mut self.output, catalog, &self.filter)?,
                "filter" => {
                    self.filter = CategoryFilter::parse(argument.as_deref().unwrap_or("all"));
                    write_catalog(&mut self.output, catalog, &self.filter)?;
                }
                "stats" => write_stats(&mut self.output, &catalog.stats())?,
                "add" => self.submit_editor(catalog)?,
                "edit" => match argument.and_then(|id| catalog.get(&id).cloned()) {
                    Some(workshop) => {
                        self.editor.begin_edit(&workshop);
                        self.submit_editor(catalog)?;
                    }
                    None => writeln!(self.output, "❌ no workshop with that id")?,
                },
                "cancel" => match argument {
                    Some(id) => match catalog.cancel(&id) {
                        Ok(_) => writeln!(self.output, "🚫 Workshop canceled.")?,
                        Err(e) => writeln!(self.output, "❌ {}", e)?,
                    },
                    None => writeln!(self.output, "usage: cancel <id>")?,
                },
                "delete" => match argument {
                    Some(id) => match catalog.delete(&id) {
                        Ok(removed) => {
                            self.editor.forget_deleted(&removed.id);
                            writeln!(self.output, "🗑️  Workshop deleted.")?;
                        }
                        Err(e) => writeln!(self.output, "❌ {}", e)?,
                    },
                    None => writeln!(self.output, "usage: delete <id>")?,
                },
                "enroll" => {
                    if let Some(id) = argument {
                        self.enrollment.workshop_id = id;
                    }
                    self.submit_enrollment(catalog)?;
                }
                "roster" => match argument {
                    Some(id) => self.show_roster(catalog, &id)?,
                    None => writeln!(self.output, "usage: roster <id>")?,
                },
                "quit" | "exit" => break,
                other => {
                    writeln!(
                        self.output,
                        "❓ unknown command '{}', type 'help' for the list",
                        other
                    )?;
                }
            }
        }

        Ok(())
    }

    fn show_help(&mut self) -> Result<()> {
        writeln!(self.output, "Commands:")?;
        writeln!(self.output, "  list              Show the catalog under the current filter")?;
        writeln!(self.output, "  filter <cat|all>  Set the category filter")?;
        writeln!(self.output, "  stats             Show catalog statistics")?;
        writeln!(self.output, "  add               Create a workshop (prompts for fields)")?;
        writeln!(self.output, "  edit <id>         Edit a workshop (empty answer keeps a field)")?;
        writeln!(self.output, "  cancel <id>       Cancel a workshop (terminal)")?;
        writeln!(self.output, "  delete <id>       Remove a workshop entirely")?;
        writeln!(self.output, "  enroll [id]       Enroll a student (id defaults to last selection)")?;
        writeln!(self.output, "  roster <id>       List enrolled students for a workshop")?;
        writeln!(self.output, "  quit              Leave the console")?;
        writeln!(self.output, "Categories: {}", CATEGORIES.join(", "))?;
        Ok(())
    }

    /// Prompt for every form field, then submit the editor buffer. Empty
    /// answers keep the current draft value, which also makes retrying a
    /// rejected submission cheap.
    fn submit_editor(&mut self, catalog: &mut WorkshopCatalog) -> Result<()> {
        let title = self.prompt_field("Title", &self.editor.draft.title.clone())?;
        if !title.is_empty() {
            self.editor.draft.title = title;
        }

        let category = self.prompt_field("Category", &self.editor.draft.category.clone())?;
        if !category.is_empty() {
            self.editor.draft.category = category;
        }

        let location = self.prompt_field("Location", &self.editor.draft.location.clone())?;
        if !location.is_empty() {
            self.editor.draft.location = location;
        }

        let current_date = self
            .editor
            .draft
            .date
            .map(|d| d.to_string())
            .unwrap_or_default();
        let date = self.prompt_field("Date (YYYY-MM-DD)", &current_date)?;
        if !date.is_empty() {
            match parse_date(&date) {
                Some(parsed) => self.editor.draft.date = Some(parsed),
                None => writeln!(self.output, "⚠️  unrecognized date '{}', keeping previous", date)?,
            }
        }

        let current_time = self
            .editor
            .draft
            .time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default();
        let time = self.prompt_field("Time (HH:MM)", &current_time)?;
        if !time.is_empty() {
            match parse_time(&time) {
                Some(parsed) => self.editor.draft.time = Some(parsed),
                None => writeln!(self.output, "⚠️  unrecognized time '{}', keeping previous", time)?,
            }
        }

        let current_capacity = self.editor.draft.capacity.to_string();
        let capacity = self.prompt_field("Capacity", &current_capacity)?;
        if !capacity.is_empty() {
            match capacity.parse::<u32>() {
                Ok(parsed) => self.editor.draft.capacity = parsed,
                Err(_) => writeln!(
                    self.output,
                    "⚠️  unrecognized capacity '{}', keeping previous",
                    capacity
                )?,
            }
        }

        let description = self.prompt_field("Description", &self.editor.draft.description.clone())?;
        if !description.is_empty() {
            self.editor.draft.description = description;
        }

        match self.editor.submit(catalog) {
            Ok(outcome) => writeln!(self.output, "✅ {}", outcome)?,
            Err(e) => writeln!(self.output, "❌ {}", e)?,
        }
        Ok(())
    }

    fn submit_enrollment(&mut self, catalog: &mut WorkshopCatalog) -> Result<()> {
        if self.enrollment.workshop_id.is_empty() {
            writeln!(self.output, "usage: enroll <id> (the catalog is empty of selections)")?;
            return Ok(());
        }

        let name = self.prompt_field("Student name", &self.enrollment.student_name.clone())?;
        if !name.is_empty() {
            self.enrollment.student_name = name;
        }
        let email = self.prompt_field("Student email", &self.enrollment.student_email.clone())?;
        if !email.is_empty() {
            self.enrollment.student_email = email;
        }

        match self.enrollment.submit(catalog) {
            Ok(receipt) => writeln!(
                self.output,
                "✅ Enrollment registered. Check your email for details! ({} seats left in '{}')",
                receipt.seats_remaining, receipt.workshop_title
            )?,
            Err(e) => writeln!(self.output, "❌ {}", e)?,
        }
        Ok(())
    }

    fn show_roster(&mut self, catalog: &WorkshopCatalog, id: &str) -> Result<()> {
        let Some(workshop) = catalog.get(id) else {
            writeln!(self.output, "❌ no workshop found with id `{}`", id)?;
            return Ok(());
        };
        write_workshop_line(&mut self.output, workshop)?;
        let records = catalog.roster(id);
        writeln!(self.output, "👥 ROSTER ({} enrolled this session)", records.len())?;
        for record in records {
            writeln!(
                self.output,
                "   {} <{}> at {}",
                record.student_name,
                record.student_email,
                record.registered_at.format("%Y-%m-%d %H:%M:%S")
            )?;
        }
        Ok(())
    }

    fn prompt_field(&mut self, label: &str, current: &str) -> Result<String> {
        let prompt = if current.is_empty() {
            format!("  {}: ", label)
        } else {
            format!("  {} [{}]: ", label, current)
        };
        Ok(self.read_line(&prompt)?.unwrap_or_default())
    }

    /// Read one line, returning None at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

pub(crate) fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

pub(crate) fn parse_time(input: &str) -> Option<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .ok()
}
