//! Report service
//!
//! Builds the xlsx exports administrators download: students, faculty,
//! theses, and defense registrations. Reports are generated in memory
//! and handed back as bytes, nothing is written to disk.

use chrono::{DateTime, Utc};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// The xlsx media type served with every report download
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Report generation service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

fn write_header(sheet: &mut Worksheet, headers: &[&str]) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &bold)?;
        sheet.set_column_width(col as u16, 22)?;
    }
    Ok(())
}

impl From<XlsxError> for ServiceError {
    fn from(err: XlsxError) -> Self {
        ServiceError::internal(format!("Report generation failed: {err}"))
    }
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Student roster, sorted by name
    #[instrument(skip(self))]
    pub async fn students_report(&self) -> ServiceResult<Vec<u8>> {
        let students = self.ctx.account_repo().all_students_sorted().await?;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Students")?;
        write_header(sheet, &["NIM", "Name", "Email", "Clearance", "Registered"])?;

        for (i, student) in students.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write_string(row, 0, &student.nim)?;
            sheet.write_string(row, 1, &student.name)?;
            sheet.write_string(row, 2, &student.email)?;
            sheet.write_string(row, 3, if student.thesis_clearance { "yes" } else { "no" })?;
            sheet.write_string(row, 4, format_timestamp(student.created_at))?;
        }

        let buffer = workbook.save_to_buffer()?;
        info!(rows = students.len(), "Students report generated");
        Ok(buffer)
    }

    /// Faculty roster, sorted by name
    #[instrument(skip(self))]
    pub async fn faculty_report(&self) -> ServiceResult<Vec<u8>> {
        let faculty = self.ctx.account_repo().all_faculty_sorted().await?;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Faculty")?;
        write_header(sheet, &["NIDN", "Name", "Email", "Registered"])?;

        for (i, member) in faculty.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write_string(row, 0, &member.nidn)?;
            sheet.write_string(row, 1, &member.name)?;
            sheet.write_string(row, 2, &member.email)?;
            sheet.write_string(row, 3, format_timestamp(member.created_at))?;
        }

        let buffer = workbook.save_to_buffer()?;
        info!(rows = faculty.len(), "Faculty report generated");
        Ok(buffer)
    }

    /// All theses with student and advisor names
    #[instrument(skip(self))]
    pub async fn theses_report(&self) -> ServiceResult<Vec<u8>> {
        let overviews = self.ctx.thesis_repo().all_overviews().await?;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Theses")?;
        write_header(
            sheet,
            &["NIM", "Student", "Title", "Status", "Advisor 1", "Advisor 2", "Submitted"],
        )?;

        for (i, overview) in overviews.iter().enumerate() {
            let row = (i + 1) as u32;
            sheet.write_string(row, 0, &overview.student_nim)?;
            sheet.write_string(row, 1, &overview.student_name)?;
            sheet.write_string(row, 2, &overview.thesis.title)?;
            sheet.write_string(row, 3, overview.thesis.status.as_str())?;
            sheet.write_string(row, 4, overview.advisor1_name.as_deref().unwrap_or("-"))?;
            sheet.write_string(row, 5, overview.advisor2_name.as_deref().unwrap_or("-"))?;
            sheet.write_string(row, 6, format_timestamp(overview.thesis.created_at))?;
        }

        let buffer = workbook.save_to_buffer()?;
        info!(rows = overviews.len(), "Theses report generated");
        Ok(buffer)
    }

    /// All defense registrations with schedules and examiners
    #[instrument(skip(self))]
    pub async fn defenses_report(&self) -> ServiceResult<Vec<u8>> {
        let overviews = self.ctx.defense_repo().all_overviews().await?;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name("Defenses")?;
        write_header(
            sheet,
            &["NIM", "Student", "Thesis", "Status", "Scheduled", "Examiner 1", "Examiner 2"],
        )?;

        for (i, overview) in overviews.iter().enumerate() {
            let row = (i + 1) as u32;
            let defense = &overview.defense;
            sheet.write_string(row, 0, &overview.student_nim)?;
            sheet.write_string(row, 1, &overview.student_name)?;
            sheet.write_string(row, 2, &overview.thesis_title)?;
            sheet.write_string(row, 3, defense.status.as_str())?;
            sheet.write_string(
                row,
                4,
                defense
                    .scheduled_at
                    .map(format_timestamp)
                    .unwrap_or_else(|| "-".to_string()),
            )?;
            sheet.write_string(row, 5, overview.examiner1_name.as_deref().unwrap_or("-"))?;
            sheet.write_string(row, 6, overview.examiner2_name.as_deref().unwrap_or("-"))?;
        }

        let buffer = workbook.save_to_buffer()?;
        info!(rows = overviews.len(), "Defenses report generated");
        Ok(buffer)
    }
}
