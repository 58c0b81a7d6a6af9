//! Encodes a user's records as a downloadable XLSX workbook.
//!
//! Row order matches the input order; the download endpoints pass records
//! date-descending. The header row is bold on a solid fill, purely cosmetic.

use rust_xlsxwriter::{Color, Format, Workbook, Worksheet};

use crate::{
    Error,
    models::{Expense, Income},
};

/// The MIME type for XLSX workbooks.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const INCOME_HEADER_FILL: Color = Color::RGB(0x6B46C1);
const EXPENSE_HEADER_FILL: Color = Color::RGB(0xEF4444);

/// Attribution dates render like a locale date, e.g. `6/30/2025`.
const DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Insertion timestamps render like a locale date-time, e.g.
/// `6/30/2025, 10:04:51 PM`.
const DATETIME_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Encode income records as an XLSX workbook.
///
/// Columns: Source, Amount, Date, Created At.
///
/// # Errors
/// Returns [Error::ReportError] if the workbook could not be written.
pub fn income_report(records: &[Income]) -> Result<Vec<u8>, Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Income")?;

    write_header(
        worksheet,
        &[("Source", 30.0), ("Amount", 15.0), ("Date", 15.0), ("Created At", 20.0)],
        INCOME_HEADER_FILL,
    )?;

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write(row, 0, record.source.as_str())?;
        worksheet.write(row, 1, record.amount)?;
        worksheet.write(row, 2, record.date.format(DATE_FORMAT).to_string())?;
        worksheet.write(row, 3, record.created_at.format(DATETIME_FORMAT).to_string())?;
    }

    workbook.save_to_buffer().map_err(Error::from)
}

/// Encode expense records as an XLSX workbook.
///
/// Columns: Category, Amount, Date, Description, Created At.
///
/// # Errors
/// Returns [Error::ReportError] if the workbook could not be written.
pub fn expense_report(records: &[Expense]) -> Result<Vec<u8>, Error> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Expenses")?;

    write_header(
        worksheet,
        &[
            ("Category", 30.0),
            ("Amount", 15.0),
            ("Date", 15.0),
            ("Description", 40.0),
            ("Created At", 20.0),
        ],
        EXPENSE_HEADER_FILL,
    )?;

    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet.write(row, 0, record.category.as_str())?;
        worksheet.write(row, 1, record.amount)?;
        worksheet.write(row, 2, record.date.format(DATE_FORMAT).to_string())?;
        worksheet.write(row, 3, record.description.as_str())?;
        worksheet.write(row, 4, record.created_at.format(DATETIME_FORMAT).to_string())?;
    }

    workbook.save_to_buffer().map_err(Error::from)
}

fn write_header(
    worksheet: &mut Worksheet,
    columns: &[(&str, f64)],
    fill: Color,
) -> Result<(), Error> {
    let header_format = Format::new()
        .set_bold()
        .set_background_color(fill)
        .set_font_color(Color::White);

    for (column, (title, width)) in columns.iter().enumerate() {
        let column = column as u16;
        worksheet.set_column_width(column, *width)?;
        worksheet.write_with_format(0, column, *title, &header_format)?;
    }

    Ok(())
}

#[cfg(test)]
mod report_tests {
    use chrono::Utc;

    use crate::{
        database_id::{ExpenseId, IncomeId, UserId},
        models::{Expense, Income},
    };

    use super::{expense_report, income_report};

    // XLSX files are ZIP archives, which start with "PK".
    const ZIP_MAGIC: &[u8] = b"PK";

    fn test_income() -> Income {
        Income {
            id: IncomeId::new(1),
            user_id: UserId::new(1),
            source: "Salary".to_owned(),
            amount: 1000.0,
            date: Utc::now().date_naive(),
            icon: String::new(),
            created_at: Utc::now(),
        }
    }

    fn test_expense() -> Expense {
        Expense {
            id: ExpenseId::new(1),
            user_id: UserId::new(1),
            category: "Food".to_owned(),
            amount: 12.5,
            date: Utc::now().date_naive(),
            icon: String::new(),
            description: "Tom's Hardware".to_owned(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn income_report_produces_a_workbook() {
        let buffer = income_report(&[test_income()]).unwrap();

        assert!(buffer.starts_with(ZIP_MAGIC));
    }

    #[test]
    fn expense_report_produces_a_workbook() {
        let buffer = expense_report(&[test_expense(), test_expense()]).unwrap();

        assert!(buffer.starts_with(ZIP_MAGIC));
    }

    #[test]
    fn empty_record_list_still_produces_a_workbook() {
        let buffer = income_report(&[]).unwrap();

        assert!(buffer.starts_with(ZIP_MAGIC));
    }
}
