use std::borrow::Cow;
use std::fmt::{self, Display};
use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

pub(crate) trait TableRow {
    const COLUMNS: &'static [&'static str];

    fn cell(&self, column_index: usize) -> Cow<'_, str>;
}

/// Write `rows` as an aligned table with a header and a divider line.
pub(crate) fn display_table<R: TableRow>(rows: &[R], mut output: impl Write) -> io::Result<()> {
    let cells = rows
        .iter()
        .map(|row| (0..R::COLUMNS.len()).map(|i| row.cell(i)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let column_widths = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            cells
                .iter()
                .map(|row| row[i].width())
                .fold(name.width(), std::cmp::max)
        })
        .collect::<Vec<_>>();

    output_row(&mut output, R::COLUMNS, &column_widths)?;
    let dividers = column_widths
        .iter()
        .map(|&w| "─".repeat(w))
        .collect::<Vec<_>>();
    output_row(&mut output, &dividers[..], &column_widths)?;
    for row in &cells {
        output_row(&mut output, &row[..], &column_widths)?;
    }
    Ok(())
}

fn output_row<S: AsRef<str>>(
    mut output: impl Write,
    cells: &[S],
    column_widths: &[usize],
) -> io::Result<()> {
    for (column_index, (cell, &width)) in cells.iter().zip(column_widths).enumerate() {
        if column_index > 0 {
            write!(output, "  ")?;
        }
        write!(output, "{}", Padded(cell.as_ref(), width))?;
    }
    writeln!(output)
}

struct Padded<'a>(&'a str, usize);

impl Display for Padded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let padding = self.1.saturating_sub(self.0.width());
        write!(f, "{}{:padding$}", self.0, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, u32);

    impl TableRow for Row {
        const COLUMNS: &'static [&'static str] = &["Name", "N"];

        fn cell(&self, column_index: usize) -> Cow<'_, str> {
            match column_index {
                0 => Cow::from(self.0),
                1 => Cow::from(self.1.to_string()),
                _ => panic!(),
            }
        }
    }

    #[test]
    fn columns_are_aligned() {
        let mut out = Vec::new();
        display_table(&[Row("abc", 7), Row("a", 100)], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(
            out,
            "Name  N  \n\
             ────  ───\n\
             abc   7  \n\
             a     100\n"
        );
    }
}
