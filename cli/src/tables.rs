#[derive(Clone, Copy)]
pub enum Width {
    Auto,
    ExpandWithMin(usize),
}
#[derive(Clone, Copy)]
pub enum Align {
    Left,
    Center,
    Right,
}

pub struct Column<'a, TRow> {
    align: Align,
    width: Width,
    title: Option<String>,
    get_content: &'a dyn Fn(&TRow) -> String,

    min_width: usize,
    computed_width: usize,
}
impl<'a, TRow> Column<'a, TRow> {
    pub fn new(get_content: &'a dyn Fn(&TRow) -> String) -> Self {
        Self {
            align: Align::Left,
            width: Width::Auto,
            title: None,
            computed_width: 0,
            min_width: 0,
            get_content,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_width(mut self, width: Width) -> Self {
        self.width = width;
        self
    }

    fn content(&self, row: &TRow) -> String {
        (self.get_content)(row)
    }

    fn title_width(&self) -> usize {
        self.title.as_ref().map_or(0, |t| t.chars().count())
    }
}

#[derive(Debug)]
enum RowData {
    Separator,
    Cells(Vec<String>),
    Headers,
}

#[derive(Clone)]
pub struct Settings {
    pub colsep: String,
}
impl Default for Settings {
    fn default() -> Self {
        Settings {
            colsep: "│".to_string(),
        }
    }
}

pub struct Table<'a, TRow> {
    columns: Vec<Column<'a, TRow>>,
    rows: Vec<RowData>,
    title: Option<String>,
    settings: Settings,
}
impl<'a, TRow> Table<'a, TRow> {
    pub fn new(columns: Vec<Column<'a, TRow>>, settings: &Settings) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            title: None,
            settings: settings.clone(),
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_col_headers(mut self) -> Self {
        self.rows.push(RowData::Headers);
        self.rows.push(RowData::Separator);
        self
    }

    pub fn add_rows(&mut self, rows: &[TRow]) {
        self.rows.extend(rows.iter().map(|row| {
            RowData::Cells(
                self.columns.iter().map(|col| col.content(row)).collect(),
            )
        }));
    }

    /// Compute the size allocated for each column.
    /// max_width should not include the space for column separators.
    fn compute_widths(&mut self, max_width: usize) {
        let mut expandable_count: usize = 0;
        let mut fixed_width: usize = 0; // minimal requested width
        let mut expandable_width: usize = 0;

        for (colidx, col) in self.columns.iter_mut().enumerate() {
            // Ideal width: the widest cell in this column
            let ideal = self
                .rows
                .iter()
                .map(|row| match row {
                    RowData::Separator => 0,
                    RowData::Headers => col.title_width(),
                    RowData::Cells(cells) => {
                        cells.get(colidx).map_or(0, |c| c.chars().count())
                    }
                })
                .max()
                .unwrap_or(0);

            match col.width {
                Width::Auto => {
                    col.computed_width = ideal;
                    col.min_width = ideal;
                    fixed_width += ideal;
                }
                Width::ExpandWithMin(min) => {
                    col.computed_width = ideal;
                    col.min_width = std::cmp::min(min, ideal);
                    fixed_width += col.min_width;
                    expandable_width += ideal - col.min_width;
                    expandable_count += 1;
                }
            }
        }

        if expandable_count > 0 && fixed_width + expandable_width > max_width {
            // Share whatever space is left amongst the expandable columns.
            // If the screen is too narrow, they all get their minimal size.
            let adjust =
                max_width.saturating_sub(fixed_width) / expandable_count;
            for col in self.columns.iter_mut() {
                if let Width::ExpandWithMin(_) = col.width {
                    col.computed_width = std::cmp::min(
                        col.computed_width,
                        col.min_width + adjust,
                    );
                }
            }
        }
    }

    pub fn to_string(&mut self, max_width: usize) -> String {
        let seps = self.columns.len().saturating_sub(1)
            * self.settings.colsep.chars().count();
        self.compute_widths(max_width.saturating_sub(seps));
        let total_width: usize =
            self.columns.iter().map(|c| c.computed_width).sum::<usize>() + seps;
        let mut result = String::new();

        if let Some(title) = &self.title {
            push_align(&mut result, title, total_width, Align::Center);
            result.push('\n');
            push_sep(&mut result, total_width);
            result.push('\n');
        }

        for row in &self.rows {
            for (colidx, col) in self.columns.iter().enumerate() {
                if colidx > 0 {
                    result.push_str(&self.settings.colsep);
                }
                match row {
                    RowData::Separator => {
                        push_sep(&mut result, col.computed_width);
                    }
                    RowData::Headers => {
                        push_align(
                            &mut result,
                            truncate(
                                col.title.as_deref().unwrap_or(""),
                                col.computed_width,
                            ),
                            col.computed_width,
                            Align::Center,
                        );
                    }
                    RowData::Cells(cells) => {
                        push_align(
                            &mut result,
                            truncate(
                                cells.get(colidx).map_or("", |c| c.as_str()),
                                col.computed_width,
                            ),
                            col.computed_width,
                            col.align,
                        );
                    }
                }
            }
            result.push('\n');
        }

        result
    }
}

fn push_sep(into: &mut String, width: usize) {
    into.push_str(&format!("{:─^width$}", ""));
}
fn push_align(into: &mut String, value: &str, width: usize, align: Align) {
    match align {
        Align::Left => into.push_str(&format!("{:<width$}", value)),
        Align::Center => into.push_str(&format!("{:^width$}", value)),
        Align::Right => into.push_str(&format!("{:>width$}", value)),
    }
}

/// Truncate the string if necessary, keeping its first characters
fn truncate(val: &str, width: usize) -> &str {
    val.char_indices()
        .nth(width)
        .map_or(val, |(i, _)| val.get(..i).unwrap_or(val))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("heating", 4), "heat");
        assert_eq!(truncate("heating", 7), "heating");
        assert_eq!(truncate("heating", 20), "heating");
        assert_eq!(truncate("été", 2), "ét");
    }

    #[test]
    fn test_table() {
        let first = |row: &(&str, u32)| row.0.to_string();
        let second = |row: &(&str, u32)| row.1.to_string();
        let mut table = Table::new(
            vec![
                Column::new(&first).with_title("Name"),
                Column::new(&second).with_title("N").with_align(Align::Right),
            ],
            &Settings {
                colsep: "|".to_string(),
            },
        )
        .with_col_headers();
        table.add_rows(&[("ab", 1), ("abcdef", 12)]);
        assert_eq!(
            table.to_string(80),
            concat!(
                " Name |N \n",
                "──────|──\n",
                "ab    | 1\n",
                "abcdef|12\n",
            )
        );
    }

    #[test]
    fn test_expand() {
        let first = |row: &&str| row.to_string();
        let mut table = Table::new(
            vec![Column::new(&first).with_width(Width::ExpandWithMin(3))],
            &Settings::default(),
        );
        table.add_rows(&["abcdefgh"]);
        assert_eq!(table.to_string(5), "abcde\n");
        assert_eq!(table.to_string(2), "abc\n");
    }
}
