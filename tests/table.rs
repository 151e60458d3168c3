#[cfg(test)]
mod tests {
    use timesheet::libs::table::{Column, Table};

    fn table(separator: char) -> Table {
        Table::new(vec![Column::new("Key", 5), Column::new("Hours", 6)], separator)
    }

    #[test]
    fn test_width() {
        assert_eq!(table('-').width(), 8 + 9 + 1);
    }

    #[test]
    fn test_render_without_rows() {
        let expected = concat!(
            " ________________\n",
            "| Key   | Hours  |\n",
            "|_______|________|\n",
            "|_______|________|\n",
        );
        assert_eq!(table('-').render(), expected);
    }

    #[test]
    fn test_render_rows_with_separator() {
        let mut table = table('-');
        table.add_row(vec!["A-1".to_string(), "1.5".to_string()]);
        table.add_row(vec!["A-2".to_string()]);

        let expected = concat!(
            " ________________\n",
            "| Key   | Hours  |\n",
            "|_______|________|\n",
            "| A-1   | 1.5    |\n",
            "|-------|--------|\n",
            "| A-2   |        |\n",
            "|_______|________|\n",
        );
        assert_eq!(table.render(), expected);
    }

    #[test]
    fn test_render_underscore_separator() {
        let mut table = table('_');
        table.add_row(vec!["A-1".to_string(), "1.5".to_string()]);
        table.add_row(vec!["A-2".to_string(), "2.0".to_string()]);

        assert_eq!(table.render().lines().nth(4), Some("|_______|________|"));
    }

    #[test]
    fn test_long_cell_is_not_truncated() {
        let mut table = table('-');
        table.add_row(vec!["PROJECT-1234".to_string(), "1.0".to_string()]);

        assert!(table.render().contains("| PROJECT-1234 | 1.0    |"));
    }
}
