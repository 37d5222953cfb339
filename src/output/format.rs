use comfy_table::{
    Attribute, Cell, Color, ContentArrangement, Table, TableComponent,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

pub(super) fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

pub(super) fn status_cell(text: &str, ok: bool, use_color: bool) -> Cell {
    let mut cell = Cell::new(text);
    if use_color {
        cell = cell.fg(if ok { Color::Green } else { Color::Yellow });
    }
    cell
}

/// Replace the double-line header separator (╞═╪═╡) with single-line (├─┼─┤)
fn normalize_header_separator(table: &mut Table) {
    table.set_style(TableComponent::HeaderLines, '─');
    table.set_style(TableComponent::LeftHeaderIntersection, '├');
    table.set_style(TableComponent::MiddleHeaderIntersections, '┼');
    table.set_style(TableComponent::RightHeaderIntersection, '┤');
}

/// Create a table with the standard preset, inner borders, and normalized header separator.
pub(super) fn create_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    normalize_header_separator(&mut table);
    table
}

/// Multi-line values are shown on one row, with `⏎` marking each break
pub(super) fn one_line(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(" ⏎ ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_marks_breaks() {
        assert_eq!(one_line("John 3:16\n\n#Faith"), "John 3:16 ⏎  ⏎ #Faith");
        assert_eq!(one_line("plain"), "plain");
    }

    #[test]
    fn styled_table_renders_rows() {
        let mut table = create_styled_table();
        table.set_header(vec![header_cell("Field", false), header_cell("Value", false)]);
        table.add_row(vec![Cell::new("mode"), status_cell("verse", true, false)]);
        let rendered = table.to_string();
        assert!(rendered.contains("Field"));
        assert!(rendered.contains("verse"));
        assert!(rendered.contains('├'));
    }
}
