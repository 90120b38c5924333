use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use keyshift::{KeyCode, Keyboard, KsResult, LayoutGrid, LayoutId};

pub fn print_layout_grid(grid: &LayoutGrid) {
    println!("\nLayout: {}", grid.id());
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    // Stored bottom-up, printed the way the keyboard reads.
    for row in grid.rows().iter().rev() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|key| Cell::new(key.to_string()).set_alignment(CellAlignment::Center))
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_binding(keyboard: &Keyboard) {
    println!(
        "\nBinding on {} (base at {})",
        keyboard.current_layout(),
        keyboard.base_coordinate()
    );
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Action").add_attribute(Attribute::Bold),
        Cell::new("Offset"),
        Cell::new("Key").fg(Color::Cyan),
    ]);

    for (action, offset) in keyboard.configuration().iter().enumerate() {
        let key = keyboard
            .resolve_key(action)
            .map(|k| k.to_string())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(action),
            Cell::new(offset.to_string()),
            Cell::new(key).fg(Color::Cyan),
        ]);
    }
    println!("{}", table);
}

pub fn print_resolution_report(rows: &[(LayoutId, KsResult<Vec<KeyCode>>)], actions: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![Cell::new("Layout").add_attribute(Attribute::Bold)];
    header.extend((0..actions).map(|i| Cell::new(format!("#{}", i))));
    table.set_header(header);

    for (id, outcome) in rows {
        let mut cells = vec![Cell::new(id).add_attribute(Attribute::Bold)];
        match outcome {
            Ok(keys) => {
                cells.extend(
                    keys.iter()
                        .map(|k| Cell::new(k.to_string()).set_alignment(CellAlignment::Center)),
                );
            }
            Err(e) => cells.push(Cell::new(format!("rejected: {}", e)).fg(Color::Red)),
        }
        table.add_row(cells);
    }
    println!("\n{}", table);
}
