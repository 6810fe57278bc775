// Example: bind a sectioned list the way a list widget would, with a sticky header.
use sectionizer::{MemorySource, SectionizerOptions};
use sectionizer_adapter::{Controller, ListItem, for_each_index_with_sticky_header};

fn main() {
    let mut source = MemorySource::from_rows([
        ["Grace", "Hopper"],
        ["Ada", "Lovelace"],
        ["Alan", "Turing"],
        ["1337", "Hacker"],
        ["Barbara", "Liskov"],
        ["Guido", "van Rossum"],
    ]);
    source.sort_by_column(0);

    let mut c = Controller::new(source, SectionizerOptions::alphanumeric(0));
    println!(
        "count={} view_types={}",
        c.count(),
        c.view_type_count(1)
    );

    // A viewport showing positions 3..6: the section header of row 3 stays pinned.
    let mut visible = Vec::new();
    for_each_index_with_sticky_header(c.sequence(), 3, 6, |i| visible.push(i));

    for position in visible {
        match c.bind(position) {
            Some(ListItem::Header { label, .. }) => println!("{position:>2} [{label}] (disabled)"),
            Some(ListItem::Row { .. }) => {
                let seq = c.sequence();
                println!(
                    "{position:>2}   {} {}",
                    seq.field_value(0).unwrap_or_default(),
                    seq.field_value(1).unwrap_or_default()
                );
            }
            None => {}
        }
    }

    if let Some(header) = c.jump_to_label('g') {
        println!("jumped to G header at {header}");
    }
}
