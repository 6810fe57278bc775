// Example: numeric bucket, jump-to-letter, and rebuilding after the data changes.
use sectionizer::{MemorySource, RowSource, SectionedSequence, SectionizerOptions};

fn main() {
    let mut contacts = MemorySource::from_rows([
        ["007", "Bond"],
        ["Alice", "Liddell"],
        ["Bob", "Builder"],
        ["Dora", "Explorer"],
    ]);
    contacts.sort_by_column(0);

    let mut seq = SectionedSequence::new(&mut contacts, SectionizerOptions::alphanumeric(0));
    let labels: Vec<char> = seq.index().sections().iter().map(|s| s.label).collect();
    println!("sections={labels:?} count={}", seq.count());

    // Jump to the "D" header, then step onto its first row.
    if let Some(section) = seq.index().section_of_label('d') {
        seq.move_to_section(section);
        seq.move_next();
        println!(
            "at {} -> {:?} {:?}",
            seq.position(),
            seq.field_value(0),
            seq.field_value(1)
        );
    }

    // Remove every "D" row; the cursor keeps its virtual position until the next move.
    seq.source_mut().retain(|row| !row[0].starts_with('D'));
    seq.rebuild();
    let labels: Vec<char> = seq.index().sections().iter().map(|s| s.label).collect();
    println!(
        "after rebuild: sections={labels:?} count={} position={}",
        seq.count(),
        seq.position()
    );
    seq.move_by(0);
    println!("re-resolved: position={} slot={:?}", seq.position(), seq.slot());

    drop(seq);
    println!("source rows={}", contacts.count());
}
