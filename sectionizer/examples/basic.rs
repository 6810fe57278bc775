// Example: walk a sorted list with synthetic letter headers.
use sectionizer::{MemorySource, SectionedSequence, SectionizerOptions};

fn main() {
    let rows = MemorySource::from_keys(["Ada", "Alan", "Barbara", "Dennis", "Grace", "Guido"]);
    let mut seq = SectionedSequence::new(rows, SectionizerOptions::alphabetic(0));

    println!(
        "rows={} sections={} count={}",
        seq.real_count(),
        seq.section_count(),
        seq.count()
    );

    while seq.move_next() {
        let value = seq.field_value(0).unwrap_or_default();
        if seq.is_header() {
            println!("{:>3} [{value}]", seq.position());
        } else {
            println!("{:>3}   {value}", seq.position());
        }
    }
}
