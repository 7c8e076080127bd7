//! dotmatch seeding demo
//!
//! Compares a short sequence pair and prints the resulting hit set.

use dotmatch_core::{compare, Sequence};

fn main() {
    let reference = Sequence::normalize(
        ">reference\nACGTTGCAACGTTGACTGCAACGT\n",
        "reference",
    )
    .expect("demo reference is valid DNA");
    let query = Sequence::normalize(
        ">query\nTTGCAACGTTGACTGCA\n",
        "query",
    )
    .expect("demo query is valid DNA");
    let k = 6;

    println!("reference: {}", reference.residues());
    println!("query:     {}", query.residues());
    println!("k = {}\n", k);

    let matches = compare(&reference, &query, k).expect("demo inputs are valid");

    println!(
        "{} forward hits, {} reverse hits",
        matches.forward.len(),
        matches.reverse.len()
    );
    for hit in matches.iter() {
        let ((x1, y1), (x2, y2)) = hit.segment();
        println!(
            "  {} R{}..{} Q{}..{} segment ({}, {}) -> ({}, {})",
            char::from(hit.strand),
            hit.ref_start,
            hit.ref_end(),
            hit.query_start,
            hit.query_end(),
            x1,
            y1,
            x2,
            y2
        );
    }
}
