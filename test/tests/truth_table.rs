use std::fs::File;
use std::io::BufReader;

use serde::Deserialize;
use ternary_core::{Connective, Ternary, TruthTable};

#[derive(Debug, Deserialize)]
struct ExpectedRow {
    x: Ternary,
    y: Ternary,
    and: Ternary,
    or: Ternary,
    xor: Ternary,
    then: Ternary,
    eq: Ternary,
}

fn load_expected() -> Result<Vec<ExpectedRow>, Box<dyn std::error::Error>> {
    let path = format!(
        "{}/test-data/truth_table.expected.yaml",
        env!("CARGO_MANIFEST_DIR")
    );
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_norway::from_reader(reader)?)
}

#[test]
fn matches_golden_table() -> Result<(), Box<dyn std::error::Error>> {
    let expected = load_expected()?;
    let table = TruthTable::new();
    assert_eq!(table.rows().len(), expected.len());

    for (row, want) in table.rows().iter().zip(&expected) {
        assert_eq!((row.x, row.y), (want.x, want.y));
        assert_eq!(row.get(Connective::And), want.and, "{want:?}");
        assert_eq!(row.get(Connective::Or), want.or, "{want:?}");
        assert_eq!(row.get(Connective::Xor), want.xor, "{want:?}");
        assert_eq!(row.get(Connective::Then), want.then, "{want:?}");
        assert_eq!(row.get(Connective::Eq), want.eq, "{want:?}");
    }
    Ok(())
}

#[test]
fn serialized_table_reads_back() -> Result<(), Box<dyn std::error::Error>> {
    let yaml = serde_norway::to_string(&TruthTable::new())?;
    let rows: Vec<ExpectedRow> = serde_norway::from_str(&yaml)?;
    let expected = load_expected()?;
    assert_eq!(rows.len(), expected.len());
    for (got, want) in rows.iter().zip(&expected) {
        assert_eq!(
            [got.x, got.y, got.and, got.or, got.xor, got.then, got.eq],
            [want.x, want.y, want.and, want.or, want.xor, want.then, want.eq]
        );
    }
    Ok(())
}
