use chrono::NaiveDate;
use tranzit::declaration::Template;
use tranzit::sheet::{Cell, Sheet};
use tranzit::*;

fn header() -> Vec<Cell> {
    ["AWB", "Descriere marfa", "Incadrare", "Greutate"]
        .into_iter()
        .map(Cell::text)
        .collect()
}

fn try_convert(sheet: &Sheet) {
    let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
    let template = Template::bundled().unwrap();
    match convert_sheet(sheet, template, "24RO0001", date, &ManifestConfig::default()) {
        Ok(Outcome::Converted(c)) => println!("  Converted {} items", c.manifest.len()),
        Ok(Outcome::NoData) => println!("  No data rows, nothing to declare"),
        Err(e) => println!("  Failed: {e}"),
    }
}

fn main() {
    // ── 1. No header row in the scan window ───────────────────────────
    println!("=== Missing Header ===");
    let sheet = Sheet::from_rows(0, vec![vec![Cell::text("AWB"), Cell::text("Greutate")]]);
    try_convert(&sheet);

    // ── 2. Header without data rows ───────────────────────────────────
    println!("\n=== No Data ===");
    try_convert(&Sheet::from_rows(0, vec![header()]));

    // ── 3. Row with a missing value ───────────────────────────────────
    println!("\n=== Missing Value ===");
    let sheet = Sheet::from_rows(
        0,
        vec![
            header(),
            vec![Cell::text("1Z01"), Cell::text("Carti"), Cell::Empty, Cell::number(2.0)],
        ],
    );
    try_convert(&sheet);

    // ── 4. Unparseable weight ─────────────────────────────────────────
    println!("\n=== Invalid Weight ===");
    let sheet = Sheet::from_rows(
        0,
        vec![
            header(),
            vec![Cell::text("1Z01"), Cell::text("Carti"), Cell::text("4901"), Cell::text("2 kg")],
        ],
    );
    try_convert(&sheet);

    // ── 5. Matching on the error ──────────────────────────────────────
    println!("\n=== Matching Errors ===");
    let sheet = Sheet::from_rows(
        0,
        vec![
            header(),
            vec![Cell::text("1Z01"), Cell::Empty, Cell::Empty, Cell::text("1")],
        ],
    );
    match tranzit::sheet::read_manifest(&sheet, &ManifestConfig::default()) {
        Err(TranzitError::Row { row, problem: RowProblem::Missing(fields) }) => {
            let names: Vec<&str> = fields.iter().map(|f| f.label()).collect();
            println!("  Row {row} lacks {}", names.join(", "));
        }
        Err(e) => println!("  Other error: {e}"),
        Ok(m) => println!("  Read {} items", m.len()),
    }

    // ── 6. Broken template ────────────────────────────────────────────
    println!("\n=== Template Error ===");
    match Template::parse("<Declaration><Consignment/></Declaration>") {
        Ok(_) => println!("  Template accepted"),
        Err(e) => println!("  {e}"),
    }

    // ── 7. Blank identifier ───────────────────────────────────────────
    println!("\n=== Invalid Identifier ===");
    let date = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
    let sheet = Sheet::from_rows(0, vec![header()]);
    if let Err(e) = convert_sheet(&sheet, Template::bundled().unwrap(), "  ", date, &ManifestConfig::default()) {
        println!("  {e}");
    }
}
