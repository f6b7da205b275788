use vatnum::{Validator, ValidatorConfig, Verdict, match_number, validate};

fn main() {
    // Format + checksum validation (no network required)
    println!("=== VAT Number Validation ===\n");

    let numbers = [
        "DE136695976",
        "DE136695977",    // check digit off by one
        "ATU10223006",
        "NL004495445B01",
        "GBGD100",        // government department
        "IE8Z49289F",     // legacy Irish layout
        "EU123456789",    // OSS, format only
        "GR094259216",    // legacy Greek prefix
        "XX999999999",    // unknown country
        "",
    ];

    for number in &numbers {
        match validate(number) {
            Ok(Verdict::Checked { country, passed }) => {
                let status = if passed { "valid" } else { "INVALID" };
                println!("  {number:<16} => {status} ({country})");
            }
            Ok(verdict) => {
                let status = if verdict.is_valid() { "valid" } else { "INVALID" };
                println!("  {number:<16} => {status} ({verdict:?})");
            }
            Err(e) => println!("  {number:<16} => ERROR: {e}"),
        }
    }

    // How the matcher split a number
    println!("\n=== Format Decomposition ===\n");

    for number in ["ATU10223006", "GBHA500", "999999973"] {
        match match_number(number) {
            Some(m) => println!(
                "  {number:<16} => rule '{}', prefix '{}', payload '{}'",
                m.rule.description, m.country_code, m.digits
            ),
            None => println!("  {number:<16} => no format"),
        }
    }

    // Malformed payloads under both policies
    println!("\n=== Malformed Payload Policy ===\n");

    let lenient = Validator::new(ValidatorConfig::default());
    let strict = Validator::new(ValidatorConfig::strict());
    let number = "SK202274961";
    println!("  reject:    {number} => {:?}", lenient.check(number));
    println!("  propagate: {number} => {:?}", strict.check(number));
}
