use std::fs;

pub fn settings_export() {
    print!("{}", dys_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        dys_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: threshold.similarity={}, threshold.verdict={}, scoring.letter_mode={:?}",
        s.threshold.similarity, s.threshold.verdict, s.scoring.letter_mode
    );
}

pub fn catalog_export() {
    print!("{}", dys_core::catalog::default_toml());
}

pub fn catalog_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let catalog = die!(dys_core::catalog::parse_catalog_toml(&content), "Error: {}");
    println!(
        "OK: {} letter pairs, {} word groups",
        catalog.letter_pairs().len(),
        catalog.word_groups().len()
    );
}
