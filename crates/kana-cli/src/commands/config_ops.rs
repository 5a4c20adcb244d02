use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn settings_export() {
    print!("{}", kana_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        kana_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    println!(
        "OK: patterns.kana={}, behavior.to_katakana={}, behavior.stop_on_error={}, behavior.allow_space={}",
        s.patterns.kana, s.behavior.to_katakana, s.behavior.stop_on_error, s.behavior.allow_space
    );
}
