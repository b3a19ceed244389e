//! Parses `key=value;` settings the way a firmware console would.
//!
//! ```text
//! cargo run -p scanlet --example command_line -- "led=1;pwm=128;gain=-0,75;name=kitchen;"
//! ```
#![allow(missing_docs)]

use scanlet::{Scanner, ScannerOptions, class};

#[derive(Debug)]
enum Setting {
    Flag(bool),
    Number(f32),
    Text(String),
}

fn parse(line: &str) -> Vec<(String, Setting)> {
    let options = ScannerOptions {
        consume_bool: true,
        ..ScannerOptions::default()
    };
    let mut s = Scanner::with_options(line.as_bytes(), options);
    let mut settings = Vec::new();

    while !s.is_overflow() {
        s.skip_while(class::is_separator_or_new_line);
        let Some(key) = s.read_span(b'=', false) else {
            break;
        };
        let key = key.to_string();

        // A lone `0` or `1` is a flag; longer digit runs are numbers.
        let value = if matches!(s.remaining().get(..2), Some(b"0;" | b"1;")) {
            Setting::Flag(s.read_bool())
        } else if s.current_is(class::is_numeric) {
            Setting::Number(s.read_f32())
        } else {
            Setting::Text(s.read_string(b';').to_string())
        };
        s.jump_after(b';');
        settings.push((key, value));
    }
    settings
}

fn main() {
    let line = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "led=1;pwm=128;gain=-0,75;name=kitchen;".to_owned());

    for (key, value) in parse(&line) {
        match value {
            Setting::Flag(on) => println!("{key:>8}: {}", if on { "on" } else { "off" }),
            Setting::Number(n) => println!("{key:>8}: {n}"),
            Setting::Text(t) => println!("{key:>8}: {t:?}"),
        }
    }
}
