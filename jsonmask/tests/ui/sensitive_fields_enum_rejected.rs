#![allow(dead_code)]

use jsonmask::SensitiveFields;

#[derive(SensitiveFields)]
enum Credential {
    Password(String),
}

fn main() {}
