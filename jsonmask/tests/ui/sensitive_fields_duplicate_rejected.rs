#![allow(dead_code)]

use jsonmask::SensitiveFields;

#[derive(SensitiveFields)]
struct Login {
    #[sensitive]
    password: String,
    #[sensitive(rename = "password")]
    legacy_password: String,
}

fn main() {}
