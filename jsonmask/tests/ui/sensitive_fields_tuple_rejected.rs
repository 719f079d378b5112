#![allow(dead_code)]

use jsonmask::SensitiveFields;

#[derive(SensitiveFields)]
struct Pin(String);

fn main() {}
