use jsonmask::SensitiveFields;

#[derive(SensitiveFields)]
struct Marker;

fn main() {
    assert!(Marker::sensitive_fields().is_empty());
}
