use jsonmask::{Masker, SensitiveFields};

#[derive(SensitiveFields)]
#[allow(dead_code)]
struct Login {
    username: String,
    #[sensitive]
    password: String,
    #[sensitive(rename = "apiKey")]
    api_key: String,
}

fn main() {
    assert_eq!(Login::sensitive_fields(), &["password", "apiKey"]);
    let masker = Masker::for_type::<Login>();
    assert!(masker.should_mask("PASSWORD"));
}
