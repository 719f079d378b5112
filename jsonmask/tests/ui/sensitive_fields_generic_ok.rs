use jsonmask::SensitiveFields;

#[derive(SensitiveFields)]
#[allow(dead_code)]
struct Envelope<T>
where
    T: Clone,
{
    payload: T,
    #[sensitive]
    signature: String,
}

fn main() {
    assert_eq!(Envelope::<u8>::sensitive_fields(), &["signature"]);
}
