#[test]
fn nestly_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/nestly_error_pass.rs");
    t.pass("tests/ui/nestly_error_std_cow_path.rs");
}
