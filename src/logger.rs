#[ctor::ctor]
fn init() {
    use log4rs;
    let _ = log4rs::init_file("log4rs.yaml", Default::default());
}
