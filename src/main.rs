use modbuild::printer;

fn main() {
    if let Err(err) = modbuild::run() {
        printer::error(format!("error: {}", err));
        printer::error("Application finished with error");
        std::process::exit(1);
    }
}
