//! `cargo run --example convert -- "01/24/1984" "mm/dd/yyyy" "dt mmmm yyyy"`
pub fn main() {
    let args = std::env::args().skip(1).collect::<Vec<String>>();
    let [text, from, to] = args.as_slice() else {
        eprintln!("usage: convert <text> <from layout> <to layout>");
        std::process::exit(2);
    };

    match idf::convert(text, from, to) {
        Ok(converted) => println!("{converted}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
