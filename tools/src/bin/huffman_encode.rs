use clap::App;
use clap::Arg;
use itertools::Itertools;
use prefixcode_huffman::encode_with;
use prefixcode_huffman::Config;
use prefixcode_huffman::SingleSymbolCode;
use std::process;

fn main() {
    prefixcode_logger::init();

    let matches = App::new("Huffman encoding")
        .about("Builds a minimum-redundancy prefix code for the characters of \
                a string and prints the encoded string")
        .arg(Arg::with_name("INPUT")
            .help("String to encode")
            .default_value("huffman test"))
        .arg(Arg::with_name("single-bit")
            .long("single-bit")
            .help("Give the only character of a one-character alphabet the code `0` \
                   instead of the empty code"))
        .get_matches();

    let input = matches.value_of("INPUT").unwrap_or_default();
    let mut config = Config::default();
    if matches.is_present("single-bit") {
        config = config.single_symbol(SingleSymbolCode::SingleBit);
    }

    let chars = input.chars().collect_vec();
    let (encoded, codes) = match encode_with(&chars, &config) {
        Ok(r) => r,
        Err(e) => {
            log::error!("{}", e);
            process::exit(1);
        }
    };

    println!("Input String: {}", input);
    println!("Encoded String: {}", encoded);
    println!(
        "Huffman Codes: {{{}}}",
        codes.iter().map(|(c, code)| format!("{:?}: {:?}", c, code)).join(", "),
    );
}
