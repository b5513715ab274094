use clap::{arg, crate_version, Command};
use dafsa_compiler::{dafsa, format, parser};
use std::io::Read;

const RCH: &str = "unreachable was reached";

fn usage_cmd() -> Command {
    let long_help = "Examples:
---------
Textual array literal: `dafsa-compiler effective_tld_names.gperf effective_tld_names.cc`
Raw byte buffer:        `dafsa-compiler --binary effective_tld_names.gperf effective_tld_names.bin`
Read from stdin:        `dafsa-compiler - effective_tld_names.cc`";

    Command::new("dafsa-compiler")
        .about("Compile a tagged word list into a compact byte-addressed DAFSA")
        .after_long_help(long_help)
        .version(crate_version!())
        .arg(arg!(--binary "emit a raw byte buffer instead of a textual array literal"))
        .arg(arg!(<INFILE> "input word list path, or - for stdin"))
        .arg(arg!(<OUTFILE> "output path"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let matches = match usage_cmd().try_get_matches() {
        Ok(matches) => matches,
        Err(_) => {
            eprintln!("usage: dafsa-compiler [--binary] <infile|-> <outfile>");
            std::process::exit(1);
        }
    };

    let infile = matches.get_one::<String>("INFILE").expect(RCH);
    let outfile = matches.get_one::<String>("OUTFILE").expect(RCH);
    let binary = matches.get_flag("binary");

    let text = if infile == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(infile)?
    };

    let words = parser::parse(&text)?;
    let encoded = dafsa::compile(&words)?;
    log::info!("wrote {} words as {} bytes to {}", words.len(), encoded.len(), outfile);

    if binary {
        std::fs::write(outfile, format::to_binary(&encoded))?;
    } else {
        std::fs::write(outfile, format::to_source_listing(&encoded))?;
    }

    Ok(())
}
