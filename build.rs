use clap::CommandFactory;
use std::path::PathBuf;

// Include the CLI definition
include!("src/cli/args.rs");

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli/args.rs");

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?);

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();

    man.render(&mut buffer)?;

    std::fs::write(out_dir.join("newsroom-search.1"), buffer)?;

    Ok(())
}
